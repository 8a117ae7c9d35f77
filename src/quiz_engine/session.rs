use log::debug;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    error::QuizError,
    models::{AnswerFeedback, AnswerRecord, Question, QuizMode, ScoreResult},
    scoring::score_result,
};

/// In-memory state for one quiz run.
///
/// The session is the only mutable piece of the crate: the question list is
/// fixed at construction and only the cursor and answer log change while the
/// learner works through it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSession {
    questions: Vec<Question>,
    mode: QuizMode,
    current: usize,
    answers: Vec<AnswerRecord>,
}

impl QuizSession {
    /// Start a session over a generated question list.
    ///
    /// Fails with [`QuizError::EmptyQuiz`] when the assembler produced no
    /// questions — the caller should surface a message and stay on the
    /// input screen rather than enter the quiz flow.
    pub fn new(questions: Vec<Question>, mode: QuizMode) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyQuiz);
        }
        Ok(QuizSession {
            questions,
            mode,
            current: 0,
            answers: Vec::new(),
        })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    /// Answers recorded so far, in submission order.
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    /// The question awaiting an answer, or `None` once the quiz is done.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// `(answered, total)` for progress display.
    pub fn progress(&self) -> (usize, usize) {
        (self.answers.len(), self.questions.len())
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.questions.len()
    }

    pub fn correct_count(&self) -> usize {
        self.answers.iter().filter(|a| a.correct).count()
    }

    /// Record an answer for the current question and advance the cursor.
    ///
    /// The feedback mirrors what the display layer shows after each
    /// selection: whether the pick was right, plus the correct answer and
    /// its explanation.
    pub fn submit_answer(
        &mut self,
        user_answer: impl Into<String>,
    ) -> Result<AnswerFeedback, QuizError> {
        let question = self.questions.get(self.current).ok_or(QuizError::QuizFinished)?;
        let user_answer = user_answer.into();
        let correct = user_answer == question.correct_answer;
        debug!(
            "question {}: answered {:?}, correct={correct}",
            self.current, user_answer
        );

        let feedback = AnswerFeedback {
            correct,
            user_answer: user_answer.clone(),
            correct_answer: question.correct_answer.clone(),
            explanation: question.explanation.clone(),
        };
        self.answers.push(AnswerRecord {
            question_index: self.current,
            user_answer,
            correct,
        });
        self.current += 1;
        Ok(feedback)
    }

    /// Final weighted score plus feedback tips.
    ///
    /// Only valid once every question has been answered.
    pub fn finish(&self) -> Result<ScoreResult, QuizError> {
        if !self.is_finished() {
            return Err(QuizError::QuizNotFinished {
                answered: self.answers.len(),
                total: self.questions.len(),
            });
        }
        let result = score_result(self.questions.len(), self.correct_count(), self.mode)?;
        debug!(
            "quiz finished: {}/{} correct, score {}",
            result.correct_count, result.total, result.score
        );
        Ok(result)
    }

    /// Clear the cursor and answer log for a retake of the same questions.
    pub fn restart(&mut self) {
        self.current = 0;
        self.answers.clear();
    }
}
