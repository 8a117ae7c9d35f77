use thiserror::Error;

/// Failures surfaced while driving a quiz session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// A session cannot be built from zero questions. The caller should show
    /// a "could not generate questions" message and stay on the input screen.
    #[error("quiz has no questions")]
    EmptyQuiz,

    /// An answer was submitted after the last question.
    #[error("all questions have already been answered")]
    QuizFinished,

    /// The score was requested before every question was answered.
    #[error("quiz is not finished yet ({answered}/{total} answered)")]
    QuizNotFinished { answered: usize, total: usize },

    #[error(transparent)]
    Score(#[from] ScoreError),
}

/// Precondition violations in the scorer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Zero total questions would divide by zero; scoring fails fast instead
    /// of producing a sentinel value.
    #[error("cannot score a quiz with zero questions")]
    NoQuestions,

    #[error("correct count {correct} exceeds total question count {total}")]
    CorrectExceedsTotal { correct: usize, total: usize },
}
