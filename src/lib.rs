//! # article_quiz_gen
//!
//! A fully offline, deterministic article-to-quiz generator.
//!
//! This library turns any pasted article into a short multiple-choice quiz:
//! it splits the text into sentences, blanks a keyword out of each chosen
//! sentence, builds plausible wrong options from the sentence's own
//! vocabulary, tracks the quiz-taking session, and converts the final tally
//! into a weighted score with feedback tips.
//!
//! ## How it works
//!
//! 1. Create a [`QuizRequest`] with the article text, a [`QuizMode`],
//!    a question count, and an optional RNG seed.
//! 2. Call [`generate_quiz`] — the engine samples sentences without
//!    replacement, removes one keyword per sentence, generates three
//!    distractors, and shuffles the four options.
//! 3. Feed the questions into a [`QuizSession`]; submit answers one at a
//!    time and call `finish()` for the [`ScoreResult`] — weighted score plus
//!    performance tips.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact
//!   same quiz every time — useful for tests and stored quizzes.
//! - **Four modes**: `Easy`, `Medium`, and `Hard` fix one tier for every
//!   question; `Mixed` cycles the tier per question.
//! - **Weighted scoring**: harder modes multiply the raw percentage, so a
//!   perfect hard quiz scores 150 — while feedback tips always bracket on
//!   the raw percentage.
//!
//! ## Quick start
//!
//! ```rust
//! use article_quiz_gen::{generate_quiz, QuizMode, QuizRequest, QuizSession};
//!
//! let article = "The mitochondrion is the powerhouse of the cell. \
//!                Ribosomes assemble proteins from amino acid chains. \
//!                The nucleus stores the genetic material of the organism.";
//!
//! let questions = generate_quiz(&QuizRequest {
//!     content: article.to_string(),
//!     mode: QuizMode::Mixed,
//!     count: 3,
//!     rng_seed: Some(42),
//! });
//! assert!(!questions.is_empty());
//! for q in &questions {
//!     assert_eq!(q.options.len(), 4);
//!     assert!(q.options.contains(&q.correct_answer));
//! }
//!
//! // Walk a session, always picking the first option:
//! let mut session = QuizSession::new(questions, QuizMode::Mixed).unwrap();
//! while let Some(q) = session.current_question() {
//!     let pick = q.options[0].clone();
//!     let feedback = session.submit_answer(pick).unwrap();
//!     println!("correct? {}", feedback.correct);
//! }
//! let result = session.finish().unwrap();
//! println!("score: {} — {} tips", result.score, result.tips.len());
//! ```

pub mod quiz_engine;
pub mod store_adapter;

// Convenience re-exports so callers can use `article_quiz_gen::generate_quiz`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    calculate_score, generate_quiz, generate_quiz_with, performance_tips, score_result,
    split_sentences, AnswerFeedback, AnswerRecord, Difficulty, Question, QuizError, QuizMode,
    QuizRequest, QuizSession, ScoreError, ScoreResult,
};
pub use store_adapter::{article_record, attempt_record, question_rows};

#[cfg(test)]
mod tests;
