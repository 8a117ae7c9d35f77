//! Core quiz engine — sentence analysis, question generation, and scoring.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | All shared types: difficulty tiers, questions, request/result structs |
//! | `error`       | Failure taxonomy for sessions and scoring |
//! | `sentences`   | Article text → candidate sentences |
//! | `shuffle`     | Unbiased option shuffling (Fisher-Yates) |
//! | `distractors` | Wrong-option sampling from the sentence's own vocabulary |
//! | `synthesizer` | One sentence → one fill-in-the-blank question |
//! | `assembler`   | Single entry point `generate_quiz()` — builds the whole quiz |
//! | `scoring`     | Weighted score and performance tips |
//! | `session`     | Transient quiz-taking state |

pub mod assembler;
pub mod distractors;
pub mod error;
pub mod models;
pub mod scoring;
pub mod sentences;
pub mod session;
pub mod shuffle;
pub mod synthesizer;

// Re-export the public API surface so callers can use
// `quiz_engine::generate_quiz` without reaching into sub-modules.
pub use assembler::{generate_quiz, generate_quiz_with};
pub use error::{QuizError, ScoreError};
pub use models::{
    AnswerFeedback, AnswerRecord, Difficulty, Question, QuizMode, QuizRequest, ScoreResult,
};
pub use scoring::{calculate_score, performance_tips, score_result};
pub use sentences::split_sentences;
pub use session::QuizSession;
pub use shuffle::shuffle_options;
pub use synthesizer::synthesize;
