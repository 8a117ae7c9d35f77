use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Difficulty primitives
// ---------------------------------------------------------------------------

/// Per-question difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Tier assigned to question index `i` in a mixed quiz:
    /// easy, medium, hard, easy, ...
    pub fn cycle(i: usize) -> Self {
        match i % 3 {
            0 => Difficulty::Easy,
            1 => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy   => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard   => write!(f, "hard"),
        }
    }
}

/// Quiz-level difficulty setting. `Mixed` cycles the per-question tier
/// through easy/medium/hard instead of fixing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizMode {
    Easy,
    Medium,
    Hard,
    Mixed,
}

impl QuizMode {
    /// The single tier used for every question, or `None` for mixed quizzes.
    pub fn fixed(self) -> Option<Difficulty> {
        match self {
            QuizMode::Easy   => Some(Difficulty::Easy),
            QuizMode::Medium => Some(Difficulty::Medium),
            QuizMode::Hard   => Some(Difficulty::Hard),
            QuizMode::Mixed  => None,
        }
    }

    /// Score multiplier applied on top of the raw percentage.
    pub fn multiplier(self) -> f64 {
        match self {
            QuizMode::Easy   => 1.0,
            QuizMode::Medium => 1.2,
            QuizMode::Hard   => 1.5,
            QuizMode::Mixed  => 1.1,
        }
    }
}

impl fmt::Display for QuizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizMode::Easy   => write!(f, "easy"),
            QuizMode::Medium => write!(f, "medium"),
            QuizMode::Hard   => write!(f, "hard"),
            QuizMode::Mixed  => write!(f, "mixed"),
        }
    }
}

// ---------------------------------------------------------------------------
// Quiz request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRequest {
    /// Raw article text the quiz is built from.
    pub content: String,
    pub mode: QuizMode,
    /// Requested number of questions. The quiz may come out shorter when the
    /// article has fewer usable sentences than requested.
    pub count: usize,
    pub rng_seed: Option<u64>,
}

impl QuizRequest {
    /// Minimal constructor — five questions, entropy seeding.
    pub fn new(content: impl Into<String>, mode: QuizMode) -> Self {
        QuizRequest {
            content: content.into(),
            mode,
            count: 5,
            rng_seed: None,
        }
    }
}

/// One fill-in-the-blank multiple-choice question.
///
/// Invariants: `options` always holds exactly four entries and
/// `correct_answer` is one of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub difficulty: Difficulty,
    pub explanation: String,
}

/// One recorded answer, kept in submission order by the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// Position of the answered question within the session's question list.
    pub question_index: usize,
    pub user_answer: String,
    pub correct: bool,
}

/// Per-question report handed back to the display layer after each answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub user_answer: String,
    pub correct_answer: String,
    pub explanation: String,
}

/// Final outcome of a finished quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Weighted score — exceeds 100 on a perfect non-easy quiz.
    pub score: u32,
    pub correct_count: usize,
    pub total: usize,
    pub tips: Vec<String>,
}
