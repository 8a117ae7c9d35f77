//! Weighted scoring and performance feedback.
//!
//! The weighted score and the feedback tips deliberately disagree about
//! their input: the score scales the raw percentage by the mode multiplier,
//! while the tips bracket on the raw percentage alone, so the multiplier
//! never changes which advice a learner sees.

use crate::quiz_engine::{
    error::ScoreError,
    models::{QuizMode, ScoreResult},
};

/// Weighted quiz score.
///
/// `round((correct / total) * 100 * multiplier)` — a perfect hard quiz
/// scores 150. Scores above 100 are intentional and are not clamped.
pub fn calculate_score(total: usize, correct: usize, mode: QuizMode) -> Result<u32, ScoreError> {
    if total == 0 {
        return Err(ScoreError::NoQuestions);
    }
    if correct > total {
        return Err(ScoreError::CorrectExceedsTotal { correct, total });
    }
    let base = (correct as f64 / total as f64) * 100.0;
    Ok((base * mode.multiplier()).round() as u32)
}

/// Feedback lines for the results screen, ordered for display.
///
/// Brackets on the raw percentage at 100 / 80 / 60 / 40; hard mode appends
/// one extra tip after whichever bracket applied. An empty tally falls
/// through to the lowest bracket.
pub fn performance_tips(mode: QuizMode, correct: usize, total: usize) -> Vec<String> {
    let mut tips: Vec<String> = Vec::new();
    let percentage = (correct as f64 / total as f64) * 100.0;

    if percentage == 100.0 {
        tips.push("Perfect score! You've mastered this content.".into());
        tips.push(
            "Consider trying a higher difficulty level to challenge yourself further.".into(),
        );
    } else if percentage >= 80.0 {
        tips.push("Great job! You have a strong understanding of the material.".into());
        tips.push("Review the questions you missed to solidify your knowledge.".into());
    } else if percentage >= 60.0 {
        tips.push("Good effort! You're on the right track.".into());
        tips.push(
            "Try reading the article again, focusing on the areas where you struggled.".into(),
        );
        tips.push("Consider taking the quiz again after reviewing the material.".into());
    } else if percentage >= 40.0 {
        tips.push("Keep practicing! Learning takes time and repetition.".into());
        tips.push(
            "Break down the article into smaller sections and focus on understanding each part."
                .into(),
        );
        tips.push("Take notes while reading to help retain key information.".into());
    } else {
        tips.push("Don't get discouraged! This is a learning opportunity.".into());
        tips.push("Start with an easier difficulty level to build confidence.".into());
        tips.push("Read the article slowly and carefully, highlighting important points.".into());
        tips.push("Try creating your own questions while reading to engage more deeply.".into());
    }

    if mode == QuizMode::Hard {
        tips.push(
            "Hard questions require deep comprehension. Consider re-reading the source material."
                .into(),
        );
    }

    tips
}

/// Bundle score and tips for a finished quiz.
pub fn score_result(total: usize, correct: usize, mode: QuizMode) -> Result<ScoreResult, ScoreError> {
    let score = calculate_score(total, correct, mode)?;
    Ok(ScoreResult {
        score,
        correct_count: correct,
        total,
        tips: performance_tips(mode, correct, total),
    })
}
