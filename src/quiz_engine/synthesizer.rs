use rand::Rng;

use crate::quiz_engine::{
    distractors::{clean_token, pick_distractors},
    models::{Difficulty, Question},
    shuffle::shuffle_options,
};

/// Placeholder substituted for the removed keyword.
const BLANK: &str = "____";

/// Tokens eligible to become the blanked keyword: whitespace-separated words
/// longer than three characters.
fn keyword_candidates(sentence: &str) -> Vec<&str> {
    sentence
        .split_whitespace()
        .filter(|w| w.chars().count() > 3)
        .collect()
}

fn question_text(difficulty: Difficulty, blanked: &str) -> String {
    match difficulty {
        Difficulty::Easy => {
            format!("What word completes this statement: \"{blanked}\"?")
        }
        Difficulty::Medium => {
            format!("According to the article, which term best fits: \"{blanked}\"?")
        }
        Difficulty::Hard => {
            format!("Analyze this statement: \"{blanked}\". Which concept is missing?")
        }
    }
}

fn explanation_text(difficulty: Difficulty, keyword: &str) -> String {
    match difficulty {
        Difficulty::Easy => format!(
            "The correct answer is \"{keyword}\". This word directly appears in the article text."
        ),
        Difficulty::Medium => format!(
            "The correct answer is \"{keyword}\". This term is key to understanding \
             this concept from the article."
        ),
        Difficulty::Hard => format!(
            "The correct answer is \"{keyword}\". This represents a critical concept \
             that requires careful analysis of the article's main ideas."
        ),
    }
}

/// Build one question from `sentence` at the given tier.
///
/// Returns `None` when the sentence has no token longer than three
/// characters — the caller treats that as a skip, not an error.
pub fn synthesize<R: Rng>(
    rng: &mut R,
    sentence: &str,
    difficulty: Difficulty,
) -> Option<Question> {
    let candidates = keyword_candidates(sentence);
    if candidates.is_empty() {
        return None;
    }

    let keyword = clean_token(candidates[rng.gen_range(0..candidates.len())]);

    // Plain substring replacement of the first match only. A keyword that
    // occurs several times in the sentence is blanked once, at its first
    // occurrence.
    let blanked = sentence.replacen(&keyword, BLANK, 1);

    let question = question_text(difficulty, &blanked);
    let explanation = explanation_text(difficulty, &keyword);

    let mut options = vec![keyword.clone()];
    options.extend(pick_distractors(rng, &keyword, &candidates));
    let options = shuffle_options(rng, &options);

    Some(Question {
        question,
        options,
        correct_answer: keyword,
        difficulty,
        explanation,
    })
}
