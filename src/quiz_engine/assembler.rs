use std::collections::HashSet;

use log::{debug, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::quiz_engine::{
    models::{Difficulty, Question, QuizRequest},
    sentences::split_sentences,
    synthesizer::synthesize,
};

/// Draw a sentence index that has not been used yet.
///
/// Random retries are capped and fall back to a linear scan, so an
/// adversarial RNG cannot stall the loop. Once every index has been used,
/// repeats are allowed.
fn pick_sentence_index<R: Rng>(rng: &mut R, len: usize, used: &mut HashSet<usize>) -> usize {
    if used.len() >= len {
        return rng.gen_range(0..len);
    }
    for _ in 0..4 * len {
        let idx = rng.gen_range(0..len);
        if used.insert(idx) {
            return idx;
        }
    }
    let idx = (0..len).find(|i| !used.contains(i)).unwrap_or(0);
    used.insert(idx);
    idx
}

/// Core entry point: build up to `request.count` questions from the article.
///
/// Seeded requests (`rng_seed: Some(u64)`) reproduce the exact same quiz
/// every time; `None` draws from entropy.
pub fn generate_quiz(request: &QuizRequest) -> Vec<Question> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    generate_quiz_with(&mut rng, request)
}

/// Same as [`generate_quiz`], drawing from a caller-supplied RNG.
///
/// Sentences are sampled without replacement until the pool is exhausted.
/// A sentence with no keyword candidates yields nothing for that iteration,
/// so the quiz may come out shorter than requested.
pub fn generate_quiz_with<R: Rng>(rng: &mut R, request: &QuizRequest) -> Vec<Question> {
    let sentences = split_sentences(&request.content);
    if sentences.is_empty() {
        warn!("article yielded no usable sentences; cannot build a quiz");
        return Vec::new();
    }

    let mut questions = Vec::new();
    let mut used = HashSet::new();

    for i in 0..request.count.min(sentences.len()) {
        let idx = pick_sentence_index(rng, sentences.len(), &mut used);
        let difficulty = request.mode.fixed().unwrap_or_else(|| Difficulty::cycle(i));

        match synthesize(rng, &sentences[idx], difficulty) {
            Some(q) => questions.push(q),
            None => debug!("sentence {idx} has no keyword candidates; skipping"),
        }
    }

    debug!(
        "generated {}/{} questions ({} mode, {} sentences)",
        questions.len(),
        request.count,
        request.mode,
        sentences.len()
    );
    questions
}
