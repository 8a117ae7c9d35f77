//! Full demo of the article-to-quiz pipeline.
//!
//! Run with: `cargo run --example demo`
//!
//! This example shows how `article_quiz_gen` works end to end:
//!
//! 1. **Quiz generation** — a fixed seed turns a short article into a mixed
//!    quiz, so the output is deterministic and reproducible.
//! 2. **Session walkthrough** — a simulated learner answers every question
//!    (always picking the first option), showing per-question feedback.
//! 3. **Scoring** — the weighted score and performance tips, plus the JSON
//!    records a persistence layer would store.
//!
//! ## Key concepts demonstrated
//!
//! - `QuizRequest::new(content, mode)` — minimal constructor; defaults to
//!   five questions and entropy seeding.
//! - `rng_seed: Some(u64)` makes the output fully deterministic.
//! - `QuizMode::Mixed` cycles easy → medium → hard per question.
//! - The weighted score can exceed 100; the tips bracket on the raw
//!   percentage instead.

use article_quiz_gen::{
    attempt_record, calculate_score, generate_quiz, question_rows, QuizMode, QuizRequest,
    QuizSession,
};

const ARTICLE: &str = "\
    The honeybee waggle dance encodes both distance and direction to food. \
    Foragers adjust the dance angle relative to the position of the sun. \
    Hive mates follow the dancer closely to learn the advertised route. \
    Researchers decoded the dance by tracking thousands of marked bees. \
    Colonies reach consensus on new nest sites through competing dances!";

fn main() {
    pretty_env_logger::init();

    // ── Quiz generation ──────────────────────────────────────────────────────
    // Fixed seed: rerunning the demo always prints the same quiz.
    println!();
    println!("══ Generating a mixed quiz (seed=42) ══");
    println!();

    let request = QuizRequest {
        content: ARTICLE.to_string(),
        mode: QuizMode::Mixed,
        count: 5,
        rng_seed: Some(42),
    };
    let questions = generate_quiz(&request);

    for (i, q) in questions.iter().enumerate() {
        println!("  Q{} [{}] {}", i + 1, q.difficulty, q.question);
        for (j, option) in q.options.iter().enumerate() {
            let letter = (b'A' + j as u8) as char;
            println!("      [{letter}] {option}");
        }
        println!();
    }

    // ── Session walkthrough ──────────────────────────────────────────────────
    // Simulate a learner who always picks the first option.
    println!("══ Session walkthrough (always picking option A) ══");
    println!();

    let mut session =
        QuizSession::new(questions, QuizMode::Mixed).expect("quiz generation produced questions");

    while let Some(q) = session.current_question() {
        let pick = q.options[0].clone();
        let feedback = session.submit_answer(pick).expect("session not finished");
        let mark = if feedback.correct { "✓" } else { "✗" };
        println!("  {mark} picked {:?}", feedback.user_answer);
        if !feedback.correct {
            println!("     {}", feedback.explanation);
        }
    }

    // ── Scoring ──────────────────────────────────────────────────────────────
    let result = session.finish().expect("all questions answered");
    println!();
    println!("══ Results ══");
    println!();
    println!(
        "  {}/{} correct — weighted score: {}",
        result.correct_count, result.total, result.score
    );
    for tip in &result.tips {
        println!("  • {tip}");
    }

    // A perfect hard quiz illustrates the unclamped multiplier:
    let perfect = calculate_score(10, 10, QuizMode::Hard).expect("non-empty quiz");
    println!();
    println!("  (A perfect 10-question hard quiz would score {perfect}.)");

    // ── Persistence records ──────────────────────────────────────────────────
    // The hosted store assigns ids; the adapter just shapes the payloads.
    println!();
    println!("══ Records for the persistence layer ══");
    println!();

    let rows = question_rows("article-1", session.questions());
    println!("  quiz_questions rows: {}", rows.as_array().map_or(0, Vec::len));

    let ids: Vec<String> = (0..session.questions().len())
        .map(|i| format!("question-{i}"))
        .collect();
    let attempt = attempt_record("article-1", &result, &ids, session.answers());
    println!(
        "  quiz_attempts record:\n{}",
        serde_json::to_string_pretty(&attempt).expect("attempt record serializes")
    );
}
