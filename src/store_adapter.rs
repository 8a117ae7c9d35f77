//! JSON record shapes for the persistence collaborator.
//!
//! The store keys every row by its own identifiers; the core never mints
//! them. These builders produce the exact payloads the hosted data store
//! expects for the `articles`, `quiz_questions`, and `quiz_attempts`
//! tables.

use serde_json::{json, Value};

use crate::quiz_engine::models::{AnswerRecord, Question, ScoreResult};

/// Row for the `articles` table. The store assigns the article id.
pub fn article_record(title: &str, content: &str) -> Value {
    json!({
        "title": title,
        "content": content,
    })
}

/// Rows for the `quiz_questions` table, keyed to an already-stored article.
pub fn question_rows(article_id: &str, questions: &[Question]) -> Value {
    let rows: Vec<Value> = questions
        .iter()
        .map(|q| {
            json!({
                "article_id": article_id,
                "question": q.question,
                "options": q.options,
                "correct_answer": q.correct_answer,
                "difficulty": q.difficulty,
                "explanation": q.explanation,
            })
        })
        .collect();
    Value::Array(rows)
}

/// Completed-attempt record for the `quiz_attempts` table.
///
/// `question_ids[i]` is the store-assigned id of the question at position
/// `i` of the session's question list; an answer whose question has no
/// stored id serializes with a null `question_id`.
pub fn attempt_record(
    article_id: &str,
    result: &ScoreResult,
    question_ids: &[String],
    answers: &[AnswerRecord],
) -> Value {
    let answer_rows: Vec<Value> = answers
        .iter()
        .map(|a| {
            json!({
                "question_id": question_ids.get(a.question_index),
                "user_answer": a.user_answer,
                "correct": a.correct,
            })
        })
        .collect();

    json!({
        "article_id": article_id,
        "score": result.score,
        "total_questions": result.total,
        "answers": answer_rows,
    })
}
