// src/handlers/quiz.rs

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    response::IntoResponse,
};
use rand::seq::SliceRandom;
use serde::Deserialize;

use crate::{
    config::Config,
    db::{QuestionStore, ResultStore},
    error::AppError,
    models::{
        question::{Question, QuizQuestion, StartQuizResponse},
        result::{ScoredAnswer, SubmitQuizRequest, SubmitQuizResponse, SubmittedAnswer},
    },
};

#[derive(Debug, Deserialize)]
pub struct StartQuizParams {
    pub subject: Option<String>,
}

/// Serves a fresh quiz for a subject.
///
/// * Draws a random subset of the subject's bank (at most `QUESTION_COUNT`).
/// * Never exposes `correct_answer`: rows are mapped into `QuizQuestion`
///   before serialization.
pub async fn start_quiz(
    State(questions): State<QuestionStore>,
    State(config): State<Config>,
    Query(params): Query<StartQuizParams>,
) -> Result<impl IntoResponse, AppError> {
    // No server-side trimming: the lookup is exact-string.
    let subject = match params.subject.as_deref() {
        Some(s) if !s.is_empty() => s,
        _ => return Err(AppError::InvalidRequest("Subject not specified.".to_string())),
    };

    let bank = questions.by_subject(subject).await?;
    if bank.is_empty() {
        return Err(AppError::NotFound(format!(
            "No questions found for subject: {subject}"
        )));
    }

    let drawn = draw_quiz(bank, config.question_count);
    let questions = drawn
        .into_iter()
        .map(|q| QuizQuestion {
            id: q.id,
            subject: q.subject,
            question_text: q.question_text,
            option_a: q.option_a,
            option_b: q.option_b,
            option_c: q.option_c,
            option_d: q.option_d,
        })
        .collect();

    Ok(Json(StartQuizResponse {
        success: true,
        questions,
    }))
}

/// Picks up to `count` questions uniformly at random, without repeats.
/// A bank smaller than `count` is returned whole (still shuffled).
fn draw_quiz(mut bank: Vec<Question>, count: usize) -> Vec<Question> {
    bank.shuffle(&mut rand::thread_rng());
    bank.truncate(count);
    bank
}

/// Grades a finished quiz and records the attempt.
///
/// * Validates the submission (name, subject, at least one answer).
/// * Scores each answer against the bank's answer key.
/// * Appends one row to the result log and echoes the breakdown back.
pub async fn submit_quiz(
    State(questions): State<QuestionStore>,
    State(results): State<ResultStore>,
    payload: Result<Json<SubmitQuizRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload
        .map_err(|_| AppError::InvalidRequest("Invalid input data.".to_string()))?;

    if req.student_name.is_empty() {
        return Err(AppError::InvalidRequest(
            "Student name not provided.".to_string(),
        ));
    }
    if req.subject.is_empty() {
        return Err(AppError::InvalidRequest("Subject not specified.".to_string()));
    }
    if req.submitted_answers.is_empty() {
        return Err(AppError::InvalidRequest("No answers submitted.".to_string()));
    }

    let question_ids: Vec<i64> = req.submitted_answers.iter().map(|a| a.id).collect();
    let answer_key = questions.correct_answers(&question_ids).await?;

    let (total_score, detailed_answers) = score_submission(&req.submitted_answers, &answer_key);

    let result_id = results
        .save(&req.student_name, &req.subject, total_score, &detailed_answers)
        .await?;

    tracing::info!(
        "Graded submission {} for '{}' ({}): {} answers, total {}",
        result_id,
        req.student_name,
        req.subject,
        detailed_answers.len(),
        total_score
    );

    Ok(Json(SubmitQuizResponse {
        success: true,
        result_id,
        student_name: req.student_name,
        subject: req.subject,
        total_score,
        detailed_answers,
    }))
}

/// Applies JEE-style negative marking to each submitted answer, in
/// submission order: +4 correct, -1 wrong (including answers to questions
/// the bank does not know), 0 unattempted.
fn score_submission(
    submitted: &[SubmittedAnswer],
    answer_key: &HashMap<i64, String>,
) -> (i64, Vec<ScoredAnswer>) {
    let mut total_score = 0;
    let mut detailed = Vec::with_capacity(submitted.len());

    for answer in submitted {
        let correct = answer_key.get(&answer.id);
        let (marks, is_correct) = match (answer.selected.as_deref(), correct) {
            (None, _) => (0, false),
            (Some(sel), Some(corr)) if sel == corr => (4, true),
            (Some(_), _) => (-1, false),
        };

        total_score += marks;
        detailed.push(ScoredAnswer {
            question_id: answer.id,
            selected_option: answer.selected.clone(),
            correct_option: correct.cloned(),
            is_correct,
            marks_obtained: marks,
        });
    }

    (total_score, detailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submitted(id: i64, selected: Option<&str>) -> SubmittedAnswer {
        SubmittedAnswer {
            id,
            selected: selected.map(String::from),
        }
    }

    fn answer_key(entries: &[(i64, &str)]) -> HashMap<i64, String> {
        entries
            .iter()
            .map(|(id, corr)| (*id, corr.to_string()))
            .collect()
    }

    fn make_question(id: i64) -> Question {
        Question {
            id,
            subject: "Physics".to_string(),
            question_text: format!("Question {}", id),
            option_a: "A".to_string(),
            option_b: "B".to_string(),
            option_c: "C".to_string(),
            option_d: "D".to_string(),
            correct_answer: "A".to_string(),
        }
    }

    #[test]
    fn test_score_correct_answer() {
        let key = answer_key(&[(1, "B")]);
        let (total, detailed) = score_submission(&[submitted(1, Some("B"))], &key);

        assert_eq!(total, 4);
        assert_eq!(detailed.len(), 1);
        assert!(detailed[0].is_correct);
        assert_eq!(detailed[0].marks_obtained, 4);
        assert_eq!(detailed[0].correct_option.as_deref(), Some("B"));
    }

    #[test]
    fn test_score_wrong_answer() {
        let key = answer_key(&[(1, "B")]);
        let (total, detailed) = score_submission(&[submitted(1, Some("C"))], &key);

        assert_eq!(total, -1);
        assert!(!detailed[0].is_correct);
        assert_eq!(detailed[0].marks_obtained, -1);
    }

    #[test]
    fn test_score_unattempted() {
        let key = answer_key(&[(1, "B")]);
        let (total, detailed) = score_submission(&[submitted(1, None)], &key);

        assert_eq!(total, 0);
        assert!(!detailed[0].is_correct);
        assert_eq!(detailed[0].marks_obtained, 0);
        assert_eq!(detailed[0].selected_option, None);
    }

    #[test]
    fn test_score_out_of_range_label_is_wrong() {
        let key = answer_key(&[(1, "B")]);
        // "E" is not a real option slot but still a present selection.
        let (total, detailed) = score_submission(&[submitted(1, Some("E"))], &key);

        assert_eq!(total, -1);
        assert!(!detailed[0].is_correct);
        assert_eq!(detailed[0].selected_option.as_deref(), Some("E"));
    }

    #[test]
    fn test_score_unknown_question_counts_as_wrong() {
        let key = answer_key(&[(1, "B")]);
        let (total, detailed) = score_submission(&[submitted(99, Some("B"))], &key);

        assert_eq!(total, -1);
        assert!(!detailed[0].is_correct);
        assert_eq!(detailed[0].correct_option, None);
    }

    #[test]
    fn test_score_mixed_submission() {
        let key = answer_key(&[(1, "A"), (2, "B"), (3, "C")]);
        let answers = [
            submitted(1, Some("A")),
            submitted(2, Some("C")),
            submitted(3, None),
        ];

        let (total, detailed) = score_submission(&answers, &key);

        assert_eq!(total, 3);
        let marks: Vec<i64> = detailed.iter().map(|d| d.marks_obtained).collect();
        assert_eq!(marks, vec![4, -1, 0]);
        // Breakdown preserves submission order.
        let ids: Vec<i64> = detailed.iter().map(|d| d.question_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_total_can_go_negative() {
        let key = answer_key(&[(1, "A"), (2, "A"), (3, "A")]);
        let answers = [
            submitted(1, Some("B")),
            submitted(2, Some("C")),
            submitted(3, Some("D")),
        ];

        let (total, _) = score_submission(&answers, &key);

        assert_eq!(total, -3);
    }

    #[test]
    fn test_draw_quiz_caps_at_count() {
        let bank: Vec<Question> = (1..=10).map(make_question).collect();

        let drawn = draw_quiz(bank, 3);

        assert_eq!(drawn.len(), 3);
    }

    #[test]
    fn test_draw_quiz_returns_all_when_bank_is_small() {
        let bank: Vec<Question> = (1..=2).map(make_question).collect();

        let drawn = draw_quiz(bank, 3);

        assert_eq!(drawn.len(), 2);
    }

    #[test]
    fn test_draw_quiz_never_duplicates() {
        let bank: Vec<Question> = (1..=5).map(make_question).collect();

        let drawn = draw_quiz(bank, 5);

        let mut ids: Vec<i64> = drawn.iter().map(|q| q.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}
