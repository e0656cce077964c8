// src/models/result.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

/// One answer as submitted by the client. `selected` is `None` for a
/// question the student skipped.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmittedAnswer {
    pub id: i64,
    #[serde(default)]
    pub selected: Option<String>,
}

/// Request body for grading a finished quiz. Required-field checks live in
/// the handler so each failure keeps its own client-facing message.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuizRequest {
    pub student_name: String,
    pub subject: String,
    pub submitted_answers: Vec<SubmittedAnswer>,
}

/// Per-question grading outcome. Serialized into the stored result row and
/// echoed back to the client, in submission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredAnswer {
    pub question_id: i64,
    pub selected_option: Option<String>,
    pub correct_option: Option<String>,
    pub is_correct: bool,
    pub marks_obtained: i64,
}

/// Response body for a graded submission.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuizResponse {
    pub success: bool,
    pub result_id: i64,
    pub student_name: String,
    pub subject: String,
    pub total_score: i64,
    pub detailed_answers: Vec<ScoredAnswer>,
}

/// One row of a student's result history (no per-question breakdown).
#[derive(Debug, Serialize, FromRow)]
pub struct ResultSummary {
    pub id: i64,
    pub student_name: String,
    pub subject: String,
    pub total_score: i64,
    pub date_taken: DateTime<Utc>,
}

/// Response body for a result-history lookup.
#[derive(Debug, Serialize)]
pub struct StudentResultsResponse {
    pub success: bool,
    pub results: Vec<ResultSummary>,
}
