use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{db::ResultStore, error::AppError, models::result::StudentResultsResponse};

#[derive(Debug, Deserialize)]
pub struct StudentResultsParams {
    #[serde(rename = "studentName")]
    pub student_name: Option<String>,
}

/// Returns a student's full result history, newest attempt first.
/// An unknown student is a success with an empty list, not an error.
pub async fn student_results(
    State(results): State<ResultStore>,
    Query(params): Query<StudentResultsParams>,
) -> Result<impl IntoResponse, AppError> {
    let student_name = match params.student_name.as_deref() {
        Some(s) if !s.is_empty() => s,
        _ => {
            return Err(AppError::InvalidRequest(
                "Student name not provided.".to_string(),
            ));
        }
    };

    let summaries = results.by_student(student_name).await?;

    Ok(Json(StudentResultsResponse {
        success: true,
        results: summaries,
    }))
}
