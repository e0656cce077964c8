// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

/// Represents the 'questions' table in the database.
///
/// Deliberately does not derive `Serialize`: the row carries the correct
/// answer, and only the `QuizQuestion` DTO below may travel to a client.
#[derive(Debug, Clone, FromRow)]
pub struct Question {
    pub id: i64,

    /// Subject the question belongs to (e.g. 'Physics').
    pub subject: String,

    /// The text of the question.
    pub question_text: String,

    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,

    /// Correct option label: one of 'A', 'B', 'C', 'D'.
    pub correct_answer: String,
}

/// DTO for serving a question to a quiz taker (excludes the correct answer).
#[derive(Debug, Serialize)]
pub struct QuizQuestion {
    pub id: i64,
    pub subject: String,
    pub question_text: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
}

/// Response body for a served quiz.
#[derive(Debug, Serialize)]
pub struct StartQuizResponse {
    pub success: bool,
    pub questions: Vec<QuizQuestion>,
}

/// DTO for provisioning one question from the seed file.
#[derive(Debug, Deserialize, Validate)]
pub struct NewQuestion {
    #[validate(length(min = 1, max = 100))]
    pub subject: String,
    #[validate(length(min = 1, max = 2000))]
    pub question_text: String,
    #[validate(length(min = 1, max = 500))]
    pub option_a: String,
    #[validate(length(min = 1, max = 500))]
    pub option_b: String,
    #[validate(length(min = 1, max = 500))]
    pub option_c: String,
    #[validate(length(min = 1, max = 500))]
    pub option_d: String,
    #[validate(custom(function = validate_option_label))]
    pub correct_answer: String,
}

fn validate_option_label(label: &str) -> Result<(), validator::ValidationError> {
    match label {
        "A" | "B" | "C" | "D" => Ok(()),
        _ => Err(validator::ValidationError::new("correct_answer_not_a_label")),
    }
}
