use chrono::Utc;
use sqlx::{SqlitePool, types::Json};

use crate::models::result::{ResultSummary, ScoredAnswer};

/// Append-only access to graded quiz results.
#[derive(Clone)]
pub struct ResultStore {
    pool: SqlitePool,
}

impl ResultStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Records one graded attempt and returns its id. The per-question
    /// breakdown is stored as JSON in submission order.
    pub async fn save(
        &self,
        student_name: &str,
        subject: &str,
        total_score: i64,
        answers: &[ScoredAnswer],
    ) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO results (student_name, subject, total_score, raw_answers, date_taken)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(student_name)
        .bind(subject)
        .bind(total_score)
        .bind(Json(answers))
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Fetches a student's history, newest attempt first. Names match
    /// exactly; there is no normalization.
    pub async fn by_student(&self, student_name: &str) -> Result<Vec<ResultSummary>, sqlx::Error> {
        sqlx::query_as::<_, ResultSummary>(
            "SELECT id, student_name, subject, total_score, date_taken
             FROM results WHERE student_name = ?
             ORDER BY date_taken DESC, id DESC",
        )
        .bind(student_name)
        .fetch_all(&self.pool)
        .await
    }
}
