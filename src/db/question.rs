use std::collections::HashMap;

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::models::question::{NewQuestion, Question};

/// Read/seed access to the question bank.
#[derive(Clone)]
pub struct QuestionStore {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
struct AnswerKeyRow {
    id: i64,
    correct_answer: String,
}

impl QuestionStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetches every question for a subject, answer included. Callers that
    /// talk to clients must map rows into `QuizQuestion` first.
    pub async fn by_subject(&self, subject: &str) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            "SELECT id, subject, question_text, option_a, option_b, option_c, option_d, correct_answer
             FROM questions WHERE subject = ?",
        )
        .bind(subject)
        .fetch_all(&self.pool)
        .await
    }

    /// Looks up the answer key for the given question ids. Ids that do not
    /// exist are simply absent from the returned map.
    pub async fn correct_answers(
        &self,
        question_ids: &[i64],
    ) -> Result<HashMap<i64, String>, sqlx::Error> {
        if question_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let mut query_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT id, correct_answer FROM questions WHERE id IN (");
        let mut separated = query_builder.separated(", ");
        for id in question_ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(")");

        let rows: Vec<AnswerKeyRow> = query_builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| (row.id, row.correct_answer))
            .collect())
    }

    pub async fn insert(&self, question: &NewQuestion) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO questions (subject, question_text, option_a, option_b, option_c, option_d, correct_answer)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&question.subject)
        .bind(&question.question_text)
        .bind(&question.option_a)
        .bind(&question.option_b)
        .bind(&question.option_c)
        .bind(&question.option_d)
        .bind(&question.correct_answer)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await
    }
}
