// src/config.rs

use std::env;
use dotenvy::dotenv;

/// How many questions a quiz draws when QUESTION_COUNT is not set.
pub const DEFAULT_QUESTION_COUNT: usize = 3;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub question_count: usize,
    pub seed_file: Option<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:quiz.db?mode=rwc".to_string());

        let bind_address = env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let question_count = env::var("QUESTION_COUNT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_QUESTION_COUNT);

        let seed_file = env::var("QUESTION_SEED").ok();

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        Self {
            database_url,
            bind_address,
            question_count,
            seed_file,
            rust_log,
        }
    }
}
