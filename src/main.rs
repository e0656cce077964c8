// src/main.rs

use dotenvy::dotenv;
use quiz_backend::config::Config;
use quiz_backend::db::{QuestionStore, ResultStore};
use quiz_backend::models::question::NewQuestion;
use quiz_backend::routes;
use quiz_backend::state::AppState;
use sqlx::sqlite::SqlitePoolOptions;
use std::net::SocketAddr;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use validator::Validate;

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    // Initialize Database Pool
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(3))
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to the quiz database");

    tracing::info!("Database connected...");

    // Run Migrations Automatically
    tracing::info!("Running migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Migrations applied successfully.");

    let questions = QuestionStore::new(pool.clone());
    let results = ResultStore::new(pool);

    // Seed Question Bank
    if let Err(e) = seed_question_bank(&questions, &config).await {
        tracing::error!("Failed to seed question bank: {:?}", e);
    }

    // Create AppState
    let state = AppState {
        questions,
        results,
        config: config.clone(),
    };

    // Create the Axum application router
    let app = routes::create_router(state);

    // Bind to the listening address
    let addr: SocketAddr = config
        .bind_address
        .parse()
        .expect("BIND_ADDRESS must be a valid socket address");
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    // Start the server
    axum::serve(listener, app).await.unwrap();
}

/// Loads questions from the QUESTION_SEED file into an empty bank.
/// A bank that already has rows is left untouched.
async fn seed_question_bank(
    questions: &QuestionStore,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(seed_file) = &config.seed_file else {
        return Ok(());
    };

    if questions.count().await? > 0 {
        tracing::info!("Question bank already populated, skipping seed.");
        return Ok(());
    }

    let raw = std::fs::read_to_string(seed_file)?;
    let seed: Vec<NewQuestion> = serde_json::from_str(&raw)?;

    for question in &seed {
        question.validate()?;
    }
    for question in &seed {
        questions.insert(question).await?;
    }

    tracing::info!("Seeded {} questions from {}.", seed.len(), seed_file);
    Ok(())
}
