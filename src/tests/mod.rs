use crate::AppState;
use crate::config::QuizApiConfig;
use crate::features::questions::repo::QuestionRepository;
use crate::features::quizzes::repo::QuizRepository;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::sync::Arc;

pub mod unit_quiz_repo;

// create a sqlite database in memory to test against
// one connection only, otherwise every pool checkout gets its own empty db
pub async fn setup_test_state() -> (AppState, Pool<Sqlite>) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    // run migrations to create the quiz/questions schema
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let config = Arc::new(QuizApiConfig {
        database_url: "sqlite::memory:".into(),
        max_connections: 1,
        bind_addr: "127.0.0.1:0".into(),
    });

    let quizzes = QuizRepository::new(pool.clone());
    let questions = QuestionRepository::new(pool.clone(), quizzes.clone());

    (
        AppState {
            quizzes,
            questions,
            config,
        },
        pool,
    )
}

// row count helper for asserting that failed creates insert nothing
pub async fn count_rows(pool: &Pool<Sqlite>, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .expect("Should count rows")
}
