use crate::config::QuizApiConfig;
use crate::features::questions::repo::QuestionRepository;
use crate::features::quizzes::repo::QuizRepository;
use axum::Router;
use dotenv;
use sqlx::Sqlite;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;

pub mod config;
mod error;
mod features;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub quizzes: QuizRepository,
    pub questions: QuestionRepository,
    pub config: Arc<QuizApiConfig>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    // load centralized config
    let config = QuizApiConfig::from_env();
    let shared_config = Arc::new(config.clone());

    // verify db exists
    if !Sqlite::database_exists(&config.database_url)
        .await
        .unwrap_or(false)
    {
        println!(
            "Unable to connect to database at {}, creating...",
            config.database_url
        );
        match Sqlite::create_database(&config.database_url).await {
            Ok(_) => println!("Successfully created database at {}.", &config.database_url),
            Err(e) => panic!(
                "Unable to create database at {}. Error details: {}",
                &config.database_url, e
            ),
        };
    }

    // connect to our db
    let pool = match SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            panic!("Failed to create pool on {}: {}", config.database_url, e);
        }
    };

    // apply the quiz/questions schema
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run database migrations.");

    println!("INFO: successful, connected to database");

    // each repository receives the store connection at construction, no globals
    let quizzes = QuizRepository::new(pool.clone());
    let questions = QuestionRepository::new(pool.clone(), quizzes.clone());

    let app_state = AppState {
        quizzes,
        questions,
        config: shared_config.clone(),
    };

    println!("Starting server...");

    // api router, where features are composed
    let app = Router::new()
        .nest("/api", features::api_router())
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    println!("Server listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
