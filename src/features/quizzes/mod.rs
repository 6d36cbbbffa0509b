pub mod model;
pub mod repo;

use crate::AppState;
use crate::error::{ApiError, parse_id};
use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use model::{NewQuiz, Quiz};

pub fn quiz_router() -> Router<AppState> {
    Router::new()
        .route("/quiz/{quiz_id}", get(get_quiz_handler))
        .route("/quiz/", post(create_quiz_handler))
}

async fn get_quiz_handler(
    State(state): State<AppState>,
    Path(quiz_id): Path<String>,
) -> Result<Json<Quiz>, ApiError> {
    let id = parse_id(&quiz_id)?;
    let quiz = state.quizzes.get_by_id(id).await?;

    println!("INFO: successfully retrieved quiz details");
    Ok(Json(quiz))
}

async fn create_quiz_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewQuiz>, JsonRejection>,
) -> Result<(StatusCode, Json<Quiz>), ApiError> {
    let Json(new_quiz) =
        payload.map_err(|e| ApiError::Validation(format!("Invalid Input: {}", e)))?;

    let quiz = state.quizzes.create(&new_quiz).await?;
    Ok((StatusCode::CREATED, Json(quiz)))
}
