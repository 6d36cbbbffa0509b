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
use model::{NewQuestion, Question, QuizQuestions};

pub fn question_router() -> Router<AppState> {
    Router::new()
        // /question and /questions serve the same lookup
        .route("/question/{question_id}", get(get_question_handler))
        .route("/questions/{question_id}", get(get_question_handler))
        .route("/questions/", post(create_question_handler))
        .route("/quiz-questions/{quiz_id}", get(list_quiz_questions_handler))
}

async fn get_question_handler(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
) -> Result<Json<Question>, ApiError> {
    let id = parse_id(&question_id)?;
    let question = state.questions.get_by_id(id).await?;

    println!("INFO: successfully retrieved question details");
    Ok(Json(question))
}

async fn create_question_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewQuestion>, JsonRejection>,
) -> Result<(StatusCode, Json<Question>), ApiError> {
    let Json(new_question) =
        payload.map_err(|e| ApiError::Validation(format!("Invalid Input: {}", e)))?;

    let question = state.questions.create(&new_question).await?;
    Ok((StatusCode::CREATED, Json(question)))
}

async fn list_quiz_questions_handler(
    State(state): State<AppState>,
    Path(quiz_id): Path<String>,
) -> Result<Json<QuizQuestions>, ApiError> {
    // reject non-numeric ids before anything reaches the store
    let id = parse_id(&quiz_id)?;
    let (quiz, questions) = state.questions.list_by_quiz(id).await?;

    Ok(Json(QuizQuestions {
        name: quiz.name,
        description: quiz.description,
        questions,
    }))
}
