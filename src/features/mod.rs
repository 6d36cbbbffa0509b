use crate::AppState;
use axum::Router;

pub mod questions;
pub mod quizzes;

// compose every feature router into the /api surface
pub fn api_router() -> Router<AppState> {
    quizzes::quiz_router().merge(questions::question_router())
}
