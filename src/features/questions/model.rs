use serde::{Deserialize, Serialize};

/// A question row. `options` is a serialized choice list whose format is
/// opaque to this service; `correct_option` indexes into it.
#[derive(sqlx::FromRow, Serialize, Debug, Clone, Eq, PartialEq)]
pub struct Question {
    pub id: i64,
    pub name: String,
    pub options: String,
    pub correct_option: i64,
    pub quiz: i64,
    pub points: i64,
}

/// Creation payload for `POST /api/questions/`.
#[derive(Deserialize, Debug)]
pub struct NewQuestion {
    pub name: String,
    pub options: String,
    pub correct_option: i64,
    pub quiz: i64,
    pub points: i64,
}

/// Response body for `GET /api/quiz-questions/{quiz_id}`: the quiz metadata
/// plus its questions as typed records, not ad hoc maps.
#[derive(Serialize, Debug)]
pub struct QuizQuestions {
    pub name: String,
    pub description: String,
    pub questions: Vec<Question>,
}
