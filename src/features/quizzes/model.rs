use serde::{Deserialize, Serialize};

/// A quiz row as stored and as served. The id is assigned by the store and
/// immutable after creation.
#[derive(sqlx::FromRow, Serialize, Debug, Clone, Eq, PartialEq)]
pub struct Quiz {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Creation payload for `POST /api/quiz/`.
#[derive(Deserialize, Debug)]
pub struct NewQuiz {
    pub name: String,
    pub description: String,
}
