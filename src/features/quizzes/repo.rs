use crate::error::ApiError;
use crate::features::quizzes::model::{NewQuiz, Quiz};
use sqlx::{Pool, Sqlite};

/// Quiz store operations. Holds the pool it was constructed with;
/// sqlx::Pool is thread safe, so the repository is freely cloneable.
#[derive(Clone)]
pub struct QuizRepository {
    pool: Pool<Sqlite>,
}

impl QuizRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Quiz, ApiError> {
        let quiz_opt =
            sqlx::query_as::<_, Quiz>("SELECT id, name, description FROM quiz WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| ApiError::Storage(e.to_string()))?;

        // a zero-value row scanned out of the store is as good as no row
        match quiz_opt {
            Some(quiz) if quiz.id >= 1 => Ok(quiz),
            _ => Err(ApiError::NotFound),
        }
    }

    pub async fn create(&self, new_quiz: &NewQuiz) -> Result<Quiz, ApiError> {
        if new_quiz.name.is_empty() || new_quiz.description.is_empty() {
            return Err(ApiError::Validation(
                "name and description fields are required".to_string(),
            ));
        }

        let result = sqlx::query("INSERT INTO quiz (name, description) VALUES (?, ?)")
            .bind(&new_quiz.name)
            .bind(&new_quiz.description)
            .execute(&self.pool)
            .await
            .map_err(|e| ApiError::Storage(e.to_string()))?;

        let id = result.last_insert_rowid();
        println!(
            "INFO: Quiz details inserted with id:{} & name:{} & description:{}",
            id, new_quiz.name, new_quiz.description
        );

        Ok(Quiz {
            id,
            name: new_quiz.name.clone(),
            description: new_quiz.description.clone(),
        })
    }
}
