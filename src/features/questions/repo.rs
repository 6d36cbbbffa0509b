use crate::error::ApiError;
use crate::features::questions::model::{NewQuestion, Question};
use crate::features::quizzes::model::Quiz;
use crate::features::quizzes::repo::QuizRepository;
use sqlx::{Pool, Sqlite};

const SELECT_QUESTION: &str =
    "SELECT id, name, options, correct_option, quiz, points FROM questions";

/// Question store operations. Carries a QuizRepository so question creation
/// can resolve the owning quiz through the same path every other lookup uses.
#[derive(Clone)]
pub struct QuestionRepository {
    pool: Pool<Sqlite>,
    quizzes: QuizRepository,
}

impl QuestionRepository {
    pub fn new(pool: Pool<Sqlite>, quizzes: QuizRepository) -> Self {
        Self { pool, quizzes }
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Question, ApiError> {
        let question_opt =
            sqlx::query_as::<_, Question>(&format!("{} WHERE id = ?", SELECT_QUESTION))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| ApiError::Storage(e.to_string()))?;

        question_opt.ok_or(ApiError::NotFound)
    }

    pub async fn create(&self, new_question: &NewQuestion) -> Result<Question, ApiError> {
        if new_question.name.is_empty()
            || new_question.options.is_empty()
            || new_question.correct_option == 0
            || new_question.quiz == 0
            || new_question.points == 0
        {
            return Err(ApiError::Validation(
                "all the fields are required i.e strings cannot be empty and integer cannot be zero"
                    .to_string(),
            ));
        }

        // advisory existence check only; the check and the insert below are
        // not one transaction, so a concurrent quiz removal could race
        match self.quizzes.get_by_id(new_question.quiz).await {
            Ok(_) => {}
            Err(ApiError::NotFound) => {
                return Err(ApiError::Validation(format!(
                    "Quiz Not found: no quiz with id {}",
                    new_question.quiz
                )));
            }
            Err(e) => return Err(e),
        }

        let result = sqlx::query(
            "INSERT INTO questions (name, options, correct_option, quiz, points) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&new_question.name)
        .bind(&new_question.options)
        .bind(new_question.correct_option)
        .bind(new_question.quiz)
        .bind(new_question.points)
        .execute(&self.pool)
        .await
        .map_err(|e| ApiError::Storage(e.to_string()))?;

        Ok(Question {
            id: result.last_insert_rowid(),
            name: new_question.name.clone(),
            options: new_question.options.clone(),
            correct_option: new_question.correct_option,
            quiz: new_question.quiz,
            points: new_question.points,
        })
    }

    /// The quiz's metadata plus every question belonging to it, in store
    /// iteration order. A quiz with no questions is not an error.
    pub async fn list_by_quiz(&self, quiz_id: i64) -> Result<(Quiz, Vec<Question>), ApiError> {
        let quiz = self.quizzes.get_by_id(quiz_id).await?;

        let questions = sqlx::query_as::<_, Question>(&format!("{} WHERE quiz = ?", SELECT_QUESTION))
            .bind(quiz_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ApiError::Storage(e.to_string()))?;

        Ok((quiz, questions))
    }
}
