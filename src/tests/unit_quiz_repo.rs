use crate::error::ApiError;
use crate::features::quizzes::model::NewQuiz;
use crate::tests::{count_rows, setup_test_state};

fn geography_quiz() -> NewQuiz {
    NewQuiz {
        name: "Geo".to_string(),
        description: "Geography basics".to_string(),
    }
}

// create a quiz, then fetch it back by the id the store assigned
#[tokio::test]
async fn test_create_and_get_quiz_round_trip() {
    let (state, _pool) = setup_test_state().await;

    let created = state
        .quizzes
        .create(&geography_quiz())
        .await
        .expect("Should create quiz");
    assert_eq!(created.id, 1);

    let retrieved = state
        .quizzes
        .get_by_id(created.id)
        .await
        .expect("Should find quiz");

    assert_eq!(retrieved, created);
    assert_eq!(retrieved.name, "Geo");
    assert_eq!(retrieved.description, "Geography basics");
}

// a missing row is NotFound, never a record with id < 1
#[tokio::test]
async fn test_get_missing_quiz_is_not_found() {
    let (state, _pool) = setup_test_state().await;

    let result = state.quizzes.get_by_id(999).await;
    assert!(matches!(result, Err(ApiError::NotFound)));
}

// empty name or description is a validation failure and inserts nothing
#[tokio::test]
async fn test_create_quiz_rejects_empty_fields() {
    let (state, pool) = setup_test_state().await;

    let result = state
        .quizzes
        .create(&NewQuiz {
            name: "".to_string(),
            description: "Geography basics".to_string(),
        })
        .await;
    assert!(matches!(result, Err(ApiError::Validation(_))));

    let result = state
        .quizzes
        .create(&NewQuiz {
            name: "Geo".to_string(),
            description: "".to_string(),
        })
        .await;
    assert!(matches!(result, Err(ApiError::Validation(_))));

    assert_eq!(count_rows(&pool, "quiz").await, 0);
}

// ids keep incrementing across creates
#[tokio::test]
async fn test_create_assigns_sequential_ids() {
    let (state, _pool) = setup_test_state().await;

    let first = state.quizzes.create(&geography_quiz()).await.unwrap();
    let second = state
        .quizzes
        .create(&NewQuiz {
            name: "History".to_string(),
            description: "World history".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
}
