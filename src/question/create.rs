//! Question creation endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;
use serde::Serialize;

use crate::{
    AppState, Error,
    extract::ApiJson,
    question::{NewQuestion, QuestionForm, QuestionId, create_question},
};

/// The state needed for creating a question.
#[derive(Debug, Clone)]
pub struct CreateQuestionState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateQuestionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    success: bool,
    created: QuestionId,
}

/// Handle a new question. Every field is required and must not be empty.
///
/// Any failure, including a failed insert, is reported to the client as 422.
pub async fn create_question_endpoint(
    State(state): State<CreateQuestionState>,
    ApiJson(form): ApiJson<QuestionForm>,
) -> Result<Json<CreatedResponse>, Error> {
    let new_question = NewQuestion::try_from(form)?;

    let connection = state.db_connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError.into_write_failure()
    })?;

    let question =
        create_question(new_question, &connection).map_err(Error::into_write_failure)?;

    tracing::info!("Created question {}", question.id);

    Ok(Json(CreatedResponse {
        success: true,
        created: question.id,
    }))
}

#[cfg(test)]
mod create_question_endpoint_tests {
    use axum::{extract::State, http::StatusCode};
    use serde_json::{Value, json};

    use crate::{
        Error, endpoints,
        extract::ApiJson,
        question::{QuestionForm, count_questions, create_question_endpoint},
        test_utils::{assert_error_body, get_seeded_state, get_test_server, get_test_state},
    };

    use super::CreateQuestionState;

    #[tokio::test]
    async fn create_question_succeeds() {
        let state = get_seeded_state();
        let server = get_test_server(state.clone());

        let response = server
            .post(endpoints::QUESTIONS)
            .json(&json!({
                "question": "another new question?",
                "answer": "another new answer",
                "difficulty": 1,
                "category": 1,
            }))
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["success"], true);
        assert_eq!(body["created"], 24);
        assert_eq!(count_questions(&state.db_connection.lock().unwrap()), Ok(20));
    }

    #[tokio::test]
    async fn new_question_appears_on_last_page() {
        let state = get_seeded_state();
        let server = get_test_server(state);

        server
            .post(endpoints::QUESTIONS)
            .json(&json!({
                "question": "Which planet is closest to the sun?",
                "answer": "Mercury",
                "difficulty": "2",
                "category": "1",
            }))
            .await
            .assert_status_ok();

        let response = server.get(endpoints::QUESTIONS).add_query_param("page", 2).await;
        let body = response.json::<Value>();
        let questions = body["questions"].as_array().unwrap();
        let last = questions.last().unwrap();
        assert_eq!(last["question"], "Which planet is closest to the sun?");
        assert_eq!(last["difficulty"], 2);
        assert_eq!(body["total_questions"], 20);
    }

    #[tokio::test]
    async fn missing_field_returns_unprocessable_without_insert() {
        let state = get_seeded_state();
        let server = get_test_server(state.clone());

        let response = server
            .post(endpoints::QUESTIONS)
            .json(&json!({
                "question": "another new question?",
                "difficulty": 1,
                "category": 1,
            }))
            .await;

        assert_error_body(&response, StatusCode::UNPROCESSABLE_ENTITY, "unprocessable");
        assert_eq!(count_questions(&state.db_connection.lock().unwrap()), Ok(19));
    }

    #[tokio::test]
    async fn empty_field_returns_unprocessable() {
        let state = get_test_state();

        let result = create_question_endpoint(
            State(CreateQuestionState {
                db_connection: state.db_connection.clone(),
            }),
            ApiJson(QuestionForm {
                question: Some("Q?".to_owned()),
                answer: Some(String::new()),
                difficulty: Some(1),
                category: Some(1),
            }),
        )
        .await;

        assert_eq!(result.err(), Some(Error::MissingField("answer")));
        assert_eq!(count_questions(&state.db_connection.lock().unwrap()), Ok(0));
    }

    #[tokio::test]
    async fn wrongly_typed_field_returns_unprocessable() {
        let server = get_test_server(get_test_state());

        let response = server
            .post(endpoints::QUESTIONS)
            .json(&json!({
                "question": "Q?",
                "answer": "A",
                "difficulty": "very hard",
                "category": 1,
            }))
            .await;

        assert_error_body(&response, StatusCode::UNPROCESSABLE_ENTITY, "unprocessable");
    }

    #[tokio::test]
    async fn failed_insert_returns_unprocessable() {
        let state = get_test_state();
        state
            .db_connection
            .lock()
            .unwrap()
            .execute_batch(
                "CREATE TRIGGER reject_insert AFTER INSERT ON question
                BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
            )
            .unwrap();
        let server = get_test_server(state.clone());

        let response = server
            .post(endpoints::QUESTIONS)
            .json(&json!({
                "question": "Q?",
                "answer": "A",
                "difficulty": 1,
                "category": 1,
            }))
            .await;

        assert_error_body(&response, StatusCode::UNPROCESSABLE_ENTITY, "unprocessable");
        assert_eq!(count_questions(&state.db_connection.lock().unwrap()), Ok(0));
    }
}
