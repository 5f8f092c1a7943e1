//! Question deletion endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;
use serde::Serialize;

use crate::{
    AppState, Error,
    extract::ApiPath,
    question::{QuestionId, delete_question},
};

/// The state needed for deleting a question.
#[derive(Debug, Clone)]
pub struct DeleteQuestionState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DeleteQuestionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    success: bool,
    deleted: QuestionId,
}

/// Handle question deletion. Returns the deleted ID.
///
/// Deleting a question that does not exist, or any failure while deleting,
/// is reported to the client as 422.
pub async fn delete_question_endpoint(
    State(state): State<DeleteQuestionState>,
    ApiPath(raw_id): ApiPath<String>,
) -> Result<Json<DeletedResponse>, Error> {
    let question_id = parse_question_id(&raw_id)?;

    let connection = state.db_connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError.into_write_failure()
    })?;

    delete_question(question_id, &connection).map_err(Error::into_write_failure)?;

    tracing::info!("Deleted question {question_id}");

    Ok(Json(DeletedResponse {
        success: true,
        deleted: question_id,
    }))
}

/// Parse the question ID in a delete path.
///
/// A segment that is not all digits does not name a question and is 404.
/// All digits but too large for an ID can never match a stored question, so it
/// is unprocessable like any other missing question.
fn parse_question_id(raw_id: &str) -> Result<QuestionId, Error> {
    if raw_id.is_empty() || !raw_id.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(Error::NotFound);
    }

    raw_id
        .parse()
        .map_err(|_| Error::QuestionIdOutOfRange(raw_id.to_owned()))
}


#[cfg(test)]
mod delete_question_endpoint_tests {
    use axum::{extract::State, http::StatusCode};
    use serde_json::{Value, json};

    use crate::{
        Error,
        endpoints::{self, format_endpoint},
        extract::ApiPath,
        question::{count_questions, create_question, delete_question_endpoint},
        test_utils::{
            assert_error_body, get_seeded_state, get_test_server, get_test_state, new_question,
        },
    };

    use super::DeleteQuestionState;

    #[tokio::test]
    async fn delete_question_succeeds() {
        let state = get_test_state();
        let question = create_question(
            new_question("new Question", 1),
            &state.db_connection.lock().unwrap(),
        )
        .unwrap();
        let server = get_test_server(state.clone());

        let response = server
            .delete(&format_endpoint(endpoints::QUESTION, question.id))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({"success": true, "deleted": question.id}));
        assert_eq!(count_questions(&state.db_connection.lock().unwrap()), Ok(0));
    }

    #[tokio::test]
    async fn deleted_question_is_gone_from_listing() {
        let server = get_test_server(get_seeded_state());

        server
            .delete(&format_endpoint(endpoints::QUESTION, 2))
            .await
            .assert_status_ok();

        let body = server.get(endpoints::QUESTIONS).await.json::<Value>();
        assert_eq!(body["total_questions"], 18);
        assert!(
            body["questions"]
                .as_array()
                .unwrap()
                .iter()
                .all(|question| question["id"] != 2)
        );
    }

    #[tokio::test]
    async fn delete_missing_question_returns_unprocessable() {
        let server = get_test_server(get_seeded_state());

        let response = server
            .delete(&format_endpoint(endpoints::QUESTION, 50000))
            .await;

        assert_error_body(&response, StatusCode::UNPROCESSABLE_ENTITY, "unprocessable");
    }

    #[tokio::test]
    async fn deleting_twice_fails_the_second_time() {
        let state = get_seeded_state();
        let endpoint_state = DeleteQuestionState {
            db_connection: state.db_connection.clone(),
        };

        let path = || ApiPath("5".to_owned());

        let first = delete_question_endpoint(State(endpoint_state.clone()), path()).await;
        let second = delete_question_endpoint(State(endpoint_state), path()).await;

        assert!(first.is_ok());
        assert_eq!(second.err(), Some(Error::DeleteMissingQuestion(5)));
    }

    #[tokio::test]
    async fn failed_delete_returns_unprocessable_and_keeps_question() {
        let state = get_test_state();
        let question = {
            let connection = state.db_connection.lock().unwrap();
            let question = create_question(new_question("Protected", 1), &connection).unwrap();
            connection
                .execute_batch(
                    "CREATE TRIGGER reject_delete BEFORE DELETE ON question
                    BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
                )
                .unwrap();
            question
        };
        let server = get_test_server(state.clone());

        let response = server
            .delete(&format_endpoint(endpoints::QUESTION, question.id))
            .await;

        assert_error_body(&response, StatusCode::UNPROCESSABLE_ENTITY, "unprocessable");
        let connection = state.db_connection.lock().unwrap();
        assert!(connection.is_autocommit());
        assert_eq!(count_questions(&connection), Ok(1));
    }

    #[tokio::test]
    async fn oversized_id_returns_unprocessable() {
        let server = get_test_server(get_seeded_state());

        let response = server.delete("/api/questions/99999999999999999999").await;

        assert_error_body(&response, StatusCode::UNPROCESSABLE_ENTITY, "unprocessable");
    }

    #[tokio::test]
    async fn negative_id_returns_not_found() {
        let server = get_test_server(get_seeded_state());

        let response = server.delete("/api/questions/-5").await;

        assert_error_body(&response, StatusCode::NOT_FOUND, "resource not found");
    }
}
