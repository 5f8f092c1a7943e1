//! Category listing endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;
use serde::Serialize;

use crate::{
    AppState, Error,
    category::{CategoryMap, get_all_categories},
};

/// The state needed for listing categories.
#[derive(Debug, Clone)]
pub struct CategoriesState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CategoriesState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    success: bool,
    categories: CategoryMap,
}

/// Get every category as a map of ID to type, ordered by type.
///
/// Responds with 404 if there are no categories.
pub async fn get_categories_endpoint(
    State(state): State<CategoriesState>,
) -> Result<Json<CategoriesResponse>, Error> {
    let connection = state.db_connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })?;

    let categories = get_all_categories(&connection)?;

    if categories.is_empty() {
        return Err(Error::NotFound);
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories: CategoryMap(categories),
    }))
}

#[cfg(test)]
mod get_categories_endpoint_tests {
    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::{
        category::get_categories_endpoint,
        endpoints,
        test_utils::{
            assert_error_body, get_seeded_state, get_test_server, get_test_state, insert_category,
            json_body,
        },
    };

    use super::CategoriesState;

    #[tokio::test]
    async fn returns_categories_ordered_by_type() {
        let state = get_test_state();
        {
            let connection = state.db_connection.lock().unwrap();
            insert_category(1, "Science", &connection);
            insert_category(2, "Art", &connection);
        }

        let response = get_categories_endpoint(State(CategoriesState {
            db_connection: state.db_connection.clone(),
        }))
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(
            String::from_utf8_lossy(&body),
            r#"{"success":true,"categories":{"2":"Art","1":"Science"}}"#
        );
    }

    #[tokio::test]
    async fn returns_all_sample_categories() {
        let server = get_test_server(get_seeded_state());

        let response = server.get(endpoints::CATEGORIES).await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "success": true,
            "categories": {
                "1": "Science",
                "2": "Art",
                "3": "Geography",
                "4": "History",
                "5": "Entertainment",
                "6": "Sports",
            }
        }));
    }

    #[tokio::test]
    async fn empty_database_returns_not_found() {
        let state = get_test_state();

        let response = get_categories_endpoint(State(CategoriesState {
            db_connection: state.db_connection.clone(),
        }))
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["success"], false);
    }

    #[tokio::test]
    async fn empty_database_returns_not_found_body() {
        let server = get_test_server(get_test_state());

        let response = server.get(endpoints::CATEGORIES).await;

        assert_error_body(&response, StatusCode::NOT_FOUND, "resource not found");
    }
}
