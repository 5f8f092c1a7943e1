//! Endpoint for listing all questions a page at a time.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Query, State},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    category::{CategoryMap, get_all_categories},
    pagination::{PageQuery, PaginationConfig},
    question::{QuestionsResponse, count_questions, get_questions_page},
};

/// The state needed for listing questions.
#[derive(Debug, Clone)]
pub struct QuestionsPageState {
    pub db_connection: Arc<Mutex<Connection>>,
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for QuestionsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}

/// Get a page of questions ordered by ID, the total question count and every category.
///
/// Responds with 404 if the requested page is empty.
pub async fn get_questions_endpoint(
    State(state): State<QuestionsPageState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<QuestionsResponse>, Error> {
    let page = state.pagination_config.page(&query)?;

    let connection = state.db_connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })?;

    let questions = get_questions_page(page, &connection)?;

    if questions.is_empty() {
        return Err(Error::NotFound);
    }

    let total_questions = count_questions(&connection)?;
    let categories = get_all_categories(&connection)?;

    Ok(Json(QuestionsResponse {
        success: true,
        questions,
        total_questions,
        categories: Some(CategoryMap(categories)),
        current_category: None,
    }))
}
