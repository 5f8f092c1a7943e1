//! Endpoint for listing the questions in a category.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Query, State},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    category::{CategoryId, get_category},
    extract::ApiPath,
    pagination::{PageQuery, PaginationConfig},
    question::{QuestionsResponse, count_questions_in_category, get_questions_in_category_page},
};

/// The state needed for listing the questions in a category.
#[derive(Debug, Clone)]
pub struct CategoryQuestionsState {
    pub db_connection: Arc<Mutex<Connection>>,
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for CategoryQuestionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}

/// Get a page of the questions in a category along with the category's type.
///
/// The category is looked up before its questions, so an unknown category and
/// a category without questions are reported as separate errors. Both reach
/// the client as 404.
pub async fn get_category_questions_endpoint(
    State(state): State<CategoryQuestionsState>,
    ApiPath(category_id): ApiPath<CategoryId>,
    Query(query): Query<PageQuery>,
) -> Result<Json<QuestionsResponse>, Error> {
    let page = state.pagination_config.page(&query)?;

    let connection = state.db_connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })?;

    let category = get_category(category_id, &connection).map_err(|error| match error {
        Error::NotFound => Error::CategoryNotFound(category_id),
        error => error,
    })?;

    let total_questions = count_questions_in_category(category_id, &connection)?;

    if total_questions == 0 {
        return Err(Error::EmptyCategory(category_id));
    }

    let questions = get_questions_in_category_page(category_id, page, &connection)?;

    if questions.is_empty() {
        return Err(Error::NotFound);
    }

    Ok(Json(QuestionsResponse {
        success: true,
        questions,
        total_questions,
        categories: None,
        current_category: Some(category.category_type),
    }))
}
