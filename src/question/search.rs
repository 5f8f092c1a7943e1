//! Question search endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;
use serde::Deserialize;

use crate::{
    AppState, Error,
    extract::ApiJson,
    question::{QuestionsResponse, search_questions},
};

/// The state needed for searching questions.
#[derive(Debug, Clone)]
pub struct SearchQuestionsState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for SearchQuestionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The request body for a question search.
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default, rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Find every question containing the search term, ignoring case.
///
/// A missing search term is unprocessable, an empty one is 404.
pub async fn search_questions_endpoint(
    State(state): State<SearchQuestionsState>,
    ApiJson(form): ApiJson<SearchForm>,
) -> Result<Json<QuestionsResponse>, Error> {
    let search_term = form.search_term.ok_or(Error::MissingField("searchTerm"))?;

    if search_term.is_empty() {
        return Err(Error::EmptySearchTerm);
    }

    let connection = state.db_connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })?;

    let questions = search_questions(&search_term, &connection)?;

    Ok(Json(QuestionsResponse {
        success: true,
        total_questions: questions.len() as i64,
        questions,
        categories: None,
        current_category: None,
    }))
}
