//! Quiz play: serving one random, not yet asked question at a time.
//!
//! The server keeps no quiz session. The client sends back the IDs of the
//! questions it has already been asked and the server picks from the rest.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    category::CategoryId,
    deserializers::deserialize_optional_integer,
    extract::ApiJson,
    question::{Question, QuestionId, get_random_question},
};

/// The category type the quiz frontend sends when the player chose "All".
pub const ALL_CATEGORIES: &str = "click";

/// The state needed for picking quiz questions.
#[derive(Debug, Clone)]
pub struct QuizState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for QuizState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The category a quiz is played in.
#[derive(Debug, Default, Deserialize)]
pub struct QuizCategory {
    #[serde(default, deserialize_with = "deserialize_optional_integer")]
    pub id: Option<CategoryId>,
    #[serde(default, rename = "type")]
    pub category_type: String,
}

impl QuizCategory {
    /// The category to draw questions from, or `None` for every category.
    fn category_filter(&self) -> Result<Option<CategoryId>, Error> {
        if self.category_type == ALL_CATEGORIES {
            return Ok(None);
        }

        match self.id {
            Some(id) => Ok(Some(id)),
            None => Err(Error::MissingField("quiz_category.id")),
        }
    }
}

/// The request body for the next quiz question.
#[derive(Debug, Default, Deserialize)]
pub struct QuizForm {
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
    #[serde(default)]
    pub previous_questions: Option<Vec<QuestionId>>,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    success: bool,
    question: Option<Question>,
}

/// Pick a random question from the chosen category that is not in the
/// previous questions.
///
/// `question` is `null` once every question in the category has been asked.
pub async fn get_quiz_question_endpoint(
    State(state): State<QuizState>,
    ApiJson(form): ApiJson<QuizForm>,
) -> Result<Json<QuizResponse>, Error> {
    let quiz_category = form
        .quiz_category
        .ok_or(Error::MissingField("quiz_category"))?;
    let previous_questions = form
        .previous_questions
        .ok_or(Error::MissingField("previous_questions"))?;
    let category_id = quiz_category.category_filter()?;

    let connection = state.db_connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })?;

    let question = get_random_question(category_id, &previous_questions, &connection)?;

    if question.is_none() {
        tracing::debug!(
            "No questions left in category {category_id:?} after {} previous questions",
            previous_questions.len()
        );
    }

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
