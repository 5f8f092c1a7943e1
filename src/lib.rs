//! Trivia API is the backend for a trivia quiz web app.
//!
//! This library provides a JSON REST API for browsing, searching, adding and
//! deleting trivia questions, and for playing a quiz one random question at a
//! time.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde::Serialize;
use tokio::signal;

mod app_state;
mod category;
mod db;
mod deserializers;
pub mod endpoints;
mod extract;
mod logging;
mod pagination;
mod question;
mod quiz;
mod routing;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use category::{Category, CategoryId};
pub use db::{initialize as initialize_db, seed_sample_data};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use pagination::PaginationConfig;
pub use question::{Question, QuestionId};
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows, or when
    /// a read returns an empty page of results.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The category ID does not refer to a category in the database.
    #[error("category {0} does not exist")]
    CategoryNotFound(CategoryId),

    /// The category exists but has no questions.
    #[error("category {0} has no questions")]
    EmptyCategory(CategoryId),

    /// A search was requested with an empty search term.
    #[error("the search term cannot be empty")]
    EmptySearchTerm,

    /// A required field in the request body was missing or empty.
    #[error("the field \"{0}\" is missing or empty")]
    MissingField(&'static str),

    /// The request body was valid JSON but did not have the expected shape.
    #[error("the request body has the wrong shape: {0}")]
    InvalidBody(String),

    /// The request body could not be parsed as JSON.
    #[error("the request body could not be parsed: {0}")]
    BadRequest(String),

    /// The HTTP method is not supported on the requested route.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Tried to delete a question that does not exist.
    #[error("tried to delete question {0} which is not in the database")]
    DeleteMissingQuestion(QuestionId),

    /// The question ID in a path is a number too large to be a stored ID.
    #[error("question ID {0} is out of range")]
    QuestionIdOutOfRange(String),

    /// A write to the database failed and was rolled back.
    ///
    /// The string describes the underlying cause and should only be logged.
    #[error("the write could not be completed: {0}")]
    WriteFailed(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl Error {
    /// Downgrade an error raised while writing to the database to an
    /// unprocessable error.
    ///
    /// Errors that already map to 422 are kept as-is so that the logs retain
    /// the specific cause. Everything else is logged and collapsed into
    /// [Error::WriteFailed].
    pub fn into_write_failure(self) -> Self {
        match self {
            Error::MissingField(_)
            | Error::InvalidBody(_)
            | Error::DeleteMissingQuestion(_)
            | Error::QuestionIdOutOfRange(_)
            | Error::WriteFailed(_) => self,
            error => {
                tracing::error!("a database write failed and was rolled back: {error}");
                Error::WriteFailed(error.to_string())
            }
        }
    }

    /// The HTTP status code the client sees for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound
            | Error::CategoryNotFound(_)
            | Error::EmptyCategory(_)
            | Error::EmptySearchTerm => StatusCode::NOT_FOUND,
            Error::MissingField(_)
            | Error::InvalidBody(_)
            | Error::DeleteMissingQuestion(_)
            | Error::QuestionIdOutOfRange(_)
            | Error::WriteFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Error::SqlError(_) | Error::DatabaseLockError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// The JSON body sent to the client for every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: u16,
    message: &'static str,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match status {
            StatusCode::NOT_FOUND => "resource not found",
            StatusCode::UNPROCESSABLE_ENTITY => "unprocessable",
            StatusCode::BAD_REQUEST => "bad request",
            StatusCode::METHOD_NOT_ALLOWED => "method not allowed",
            _ => "Internal Server Error",
        };

        match status {
            StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!("An unexpected error occurred: {}", self)
            }
            _ => tracing::debug!("Responding with {status}: {}", self),
        }

        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message,
        };

        (status, Json(body)).into_response()
    }
}
