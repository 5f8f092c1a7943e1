//! Application router configuration.

use axum::{
    Router,
    http::{Method, header},
    routing::{delete, get, post},
};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    AppState, Error,
    category::{get_categories_endpoint, get_category_questions_endpoint},
    endpoints,
    question::{
        create_question_endpoint, delete_question_endpoint, get_questions_endpoint,
        search_questions_endpoint,
    },
    quiz::get_quiz_question_endpoint,
};

/// Return a router with all the app's routes.
///
/// Every route allows cross-origin requests so that the quiz frontend can be
/// served from a different origin.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::CATEGORIES, get(get_categories_endpoint))
        .route(
            endpoints::CATEGORY_QUESTIONS,
            get(get_category_questions_endpoint),
        )
        .route(
            endpoints::QUESTIONS,
            get(get_questions_endpoint).post(create_question_endpoint),
        )
        .route(endpoints::SEARCH_QUESTIONS, post(search_questions_endpoint))
        .route(endpoints::QUESTION, delete(delete_question_endpoint))
        .route(endpoints::QUIZZES, post(get_quiz_question_endpoint))
        .method_not_allowed_fallback(get_405_method_not_allowed)
        .fallback(get_404_not_found)
        .layer(cors_layer())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
}

async fn get_404_not_found() -> Error {
    Error::NotFound
}

async fn get_405_method_not_allowed() -> Error {
    Error::MethodNotAllowed
}
