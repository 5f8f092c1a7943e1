use rusqlite::Connection;

use crate::{
    AppState, PaginationConfig,
    category::{Category, CategoryId},
    db::seed_sample_data,
    question::NewQuestion,
};

/// Create app state backed by an empty in-memory database.
pub(crate) fn get_test_state() -> AppState {
    let connection =
        Connection::open_in_memory().expect("Could not open in-memory SQLite database");

    AppState::new(connection, PaginationConfig::default()).expect("Could not create app state")
}

/// Create app state backed by an in-memory database holding the sample trivia data.
pub(crate) fn get_seeded_state() -> AppState {
    let state = get_test_state();
    seed_sample_data(&state.db_connection.lock().unwrap()).expect("Could not seed database");
    state
}

pub(crate) fn insert_category(
    id: CategoryId,
    category_type: &str,
    connection: &Connection,
) -> Category {
    connection
        .execute(
            "INSERT INTO category (id, type) VALUES (?1, ?2)",
            (id, category_type),
        )
        .expect("Could not create test category");

    Category {
        id,
        category_type: category_type.to_owned(),
    }
}

pub(crate) fn new_question(text: &str, category: CategoryId) -> NewQuestion {
    NewQuestion {
        question: text.to_owned(),
        answer: format!("Answer to {text}"),
        category,
        difficulty: 1,
    }
}
