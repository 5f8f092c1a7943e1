//! Database operations for questions.

use rusqlite::{
    Connection, OptionalExtension, Row, functions::FunctionFlags, params_from_iter,
    types::Value,
};

use crate::{
    Error,
    category::CategoryId,
    pagination::Page,
    question::{NewQuestion, Question, QuestionId},
};

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// Create a question and return it with its generated ID.
///
/// The insert runs in its own transaction which is rolled back if any step fails.
pub fn create_question(
    new_question: NewQuestion,
    connection: &Connection,
) -> Result<Question, Error> {
    // Using unchecked_transaction because we only have &Connection from the MutexGuard.
    let transaction = connection.unchecked_transaction()?;

    transaction.execute(
        "INSERT INTO question (question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4);",
        (
            &new_question.question,
            &new_question.answer,
            new_question.category,
            new_question.difficulty,
        ),
    )?;

    let id = transaction.last_insert_rowid();

    transaction.commit()?;

    Ok(Question {
        id,
        question: new_question.question,
        answer: new_question.answer,
        category: new_question.category,
        difficulty: new_question.difficulty,
    })
}

/// Delete a question by ID. Returns an error if the question doesn't exist.
///
/// The delete runs in its own transaction which is rolled back if any step fails.
pub fn delete_question(question_id: QuestionId, connection: &Connection) -> Result<(), Error> {
    let transaction = connection.unchecked_transaction()?;

    let rows_affected = transaction.execute("DELETE FROM question WHERE id = ?1", [question_id])?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissingQuestion(question_id));
    }

    transaction.commit()?;

    Ok(())
}

/// Count all questions.
pub fn count_questions(connection: &Connection) -> Result<i64, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM question;", [], |row| row.get(0))
        .map_err(|error| error.into())
}

/// Retrieve one page of all questions, ordered by ID.
pub fn get_questions_page(page: Page, connection: &Connection) -> Result<Vec<Question>, Error> {
    connection
        .prepare(&format!(
            "SELECT {QUESTION_COLUMNS} FROM question ORDER BY id ASC LIMIT ?1 OFFSET ?2;"
        ))?
        .query_map([page.limit, page.offset], map_row)?
        .map(|maybe_question| maybe_question.map_err(|error| error.into()))
        .collect()
}

/// Count the questions in a category.
pub fn count_questions_in_category(
    category_id: CategoryId,
    connection: &Connection,
) -> Result<i64, Error> {
    connection
        .query_row(
            "SELECT COUNT(id) FROM question WHERE category = ?1;",
            [category_id],
            |row| row.get(0),
        )
        .map_err(|error| error.into())
}

/// Retrieve one page of the questions in a category, ordered by ID.
pub fn get_questions_in_category_page(
    category_id: CategoryId,
    page: Page,
    connection: &Connection,
) -> Result<Vec<Question>, Error> {
    connection
        .prepare(&format!(
            "SELECT {QUESTION_COLUMNS} FROM question WHERE category = ?1 \
            ORDER BY id ASC LIMIT ?2 OFFSET ?3;"
        ))?
        .query_map([category_id, page.limit, page.offset], map_row)?
        .map(|maybe_question| maybe_question.map_err(|error| error.into()))
        .collect()
}

/// Retrieve every question whose text contains `search_term`, ignoring case.
///
/// Case is folded with Unicode rules by the `unicode_lower` SQL function, so
/// [register_search_functions] must have been called on `connection`.
/// The search term is matched literally.
pub fn search_questions(
    search_term: &str,
    connection: &Connection,
) -> Result<Vec<Question>, Error> {
    connection
        .prepare(&format!(
            "SELECT {QUESTION_COLUMNS} FROM question \
            WHERE instr(unicode_lower(question), unicode_lower(?1)) > 0 \
            ORDER BY id ASC;"
        ))?
        .query_map([search_term], map_row)?
        .map(|maybe_question| maybe_question.map_err(|error| error.into()))
        .collect()
}

/// Add the SQL functions used by [search_questions] to `connection`.
///
/// SQLite's own `lower` and `LIKE` only fold ASCII letters.
pub fn register_search_functions(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.create_scalar_function(
        "unicode_lower",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |context| {
            let text = context.get::<String>(0)?;
            Ok(text.to_lowercase())
        },
    )
}

/// Pick a random question that is not in `excluded_ids`.
///
/// If `category_id` is given, only questions in that category are considered.
/// Returns `None` when every candidate has been excluded.
pub fn get_random_question(
    category_id: Option<CategoryId>,
    excluded_ids: &[QuestionId],
    connection: &Connection,
) -> Result<Option<Question>, Error> {
    let mut conditions = Vec::new();
    let mut params: Vec<Value> = Vec::with_capacity(2);

    if let Some(category_id) = category_id {
        conditions.push("category = ?");
        params.push(Value::Integer(category_id));
    }

    // The IDs are bound as one JSON array so that long quizzes cannot exceed
    // SQLite's limit on bound parameters.
    if !excluded_ids.is_empty() {
        let excluded_json = serde_json::to_string(excluded_ids)
            .map_err(|error| rusqlite::Error::ToSqlConversionFailure(Box::new(error)))?;
        conditions.push("id NOT IN (SELECT value FROM json_each(?))");
        params.push(Value::Text(excluded_json));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    connection
        .prepare(&format!(
            "SELECT {QUESTION_COLUMNS} FROM question {where_clause} ORDER BY RANDOM() LIMIT 1;"
        ))?
        .query_row(params_from_iter(params), map_row)
        .optional()
        .map_err(|error| error.into())
}

/// Initialize the question table and indexes.
pub fn create_question_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS question (
            id INTEGER PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            category INTEGER NOT NULL,
            difficulty INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_question_category ON question(category);",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Question, rusqlite::Error> {
    Ok(Question {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
        category: row.get(3)?,
        difficulty: row.get(4)?,
    })
}
