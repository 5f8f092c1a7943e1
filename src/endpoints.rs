//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/questions/{question_id}', use [format_endpoint].

/// The route for listing all categories.
pub const CATEGORIES: &str = "/api/categories";
/// The route for listing the questions in a category.
pub const CATEGORY_QUESTIONS: &str = "/api/categories/{category_id}/questions";
/// The route for listing questions a page at a time and for creating questions.
pub const QUESTIONS: &str = "/api/questions";
/// The route for deleting a question.
pub const QUESTION: &str = "/api/questions/{question_id}";
/// The route for searching questions by a substring of their text.
pub const SEARCH_QUESTIONS: &str = "/api/questions/search";
/// The route for getting the next question in a quiz.
pub const QUIZZES: &str = "/api/quizzes";

/// Replace the first parameter in `endpoint_path` with `id`.
///
/// # Examples
///
/// ```
/// use trivia_api::endpoints::{CATEGORY_QUESTIONS, format_endpoint};
///
/// assert_eq!(format_endpoint(CATEGORY_QUESTIONS, 5), "/api/categories/5/questions");
/// ```
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.char_indices() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
