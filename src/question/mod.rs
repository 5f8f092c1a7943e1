//! Trivia questions: listing, searching, creating and deleting.

mod create;
mod db;
mod delete;
mod domain;
mod list;
mod search;

pub use create::create_question_endpoint;
pub use db::{
    count_questions, count_questions_in_category, create_question, create_question_table,
    delete_question, get_questions_in_category_page, get_questions_page, get_random_question,
    register_search_functions, search_questions,
};
pub use delete::delete_question_endpoint;
pub use domain::{NewQuestion, Question, QuestionForm, QuestionId, QuestionsResponse};
pub use list::get_questions_endpoint;
pub use search::search_questions_endpoint;
