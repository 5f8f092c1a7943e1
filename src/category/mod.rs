//! Categories group questions and can be browsed but not edited.

mod db;
mod domain;
mod list;
mod questions;

pub use db::{create_category_table, get_all_categories, get_category};
pub use domain::{Category, CategoryId, CategoryMap};
pub use list::get_categories_endpoint;
pub use questions::get_category_questions_endpoint;
