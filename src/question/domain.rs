//! Core question domain types.

use serde::{Deserialize, Serialize};

use crate::{
    Error, category::CategoryId, category::CategoryMap,
    deserializers::deserialize_optional_integer,
};

/// Database identifier for a question.
pub type QuestionId = i64;

/// A trivia question with its answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Question {
    /// The question's ID in the application database.
    pub id: QuestionId,
    /// The text of the question.
    pub question: String,
    /// The expected answer.
    pub answer: String,
    /// The ID of the category the question belongs to.
    ///
    /// This is not checked against the category table, so it may refer to a
    /// category that does not exist.
    pub category: CategoryId,
    /// How hard the question is, where larger is harder.
    pub difficulty: i64,
}

/// A validated question that has not been saved yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i64,
}

/// The request body for creating a question.
///
/// Every field is optional here so that missing fields are reported as
/// unprocessable rather than as malformed JSON.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionForm {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_integer")]
    pub difficulty: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_integer")]
    pub category: Option<CategoryId>,
}

impl TryFrom<QuestionForm> for NewQuestion {
    type Error = Error;

    /// Validate a question form.
    ///
    /// # Errors
    ///
    /// Returns [Error::MissingField] if any field is missing, zero, or a string
    /// that is empty or only whitespace. Text is kept exactly as sent.
    fn try_from(form: QuestionForm) -> Result<Self, Self::Error> {
        let question = non_blank(form.question).ok_or(Error::MissingField("question"))?;
        let answer = non_blank(form.answer).ok_or(Error::MissingField("answer"))?;
        let difficulty = non_zero(form.difficulty).ok_or(Error::MissingField("difficulty"))?;
        let category = non_zero(form.category).ok_or(Error::MissingField("category"))?;

        Ok(Self {
            question,
            answer,
            category,
            difficulty,
        })
    }
}

fn non_blank(text: Option<String>) -> Option<String> {
    text.filter(|text| !text.trim().is_empty())
}

fn non_zero(number: Option<i64>) -> Option<i64> {
    number.filter(|&number| number != 0)
}

/// The response body for endpoints that return a list of questions.
#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoryMap>,
    pub current_category: Option<String>,
}
