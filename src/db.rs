//! Database initialization and sample data.

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::{
    Error,
    category::create_category_table,
    question::{create_question_table, register_search_functions},
};

/// Create the tables for the domain models if they do not already exist and
/// register the SQL functions the queries rely on.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    register_search_functions(connection)?;

    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_category_table(&transaction)?;
    create_question_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

/// The standard trivia categories as (id, type) pairs.
const SAMPLE_CATEGORIES: [(i64, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

/// Sample questions as (id, question, answer, difficulty, category).
const SAMPLE_QUESTIONS: [(i64, &str, &str, i64, i64); 19] = [
    (
        2,
        "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?",
        "Apollo 13",
        4,
        5,
    ),
    (
        4,
        "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?",
        "Tom Cruise",
        4,
        5,
    ),
    (
        5,
        "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
        "Maya Angelou",
        2,
        4,
    ),
    (
        6,
        "What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?",
        "Edward Scissorhands",
        3,
        5,
    ),
    (
        9,
        "What boxer's original name is Cassius Clay?",
        "Muhammad Ali",
        1,
        4,
    ),
    (
        10,
        "Which is the only team to play in every soccer World Cup tournament?",
        "Brazil",
        3,
        6,
    ),
    (
        11,
        "Which country won the first ever soccer World Cup in 1930?",
        "Uruguay",
        4,
        6,
    ),
    (
        12,
        "Who invented Peanut Butter?",
        "George Washington Carver",
        2,
        4,
    ),
    (
        13,
        "What is the largest lake in Africa?",
        "Lake Victoria",
        2,
        3,
    ),
    (
        14,
        "In which royal palace would you find the Hall of Mirrors?",
        "The Palace of Versailles",
        3,
        3,
    ),
    (
        15,
        "The Taj Mahal is located in which Indian city?",
        "Agra",
        2,
        3,
    ),
    (
        16,
        "Which Dutch graphic artist, initials M C, was a creator of optical illusions?",
        "Escher",
        1,
        2,
    ),
    (
        17,
        "La Giaconda is better known as what?",
        "Mona Lisa",
        3,
        2,
    ),
    (
        18,
        "How many paintings did Van Gogh sell in his lifetime?",
        "One",
        4,
        2,
    ),
    (
        19,
        "Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?",
        "Jackson Pollock",
        2,
        2,
    ),
    (
        20,
        "What is the heaviest organ in the human body?",
        "The Liver",
        4,
        1,
    ),
    (21, "Who discovered penicillin?", "Alexander Fleming", 3, 1),
    (
        22,
        "Hematology is a branch of medicine involving the study of what?",
        "Blood",
        4,
        1,
    ),
    (
        23,
        "Which dung beetle was worshipped by the ancient Egyptians?",
        "Scarab",
        4,
        4,
    ),
];

/// Populate an initialized database with the standard categories and a set
/// of sample questions.
///
/// # Errors
/// Returns an error if any of the rows already exist or there is some other SQL error.
pub fn seed_sample_data(connection: &Connection) -> Result<(), Error> {
    let transaction = connection.unchecked_transaction()?;

    for (id, category_type) in SAMPLE_CATEGORIES {
        transaction.execute(
            "INSERT INTO category (id, type) VALUES (?1, ?2)",
            (id, category_type),
        )?;
    }

    for (id, question, answer, difficulty, category) in SAMPLE_QUESTIONS {
        transaction.execute(
            "INSERT INTO question (id, question, answer, difficulty, category) \
            VALUES (?1, ?2, ?3, ?4, ?5)",
            (id, question, answer, difficulty, category),
        )?;
    }

    transaction.commit()?;

    Ok(())
}
