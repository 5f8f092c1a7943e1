#![allow(missing_docs)]

pub(crate) mod db;
pub(crate) mod http;

pub(crate) use db::{get_seeded_state, get_test_state, insert_category, new_question};
pub(crate) use http::{assert_error_body, get_test_server, json_body};
