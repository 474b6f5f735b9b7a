//! API endpoint integration tests
//!
//! Run against a real Postgres database:
//! `TEST_DATABASE_URL=postgres://... cargo test -p jokebox-integration-tests -- --ignored`

#![allow(dead_code)]

mod auth;
mod common;
mod jokes;
mod users;
