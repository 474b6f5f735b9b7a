//! API layer for the jokes domain

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::JokesState;
pub use routes::routes;
