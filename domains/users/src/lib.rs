//! Users domain: registration, login, profile management

pub mod api;
pub mod domain;
pub mod repository;

pub use domain::entities::*;
pub use repository::{delete_jokes_by_author_tx, delete_user_tx, UserRepository, UsersRepositories};

pub use api::routes;
pub use api::UsersState;
