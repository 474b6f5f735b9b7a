pub mod jokes;
