pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod query;
pub mod store;
pub mod ui;

pub use error::{ChangesError, Result};
