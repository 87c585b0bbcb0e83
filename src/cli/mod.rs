//! Command workflows
//!
//! Each workflow takes a plain argument struct and the loaded configuration,
//! so `main.rs` only deals with clap and presentation.

pub mod add;
pub mod query;

pub use add::{run_add, AddWorkflowArgs};
pub use query::{run_query, QueryWorkflowArgs};
