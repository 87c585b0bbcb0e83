//! Release Query Engine
//!
//! Loads the store through [`crate::store::aggregator`], selects records with
//! [`resolver`] and shapes them with [`assembler`].

pub mod assembler;
pub mod querier;
pub mod resolver;

pub use assembler::{PrereleaseQueryItem, ReleaseQueryItem};
pub use querier::ReleaseQuerier;
