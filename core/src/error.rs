//! Error type for store operations.
//!
//! # Design
//! The store has exactly one way to fail: the requested id is not present.
//! Callers map it to whatever their surface needs (the server answers 404).

use thiserror::Error;

/// Errors returned by `TodoStore` lookups and mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No record is stored under this id.
    #[error("todo {0} not found")]
    NotFound(i64),
}
