//! Domain core for the todo service.
//!
//! # Overview
//! Holds the record type, the request payload shape and the in-memory
//! store. Nothing here touches the network, a lock or an async runtime; the
//! server crate wraps a single `TodoStore` in a lock and owns all I/O.
//!
//! # Design
//! - `TodoStore` is a plain value with `&mut self` mutations, so tests build
//!   a fresh one per case and concurrency is entirely the caller's concern.
//! - Ids are assigned from a counter that only ever moves forward; deleted
//!   ids are never handed out again.

pub mod error;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::TodoStore;
pub use types::{Todo, TodoPayload};
