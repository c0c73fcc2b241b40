//! Generic table service: the opaque remote collaborator behind every
//! resource.
//!
//! # Main Components
//!
//! - [`TableRecord`] - Trait that row types implement to be served by a table
//! - [`TableActor`] - Generic task owning one table's rows
//! - [`TableClient`] - Cloneable handle for queries and mutations
//! - [`StoreError`] - Common error type; `Remote` carries messages verbatim
//!
//! # Testing
//!
//! See [`mock`] for expectation-based and raw-channel test doubles.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
