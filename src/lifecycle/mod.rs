//! Runtime orchestration and lifecycle management.
//!
//! # Main Components
//!
//! - [`AdminSystem`] - Spins up the three table tasks, wires the product
//!   table's category context, and owns the per-resource page caches
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod admin_system;
pub mod tracing;

pub use admin_system::*;
pub use self::tracing::*;
