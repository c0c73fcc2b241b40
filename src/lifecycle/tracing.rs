//! # Observability & Tracing
//!
//! Structured logging for the whole backoffice: table tasks log per
//! operation with the table name as a field, clients instrument their
//! requests, and notifications/navigations show up as log lines in headless
//! runs.
//!
//! Levels are controlled through `RUST_LOG`:
//!
//! ```bash
//! # Compact operation log
//! RUST_LOG=info cargo test
//!
//! # Full payloads (field structs, windows) at request time
//! RUST_LOG=debug cargo test
//!
//! # Filter to the table layer only
//! RUST_LOG=backoffice::store=debug cargo test
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - the table field carries the context
        .compact()
        .init();
}
