//! # Backoffice
//!
//! > **A resource-oriented admin backoffice engine built on Tokio.**
//!
//! Three admin resources — carriers, categories, products — each driven by
//! the same paginated CRUD controller pattern: fetch one page of rows,
//! mutate through a typed client, invalidate the page cache, notify, and
//! navigate. The remote table service is an opaque collaborator reached only
//! through a small query/mutation interface.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One pattern, three resources
//! Every admin page here is an instance of the same controller. The generic
//! pieces — table serving, resource operations, page cache, list state
//! machine — are written once; the per-resource modules only supply field
//! shapes, labels and routes.
//!
//! ### Tables as tasks
//! Each table runs as its own Tokio task processing requests sequentially
//! (no locks around the rows). Callers suspend on a one-shot response
//! channel, so every operation reads like a remote round trip — which is the
//! contract the real remote service imposes anyway.
//!
//! ### Explicit cache, explicit invalidation
//! The page cache is an object passed to the components that use it, keyed
//! per resource and page. Mutations never update the list optimistically:
//! they invalidate, and the next read re-fetches. A second reader of an
//! in-flight page joins the pending fetch instead of duplicating it — the
//! system's only concurrency-control guarantee.
//!
//! ### Errors stay verbatim
//! Remote failures travel unmodified: a list fetch failure replaces the
//! table view, a mutation failure becomes exactly one error notification.
//! Validation failures never leave the form's field error map.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`store`])
//! The generic table service: [`TableRecord`](store::TableRecord),
//! [`TableActor`](store::TableActor), [`TableClient`](store::TableClient),
//! plus the mock tooling tests build on.
//!
//! ### 2. The Interface ([`clients`])
//! Typed per-table clients with the standard six operations
//! ([`ResourceOps`](clients::ResourceOps)): paged list, full list, get by
//! id, create, update, remove.
//!
//! ### 3. The Coordinator ([`cache`], [`pagination`])
//! [`PageCache`](cache::PageCache) with get-or-fetch/invalidate, and the
//! pure page math and pagination control.
//!
//! ### 4. The Pages ([`ui`])
//! The list controller, the dual-mode form controllers, and the navigation,
//! notification, confirmation and viewport seams.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`AdminSystem`](lifecycle::AdminSystem) wires everything up and shuts it
//! down; [`setup_tracing`](lifecycle::setup_tracing) configures logging.
//!
//! ### 6. The Implementation ([`carrier`], [`category`], [`product`], [`model`])
//! The concrete rows, field payloads and per-resource wiring.
//!
//! ## 🚀 Running Tests
//!
//! ```bash
//! RUST_LOG=info cargo test
//! ```

pub mod cache;
pub mod carrier;
pub mod category;
pub mod clients;
pub mod lifecycle;
pub mod model;
pub mod pagination;
pub mod product;
pub mod store;
pub mod ui;
