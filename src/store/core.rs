//! # Core Table Service
//!
//! This module defines the generic building blocks for the remote table layer.
//!
//! ## Key Types
//!
//! - [`TableRecord`]: The trait that all row types must implement.
//! - [`TableActor`]: The generic task that serves one table.
//! - [`TableClient`]: The generic client for querying and mutating a table.
//! - [`StoreError`]: Common errors (e.g., TableClosed, NotFound).

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use async_trait::async_trait;

// =============================================================================
// 1. THE ABSTRACTION (Row contract)
// =============================================================================

/// Trait that any row type must implement to be served by a [`TableActor`].
///
/// # Architecture Note
/// By defining one contract (`TableRecord`) that all our row types (Carrier,
/// Category, Product) satisfy, the table-serving loop is written *once* and
/// reused for every resource. The associated types keep the operations
/// type-safe: a `Carrier` table only accepts `CarrierFields`, and the compiler
/// rejects a `ProductFields` payload at the call site.
///
/// # Fields vs. Rows
/// `Fields` is deliberately id-less. The table assigns the id on insert, so a
/// "create" can never smuggle an id in its payload.
///
/// # Context
/// `Context` carries collaborator handles injected into [`TableActor::run`].
/// The [`TableRecord::check_constraints`] hook receives it and stands in for
/// the remote service's row constraints (the products table resolves its
/// `category_id` through a category client held in its context). Use `()`
/// when a table has no constraints to check.
#[async_trait]
pub trait TableRecord: Clone + Send + Sync + 'static {
    /// The unique identifier for this row, assigned by the table.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug;

    /// The id-less payload used for both inserts and updates.
    type Fields: Clone + Send + Sync + Debug;

    /// Collaborator handles injected into the serving task.
    type Context: Send + Sync;

    /// Remote table name, carried as a structured logging field.
    const TABLE: &'static str;

    /// Construct the full row from the assigned id and the payload.
    fn from_fields(id: Self::Id, fields: Self::Fields) -> Self;

    /// The row's id.
    fn id(&self) -> &Self::Id;

    /// Overwrite the row's fields in place (update-by-id semantics).
    fn apply(&mut self, fields: Self::Fields);

    /// Key used to order `SelectRange` and `SelectAll` results, ascending.
    fn order_key(&self) -> String;

    /// Row constraint check run before an insert or update commits.
    ///
    /// A failure is surfaced to the caller as [`StoreError::Remote`], exactly
    /// like a constraint violation reported by a remote database.
    async fn check_constraints(&self, _ctx: &Self::Context) -> Result<(), String> {
        Ok(())
    }
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the table layer.
///
/// `Remote` displays its message verbatim: remote failures are propagated to
/// the caller unmodified, never translated.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum StoreError {
    #[error("table closed")]
    TableClosed,
    #[error("table dropped response channel")]
    TableDropped,
    #[error("row not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Remote(String),
}

/// Type alias for the one-shot response channel used by table tasks.
pub type Response<V> = oneshot::Sender<Result<V, StoreError>>;

/// Internal message type sent to a table task to request operations.
///
/// # Resource-Oriented Architecture
/// Each table task serves a single resource through a fixed set of
/// query/mutation operations — the same small surface the admin pages need:
///
/// - **SelectRange**: one page of rows (inclusive window) plus the exact
///   total row count, ordered by [`TableRecord::order_key`].
/// - **SelectAll**: every row, same ordering.
/// - **SelectById**: a single row, [`StoreError::NotFound`] when absent.
/// - **Insert**: assigns the next id and commits the payload.
/// - **Update**: overwrites the row's fields by id.
/// - **Delete**: delete-by-filter semantics; an absent id is not an error.
#[derive(Debug)]
pub enum TableRequest<T: TableRecord> {
    SelectRange {
        from: usize,
        to: usize,
        respond_to: Response<(Vec<T>, usize)>,
    },
    SelectAll {
        respond_to: Response<Vec<T>>,
    },
    SelectById {
        id: T::Id,
        respond_to: Response<T>,
    },
    Insert {
        fields: T::Fields,
        respond_to: Response<T>,
    },
    Update {
        id: T::Id,
        fields: T::Fields,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<bool>,
    },
}

// =============================================================================
// 3. THE GENERIC TABLE SERVER
// =============================================================================

/// The generic task that owns one table's rows and serves requests for them.
///
/// # Concurrency Model
/// Each `TableActor` processes its messages *sequentially* in a loop, so the
/// row map needs no `Mutex`. Callers suspend on a one-shot response channel;
/// from their point of view every operation is a single async round trip, the
/// same shape as a remote query.
pub struct TableActor<T: TableRecord> {
    receiver: mpsc::Receiver<TableRequest<T>>,
    rows: HashMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: TableRecord> TableActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, TableClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            rows: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = TableClient::new(sender);
        (actor, client)
    }

    /// Rows ordered by `(order_key, id)` — the id tiebreak keeps paging stable
    /// when two rows share a key.
    fn sorted_rows(&self) -> Vec<T> {
        let mut all: Vec<T> = self.rows.values().cloned().collect();
        all.sort_by(|a, b| {
            a.order_key()
                .cmp(&b.order_key())
                .then_with(|| a.id().cmp(b.id()))
        });
        all
    }

    /// Runs the table's event loop, processing requests until the channel
    /// closes.
    ///
    /// # Context Injection
    /// The `context` argument is passed to [`TableRecord::check_constraints`]
    /// on every write. This lets a table resolve cross-table constraints
    /// through clients created *after* the table was instantiated but
    /// *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        let table = T::TABLE;
        info!(table, "Table started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                TableRequest::SelectRange { from, to, respond_to } => {
                    let all = self.sorted_rows();
                    let total = all.len();
                    let window = if from >= total {
                        Vec::new()
                    } else {
                        all[from..=to.min(total - 1)].to_vec()
                    };
                    debug!(table, from, to, total, rows = window.len(), "SelectRange");
                    let _ = respond_to.send(Ok((window, total)));
                }
                TableRequest::SelectAll { respond_to } => {
                    let all = self.sorted_rows();
                    debug!(table, rows = all.len(), "SelectAll");
                    let _ = respond_to.send(Ok(all));
                }
                TableRequest::SelectById { id, respond_to } => {
                    let row = self.rows.get(&id).cloned();
                    let found = row.is_some();
                    debug!(table, %id, found, "SelectById");
                    let _ = respond_to
                        .send(row.ok_or_else(|| StoreError::NotFound(id.to_string())));
                }
                TableRequest::Insert { fields, respond_to } => {
                    debug!(table, ?fields, "Insert");
                    let id = (self.next_id_fn)();
                    let row = T::from_fields(id.clone(), fields);
                    if let Err(e) = row.check_constraints(&context).await {
                        warn!(table, %id, error = %e, "Insert rejected");
                        let _ = respond_to.send(Err(StoreError::Remote(e)));
                        continue;
                    }
                    self.rows.insert(id.clone(), row.clone());
                    info!(table, %id, size = self.rows.len(), "Inserted");
                    let _ = respond_to.send(Ok(row));
                }
                TableRequest::Update { id, fields, respond_to } => {
                    debug!(table, %id, ?fields, "Update");
                    match self.rows.get(&id) {
                        Some(existing) => {
                            let mut row = existing.clone();
                            row.apply(fields);
                            if let Err(e) = row.check_constraints(&context).await {
                                warn!(table, %id, error = %e, "Update rejected");
                                let _ = respond_to.send(Err(StoreError::Remote(e)));
                                continue;
                            }
                            self.rows.insert(id.clone(), row.clone());
                            info!(table, %id, "Updated");
                            let _ = respond_to.send(Ok(row));
                        }
                        None => {
                            warn!(table, %id, "Not found");
                            let _ = respond_to
                                .send(Err(StoreError::NotFound(id.to_string())));
                        }
                    }
                }
                TableRequest::Delete { id, respond_to } => {
                    // Delete-by-filter: removing an absent id is still a success.
                    let existed = self.rows.remove(&id).is_some();
                    info!(table, %id, existed, size = self.rows.len(), "Deleted");
                    let _ = respond_to.send(Ok(true));
                }
            }
        }

        info!(table, size = self.rows.len(), "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for querying and mutating one [`TableActor`].
///
/// Every call is a suspend point: the request is sent with a one-shot
/// responder and the caller resumes when the table replies.
#[derive(Clone)]
pub struct TableClient<T: TableRecord> {
    sender: mpsc::Sender<TableRequest<T>>,
}

impl<T: TableRecord> TableClient<T> {
    pub fn new(sender: mpsc::Sender<TableRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn select_range(&self, from: usize, to: usize) -> Result<(Vec<T>, usize), StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(TableRequest::SelectRange { from, to, respond_to })
            .await
            .map_err(|_| StoreError::TableClosed)?;
        response.await.map_err(|_| StoreError::TableDropped)?
    }

    pub async fn select_all(&self) -> Result<Vec<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(TableRequest::SelectAll { respond_to })
            .await
            .map_err(|_| StoreError::TableClosed)?;
        response.await.map_err(|_| StoreError::TableDropped)?
    }

    pub async fn select_by_id(&self, id: T::Id) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(TableRequest::SelectById { id, respond_to })
            .await
            .map_err(|_| StoreError::TableClosed)?;
        response.await.map_err(|_| StoreError::TableDropped)?
    }

    pub async fn insert(&self, fields: T::Fields) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(TableRequest::Insert { fields, respond_to })
            .await
            .map_err(|_| StoreError::TableClosed)?;
        response.await.map_err(|_| StoreError::TableDropped)?
    }

    pub async fn update(&self, id: T::Id, fields: T::Fields) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(TableRequest::Update { id, fields, respond_to })
            .await
            .map_err(|_| StoreError::TableClosed)?;
        response.await.map_err(|_| StoreError::TableDropped)?
    }

    pub async fn delete(&self, id: T::Id) -> Result<bool, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(TableRequest::Delete { id, respond_to })
            .await
            .map_err(|_| StoreError::TableClosed)?;
        response.await.map_err(|_| StoreError::TableDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
