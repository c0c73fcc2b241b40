//! # Mock Table
//!
//! Utilities for testing resource clients and page controllers in isolation.
//!
//! Use [`MockTable`] for expectation-based tests: queue responses with
//! `expect_*().return_ok(..)`, then call [`MockTable::verify`] to assert every
//! expectation was consumed (and, by extension, that each operation was issued
//! exactly once).
//!
//! Use [`create_raw_table`] when a test must prove that *no* request reached
//! the table at all (e.g., a validation failure blocking submit).

use crate::store::{StoreError, TableClient, TableRecord, TableRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the canned response to hand back.
enum Expectation<T: TableRecord> {
    SelectRange {
        response: Result<(Vec<T>, usize), StoreError>,
    },
    SelectAll {
        response: Result<Vec<T>, StoreError>,
    },
    SelectById {
        response: Result<T, StoreError>,
    },
    Insert {
        response: Result<T, StoreError>,
    },
    Update {
        response: Result<T, StoreError>,
    },
    Delete {
        response: Result<bool, StoreError>,
    },
}

/// A mock table with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockTable::<Carrier>::new();
/// mock.expect_select_range().return_ok((rows, 12));
/// mock.expect_delete().return_ok(true);
///
/// let client = mock.client();
/// // Drive the code under test...
/// mock.verify(); // Ensures all expectations were consumed
/// ```
pub struct MockTable<T: TableRecord> {
    client: TableClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: TableRecord> MockTable<T> {
    /// Creates a new mock table with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<TableRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Background task matches each incoming request against the queue.
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut exps = expectations_clone.lock().unwrap();
                let expectation = exps.pop_front();
                drop(exps);

                match (request, expectation) {
                    (
                        TableRequest::SelectRange { respond_to, .. },
                        Some(Expectation::SelectRange { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        TableRequest::SelectAll { respond_to },
                        Some(Expectation::SelectAll { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        TableRequest::SelectById { respond_to, .. },
                        Some(Expectation::SelectById { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        TableRequest::Insert { respond_to, .. },
                        Some(Expectation::Insert { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        TableRequest::Update { respond_to, .. },
                        Some(Expectation::Update { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        TableRequest::Delete { respond_to, .. },
                        Some(Expectation::Delete { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: TableClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> TableClient<T> {
        self.client.clone()
    }

    /// Expects a `select_range` operation.
    pub fn expect_select_range(&mut self) -> ExpectationBuilder<T, (Vec<T>, usize)> {
        ExpectationBuilder::new(self.expectations.clone(), Expectation::select_range)
    }

    /// Expects a `select_all` operation.
    pub fn expect_select_all(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(self.expectations.clone(), Expectation::select_all)
    }

    /// Expects a `select_by_id` operation.
    pub fn expect_select_by_id(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), Expectation::select_by_id)
    }

    /// Expects an `insert` operation.
    pub fn expect_insert(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), Expectation::insert)
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), Expectation::update)
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self) -> ExpectationBuilder<T, bool> {
        ExpectationBuilder::new(self.expectations.clone(), Expectation::delete)
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl<T: TableRecord> Default for MockTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TableRecord> Expectation<T> {
    fn select_range(response: Result<(Vec<T>, usize), StoreError>) -> Self {
        Expectation::SelectRange { response }
    }
    fn select_all(response: Result<Vec<T>, StoreError>) -> Self {
        Expectation::SelectAll { response }
    }
    fn select_by_id(response: Result<T, StoreError>) -> Self {
        Expectation::SelectById { response }
    }
    fn insert(response: Result<T, StoreError>) -> Self {
        Expectation::Insert { response }
    }
    fn update(response: Result<T, StoreError>) -> Self {
        Expectation::Update { response }
    }
    fn delete(response: Result<bool, StoreError>) -> Self {
        Expectation::Delete { response }
    }
}

/// Builder shared by every expectation kind; `V` is the operation's success
/// value.
pub struct ExpectationBuilder<T: TableRecord, V> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    wrap: fn(Result<V, StoreError>) -> Expectation<T>,
}

impl<T: TableRecord, V> ExpectationBuilder<T, V> {
    fn new(
        expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
        wrap: fn(Result<V, StoreError>) -> Expectation<T>,
    ) -> Self {
        Self { expectations, wrap }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: V) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back((self.wrap)(Ok(value)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back((self.wrap)(Err(error)));
    }
}

// =============================================================================
// RAW CHANNEL HELPER
// =============================================================================

/// Creates a client and the raw request receiver.
///
/// # Testing Strategy
/// Some tests need to assert the *absence* of traffic — a rejected form must
/// issue no network call. With the raw receiver the test can simply check
/// `try_recv()` after driving the code under test.
pub fn create_raw_table<T: TableRecord>(
    buffer_size: usize,
) -> (TableClient<T>, mpsc::Receiver<TableRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (TableClient::new(sender), receiver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Carrier, CarrierFields};

    #[tokio::test]
    async fn test_mock_table_with_expectations() {
        let mut mock = MockTable::<Carrier>::new();

        mock.expect_insert()
            .return_ok(Carrier::new(1, "Loggi"));
        mock.expect_select_by_id()
            .return_ok(Carrier::new(1, "Loggi"));

        let client = mock.client();

        let created = client
            .insert(CarrierFields { name: "Loggi".into() })
            .await
            .unwrap();
        assert_eq!(created.id, 1);

        let fetched = client.select_by_id(1).await.unwrap();
        assert_eq!(fetched.name, "Loggi");

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_table_returns_errors_verbatim() {
        let mut mock = MockTable::<Carrier>::new();
        mock.expect_select_range()
            .return_err(StoreError::Remote("network error".into()));

        let client = mock.client();
        let err = client.select_range(0, 7).await.unwrap_err();
        assert_eq!(err.to_string(), "network error");

        mock.verify();
    }

    #[tokio::test]
    async fn test_raw_table_sees_no_traffic() {
        let (_client, mut receiver) = create_raw_table::<Carrier>(10);
        assert!(receiver.try_recv().is_err());
    }
}
