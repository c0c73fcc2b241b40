use crate::pagination::{page_window, total_pages, PageResult};
use crate::store::{StoreError, TableClient, TableRecord};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard operations.
///
/// Every resource page needs the same six operations, so they are written
/// once here over the underlying [`TableClient`]. Errors from the table are
/// surfaced unmodified — no retry, no translation.
#[async_trait]
pub trait ResourceOps<T: TableRecord>: Send + Sync {
    /// Access the inner table client.
    fn table(&self) -> &TableClient<T>;

    /// Fetch one page of rows plus the derived page count.
    ///
    /// Requests exactly the zero-based inclusive window
    /// `[(page-1)*page_size, page*page_size - 1]` together with the exact
    /// total row count, and derives `total_pages = ceil(total / page_size)`.
    #[tracing::instrument(skip(self))]
    async fn list_by_page(&self, page: u32, page_size: u32) -> Result<PageResult<T>, StoreError> {
        tracing::debug!("Sending request");
        let (from, to) = page_window(page, page_size);
        let (items, total) = self.table().select_range(from, to).await?;
        Ok(PageResult {
            items,
            total,
            total_pages: total_pages(total, page_size),
        })
    }

    /// Fetch every row of the table.
    #[tracing::instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<T>, StoreError> {
        tracing::debug!("Sending request");
        self.table().select_all().await
    }

    /// Fetch a single row by id.
    #[tracing::instrument(skip(self))]
    async fn get_by_id(&self, id: T::Id) -> Result<T, StoreError> {
        tracing::debug!("Sending request");
        self.table().select_by_id(id).await
    }

    /// Insert a new row; the table assigns the id.
    #[tracing::instrument(skip(self, fields))]
    async fn create(&self, fields: T::Fields) -> Result<T, StoreError> {
        tracing::debug!("Sending request");
        self.table().insert(fields).await
    }

    /// Overwrite an existing row's fields by id.
    #[tracing::instrument(skip(self, fields))]
    async fn update(&self, id: T::Id, fields: T::Fields) -> Result<T, StoreError> {
        tracing::debug!("Sending request");
        self.table().update(id, fields).await
    }

    /// Delete a row by id.
    #[tracing::instrument(skip(self))]
    async fn remove(&self, id: T::Id) -> Result<bool, StoreError> {
        tracing::debug!("Sending request");
        self.table().delete(id).await
    }
}
