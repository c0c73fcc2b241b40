use crate::clients::ResourceOps;
use crate::model::Category;
use crate::store::TableClient;
use async_trait::async_trait;

/// Client for the `categories` table.
///
/// Besides backing the category admin pages, a clone of this client is
/// injected into the product table as its constraint context, so product
/// writes can resolve their `category_id` reference.
#[derive(Clone)]
pub struct CategoryClient {
    inner: TableClient<Category>,
}

impl CategoryClient {
    pub fn new(inner: TableClient<Category>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ResourceOps<Category> for CategoryClient {
    fn table(&self) -> &TableClient<Category> {
        &self.inner
    }
}
