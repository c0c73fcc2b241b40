use crate::clients::ResourceOps;
use crate::model::Product;
use crate::store::TableClient;
use async_trait::async_trait;

/// Client for the `products` table.
#[derive(Clone)]
pub struct ProductClient {
    inner: TableClient<Product>,
}

impl ProductClient {
    pub fn new(inner: TableClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ResourceOps<Product> for ProductClient {
    fn table(&self) -> &TableClient<Product> {
        &self.inner
    }
}
