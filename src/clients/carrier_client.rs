use crate::clients::ResourceOps;
use crate::model::Carrier;
use crate::store::TableClient;
use async_trait::async_trait;

/// Client for the `carriers` table.
#[derive(Clone)]
pub struct CarrierClient {
    inner: TableClient<Carrier>,
}

impl CarrierClient {
    pub fn new(inner: TableClient<Carrier>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ResourceOps<Carrier> for CarrierClient {
    fn table(&self) -> &TableClient<Carrier> {
        &self.inner
    }
}
