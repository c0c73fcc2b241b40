//! [`TableRecord`] implementation for the Product row type.
//!
//! Products carry a reference to the `categories` table. The constraint check
//! resolves it through the [`CategoryClient`] injected as the product table's
//! context — the same role a foreign-key constraint plays on the remote
//! service, and like there, a dangling reference is reported as a write
//! failure rather than pre-checked by the caller.

use crate::clients::{CategoryClient, ResourceOps};
use crate::model::{Product, ProductFields};
use crate::store::TableRecord;
use async_trait::async_trait;

#[async_trait]
impl TableRecord for Product {
    type Id = u64;
    type Fields = ProductFields;
    type Context = CategoryClient;

    const TABLE: &'static str = "products";

    fn from_fields(id: u64, fields: ProductFields) -> Self {
        Self::new(
            id,
            fields.title,
            fields.description,
            fields.price,
            fields.image,
            fields.category_id,
        )
    }

    fn id(&self) -> &u64 {
        &self.id
    }

    fn apply(&mut self, fields: ProductFields) {
        self.title = fields.title;
        self.description = fields.description;
        self.price = fields.price;
        self.image = fields.image;
        self.category_id = fields.category_id;
    }

    /// Products list ordered by title ascending.
    fn order_key(&self) -> String {
        self.title.clone()
    }

    async fn check_constraints(&self, categories: &CategoryClient) -> Result<(), String> {
        categories
            .get_by_id(self.category_id)
            .await
            .map(|_| ())
            .map_err(|_| {
                format!(
                    "products_category_id_fkey: categoria {} não existe",
                    self.category_id
                )
            })
    }
}
