//! [`TableRecord`] implementation for the Category row type.

use crate::model::{Category, CategoryFields};
use crate::store::TableRecord;
use async_trait::async_trait;

#[async_trait]
impl TableRecord for Category {
    type Id = u64;
    type Fields = CategoryFields;
    type Context = ();

    const TABLE: &'static str = "categories";

    fn from_fields(id: u64, fields: CategoryFields) -> Self {
        Self::new(id, fields.name)
    }

    fn id(&self) -> &u64 {
        &self.id
    }

    fn apply(&mut self, fields: CategoryFields) {
        self.name = fields.name;
    }

    /// Categories list ordered by name ascending.
    fn order_key(&self) -> String {
        self.name.clone()
    }
}
