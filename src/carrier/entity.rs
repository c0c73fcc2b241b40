//! [`TableRecord`] implementation for the Carrier row type.
//!
//! This is what lets the generic [`crate::store::TableActor`] serve the
//! `carriers` table.

use crate::model::{Carrier, CarrierFields};
use crate::store::TableRecord;
use async_trait::async_trait;

#[async_trait]
impl TableRecord for Carrier {
    type Id = u64;
    type Fields = CarrierFields;
    type Context = ();

    const TABLE: &'static str = "carriers";

    fn from_fields(id: u64, fields: CarrierFields) -> Self {
        Self::new(id, fields.name)
    }

    fn id(&self) -> &u64 {
        &self.id
    }

    fn apply(&mut self, fields: CarrierFields) {
        self.name = fields.name;
    }

    /// Carriers list ordered by name ascending.
    fn order_key(&self) -> String {
        self.name.clone()
    }
}
