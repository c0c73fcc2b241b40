use serde::{Deserialize, Serialize};

/// A shipping carrier row from the `carriers` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Carrier {
    pub id: u64,
    pub name: String,
}

impl Carrier {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

/// Insert/update payload for carriers. Deliberately id-less: the table assigns
/// the id on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarrierFields {
    pub name: String,
}
