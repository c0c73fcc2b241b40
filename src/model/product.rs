use serde::{Deserialize, Serialize};

/// A product row from the `products` table.
///
/// `category_id` references a row of the `categories` table; the reference is
/// enforced by the product table's constraint check, not by the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub category_id: u64,
}

impl Product {
    pub fn new(
        id: u64,
        title: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        image: impl Into<String>,
        category_id: u64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            price,
            image: image.into(),
            category_id,
        }
    }
}

/// Insert/update payload for products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFields {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub category_id: u64,
}
