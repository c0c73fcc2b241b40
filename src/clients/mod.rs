//! Type-safe resource clients over [`TableClient`](crate::store::TableClient).

pub mod carrier_client;
pub mod category_client;
pub mod product_client;
pub mod traits;

pub use carrier_client::*;
pub use category_client::*;
pub use product_client::*;
pub use traits::*;
