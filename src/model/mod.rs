//! Pure data structures (rows and field payloads) served by the table layer.

pub mod carrier;
pub mod category;
pub mod product;

pub use carrier::*;
pub use category::*;
pub use product::*;
