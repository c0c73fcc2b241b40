//! Page controllers and the seams they talk through.
//!
//! Nothing here renders markup. Each controller is the state machine behind
//! an admin page: the list pages in [`list`], the dual-mode forms in
//! [`carrier_form`], [`category_form`] and [`product_form`], and the pure
//! pagination control in [`crate::pagination`]. Navigation, notifications,
//! confirmation prompts and the viewport are traits so tests can record them.

pub mod carrier_form;
pub mod category_form;
pub mod form;
pub mod list;
pub mod nav;
pub mod notify;
pub mod product_form;

pub use carrier_form::*;
pub use category_form::*;
pub use form::*;
pub use list::*;
pub use nav::*;
pub use notify::*;
pub use product_form::*;
