//! Product-specific wiring: table factory and admin-page descriptor.

pub mod entity;

use crate::clients::ProductClient;
use crate::model::Product;
use crate::store::TableActor;
use crate::ui::form::FormMode;
use crate::ui::list::AdminResource;
use crate::ui::nav::Route;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

impl AdminResource for Product {
    const LABEL: &'static str = "Produtos";
    const CONFIRM_DELETE: &'static str = "Excluir Produto? Esta ação é irreversível.";
    const DELETED: &'static str = "Produto excluído";

    fn list_route() -> Route {
        Route::ProductList
    }

    fn edit_route(entity: Self) -> Route {
        Route::ProductForm(FormMode::Edit(entity))
    }
}

/// Creates a new product table and its client.
///
/// The returned actor expects a [`CategoryClient`](crate::clients::CategoryClient)
/// as its run context, so the table can enforce the `category_id` reference.
pub fn new() -> (TableActor<Product>, ProductClient) {
    let product_id_counter = Arc::new(AtomicU64::new(1));
    let next_product_id = move || product_id_counter.fetch_add(1, Ordering::SeqCst);

    let (actor, table) = TableActor::new(32, next_product_id);
    let client = ProductClient::new(table);

    (actor, client)
}
