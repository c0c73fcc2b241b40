//! Category-specific wiring: table factory and admin-page descriptor.

pub mod entity;

use crate::clients::CategoryClient;
use crate::model::Category;
use crate::store::TableActor;
use crate::ui::form::FormMode;
use crate::ui::list::AdminResource;
use crate::ui::nav::Route;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

impl AdminResource for Category {
    const LABEL: &'static str = "Categorias";
    const CONFIRM_DELETE: &'static str = "Excluir Categoria? Esta ação é irreversível.";
    const DELETED: &'static str = "Categoria excluída";

    fn list_route() -> Route {
        Route::CategoryList
    }

    fn edit_route(entity: Self) -> Route {
        Route::CategoryForm(FormMode::Edit(entity))
    }
}

/// Creates a new category table and its client.
pub fn new() -> (TableActor<Category>, CategoryClient) {
    let category_id_counter = Arc::new(AtomicU64::new(1));
    let next_category_id = move || category_id_counter.fetch_add(1, Ordering::SeqCst);

    let (actor, table) = TableActor::new(32, next_category_id);
    let client = CategoryClient::new(table);

    (actor, client)
}
