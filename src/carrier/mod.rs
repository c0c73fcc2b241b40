//! Carrier-specific wiring: table factory and admin-page descriptor.

pub mod entity;

use crate::clients::CarrierClient;
use crate::model::Carrier;
use crate::store::TableActor;
use crate::ui::form::FormMode;
use crate::ui::list::AdminResource;
use crate::ui::nav::Route;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

impl AdminResource for Carrier {
    const LABEL: &'static str = "Transportadoras";
    const CONFIRM_DELETE: &'static str = "Excluir Transportadora? Esta ação é irreversível.";
    const DELETED: &'static str = "Transportadora excluída";

    fn list_route() -> Route {
        Route::CarrierList
    }

    fn edit_route(entity: Self) -> Route {
        Route::CarrierForm(FormMode::Edit(entity))
    }
}

/// Creates a new carrier table and its client.
pub fn new() -> (TableActor<Carrier>, CarrierClient) {
    let carrier_id_counter = Arc::new(AtomicU64::new(1));
    let next_carrier_id = move || carrier_id_counter.fetch_add(1, Ordering::SeqCst);

    let (actor, table) = TableActor::new(32, next_carrier_id);
    let client = CarrierClient::new(table);

    (actor, client)
}
