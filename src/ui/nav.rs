//! Navigation seam.
//!
//! Routes mirror the admin URL surface. Form routes carry their
//! [`FormMode`] payload in memory — editing never re-fetches the entity by
//! id, the list page hands the full row over.

use crate::model::{Carrier, Category, Product};
use crate::ui::form::FormMode;
use std::sync::Mutex;
use tracing::info;

/// An admin navigation target, payload included.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    CarrierList,
    CarrierForm(FormMode<Carrier>),
    CategoryList,
    CategoryForm(FormMode<Category>),
    ProductList,
    ProductForm(FormMode<Product>),
}

impl Route {
    /// The URL this route renders as.
    pub fn path(&self) -> String {
        match self {
            Route::CarrierList => "/admin/carriers".into(),
            Route::CarrierForm(FormMode::Create) => "/admin/carriers/new".into(),
            Route::CarrierForm(FormMode::Edit(c)) => format!("/admin/carriers/edit/{}", c.id),
            Route::CategoryList => "/admin/categories".into(),
            Route::CategoryForm(FormMode::Create) => "/admin/categories/new".into(),
            Route::CategoryForm(FormMode::Edit(c)) => format!("/admin/categories/edit/{}", c.id),
            Route::ProductList => "/admin/products".into(),
            Route::ProductForm(FormMode::Create) => "/admin/products/new".into(),
            Route::ProductForm(FormMode::Edit(p)) => format!("/admin/products/edit/{}", p.id),
        }
    }
}

/// Something that can move the user to another admin page.
pub trait Navigator: Send + Sync {
    fn go(&self, route: Route);
}

/// Production navigator: logs the transition.
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn go(&self, route: Route) {
        info!(path = %route.path(), "navigate");
    }
}

/// Recording navigator for tests.
#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every navigation so far, oldest first.
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }

    /// The most recent navigation, if any.
    pub fn last(&self) -> Option<Route> {
        self.routes.lock().unwrap().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn go(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_render_the_admin_paths() {
        assert_eq!(Route::CarrierList.path(), "/admin/carriers");
        assert_eq!(
            Route::CarrierForm(FormMode::Create).path(),
            "/admin/carriers/new"
        );
        assert_eq!(
            Route::CarrierForm(FormMode::Edit(Carrier::new(5, "Loggi"))).path(),
            "/admin/carriers/edit/5"
        );
        assert_eq!(
            Route::ProductForm(FormMode::Create).path(),
            "/admin/products/new"
        );
    }
}
