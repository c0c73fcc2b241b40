//! Carrier create/edit form controller.

use crate::cache::PageCache;
use crate::clients::{CarrierClient, ResourceOps};
use crate::model::{Carrier, CarrierFields};
use crate::ui::form::{FieldErrors, FormMode};
use crate::ui::nav::{Navigator, Route};
use crate::ui::notify::Notifier;

/// Dual-mode form for a carrier. `Edit` seeds the name from the navigation
/// payload; `Create` starts empty.
pub struct CarrierForm {
    mode: FormMode<Carrier>,
    name: String,
    errors: FieldErrors,
}

impl CarrierForm {
    pub fn new(mode: FormMode<Carrier>) -> Self {
        let name = match &mode {
            FormMode::Edit(carrier) => carrier.name.clone(),
            FormMode::Create => String::new(),
        };
        Self {
            mode,
            name,
            errors: FieldErrors::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Editing a field clears only that field's error.
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
        self.errors.clear("name");
    }

    /// Synchronous validation; populates the field error map.
    pub fn validate(&mut self) -> bool {
        if self.name.trim().is_empty() {
            self.errors
                .set("name", "O nome da transportadora é obrigatório");
        }
        self.errors.is_empty()
    }

    /// Validated submit. Create inserts (no id in the payload), edit updates
    /// by the payload entity's id. Success invalidates the carrier cache,
    /// notifies and navigates back to the list; failure notifies and keeps
    /// the typed input.
    pub async fn submit(
        &mut self,
        client: &CarrierClient,
        cache: &PageCache<Carrier>,
        notifier: &dyn Notifier,
        navigator: &dyn Navigator,
    ) -> bool {
        if !self.validate() {
            return false;
        }

        let fields = CarrierFields { name: self.name.clone() };
        let result = match &self.mode {
            FormMode::Edit(carrier) => client.update(carrier.id, fields).await,
            FormMode::Create => client.create(fields).await,
        };

        match result {
            Ok(_) => {
                cache.invalidate();
                notifier.success(if self.mode.is_edit() {
                    "Transportadora atualizada com sucesso!"
                } else {
                    "Transportadora criada com sucesso!"
                });
                navigator.go(Route::CarrierList);
                true
            }
            Err(e) => {
                notifier.error(&if self.mode.is_edit() {
                    format!("Erro ao atualizar transportadora: {}", e)
                } else {
                    format!("Erro ao criar transportadora: {}", e)
                });
                false
            }
        }
    }
}
