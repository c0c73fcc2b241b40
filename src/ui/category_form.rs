//! Category create/edit form controller.
//!
//! The single field is `name` — the entity has no `title`.

use crate::cache::PageCache;
use crate::clients::{CategoryClient, ResourceOps};
use crate::model::{Category, CategoryFields};
use crate::ui::form::{FieldErrors, FormMode};
use crate::ui::nav::{Navigator, Route};
use crate::ui::notify::Notifier;

/// Dual-mode form for a category.
pub struct CategoryForm {
    mode: FormMode<Category>,
    name: String,
    errors: FieldErrors,
}

impl CategoryForm {
    pub fn new(mode: FormMode<Category>) -> Self {
        let name = match &mode {
            FormMode::Edit(category) => category.name.clone(),
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
            self.errors.set("name", "O nome da categoria é obrigatório");
        }
        self.errors.is_empty()
    }

    /// Validated submit; see [`CarrierForm::submit`](crate::ui::carrier_form::CarrierForm::submit)
    /// for the shared success/failure contract.
    pub async fn submit(
        &mut self,
        client: &CategoryClient,
        cache: &PageCache<Category>,
        notifier: &dyn Notifier,
        navigator: &dyn Navigator,
    ) -> bool {
        if !self.validate() {
            return false;
        }

        let fields = CategoryFields { name: self.name.clone() };
        let result = match &self.mode {
            FormMode::Edit(category) => client.update(category.id, fields).await,
            FormMode::Create => client.create(fields).await,
        };

        match result {
            Ok(_) => {
                cache.invalidate();
                notifier.success(if self.mode.is_edit() {
                    "Categoria atualizada com sucesso!"
                } else {
                    "Categoria criada com sucesso!"
                });
                navigator.go(Route::CategoryList);
                true
            }
            Err(e) => {
                notifier.error(&if self.mode.is_edit() {
                    format!("Erro ao atualizar categoria: {}", e)
                } else {
                    format!("Erro ao criar categoria: {}", e)
                });
                false
            }
        }
    }
}
