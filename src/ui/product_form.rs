//! Product create/edit form controller.
//!
//! The richest of the three forms: five fields, a category select fed eagerly
//! from the category resource, and an image URL preview with a placeholder
//! fallback. The price field holds the raw typed string and is parsed once at
//! validation — exactly what a numeric text input does.

use crate::cache::PageCache;
use crate::clients::{CategoryClient, ProductClient, ResourceOps};
use crate::model::{Category, Product, ProductFields};
use crate::ui::form::{FieldErrors, FormMode};
use crate::ui::nav::{Navigator, Route};
use crate::ui::notify::Notifier;

/// Substituted for the typed URL when the image does not load.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/400x300?text=Imagem+Inválida";

/// Options for the category select.
///
/// `Loading` until the eager `list_all` fetch resolves; the select stays
/// disabled meanwhile.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryOptions {
    Loading,
    Ready(Vec<Category>),
}

impl CategoryOptions {
    pub fn is_loading(&self) -> bool {
        matches!(self, CategoryOptions::Loading)
    }
}

/// What the image preview shows for the current URL.
#[derive(Debug, Clone, PartialEq)]
pub enum ImagePreview {
    Image(String),
    Placeholder,
}

impl ImagePreview {
    /// The URL the preview actually renders.
    pub fn url(&self) -> &str {
        match self {
            ImagePreview::Image(url) => url,
            ImagePreview::Placeholder => PLACEHOLDER_IMAGE,
        }
    }
}

/// Answers whether an image URL actually loads. Preview-only: a failing URL
/// never blocks submission.
pub trait ImageProbe {
    fn loads(&self, url: &str) -> bool;
}

/// Dual-mode form for a product. `Edit` seeds every field from the navigation
/// payload; no fetch is issued for the product itself.
pub struct ProductForm {
    mode: FormMode<Product>,
    title: String,
    description: String,
    price: String,
    image: String,
    category_id: Option<u64>,
    categories: CategoryOptions,
    errors: FieldErrors,
}

impl ProductForm {
    pub fn new(mode: FormMode<Product>) -> Self {
        let (title, description, price, image, category_id) = match &mode {
            FormMode::Edit(product) => (
                product.title.clone(),
                product.description.clone(),
                product.price.to_string(),
                product.image.clone(),
                Some(product.category_id),
            ),
            FormMode::Create => Default::default(),
        };
        Self {
            mode,
            title,
            description,
            price,
            image,
            category_id,
            categories: CategoryOptions::Loading,
            errors: FieldErrors::default(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn category_id(&self) -> Option<u64> {
        self.category_id
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn categories(&self) -> &CategoryOptions {
        &self.categories
    }

    /// The select stays disabled until the category options arrive.
    pub fn category_select_disabled(&self) -> bool {
        self.categories.is_loading()
    }

    /// Eagerly fetch the category options via the category resource's
    /// list-all operation. A failure empties the select and reports an error
    /// notification, but the form stays usable.
    pub async fn load_categories(&mut self, client: &CategoryClient, notifier: &dyn Notifier) {
        match client.list_all().await {
            Ok(list) => self.categories = CategoryOptions::Ready(list),
            Err(e) => {
                self.categories = CategoryOptions::Ready(Vec::new());
                notifier.error(&format!("Erro ao carregar categorias: {}", e));
            }
        }
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
        self.errors.clear("title");
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
        self.errors.clear("description");
    }

    pub fn set_price(&mut self, value: impl Into<String>) {
        self.price = value.into();
        self.errors.clear("price");
    }

    pub fn set_image(&mut self, value: impl Into<String>) {
        self.image = value.into();
        self.errors.clear("image");
    }

    pub fn set_category(&mut self, id: u64) {
        self.category_id = Some(id);
        self.errors.clear("category_id");
    }

    /// Live preview for the typed URL: `None` while the field is empty, the
    /// placeholder graphic when the URL fails to load.
    pub fn preview(&self, probe: &dyn ImageProbe) -> Option<ImagePreview> {
        if self.image.is_empty() {
            return None;
        }
        if probe.loads(&self.image) {
            Some(ImagePreview::Image(self.image.clone()))
        } else {
            Some(ImagePreview::Placeholder)
        }
    }

    /// Synchronous validation; populates the field error map. Required
    /// fields, a positive numeric price, and a selected category.
    pub fn validate(&mut self) -> bool {
        if self.title.trim().is_empty() {
            self.errors.set("title", "O título é obrigatório");
        }
        if self.description.trim().is_empty() {
            self.errors.set("description", "A descrição é obrigatória");
        }
        if self.price.trim().is_empty() {
            self.errors.set("price", "O preço é obrigatório");
        } else {
            match self.price.trim().parse::<f64>() {
                Ok(value) if value > 0.0 => {}
                _ => self
                    .errors
                    .set("price", "O preço deve ser um número positivo"),
            }
        }
        if self.image.trim().is_empty() {
            self.errors.set("image", "A URL da imagem é obrigatória");
        }
        if self.category_id.is_none() {
            self.errors.set("category_id", "Selecione uma categoria");
        }
        self.errors.is_empty()
    }

    /// Validated submit; same contract as the other forms. The payload is
    /// id-less by construction, so create can never send an id.
    pub async fn submit(
        &mut self,
        client: &ProductClient,
        cache: &PageCache<Product>,
        notifier: &dyn Notifier,
        navigator: &dyn Navigator,
    ) -> bool {
        if !self.validate() {
            return false;
        }
        let Some(category_id) = self.category_id else {
            return false;
        };
        let Ok(price) = self.price.trim().parse::<f64>() else {
            return false;
        };

        let fields = ProductFields {
            title: self.title.clone(),
            description: self.description.clone(),
            price,
            image: self.image.clone(),
            category_id,
        };
        let result = match &self.mode {
            FormMode::Edit(product) => client.update(product.id, fields).await,
            FormMode::Create => client.create(fields).await,
        };

        match result {
            Ok(_) => {
                cache.invalidate();
                notifier.success(if self.mode.is_edit() {
                    "Produto atualizado com sucesso!"
                } else {
                    "Produto criado com sucesso!"
                });
                navigator.go(Route::ProductList);
                true
            }
            Err(e) => {
                notifier.error(&if self.mode.is_edit() {
                    format!("Erro ao atualizar produto: {}", e)
                } else {
                    format!("Erro ao criar produto: {}", e)
                });
                false
            }
        }
    }
}
