//! Form controller scenarios: validation gating the network, edit seeding,
//! submit success/failure paths, category options and image preview.

use std::sync::Arc;

use backoffice::cache::PageCache;
use backoffice::clients::{CategoryClient, ProductClient};
use backoffice::model::{Category, Product};
use backoffice::store::mock::{create_raw_table, MockTable};
use backoffice::store::StoreError;
use backoffice::ui::{
    CarrierForm, CategoryForm, CategoryOptions, FormMode, ImagePreview, ImageProbe, Notification,
    ProductForm, RecordingNavigator, RecordingNotifier, Route,
};

struct ProbeResult(bool);

impl ImageProbe for ProbeResult {
    fn loads(&self, _url: &str) -> bool {
        self.0
    }
}

fn sample_product() -> Product {
    Product::new(
        7,
        "Fone Bluetooth",
        "Fone sem fio com estojo de recarga",
        199.9,
        "https://exemplo.com/fone.jpg",
        3,
    )
}

/// Fill every product field with valid input.
fn valid_product_form() -> ProductForm {
    let mut form = ProductForm::new(FormMode::Create);
    form.set_title("Fone Bluetooth");
    form.set_description("Fone sem fio com estojo de recarga");
    form.set_price("199.9");
    form.set_image("https://exemplo.com/fone.jpg");
    form.set_category(3);
    form
}

#[tokio::test]
async fn test_empty_category_name_is_rejected_without_network() {
    let (client, mut receiver) = create_raw_table::<Category>(10);
    let client = CategoryClient::new(client);
    let cache = PageCache::new("categories");
    let notifier = RecordingNotifier::new();
    let navigator = RecordingNavigator::new();

    let mut form = CategoryForm::new(FormMode::Create);
    let submitted = form.submit(&client, &cache, &notifier, &navigator).await;

    assert!(!submitted);
    assert_eq!(
        form.errors().get("name"),
        Some("O nome da categoria é obrigatório")
    );
    assert!(receiver.try_recv().is_err(), "validation must block the network");
    assert!(notifier.take().is_empty());
    assert_eq!(navigator.last(), None);
}

#[test]
fn test_carrier_form_requires_name() {
    let mut form = CarrierForm::new(FormMode::Create);
    assert!(!form.validate());
    assert_eq!(
        form.errors().get("name"),
        Some("O nome da transportadora é obrigatório")
    );

    form.set_name("Loggi");
    assert!(form.validate());
}

#[tokio::test]
async fn test_non_numeric_price_is_rejected_without_network() {
    let (client, mut receiver) = create_raw_table::<Product>(10);
    let client = ProductClient::new(client);
    let cache = PageCache::new("products");
    let notifier = RecordingNotifier::new();
    let navigator = RecordingNavigator::new();

    for bad_price in ["abc", "0", "-5"] {
        let mut form = valid_product_form();
        form.set_price(bad_price);

        let submitted = form.submit(&client, &cache, &notifier, &navigator).await;
        assert!(!submitted, "price {bad_price:?} must be rejected");
        assert_eq!(
            form.errors().get("price"),
            Some("O preço deve ser um número positivo"),
            "price {bad_price:?} must carry a price-specific error"
        );
        assert_eq!(form.errors().len(), 1, "only the price field is in error");
    }

    assert!(receiver.try_recv().is_err(), "validation must block the network");
    assert!(notifier.take().is_empty());
}

#[test]
fn test_edit_mode_seeds_every_field_from_the_payload() {
    let product = sample_product();
    let form = ProductForm::new(FormMode::Edit(product.clone()));

    assert_eq!(form.title(), product.title);
    assert_eq!(form.description(), product.description);
    assert_eq!(form.price(), "199.9");
    assert_eq!(form.image(), product.image);
    assert_eq!(form.category_id(), Some(product.category_id));
}

#[test]
fn test_errors_clear_as_fields_are_edited() {
    let mut form = ProductForm::new(FormMode::Create);
    assert!(!form.validate());
    assert!(form.errors().get("title").is_some());
    assert!(form.errors().get("price").is_some());

    form.set_title("Fone Bluetooth");
    assert_eq!(form.errors().get("title"), None, "editing clears that field");
    assert!(form.errors().get("price").is_some(), "other errors remain");
}

#[tokio::test]
async fn test_product_create_success_path() {
    let mut mock = MockTable::<Product>::new();
    mock.expect_insert().return_ok(sample_product());

    let client = ProductClient::new(mock.client());
    let cache = PageCache::new("products");
    let notifier = RecordingNotifier::new();
    let navigator = RecordingNavigator::new();

    let mut form = valid_product_form();
    let submitted = form.submit(&client, &cache, &notifier, &navigator).await;

    assert!(submitted);
    assert_eq!(
        notifier.take(),
        vec![Notification::Success("Produto criado com sucesso!".into())]
    );
    assert_eq!(navigator.last(), Some(Route::ProductList));
    mock.verify();
}

#[tokio::test]
async fn test_product_update_success_path() {
    let mut mock = MockTable::<Product>::new();
    let mut updated = sample_product();
    updated.price = 149.9;
    mock.expect_update().return_ok(updated);

    let client = ProductClient::new(mock.client());
    let cache = PageCache::new("products");
    let notifier = RecordingNotifier::new();
    let navigator = RecordingNavigator::new();

    let mut form = ProductForm::new(FormMode::Edit(sample_product()));
    form.set_price("149.9");
    let submitted = form.submit(&client, &cache, &notifier, &navigator).await;

    assert!(submitted);
    assert_eq!(
        notifier.take(),
        vec![Notification::Success("Produto atualizado com sucesso!".into())]
    );
    assert_eq!(navigator.last(), Some(Route::ProductList));
    mock.verify();
}

/// A remote failure notifies the verbatim message and keeps the typed input.
#[tokio::test]
async fn test_submit_failure_preserves_input() {
    let mut mock = MockTable::<Product>::new();
    mock.expect_insert()
        .return_err(StoreError::Remote("duplicate key".into()));

    let client = ProductClient::new(mock.client());
    let cache = PageCache::new("products");
    let notifier = RecordingNotifier::new();
    let navigator = RecordingNavigator::new();

    let mut form = valid_product_form();
    let submitted = form.submit(&client, &cache, &notifier, &navigator).await;

    assert!(!submitted);
    assert_eq!(
        notifier.take(),
        vec![Notification::Error("Erro ao criar produto: duplicate key".into())]
    );
    assert_eq!(navigator.last(), None, "failure stays on the form");
    assert_eq!(form.title(), "Fone Bluetooth", "typed input is preserved");
    assert_eq!(form.price(), "199.9");
    mock.verify();
}

#[tokio::test]
async fn test_category_options_load_eagerly() {
    let mut mock = MockTable::<Category>::new();
    mock.expect_select_all()
        .return_ok(vec![Category::new(1, "Áudio"), Category::new(2, "Vídeo")]);

    let client = CategoryClient::new(mock.client());
    let notifier = RecordingNotifier::new();

    let mut form = ProductForm::new(FormMode::Create);
    assert!(form.category_select_disabled(), "disabled until options arrive");

    form.load_categories(&client, &notifier).await;
    assert!(!form.category_select_disabled());
    assert_eq!(
        form.categories(),
        &CategoryOptions::Ready(vec![Category::new(1, "Áudio"), Category::new(2, "Vídeo")])
    );
    mock.verify();
}

#[tokio::test]
async fn test_category_options_failure_notifies_and_keeps_form_usable() {
    let mut mock = MockTable::<Category>::new();
    mock.expect_select_all()
        .return_err(StoreError::Remote("network error".into()));

    let client = CategoryClient::new(mock.client());
    let notifier = RecordingNotifier::new();

    let mut form = ProductForm::new(FormMode::Create);
    form.load_categories(&client, &notifier).await;

    assert!(!form.category_select_disabled());
    assert_eq!(
        notifier.take(),
        vec![Notification::Error(
            "Erro ao carregar categorias: network error".into()
        )]
    );
    mock.verify();
}

#[test]
fn test_image_preview_substitutes_placeholder() {
    let mut form = ProductForm::new(FormMode::Create);
    assert_eq!(form.preview(&ProbeResult(true)), None, "empty URL, no preview");

    form.set_image("https://exemplo.com/fone.jpg");
    assert_eq!(
        form.preview(&ProbeResult(true)),
        Some(ImagePreview::Image("https://exemplo.com/fone.jpg".into()))
    );
    let fallback = form.preview(&ProbeResult(false));
    assert_eq!(fallback, Some(ImagePreview::Placeholder));
    assert_eq!(
        fallback.unwrap().url(),
        "https://placehold.co/400x300?text=Imagem+Inválida"
    );

    // A broken image never blocks submission.
    let mut form = valid_product_form();
    form.set_image("https://exemplo.com/quebrada.jpg");
    assert!(form.validate());
}

/// Two concurrent readers of the same page share one fetch (the cache joins
/// the in-flight request instead of duplicating it).
#[tokio::test]
async fn test_concurrent_list_readers_share_one_fetch() {
    use backoffice::clients::ResourceOps;

    let mut mock = MockTable::<Category>::new();
    mock.expect_select_range()
        .return_ok((vec![Category::new(1, "Áudio")], 1));

    let client = CategoryClient::new(mock.client());
    let cache = Arc::new(PageCache::<Category>::new("categories"));

    let mut tasks = Vec::new();
    for _ in 0..4 {
        let cache = cache.clone();
        let client = client.clone();
        tasks.push(tokio::spawn(async move {
            cache
                .get_or_fetch(1, || async move { client.list_by_page(1, 8).await })
                .await
        }));
    }

    for task in tasks {
        let page = task.await.unwrap().unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_pages, 1);
    }

    // One expectation, four readers: verify proves a single fetch went out.
    mock.verify();
}
