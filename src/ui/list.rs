//! Generic list page controller.
//!
//! One controller drives all three admin list pages: fetch the current page
//! through the resource's cache, expose a loading/ready/failed view state,
//! navigate to the edit form with the row as payload, and run the confirmed
//! delete → notify → invalidate → re-fetch cycle.

use std::sync::Arc;

use crate::cache::PageCache;
use crate::clients::ResourceOps;
use crate::pagination::Pagination;
use crate::store::TableRecord;
use crate::ui::nav::{Navigator, Route};
use crate::ui::notify::Notifier;
use tracing::debug;

/// Per-resource descriptor consumed by the list controller: the label used in
/// headings and error banners, the routes, and the delete wording.
pub trait AdminResource: TableRecord {
    const LABEL: &'static str;
    const CONFIRM_DELETE: &'static str;
    const DELETED: &'static str;

    fn list_route() -> Route;
    fn edit_route(entity: Self) -> Route;
}

/// What the list page is currently showing. Error and content are mutually
/// exclusive: a failed fetch replaces the table entirely.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Ready {
        items: Vec<T>,
        pagination: Option<Pagination>,
    },
    Failed(String),
}

/// The user's yes/no answer to a destructive prompt.
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

/// Fixed-answer prompt, handy in tests and scripts.
pub struct StaticConfirm(pub bool);

impl ConfirmPrompt for StaticConfirm {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}

/// The viewport owning the scroll position.
pub trait Viewport: Send + Sync {
    fn scroll_to_top(&self);
}

/// Viewport that ignores scrolling (headless runs).
pub struct NoopViewport;

impl Viewport for NoopViewport {
    fn scroll_to_top(&self) {}
}

/// List page controller for one resource.
pub struct ListPage<T: AdminResource, C: ResourceOps<T>> {
    client: C,
    cache: PageCache<T>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    viewport: Arc<dyn Viewport>,
    page_size: u32,
    current_page: u32,
    state: ViewState<T>,
}

impl<T: AdminResource, C: ResourceOps<T>> ListPage<T, C> {
    pub fn new(
        client: C,
        cache: PageCache<T>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
        viewport: Arc<dyn Viewport>,
        page_size: u32,
    ) -> Self {
        Self {
            client,
            cache,
            notifier,
            navigator,
            viewport,
            page_size,
            current_page: 1,
            state: ViewState::Loading,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    /// Initial fetch, on mount.
    pub async fn open(&mut self) {
        self.refresh().await;
    }

    /// Page change: scroll to origin, then re-fetch.
    pub async fn change_page(&mut self, page: u32) {
        debug!(resource = T::LABEL, page, "page change");
        self.current_page = page;
        self.viewport.scroll_to_top();
        self.refresh().await;
    }

    /// Navigate to the edit form, handing over the full row. No re-fetch.
    pub fn edit(&self, entity: T) {
        self.navigator.go(T::edit_route(entity));
    }

    /// Confirmed delete: remove the row, notify, invalidate every cached page
    /// of this resource and re-fetch. A declined prompt does nothing at all;
    /// a failed delete notifies and leaves the list untouched.
    ///
    /// Returns whether the row was deleted.
    pub async fn delete(&mut self, id: T::Id, prompt: &dyn ConfirmPrompt) -> bool {
        if !prompt.confirm(T::CONFIRM_DELETE) {
            return false;
        }

        match self.client.remove(id).await {
            Ok(_) => {
                self.notifier.success(T::DELETED);
                self.cache.invalidate();
                self.refresh().await;
                true
            }
            Err(e) => {
                self.notifier.error(&format!("Erro: {}", e));
                false
            }
        }
    }

    async fn refresh(&mut self) {
        self.state = ViewState::Loading;

        let page = self.current_page;
        let page_size = self.page_size;
        let client = &self.client;
        let result = self
            .cache
            .get_or_fetch(page, || client.list_by_page(page, page_size))
            .await;

        self.state = match result {
            Ok(data) => ViewState::Ready {
                items: data.items.clone(),
                pagination: Pagination::new(page, data.total_pages),
            },
            Err(e) => ViewState::Failed(format!("Erro ao carregar {}: {}", T::LABEL, e)),
        };
    }
}
