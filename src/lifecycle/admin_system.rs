use crate::cache::PageCache;
use crate::clients::{CarrierClient, CategoryClient, ProductClient};
use crate::model::{Carrier, Category, Product};
use tracing::{error, info};

/// The runtime orchestrator for the admin backoffice.
///
/// `AdminSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the three table tasks
/// - **Dependency Wiring**: The product table's constraint context is a
///   category client, so product writes can resolve their `category_id`
/// - **Cache Ownership**: One page cache per resource, handed to the pages
///   that read and invalidate it
///
/// # Example
///
/// ```ignore
/// let system = AdminSystem::new();
///
/// let category = system.category_client.create(fields).await?;
/// let page = system.carrier_client.list_by_page(1, 8).await?;
///
/// system.shutdown().await?;
/// ```
pub struct AdminSystem {
    /// Client for the `carriers` table
    pub carrier_client: CarrierClient,

    /// Client for the `categories` table
    pub category_client: CategoryClient,

    /// Client for the `products` table
    pub product_client: ProductClient,

    /// Page cache for the carrier list pages
    pub carrier_cache: PageCache<Carrier>,

    /// Page cache for the category list pages
    pub category_cache: PageCache<Category>,

    /// Page cache for the product list pages
    pub product_cache: PageCache<Product>,

    /// Task handles for the running tables (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl AdminSystem {
    /// Creates and initializes a new `AdminSystem` with all tables running.
    pub fn new() -> Self {
        // 1. Create the tables (no dependencies between the factories)
        let (carrier_actor, carrier_client) = crate::carrier::new();
        let (category_actor, category_client) = crate::category::new();
        let (product_actor, product_client) = crate::product::new();

        // 2. Start the tasks with their injected contexts.
        // Carriers and categories have no constraints to resolve.
        let carrier_handle = tokio::spawn(carrier_actor.run(()));
        let category_handle = tokio::spawn(category_actor.run(()));

        // The product table resolves category_id through a category client.
        let product_handle = tokio::spawn(product_actor.run(category_client.clone()));

        Self {
            carrier_client,
            category_client,
            product_client,
            carrier_cache: PageCache::new("carriers"),
            category_cache: PageCache::new("categories"),
            product_cache: PageCache::new("products"),
            handles: vec![carrier_handle, category_handle, product_handle],
        }
    }

    /// Gracefully shuts down the whole system.
    ///
    /// Dropping the clients closes their channels; each table task detects
    /// the closed channel and exits its loop. Any other client clones still
    /// held by pages keep their table alive until they are dropped too.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.carrier_client);
        drop(self.category_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Table task failed: {:?}", e);
                return Err(format!("Table task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for AdminSystem {
    fn default() -> Self {
        Self::new()
    }
}
