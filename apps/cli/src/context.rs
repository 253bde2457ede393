//! Service wiring for the CLI.

use std::sync::Arc;

use nutrinest_core::catalog::CatalogService;
use nutrinest_core::errors::Result;
use nutrinest_core::saved_meals::{SavedMealService, SavedMealServiceTrait};
use nutrinest_core::session::{SessionService, SessionServiceTrait};
use nutrinest_core::store::StoreRepositoryTrait;
use nutrinest_storage_sqlite::db::{self, write_actor};
use nutrinest_storage_sqlite::StoreRepository;

/// Holds the services the command handlers consume.
pub struct ServiceContext {
    session_service: Arc<dyn SessionServiceTrait>,
    saved_meal_service: Arc<dyn SavedMealServiceTrait>,
    catalog_service: CatalogService,
}

impl ServiceContext {
    pub fn session_service(&self) -> &Arc<dyn SessionServiceTrait> {
        &self.session_service
    }

    pub fn saved_meal_service(&self) -> &Arc<dyn SavedMealServiceTrait> {
        &self.saved_meal_service
    }

    pub fn catalog_service(&self) -> &CatalogService {
        &self.catalog_service
    }
}

/// Open the database, run migrations, and wire repositories into services.
///
/// The plan generator is deliberately not constructed here: it needs the
/// provider credential, which only the `generate` command requires.
pub async fn initialize_context(app_data_dir: &str) -> Result<ServiceContext> {
    let db_path = db::init(app_data_dir)?;
    let pool = db::create_pool(&db_path)?;
    let writer = write_actor::spawn_writer(pool.as_ref().clone());

    db::run_migrations(&pool)?;

    let store: Arc<dyn StoreRepositoryTrait> = Arc::new(StoreRepository::new(pool, writer));

    let session_service = Arc::new(SessionService::new(store.clone()));
    let saved_meal_service = Arc::new(SavedMealService::new(store.clone()));

    Ok(ServiceContext {
        session_service,
        saved_meal_service,
        catalog_service: CatalogService::new(),
    })
}
