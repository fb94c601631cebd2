//! Application wiring: store selection, service construction, router.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use curio_service::CatalogService;
use curio_store::{CatalogStore, IdentityStore, InMemoryStore, PostgresStore, StoreError};

pub mod dto;
pub mod errors;
pub mod extract;
pub mod routes;

#[cfg(test)]
mod tests;

/// Store-erased service type handed to every route.
pub type AppService = CatalogService<Arc<dyn CatalogStore>, Arc<dyn IdentityStore>>;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AppService>,
}

/// Build the application over the in-memory store (dev/tests).
pub fn build_in_memory() -> (Router, Arc<AppService>) {
    let store = Arc::new(InMemoryStore::new());
    let catalog: Arc<dyn CatalogStore> = store.clone();
    let identity: Arc<dyn IdentityStore> = store;
    let service = Arc::new(CatalogService::new(catalog, identity));
    (router(Arc::clone(&service)), service)
}

/// Build the application over Postgres, bootstrapping the schema.
pub async fn build_postgres(database_url: &str) -> Result<(Router, Arc<AppService>), StoreError> {
    let store = PostgresStore::connect(database_url).await?;
    store.ensure_schema().await?;
    let store = Arc::new(store);
    let catalog: Arc<dyn CatalogStore> = store.clone();
    let identity: Arc<dyn IdentityStore> = store;
    let service = Arc::new(CatalogService::new(catalog, identity));
    Ok((router(Arc::clone(&service)), service))
}

/// The legacy route map; `/JSON` suffixes are load-bearing for existing
/// consumers.
fn router(service: Arc<AppService>) -> Router {
    Router::new()
        .route("/category/JSON", get(routes::categories::list_json))
        .route("/category/:category_id/JSON", get(routes::categories::one_json))
        .route("/item/JSON", get(routes::items::list_json))
        .route("/item/:item_id/JSON", get(routes::items::one_json))
        .route(
            "/category/:category_id/item/JSON",
            get(routes::items::in_category_json),
        )
        .route(
            "/category/:category_id/item/:item_id/JSON",
            get(routes::items::one_in_category_json),
        )
        .route("/category", post(routes::categories::create))
        .route(
            "/category/:category_id",
            axum::routing::put(routes::categories::rename).delete(routes::categories::delete),
        )
        .route("/category/:category_id/item", post(routes::items::create))
        .route(
            "/item/:item_id",
            axum::routing::put(routes::items::update).delete(routes::items::delete),
        )
        .route("/users", post(routes::users::create))
        .with_state(AppState { service })
}
