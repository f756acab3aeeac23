use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::openapi::ApiDoc;
use crate::{handlers, state::AppState};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/v2/items", get(handlers::items::list_items))
        .route("/v2/items/{key}", get(handlers::items::get_item))
        .route("/v2/itemsets", get(handlers::item_sets::list_item_sets))
        .route("/v2/itemsets/{key}", get(handlers::item_sets::get_item_set))
        .route("/v2/weapons", get(handlers::weapons::list_weapons))
        .route("/v2/weapons/{key}", get(handlers::weapons::get_weapon))
        .route("/v2/armor", get(handlers::armor::list_armor))
        .route("/v2/armor/{key}", get(handlers::armor::get_armor))
        .route("/v2/documents", get(handlers::documents::list_documents))
        .route("/v2/documents/{key}", get(handlers::documents::get_document))
        .route("/v2/publishers", get(handlers::publishers::list_publishers))
        .route(
            "/v2/publishers/{key}",
            get(handlers::publishers::get_publisher),
        )
        .route("/v2/licenses", get(handlers::licenses::list_licenses))
        .route("/v2/licenses/{key}", get(handlers::licenses::get_license))
        .route("/v2/rulesets", get(handlers::rulesets::list_rulesets))
        .route("/v2/rulesets/{key}", get(handlers::rulesets::get_ruleset))
        .with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
