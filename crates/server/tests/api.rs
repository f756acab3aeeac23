//! End-to-end tests driving the router over an in-memory database.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use grimoire_server::{create_pool, create_router, seed, AppState, Config};

async fn test_app() -> Router {
    let config = Config::in_memory();
    let pool = create_pool(&config).await.expect("pool");
    seed::seed(&pool).await.expect("seed");
    create_router(AppState::new(pool, config))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn result_keys(body: &Value) -> Vec<String> {
    body["results"]
        .as_array()
        .expect("results array")
        .iter()
        .map(|row| row["key"].as_str().expect("key").to_string())
        .collect()
}

#[tokio::test]
async fn test_health() {
    let app = test_app().await;
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = test_app().await;
    let (status, body) = get(&app, "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/v2/items"].is_object());
}

#[tokio::test]
async fn test_list_items_sorted_by_key() {
    let app = test_app().await;
    let (status, body) = get(&app, "/v2/items").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 5);

    let keys = result_keys(&body);
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[tokio::test]
async fn test_item_pagination_keeps_total_count() {
    let app = test_app().await;

    let (_, body) = get(&app, "/v2/items?limit=2").await;
    assert_eq!(body["count"], 5);
    assert_eq!(body["results"].as_array().unwrap().len(), 2);

    let (_, body) = get(&app, "/v2/items?limit=2&offset=4").await;
    assert_eq!(body["results"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_retrieve_item_localized() {
    let app = test_app().await;

    let (status, body) = get(&app, "/v2/items/longsword").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Longsword");
    assert_eq!(body["is_magic_item"], false);
    assert_eq!(body["document_key"], "srd-2014");

    let (_, body) = get(&app, "/v2/items/longsword?lang=fr").await;
    assert_eq!(body["name"], "Épée longue");
}

#[tokio::test]
async fn test_missing_translation_yields_null_text() {
    let app = test_app().await;
    let (status, body) = get(&app, "/v2/items/chain-mail?lang=fr").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["name"].is_null());
    assert!(body["desc"].is_null());
}

#[tokio::test]
async fn test_retrieve_item_not_found() {
    let app = test_app().await;

    let (status, body) = get(&app, "/v2/items/vorpal-sword").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Item not found");

    // A key that could never exist is also a 404, not a 400.
    let (status, _) = get(&app, "/v2/items/Not%20A%20Slug").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_magic_item_filter() {
    let app = test_app().await;

    let (_, body) = get(&app, "/v2/items?is_magic_item=true").await;
    assert_eq!(body["count"], 3);

    let (_, body) = get(&app, "/v2/items?is_magic_item=false").await;
    assert_eq!(
        result_keys(&body),
        vec!["chain-mail".to_string(), "longsword".to_string()]
    );
}

#[tokio::test]
async fn test_rarity_filters() {
    let app = test_app().await;

    let (_, body) = get(&app, "/v2/items?rarity=rare").await;
    assert_eq!(result_keys(&body), vec!["flame-tongue".to_string()]);

    let (_, body) = get(&app, "/v2/items?rarity__in=common,uncommon").await;
    assert_eq!(body["count"], 2);

    let (status, body) = get(&app, "/v2/items?rarity=mythic").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("mythic"));
}

#[tokio::test]
async fn test_item_numeric_filters() {
    let app = test_app().await;

    let (_, body) = get(&app, "/v2/items?cost__range=10,100").await;
    assert_eq!(body["count"], 3);

    let (_, body) = get(&app, "/v2/items?cost__gte=4000").await;
    assert_eq!(
        result_keys(&body),
        vec!["bag-of-holding".to_string(), "flame-tongue".to_string()]
    );

    let (_, body) = get(&app, "/v2/items?weight__lt=1").await;
    assert_eq!(result_keys(&body), vec!["potion-of-healing".to_string()]);
}

#[tokio::test]
async fn test_item_text_filters() {
    let app = test_app().await;

    let (_, body) = get(&app, "/v2/items?category__iexact=WEAPON").await;
    assert_eq!(body["count"], 2);

    let (_, body) = get(&app, "/v2/items?key__in=longsword,dagger").await;
    assert_eq!(result_keys(&body), vec!["longsword".to_string()]);

    let (_, body) = get(&app, "/v2/items?document__key=vault-of-magic").await;
    assert_eq!(result_keys(&body), vec!["flame-tongue".to_string()]);

    let (_, body) = get(&app, "/v2/items?requires_attunement=true").await;
    assert_eq!(result_keys(&body), vec!["flame-tongue".to_string()]);
}

#[tokio::test]
async fn test_malformed_filters_are_rejected() {
    let app = test_app().await;

    let (status, body) = get(&app, "/v2/items?cost__range=cheap").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("range"));

    let (status, _) = get(&app, "/v2/items?cost__gte=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&app, "/v2/items?lang=not-a-language").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_weapon_filters() {
    let app = test_app().await;

    let (_, body) = get(&app, "/v2/weapons").await;
    assert_eq!(body["count"], 4);

    let (_, body) = get(&app, "/v2/weapons?is_finesse=true").await;
    assert_eq!(result_keys(&body), vec!["dagger".to_string()]);

    let (_, body) = get(&app, "/v2/weapons?range_normal__gte=100").await;
    assert_eq!(result_keys(&body), vec!["longbow".to_string()]);

    let (_, body) = get(&app, "/v2/weapons?damage_type__in=slashing").await;
    assert_eq!(result_keys(&body), vec!["longsword".to_string()]);

    let (_, body) = get(&app, "/v2/weapons?versatile_dice=1d10").await;
    assert_eq!(result_keys(&body), vec!["longsword".to_string()]);

    let (_, body) = get(&app, "/v2/weapons?is_net=true&is_thrown=true").await;
    assert_eq!(result_keys(&body), vec!["net".to_string()]);
}

#[tokio::test]
async fn test_retrieve_weapon_localized() {
    let app = test_app().await;

    let (status, body) = get(&app, "/v2/weapons/longsword?lang=fr").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Épée longue");
    assert_eq!(body["damage_dice"], "1d8");
    assert_eq!(body["versatile_dice"], "1d10");
}

#[tokio::test]
async fn test_armor_filters_and_display() {
    let app = test_app().await;

    let (_, body) = get(&app, "/v2/armor?ac_base__gte=16").await;
    assert_eq!(result_keys(&body), vec!["chain-mail".to_string()]);

    let (_, body) = get(&app, "/v2/armor?grants_stealth_disadvantage=false").await;
    assert_eq!(result_keys(&body), vec!["leather".to_string()]);

    let (_, body) = get(&app, "/v2/armor?strength_score_required__gte=13").await;
    assert_eq!(result_keys(&body), vec!["chain-mail".to_string()]);

    let (status, body) = get(&app, "/v2/armor/half-plate").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ac_display"], "15 + Dex modifier (max 2)");

    let (_, body) = get(&app, "/v2/armor/chain-mail").await;
    assert_eq!(body["ac_display"], "16");
}

#[tokio::test]
async fn test_item_sets_include_members() {
    let app = test_app().await;

    let (_, body) = get(&app, "/v2/itemsets").await;
    assert_eq!(body["count"], 1);

    let (status, body) = get(&app, "/v2/itemsets/adventurers-kit").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Adventurer's Kit");
    assert_eq!(
        body["items"],
        serde_json::json!(["chain-mail", "longsword", "potion-of-healing"])
    );

    let (_, body) = get(&app, "/v2/itemsets?name__iexact=ADVENTURER%27S%20KIT").await;
    assert_eq!(body["count"], 1);
}

#[tokio::test]
async fn test_documents_and_provenance() {
    let app = test_app().await;

    let (_, body) = get(&app, "/v2/documents").await;
    assert_eq!(body["count"], 2);

    let (_, body) = get(&app, "/v2/documents?publisher__key=kobold-press").await;
    assert_eq!(result_keys(&body), vec!["vault-of-magic".to_string()]);

    let (status, body) = get(&app, "/v2/documents/srd-2014").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["license_key"], "cc-by-4-0");

    let (_, body) = get(&app, "/v2/publishers").await;
    assert_eq!(body["count"], 2);

    let (_, body) = get(&app, "/v2/licenses?key=ogl-1-0a").await;
    assert_eq!(body["count"], 1);

    let (status, body) = get(&app, "/v2/rulesets/o5e-2014").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Open 5th Edition (2014)");

    let (status, _) = get(&app, "/v2/rulesets/ghost").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
