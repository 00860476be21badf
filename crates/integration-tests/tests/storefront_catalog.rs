//! Catalog listing and filtering through the storefront HTTP API.

use game_store_integration_tests::{TestContext, json, product_ids};
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_product_detail() {
    let ctx = TestContext::new().await;
    let resp = ctx.get("/products/ps5console").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()["content-security-policy"],
        "default-src 'none'; frame-ancestors 'none'"
    );

    let product = json(resp).await;
    assert_eq!(product["name"], "PlayStation 5 Console");
    assert_eq!(product["price"], "$499.99");
    assert_eq!(product["discount_badge"], "50% OFF");
}

#[tokio::test]
async fn test_unknown_product_is_not_found() {
    let ctx = TestContext::new().await;
    let resp = ctx.get("/products/dreamcast").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_listing_by_platform_and_category() {
    let ctx = TestContext::new().await;
    let listing = json(ctx.get("/products?platform=xbox&categories=games").await).await;
    let ids = product_ids(&listing);

    assert_eq!(ids.first().map(String::as_str), Some("star-wars-outlaws"));
    assert_eq!(listing["count"], ids.len());
    for product in listing["products"].as_array().unwrap() {
        assert_eq!(product["platform"], "xbox");
        assert_eq!(product["category"], "games");
    }
}

#[tokio::test]
async fn test_listing_rejects_unknown_category() {
    let ctx = TestContext::new().await;
    let resp = ctx.get("/products?categories=toys").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_platform_page_price_filter() {
    let ctx = TestContext::new().await;
    let listing = json(
        ctx.get("/platforms/playstation?categories=digital&max_price=75")
            .await,
    )
    .await;
    assert_eq!(product_ids(&listing), ["psngift20", "psngift50"]);
}

#[tokio::test]
async fn test_unknown_platform_page_is_empty() {
    let ctx = TestContext::new().await;
    let resp = ctx.get("/platforms/dreamcast").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let listing = json(resp).await;
    assert_eq!(listing["count"], 0);
    assert!(product_ids(&listing).is_empty());
}

#[tokio::test]
async fn test_accessories_by_kind() {
    let ctx = TestContext::new().await;
    let listing = json(ctx.get("/accessories?kinds=gaming_desks").await).await;
    assert_eq!(product_ids(&listing), ["rgbdesk"]);
}

#[tokio::test]
async fn test_listing_prices_follow_session_currency() {
    let ctx = TestContext::new().await;
    ctx.post("/currency", &json!({ "currency": "EUR" })).await;

    let product = json(ctx.get("/products/ps5console").await).await;
    assert_eq!(product["price"], "€459.99");
}
