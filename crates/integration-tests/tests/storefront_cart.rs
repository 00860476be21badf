//! Cart and currency flows through the storefront HTTP API.

use game_store_integration_tests::{TestContext, json};
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_health() {
    let ctx = TestContext::new().await;
    let resp = ctx.get("/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));
    assert_eq!(resp.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn test_cart_currency_scenario() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .post("/cart/add", &json!({ "product_id": "ps5console" }))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json(resp).await;
    assert_eq!(body["cart"]["item_count"], 1);
    assert_eq!(body["cart"]["total"], "$499.99");
    assert_eq!(
        body["notifications"][0]["message"],
        "PlayStation 5 Console added to your cart"
    );
    assert_eq!(body["notifications"][0]["kind"], "added");

    let resp = ctx.post("/currency", &json!({ "currency": "GBP" })).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json(resp).await;
    assert_eq!(body["currency"], "GBP");
    assert_eq!(body["symbol"], "£");

    let cart = json(ctx.get("/cart").await).await;
    assert_eq!(cart["total"], "£394.99");
    assert_eq!(cart["currency"], "GBP");

    let body = json(
        ctx.post("/cart/add", &json!({ "product_id": "ps5console" }))
            .await,
    )
    .await;
    assert_eq!(body["cart"]["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["cart"]["items"][0]["quantity"], 2);
    assert_eq!(body["cart"]["total"], "£789.98");
    assert_eq!(
        body["notifications"][0]["message"],
        "Added another PlayStation 5 Console to your cart"
    );

    let body = json(
        ctx.post(
            "/cart/update",
            &json!({ "product_id": "ps5console", "quantity": 0 }),
        )
        .await,
    )
    .await;
    assert!(body["cart"]["items"].as_array().unwrap().is_empty());
    assert_eq!(body["cart"]["total"], "£0.00");
    assert_eq!(
        body["notifications"][0]["message"],
        "PlayStation 5 Console removed from cart"
    );

    let count = json(ctx.get("/cart/count").await).await;
    assert_eq!(count["count"], 0);
}

#[tokio::test]
async fn test_update_and_remove() {
    let ctx = TestContext::new().await;
    ctx.post("/cart/add", &json!({ "product_id": "civ7" })).await;
    ctx.post("/cart/add", &json!({ "product_id": "lords" })).await;

    let body = json(
        ctx.post("/cart/update", &json!({ "product_id": "civ7", "quantity": 4 }))
            .await,
    )
    .await;
    assert_eq!(body["cart"]["items"][0]["product_id"], "civ7");
    assert_eq!(body["cart"]["items"][0]["quantity"], 4);
    assert_eq!(body["cart"]["item_count"], 5);

    let body = json(ctx.post("/cart/remove", &json!({ "product_id": "civ7" })).await).await;
    let items = body["cart"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["product_id"], "lords");

    // Unknown ids are a no-op
    let body = json(ctx.post("/cart/remove", &json!({ "product_id": "nope" })).await).await;
    assert_eq!(body["cart"]["items"].as_array().unwrap().len(), 1);
    assert!(body["notifications"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_carts_are_per_session() {
    let ctx = TestContext::new().await;
    ctx.post("/cart/add", &json!({ "product_id": "ps5console" }))
        .await;

    let other = TestContext::new_client();
    let cart: serde_json::Value = other
        .get(ctx.url("/cart"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(cart["item_count"], 0);
    assert_eq!(cart["total"], "$0.00");

    let mine = json(ctx.get("/cart/count").await).await;
    assert_eq!(mine["count"], 1);
}

#[tokio::test]
async fn test_add_unknown_product_is_not_found() {
    let ctx = TestContext::new().await;
    let resp = ctx
        .post("/cart/add", &json!({ "product_id": "dreamcast" }))
        .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = json(resp).await;
    assert_eq!(body["error"], "Not found: Product dreamcast");
}

#[tokio::test]
async fn test_unknown_currency_is_bad_request() {
    let ctx = TestContext::new().await;
    let resp = ctx.post("/currency", &json!({ "currency": "JPY" })).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let current = json(ctx.get("/currency").await).await;
    assert_eq!(current["currency"], "USD");
}
