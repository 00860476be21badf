//! Integration tests for the Game Store storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p game-store-integration-tests
//! ```
//!
//! Each test spawns the storefront router on an ephemeral local port and
//! talks to it with a cookie-keeping HTTP client, so the session (and with
//! it the cart) carries across requests like a browser's would.

use std::net::SocketAddr;

use game_store_storefront::catalog::Catalog;
use game_store_storefront::config::StorefrontConfig;
use game_store_storefront::state::AppState;
use reqwest::{Client, Response};
use serde_json::Value;

/// A running storefront and a client with its own cookie jar.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
}

impl TestContext {
    /// Start a storefront on `127.0.0.1:0`.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot bind or the client cannot be built.
    pub async fn new() -> Self {
        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");

        let state = AppState::new(StorefrontConfig::default(), Catalog::builtin());
        let app = game_store_storefront::app(state);
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self {
            client: Self::new_client(),
            base_url: format!("http://{addr}"),
        }
    }

    /// A client with an empty cookie jar, i.e. a second shopper.
    ///
    /// # Panics
    ///
    /// Panics if the client cannot be built.
    #[must_use]
    pub fn new_client() -> Client {
        Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to create HTTP client")
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET `path` and return the response.
    ///
    /// # Panics
    ///
    /// Panics if the request fails to send.
    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed")
    }

    /// POST a JSON body to `path` and return the response.
    ///
    /// # Panics
    ///
    /// Panics if the request fails to send.
    pub async fn post(&self, path: &str, body: &Value) -> Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("POST request failed")
    }
}

/// Decode a JSON response body.
///
/// # Panics
///
/// Panics if the body is not JSON.
pub async fn json(response: Response) -> Value {
    response.json().await.expect("Response was not JSON")
}

/// Product ids in a listing response, in order.
#[must_use]
pub fn product_ids(listing: &Value) -> Vec<String> {
    listing["products"]
        .as_array()
        .map(|products| {
            products
                .iter()
                .filter_map(|p| p["id"].as_str().map(str::to_owned))
                .collect()
        })
        .unwrap_or_default()
}
