use std::sync::Arc;

use axum_test::TestServer;
use cinevault_core::InMemoryContentStore;
use cinevault_server::config::{Config, ResolverConfig};
use cinevault_server::{create_app, AppState};
use serde_json::{json, Value};

pub const ADMIN_KEY: &str = "test-admin-key";

/// Spin up the full app against a fresh in-memory store.
#[allow(unused)]
pub fn test_server() -> TestServer {
    let config = Config {
        admin_key: ADMIN_KEY.to_string(),
        database_url: None,
        resolver: ResolverConfig {
            // Points nowhere; resolver calls are not exercised here.
            api_base: "http://127.0.0.1:9".to_string(),
            login: String::new(),
            key: String::new(),
        },
    };
    let state = AppState::new(
        Arc::new(InMemoryContentStore::new()),
        Arc::new(config),
    );
    TestServer::new(create_app(state)).expect("test server should start")
}

#[allow(unused)]
pub fn movie_body(title: &str) -> Value {
    json!({
        "type": "movie",
        "title": title,
        "poster": "http://x/p.jpg",
    })
}
