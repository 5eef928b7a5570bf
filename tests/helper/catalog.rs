//! Lookup server test utilities

use std::sync::Arc;

use mockito::{Matcher, Mock, ServerGuard};

use appstore_version::{CheckerConfig, MemoryStore, VersionChecker};

/// Build a lookup response body with a single result
pub fn lookup_body(version: &str, track_view_url: &str) -> String {
    format!(
        r#"{{
            "resultCount": 1,
            "results": [
                {{
                    "bundleId": "com.example.app",
                    "version": "{}",
                    "trackViewUrl": "{}"
                }}
            ]
        }}"#,
        version, track_view_url
    )
}

/// Register a lookup mock for the given region and bundle id
pub async fn mock_lookup(
    server: &mut ServerGuard,
    region: &str,
    bundle_id: &str,
    status: usize,
    body: &str,
) -> Mock {
    server
        .mock("GET", format!("/{}/lookup", region).as_str())
        .match_query(Matcher::UrlEncoded("bundleId".into(), bundle_id.into()))
        .with_status(status)
        .with_header("content-type", "text/javascript; charset=utf-8")
        .with_body(body)
        .create_async()
        .await
}

/// Create a checker pointed at the mock server, returning its store as well
pub fn create_test_checker(server: &ServerGuard) -> (Arc<VersionChecker>, Arc<MemoryStore>) {
    let config = CheckerConfig {
        base_url: server.url(),
        timeout_ms: 5_000,
        ..CheckerConfig::default()
    };
    let store = Arc::new(MemoryStore::new());
    let checker = VersionChecker::from_config(&config, store.clone()).unwrap();

    (Arc::new(checker), store)
}
