//! Data loader tests
//!
//! Covers HTTP loading against a mock server, local directory loading from
//! the fixture site, and the error classes each failure maps to.

use mockito::Server;
use dramalines::api::{DataClient, LoadError, Location};

const CATALOG: &str = r#"
dramas:
  - id: d1
    name: Show A
    seasons:
      - season: 1
        episodes:
          - { episode: 1, file: data/d1/s1e1.yaml }
"#;

fn fixture_site() -> String {
    format!("{}/tests/fixtures/site", env!("CARGO_MANIFEST_DIR"))
}

// =============================================================================
// HTTP Tests
// =============================================================================

#[tokio::test]
async fn test_load_catalog_over_http() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/data/catalog.yaml")
        .with_status(200)
        .with_header("content-type", "application/yaml")
        .with_body(CATALOG)
        .create_async()
        .await;

    let client = DataClient::new(&server.url()).unwrap();
    let catalog = client.load_catalog().await.unwrap();

    mock.assert_async().await;
    assert_eq!(catalog.dramas.len(), 1);
    assert_eq!(catalog.dramas[0].id, "d1");
    assert_eq!(
        catalog.dramas[0].seasons[0].episodes[0].reference(),
        Some("data/d1/s1e1.yaml")
    );
}

#[tokio::test]
async fn test_base_with_path_prefix() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/drama/index.yaml")
        .with_status(200)
        .with_body(CATALOG)
        .create_async()
        .await;

    // No trailing slash: the last segment must still be kept
    let client = DataClient::new(&format!("{}/drama", server.url()))
        .unwrap()
        .with_catalog_path("index.yaml");
    client.load_catalog().await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_load_episode_resolves_against_base() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/data/d1/s1e1.yaml")
        .with_status(200)
        .with_body("title: Pilot\nitems:\n  - jp: こんにちは\n    en: Hello\n")
        .create_async()
        .await;

    let client = DataClient::new(&server.url()).unwrap();
    let data = client.load_episode("data/d1/s1e1.yaml").await.unwrap();

    mock.assert_async().await;
    assert_eq!(data.title(), Some("Pilot"));
    assert_eq!(data.items.len(), 1);
    assert_eq!(data.items[0].original(), "こんにちは");
    assert_eq!(data.items[0].translation(), "Hello");
}

#[tokio::test]
async fn test_http_error_status() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/data/catalog.yaml")
        .with_status(500)
        .create_async()
        .await;

    let client = DataClient::new(&server.url()).unwrap();
    let err = client.load_catalog().await.unwrap_err();

    assert!(matches!(err, LoadError::Status(500)));
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_missing_episode_is_404() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/data/missing.yaml")
        .with_status(404)
        .create_async()
        .await;

    let client = DataClient::new(&server.url()).unwrap();
    let err = client.load_episode("data/missing.yaml").await.unwrap_err();
    assert!(matches!(err, LoadError::Status(404)));
}

#[tokio::test]
async fn test_malformed_yaml_is_parse_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/data/catalog.yaml")
        .with_status(200)
        .with_body("dramas: [unclosed")
        .create_async()
        .await;

    let client = DataClient::new(&server.url()).unwrap();
    let err = client.load_catalog().await.unwrap_err();
    assert!(err.is_parse());
}

#[tokio::test]
async fn test_duplicate_ids_rejected() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/data/catalog.yaml")
        .with_status(200)
        .with_body("dramas:\n  - { id: d1, seasons: [] }\n  - { id: d1, seasons: [] }\n")
        .create_async()
        .await;

    let client = DataClient::new(&server.url()).unwrap();
    match client.load_catalog().await {
        Err(LoadError::Schema(msg)) => assert_eq!(msg, "duplicate drama id 'd1'"),
        other => panic!("Expected schema error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_document_is_empty_catalog() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/data/catalog.yaml")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = DataClient::new(&server.url()).unwrap();
    let catalog = client.load_catalog().await.unwrap();
    assert!(catalog.is_empty());
}

// =============================================================================
// Local Directory Tests
// =============================================================================

#[tokio::test]
async fn test_load_from_local_directory() {
    let client = DataClient::new(&fixture_site()).unwrap();
    assert!(matches!(client.base(), Location::Local(_)));

    let catalog = client.load_catalog().await.unwrap();
    let ids: Vec<&str> = catalog.dramas.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["hanami", "kissaten"]);

    let data = client
        .load_episode("data/episodes/hanami-s1e2.yaml")
        .await
        .unwrap();
    assert_eq!(data.title(), Some("The Letter"));
    assert_eq!(data.items.len(), 3);
    // Missing translation reads as empty
    assert_eq!(data.items[2].translation(), "");
}

#[tokio::test]
async fn test_local_missing_file_is_io_error() {
    let client = DataClient::new(&fixture_site()).unwrap();
    let err = client.load_episode("data/episodes/nope.yaml").await.unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}
