//! Integration tests for catalog sources and session start-up.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::fs;
use std::time::Duration;

use herbal_store_core::ProductId;
use herbal_store_storefront::catalog::{Catalog, CatalogError, CatalogSource};
use herbal_store_storefront::config::StorefrontConfig;
use herbal_store_storefront::state::Storefront;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const TWO_PRODUCTS: &str = r#"[
    {
        "id": 10,
        "name": "Peppermint Leaf Tea",
        "price": 9.5,
        "category": "tea",
        "rating": 4.2,
        "popularity": 40,
        "description": "Cooling peppermint.",
        "ingredients": ["Peppermint"]
    },
    {
        "id": 11,
        "name": "Rosehip Powder",
        "price": "14.25",
        "category": "powder",
        "rating": 3.8,
        "popularity": 55,
        "image": "https://cdn.example.com/rosehip.png",
        "description": "Vitamin C rich rosehip.",
        "ingredients": ["Rosehip"],
        "benefits": ["Immune support"],
        "usage": "One teaspoon daily."
    }
]"#;

fn write_catalog(dir: &TempDir, contents: &str) -> CatalogSource {
    let path = dir.path().join("products.json");
    fs::write(&path, contents).unwrap();
    CatalogSource::File(path)
}

/// Answer a single HTTP request on a loopback port with `status` and
/// `body`, returning the catalog URL to fetch.
async fn serve_once(status: &'static str, body: &'static str) -> CatalogSource {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0_u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    CatalogSource::parse(&format!("http://{addr}/products.json")).unwrap()
}

#[tokio::test]
async fn test_load_from_file_keeps_document_order() {
    let dir = TempDir::new().unwrap();
    let source = write_catalog(&dir, TWO_PRODUCTS);

    let catalog = Catalog::load(&source).await;
    let names: Vec<&str> = catalog.products().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Peppermint Leaf Tea", "Rosehip Powder"]);
    assert_eq!(
        catalog.get(ProductId::new(11)).unwrap().usage,
        "One teaspoon daily."
    );
}

#[tokio::test]
async fn test_malformed_file_falls_back() {
    let dir = TempDir::new().unwrap();
    let source = write_catalog(&dir, "[{\"id\": 1, \"name\": ");

    assert!(Catalog::fetch(&source).await.is_err());
    assert_eq!(Catalog::load(&source).await, Catalog::fallback());
}

#[tokio::test]
async fn test_empty_document_falls_back() {
    let dir = TempDir::new().unwrap();
    let source = write_catalog(&dir, "[]");

    assert_eq!(Catalog::load(&source).await, Catalog::fallback());
}

#[tokio::test]
async fn test_missing_file_falls_back() {
    let dir = TempDir::new().unwrap();
    let source = CatalogSource::File(dir.path().join("absent.json"));

    let catalog = Catalog::load(&source).await;
    assert_eq!(catalog.len(), 6);
}

#[tokio::test]
async fn test_unreachable_url_falls_back() {
    // Port 9 (discard) on loopback refuses connections.
    let source = CatalogSource::parse("http://127.0.0.1:9/products.json").unwrap();

    let catalog = Catalog::load(&source).await;
    assert_eq!(catalog, Catalog::fallback());
}

#[tokio::test]
async fn test_load_over_http() {
    let source = serve_once("200 OK", TWO_PRODUCTS).await;

    let catalog = Catalog::load(&source).await;
    assert_eq!(catalog.len(), 2);
    assert_eq!(
        catalog.get(ProductId::new(10)).unwrap().name,
        "Peppermint Leaf Tea"
    );
}

#[tokio::test]
async fn test_http_error_status_falls_back() {
    let source = serve_once("404 Not Found", "not here").await;

    assert!(matches!(
        Catalog::fetch(&source).await,
        Err(CatalogError::Status(404))
    ));

    let source = serve_once("404 Not Found", "not here").await;
    assert_eq!(Catalog::load(&source).await, Catalog::fallback());
}

#[tokio::test]
async fn test_malformed_http_body_falls_back() {
    let source = serve_once("200 OK", "{\"products\": []}").await;

    assert_eq!(Catalog::load(&source).await, Catalog::fallback());
}

#[tokio::test]
async fn test_open_uses_configured_source_and_state() {
    let dir = TempDir::new().unwrap();
    let source = write_catalog(&dir, TWO_PRODUCTS);
    let state_dir = dir.path().join("state");
    let config = StorefrontConfig::from_lookup(|key| match key {
        "HERBAL_CATALOG_SOURCE" => Some(source.to_string()),
        "HERBAL_STATE_DIR" => Some(state_dir.display().to_string()),
        "HERBAL_CHECKOUT_DELAY_MS" => Some("0".to_string()),
        _ => None,
    })
    .unwrap();
    assert_eq!(config.checkout_delay, Duration::ZERO);

    let mut first = Storefront::open(&config).await;
    assert_eq!(first.catalog().len(), 2);
    assert!(first.add_item(ProductId::new(11), 2));
    // Not in this catalog.
    assert!(!first.add_item(ProductId::new(1), 1));
    drop(first);

    let second = Storefront::open(&config).await;
    assert_eq!(second.cart().item_count(), 2);
    assert_eq!(second.recommend().unwrap().id, ProductId::new(10));
}
