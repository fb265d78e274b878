use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

fn test_client() -> CatalogClient {
    CatalogClient::new(5, "shopxl-test/0.1").expect("failed to build test CatalogClient")
}

async fn mount_page(server: &MockServer, page: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .and(query_param("page", page))
        .respond_with(template)
        .mount(server)
        .await;
}

fn one_page() -> serde_json::Value {
    json!({ "products": [
        {
            "handle": "tee",
            "title": "Classic Tee",
            "vendor": "Acme",
            "product_type": "Apparel",
            "tags": ["a", "b"],
            "images": [{ "src": "https://cdn.example/tee.jpg" }],
            "variants": [
                { "title": "S", "price": "10.00", "sku": "TEE-S", "available": true },
                { "title": "M", "price": "10.00", "sku": "TEE-M", "available": false }
            ]
        },
        {
            "handle": "sticker",
            "title": "Sticker",
            "tags": [],
            "images": [],
            "variants": [{ "title": "Default Title", "price": "2.00", "sku": null, "available": true }]
        }
    ] })
}

#[tokio::test]
async fn run_export_writes_workbook_named_after_host() {
    let server = MockServer::start().await;
    mount_page(&server, "1", ResponseTemplate::new(200).set_body_json(&one_page())).await;
    mount_page(
        &server,
        "2",
        ResponseTemplate::new(200).set_body_json(&json!({ "products": [] })),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let outcome = run_export(&test_client(), &server.uri(), dir.path()).await;

    let expected_path = dir.path().join("127.0.0.1_products.xlsx");
    assert_eq!(
        outcome,
        RunOutcome::Exported {
            count: 3,
            path: expected_path.clone(),
        }
    );
    assert_eq!(outcome.message(), "Success! 3 variants exported.");
    assert!(expected_path.exists(), "workbook should be written");
}

#[tokio::test]
async fn run_export_reports_no_products_without_writing() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "1",
        ResponseTemplate::new(200).set_body_json(&json!({ "products": [] })),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let outcome = run_export(&test_client(), &server.uri(), dir.path()).await;

    assert_eq!(outcome, RunOutcome::NoProducts);
    assert!(!dir.path().join("127.0.0.1_products.xlsx").exists());
}

#[tokio::test]
async fn run_export_fails_without_partial_output_on_mid_feed_error() {
    let server = MockServer::start().await;
    mount_page(&server, "1", ResponseTemplate::new(200).set_body_json(&one_page())).await;
    mount_page(&server, "2", ResponseTemplate::new(500)).await;

    let dir = tempfile::tempdir().unwrap();
    let outcome = run_export(&test_client(), &server.uri(), dir.path()).await;

    assert_eq!(outcome, RunOutcome::Failed);
    assert!(!dir.path().join("127.0.0.1_products.xlsx").exists());
}

#[tokio::test]
async fn run_export_fails_on_invalid_url() {
    let dir = tempfile::tempdir().unwrap();
    let outcome = run_export(&test_client(), "definitely not a url", dir.path()).await;
    assert_eq!(outcome, RunOutcome::Failed);
    assert_eq!(outcome.message(), "Error: See console for details.");
}

#[tokio::test]
async fn run_export_fails_when_output_dir_is_missing() {
    let server = MockServer::start().await;
    mount_page(&server, "1", ResponseTemplate::new(200).set_body_json(&one_page())).await;
    mount_page(
        &server,
        "2",
        ResponseTemplate::new(200).set_body_json(&json!({ "products": [] })),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let outcome = run_export(&test_client(), &server.uri(), &missing).await;

    assert_eq!(outcome, RunOutcome::Failed);
}

#[test]
fn build_catalog_client_uses_config() {
    let config = AppConfig {
        log_level: "info".to_owned(),
        request_timeout_secs: 5,
        user_agent: "shopxl-test/0.1".to_owned(),
        inter_request_delay_ms: 0,
        output_dir: std::path::PathBuf::from("."),
        cooldown_secs: 0,
    };
    assert!(build_catalog_client(&config).is_ok());
}
