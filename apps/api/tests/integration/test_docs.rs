use super::helpers::{create_city, expect_status, get, read_json, read_text, send, spawn_app};
use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn openapi_document_describes_city_schema() {
    let app = spawn_app();
    let res = expect_status(
        send(&app.app, get("/api-docs/openapi.json")).await,
        StatusCode::OK,
    )
    .await;
    let doc: Value = read_json(res).await;

    assert!(
        doc["openapi"].as_str().unwrap().starts_with("3.0"),
        "unexpected openapi version {}",
        doc["openapi"]
    );
    let city = &doc["components"]["schemas"]["City"];
    assert_eq!(city["properties"]["id"]["type"], "integer");
    assert_eq!(city["properties"]["name"]["type"], "string");
    assert_eq!(city["properties"]["population"]["type"], "integer");
    assert_eq!(city["properties"]["country"]["type"], "string");
    assert!(
        city["required"]
            .as_array()
            .unwrap()
            .contains(&json!("name"))
    );
    assert!(doc["paths"]["/cities/{id}"]["delete"].is_object());
}

#[tokio::test]
async fn docs_ui_is_served_as_html() {
    let app = spawn_app();
    let res = expect_status(send(&app.app, get("/api-docs")).await, StatusCode::OK).await;
    let body = read_text(res).await;
    assert!(body.to_lowercase().contains("<html"));
}

#[tokio::test]
async fn health_reports_store_size() {
    let app = spawn_app();
    create_city(&app.app, json!({ "name": "Accra" })).await;

    let res = expect_status(send(&app.app, get("/health")).await, StatusCode::OK).await;
    let body: Value = read_json(res).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["cities"], 1);
}
