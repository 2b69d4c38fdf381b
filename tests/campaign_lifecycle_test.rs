mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new();

    let response = app.server.get("/").await;

    response.assert_status(StatusCode::OK);
    response.assert_text("Hello, Campaign API!");
}

#[tokio::test]
async fn test_campaign_lifecycle() {
    let app = TestApp::new();

    // Create
    let response = app
        .server
        .post("/api/v1/campaigns")
        .json(&json!({
            "name": "spring sale",
            "description": "20% off everything",
            "from": "2021-05-27T05:01:43+09:00",
            "to": "2021-06-03T05:01:43+09:00",
            "pictureUri": "/images/banner1.png"
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let created: serde_json::Value = response.json();
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["from"].as_str().unwrap(), "2021-05-27T05:01:43+09:00");
    assert!(created.get("detailsUri").is_none());

    // Read
    let response = app.server.get(&format!("/api/v1/campaigns/{}", id)).await;
    response.assert_status(StatusCode::OK);
    response.assert_json(&created);

    // Update replaces every field
    let response = app
        .server
        .put(&format!("/api/v1/campaigns/{}", id))
        .json(&json!({
            "name": "spring sale extended",
            "detailsUri": "/images/detail1.png"
        }))
        .await;
    response.assert_status(StatusCode::OK);
    response.assert_json(&json!({
        "id": id,
        "name": "spring sale extended",
        "detailsUri": "/images/detail1.png"
    }));

    // List
    let response = app.server.get("/api/v1/campaigns").await;
    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"].as_str().unwrap(), "spring sale extended");

    // Delete twice
    let response = app.server.delete(&format!("/api/v1/campaigns/{}", id)).await;
    response.assert_status(StatusCode::OK);
    response.assert_json(&json!(true));

    let response = app.server.delete(&format!("/api/v1/campaigns/{}", id)).await;
    response.assert_status(StatusCode::OK);
    response.assert_json(&json!(false));

    // Gone
    let response = app.server.get(&format!("/api/v1/campaigns/{}", id)).await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_preserves_creation_order() {
    let app = TestApp::new();

    for name in ["first", "second", "third"] {
        app.server
            .post("/api/v1/campaigns")
            .json(&json!({ "name": name }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let response = app.server.get("/api/v1/campaigns").await;
    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["first", "second", "third"]);

    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_update_unknown_campaign() {
    let app = TestApp::new();

    let response = app
        .server
        .put("/api/v1/campaigns/404")
        .json(&json!({ "name": "nobody home" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"].as_str().unwrap(), "Not found");
    assert_eq!(body["details"].as_str().unwrap(), "Campaign");
}
