//! Router tests over the in-memory store.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use super::build_in_memory;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn with_body(method: &str, uri: &str, actor: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(actor) = actor {
        builder = builder.header("x-user-id", actor);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn delete(uri: &str, actor: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("DELETE").uri(uri);
    if let Some(actor) = actor {
        builder = builder.header("x-user-id", actor);
    }
    builder.body(Body::empty()).unwrap()
}

/// Provision a user and return its id as a header-ready string.
async fn provision(app: &Router, name: &str, email: &str) -> String {
    let (status, body) = send(
        app,
        with_body(
            "POST",
            "/users",
            None,
            json!({"name": name, "email": email, "picture": ""}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn category_lifecycle_over_http() {
    let (app, _) = build_in_memory();
    let ada = provision(&app, "Ada", "ada@example.com").await;

    let (status, body) = send(
        &app,
        with_body("POST", "/category", Some(&ada), json!({"name": "Books"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["Category"]["name"], "Books");
    assert_eq!(body["Category"]["owner_name"], "Ada");
    let category_id = body["Category"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(&app, get("/category/JSON")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Categories"].as_array().unwrap().len(), 1);

    let (status, body) = send(&app, get(&format!("/category/{category_id}/JSON"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Category"]["name"], "Books");

    let (status, body) = send(
        &app,
        with_body(
            "PUT",
            &format!("/category/{category_id}"),
            Some(&ada),
            json!({"name": "Maps"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Category"]["name"], "Maps");

    let (status, body) = send(&app, delete(&format!("/category/{category_id}"), Some(&ada))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], true);

    let (status, _) = send(&app, get(&format!("/category/{category_id}/JSON"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn anonymous_mutation_is_401_and_foreign_actor_is_403() {
    let (app, _) = build_in_memory();
    let ada = provision(&app, "Ada", "ada@example.com").await;
    let eve = provision(&app, "Eve", "eve@example.com").await;

    let (_, body) = send(
        &app,
        with_body("POST", "/category", Some(&ada), json!({"name": "Books"})),
    )
    .await;
    let category_id = body["Category"]["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        with_body("POST", "/category", None, json!({"name": "X"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        with_body(
            "PUT",
            &format!("/category/{category_id}"),
            Some(&eve),
            json!({"name": "Hacked"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // the denied rename left the name alone
    let (_, body) = send(&app, get(&format!("/category/{category_id}/JSON"))).await;
    assert_eq!(body["Category"]["name"], "Books");
}

#[tokio::test]
async fn item_routes_cover_category_scoping_and_cascade() {
    let (app, _) = build_in_memory();
    let ada = provision(&app, "Ada", "ada@example.com").await;

    let (_, body) = send(
        &app,
        with_body("POST", "/category", Some(&ada), json!({"name": "Books"})),
    )
    .await;
    let category_id = body["Category"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        with_body(
            "POST",
            &format!("/category/{category_id}/item"),
            Some(&ada),
            json!({"name": "Pen", "description": "blue ink"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["Item"]["category_name"], "Books");
    assert_eq!(body["Item"]["owner_name"], "Ada");
    let item_id = body["Item"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        get(&format!("/category/{category_id}/item/{item_id}/JSON")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Item"]["name"], "Pen");

    let (status, body) = send(&app, get(&format!("/category/{category_id}/item/JSON"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Items"].as_array().unwrap().len(), 1);

    // deleting the category cascades; the item vanishes
    let (status, body) = send(&app, delete(&format!("/category/{category_id}"), Some(&ada))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items_removed"], 1);

    let (status, _) = send(&app, get(&format!("/item/{item_id}/JSON"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, get(&format!("/category/{category_id}/item/JSON"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Items"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn duplicate_provisioning_is_409() {
    let (app, _) = build_in_memory();
    provision(&app, "Ada", "ada@example.com").await;

    let (status, body) = send(
        &app,
        with_body(
            "POST",
            "/users",
            None,
            json!({"name": "Imposter", "email": "ada@example.com"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "duplicate_identity");
}

#[tokio::test]
async fn malformed_actor_header_is_400() {
    let (app, _) = build_in_memory();

    let (status, body) = send(
        &app,
        with_body("POST", "/category", Some("not-a-uuid"), json!({"name": "X"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_actor");
}

#[tokio::test]
async fn validation_failures_are_400() {
    let (app, _) = build_in_memory();
    let ada = provision(&app, "Ada", "ada@example.com").await;

    let (status, body) = send(
        &app,
        with_body("POST", "/category", Some(&ada), json!({"name": "  "})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}
