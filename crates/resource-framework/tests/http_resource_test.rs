use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use resource_framework::{ClientError, HttpResource, RemoteEntity, Resource};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Product {
    id: u32,
    category_id: u32,
    name: String,
}

impl RemoteEntity for Product {
    type Id = u32;
    type Create = Product;
    type Update = Product;
    const RESOURCE: &'static str = "product";
}

fn product(id: u32) -> Product {
    Product {
        id,
        category_id: 1,
        name: format!("Photo book {id}"),
    }
}

async fn get_product(Path(id): Path<u32>) -> Response {
    match id {
        1 => Json(product(1)).into_response(),
        2 => StatusCode::NO_CONTENT.into_response(),
        3 => (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable").into_response(),
        4 => (StatusCode::OK, "null").into_response(),
        _ => (StatusCode::OK, "{\"unexpected\": true}").into_response(),
    }
}

async fn list_products() -> Json<Vec<Product>> {
    Json(vec![product(1), product(2)])
}

async fn list_by_category(Path(category): Path<u32>) -> Response {
    if category == 1 {
        Json(vec![product(1)]).into_response()
    } else {
        StatusCode::NO_CONTENT.into_response()
    }
}

async fn create_product(Json(mut body): Json<Product>) -> Response {
    if body.name.is_empty() {
        return (StatusCode::BAD_REQUEST, "name is required").into_response();
    }
    if body.name == "ghost" {
        return StatusCode::OK.into_response();
    }
    body.id = 42;
    Json(body).into_response()
}

async fn archive(Json(body): Json<serde_json::Value>) -> Response {
    match body["id"].as_u64() {
        Some(1) => Json(product(1)).into_response(),
        _ => (StatusCode::OK, "null").into_response(),
    }
}

async fn put_product(Path(id): Path<u32>, Json(_): Json<Product>) -> StatusCode {
    if id == 1 {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn delete_product(Path(id): Path<u32>) -> StatusCode {
    if id == 1 {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Starts a fake products service and returns its base URL.
async fn spawn_products_service() -> String {
    let router = Router::new()
        .route("/api/v1/products", get(list_products).post(create_product))
        .route("/api/v1/products/archive", post(archive))
        .route("/api/v1/products/category/{category}", get(list_by_category))
        .route(
            "/api/v1/products/{id}",
            get(get_product).put(put_product).delete(delete_product),
        );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/api/v1/products/")
}

async fn products() -> HttpResource<Product> {
    HttpResource::new(reqwest::Client::new(), spawn_products_service().await)
}

#[tokio::test]
async fn test_get_decodes_ok_response() {
    let resource = products().await;

    let fetched = resource.get(&1).await.unwrap();

    assert_eq!(fetched, Some(product(1)));
}

#[tokio::test]
async fn test_get_treats_empty_success_as_not_found() {
    let resource = products().await;

    assert_eq!(resource.get(&2).await.unwrap(), None);
    assert_eq!(resource.get(&4).await.unwrap(), None);
}

#[tokio::test]
async fn test_get_surfaces_failure_body() {
    let resource = products().await;

    let error = resource.get(&3).await.unwrap_err();

    assert!(matches!(
        &error,
        ClientError::Status { status: 500, body } if body == "database unavailable"
    ));
    assert_eq!(error.to_string(), "database unavailable");
}

#[tokio::test]
async fn test_get_rejects_mismatched_body() {
    let resource = products().await;

    let error = resource.get(&9).await.unwrap_err();

    assert!(matches!(error, ClientError::Decode(_)));
}

#[tokio::test]
async fn test_list_and_list_by() {
    let resource = products().await;

    let all = resource.list().await.unwrap().unwrap();
    let by_category = resource.list_by("category", "1").await.unwrap().unwrap();
    let empty_category = resource.list_by("category", "2").await.unwrap();

    assert_eq!(all.len(), 2);
    assert_eq!(by_category, vec![product(1)]);
    assert_eq!(empty_category, None);
}

#[tokio::test]
async fn test_create_returns_downstream_record() {
    let resource = products().await;

    let created = resource.create(&product(0)).await.unwrap();

    assert_eq!(created.map(|p| p.id), Some(42));
}

#[tokio::test]
async fn test_create_with_empty_body_is_none() {
    let resource = products().await;
    let mut ghost = product(0);
    ghost.name = "ghost".to_string();

    assert_eq!(resource.create(&ghost).await.unwrap(), None);
}

#[tokio::test]
async fn test_create_failure_is_error() {
    let resource = products().await;
    let mut nameless = product(0);
    nameless.name.clear();

    let error = resource.create(&nameless).await.unwrap_err();

    assert_eq!(error.status(), Some(400));
    assert_eq!(error.to_string(), "name is required");
}

#[tokio::test]
async fn test_invoke_posts_to_action_path() {
    let resource = products().await;

    let found = resource
        .invoke("archive", serde_json::json!({ "id": 1 }))
        .await
        .unwrap();
    let missing = resource
        .invoke("archive", serde_json::json!({ "id": 2 }))
        .await
        .unwrap();

    assert_eq!(found, Some(product(1)));
    assert_eq!(missing, None);
}

#[tokio::test]
async fn test_update_and_delete_report_status_class() {
    let resource = products().await;

    assert!(resource.update(&1, &product(1)).await.unwrap());
    assert!(!resource.update(&2, &product(2)).await.unwrap());
    assert!(resource.delete(&1).await.unwrap());
    assert!(!resource.delete(&2).await.unwrap());
}

#[tokio::test]
async fn test_unreachable_downstream_is_transport_error() {
    let resource: HttpResource<Product> =
        HttpResource::new(reqwest::Client::new(), "http://127.0.0.1:1/api/v1/products");

    let error = resource.get(&1).await.unwrap_err();

    assert!(matches!(error, ClientError::Http(_)));
}

/// Answers one request with a 500 whose body is cut short, then hangs up.
async fn spawn_truncating_service() -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 4096];
        let _ = socket.read(&mut request).await;
        let _ = socket
            .write_all(b"HTTP/1.1 500 Internal Server Error\r\ncontent-length: 100\r\n\r\npartial")
            .await;
        let _ = socket.shutdown().await;
    });
    format!("http://{addr}/api/v1/products")
}

#[tokio::test]
async fn test_unreadable_failure_body_keeps_status() {
    let resource: HttpResource<Product> =
        HttpResource::new(reqwest::Client::new(), spawn_truncating_service().await);

    let error = resource.get(&1).await.unwrap_err();

    assert!(matches!(
        error,
        ClientError::Status { status: 500, ref body } if body.is_empty()
    ));
}
