#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use restaurant_backend_rs::{
    app,
    types::{AppContext, Context},
    utils::{database::MemoryDocumentStore, storage::MemoryBlobStore},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub const PUBLIC_URL: &str = "http://blobs.test";
pub const BUCKET: &str = "menu-images";
const BOUNDARY: &str = "----restaurant-test-boundary";

pub struct TestApp {
    pub router: Router,
    pub db: Arc<MemoryDocumentStore>,
    pub storage: Arc<MemoryBlobStore>,
}

impl TestApp {
    pub fn new() -> Self {
        let db = Arc::new(MemoryDocumentStore::new());
        let storage = Arc::new(MemoryBlobStore::new(
            String::from(BUCKET),
            String::from(PUBLIC_URL),
        ));

        let ctx = Context::new(
            AppContext {
                host: String::from("127.0.0.1"),
                port: 0,
            },
            db.clone(),
            storage.clone(),
        );

        Self {
            router: app::get_router(Arc::new(ctx)),
            db,
            storage,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let (status, _, bytes) = self.send_raw(request).await;

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, body)
    }

    pub async fn send_raw(&self, request: Request<Body>) -> (StatusCode, HeaderMap, Vec<u8>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        (status, headers, bytes.to_vec())
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(empty_request(Method::GET, uri)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(empty_request(Method::DELETE, uri)).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(json_request(Method::POST, uri, body)).await
    }

    pub async fn put_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(json_request(Method::PUT, uri, body)).await
    }

    pub async fn upload(&self, file_name: &str, contents: &[u8]) -> (StatusCode, Value) {
        self.send(multipart_request(
            "file",
            Some(file_name),
            Some("image/png"),
            contents,
        ))
        .await
    }
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn multipart_request(
    field_name: &str,
    file_name: Option<&str>,
    content_type: Option<&str>,
    contents: &[u8],
) -> Request<Body> {
    let mut disposition = format!("Content-Disposition: form-data; name=\"{}\"", field_name);
    if let Some(file_name) = file_name {
        disposition.push_str(&format!("; filename=\"{}\"", file_name));
    }

    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(disposition.as_bytes());
    body.extend_from_slice(b"\r\n");
    if let Some(content_type) = content_type {
        body.extend_from_slice(format!("Content-Type: {}\r\n", content_type).as_bytes());
    }
    body.extend_from_slice(b"\r\n");
    body.extend_from_slice(contents);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method(Method::POST)
        .uri("/upload-image")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

/// Unwraps a `{<id>: <fields>}` listing entry.
pub fn entry(value: &Value) -> (String, Value) {
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 1);
    let (id, fields) = object.iter().next().unwrap();
    (id.clone(), fields.clone())
}
