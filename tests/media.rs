mod common;

use axum::http::{header, Method, StatusCode};
use common::{
    empty_request, entry, json_request, multipart_request, TestApp, BUCKET, PUBLIC_URL,
};
use serde_json::json;

#[tokio::test]
async fn uploaded_image_round_trips_through_a_menu_item() {
    let app = TestApp::new();

    let (status, body) = app.upload("pizza.png", b"\x89PNG fake pixels").await;
    assert_eq!(status, StatusCode::OK);

    let image_url = body["image_url"].as_str().unwrap().to_string();
    assert_eq!(image_url, format!("{}/{}/pizza.png", PUBLIC_URL, BUCKET));

    let blob = app.storage.blob("pizza.png").await.unwrap();
    assert!(blob.public);
    assert_eq!(blob.content_type.as_deref(), Some("image/png"));

    let (status, _) = app
        .post_json("/menu", json!({ "name": "Pizza", "image_url": image_url }))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = app.get("/menu").await;
    let (_, fields) = entry(&body["menu"][0]);
    assert_eq!(fields["image_url"], image_url.as_str());

    let (status, body) = app.delete("/delete-image/pizza.png").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Image 'pizza.png' deleted successfully!");

    let (status, body) = app.delete("/delete-image/pizza.png").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Image 'pizza.png' not found.");
}

#[tokio::test]
async fn image_url_can_be_attached_by_update() {
    let app = TestApp::new();

    app.post_json("/menu", json!({ "name": "Soup" })).await;

    let (_, body) = app.upload("soup.jpg", b"soup").await;
    let image_url = body["image_url"].as_str().unwrap().to_string();

    let (status, _) = app
        .put_json("/menu/Soup", json!({ "image_url": image_url }))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.get("/menu").await;
    let (_, fields) = entry(&body["menu"][0]);
    assert_eq!(fields["image_url"], image_url.as_str());
}

#[tokio::test]
async fn same_name_upload_overwrites() {
    let app = TestApp::new();

    app.upload("logo.png", b"first").await;
    let (status, _) = app.upload("logo.png", b"second").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        app.storage.blob("logo.png").await.unwrap().contents.as_ref(),
        b"second"
    );
}

#[tokio::test]
async fn filename_is_sanitized_before_storing() {
    let app = TestApp::new();

    let (status, body) = app.upload("../../secret plans.png", b"data").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["image_url"],
        format!("{}/{}/secret_plans.png", PUBLIC_URL, BUCKET)
    );
    assert!(app.storage.blob("secret_plans.png").await.is_some());
}

#[tokio::test]
async fn missing_file_part_is_a_bad_request() {
    let app = TestApp::new();

    let (status, body) = app
        .send(multipart_request("caption", None, None, b"hello"))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No file part in the request.");
}

#[tokio::test]
async fn non_multipart_upload_is_a_bad_request() {
    let app = TestApp::new();

    let (status, body) = app
        .send(empty_request(Method::POST, "/upload-image"))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No file part in the request.");

    let (status, body) = app
        .send(json_request(
            Method::POST,
            "/upload-image",
            json!({ "file": "pizza.png" }),
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No file part in the request.");
}

#[tokio::test]
async fn unusable_filename_is_a_bad_request() {
    let app = TestApp::new();

    let (status, body) = app
        .send(multipart_request("file", Some("..."), None, b"bytes"))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No selected file.");
}

#[tokio::test]
async fn deleting_an_unknown_image_is_not_found() {
    let app = TestApp::new();

    let (status, body) = app.delete("/delete-image/nothing.png").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Image 'nothing.png' not found.");
}

#[tokio::test]
async fn delete_image_answers_cross_origin_negotiation() {
    let app = TestApp::new();

    let (status, headers, body) = app
        .send_raw(empty_request(Method::OPTIONS, "/delete-image/pizza.png"))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert!(headers[header::ACCESS_CONTROL_ALLOW_METHODS]
        .to_str()
        .unwrap()
        .contains("DELETE"));
}
