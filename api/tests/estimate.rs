mod common;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use serde_json::{Value, json};

use common::{FakeGemini, server_replying, test_args, test_server, unconfigured_server};

const BIRYANI_REPLY: &str = r#"Sure! {"dish": "Chicken Biryani", "estimated_carbon_kg": 4.2, "ingredients": [{"name": "Rice", "carbon_kg": 1.1}, {"name": "Chicken", "carbon_kg": 2.5}]}"#;

#[tokio::test]
async fn test_estimate_recovers_json_from_prose() {
    let (server, gemini) = server_replying(BIRYANI_REPLY).await;

    let response = server
        .post("/estimate")
        .json(&json!({ "dish": "Chicken Biryani" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({
            "dish": "Chicken Biryani",
            "estimated_carbon_kg": 4.2,
            "ingredients": [
                { "name": "Rice", "carbon_kg": 1.1 },
                { "name": "Chicken", "carbon_kg": 2.5 }
            ]
        })
    );

    let requests = gemini.requests();
    assert_eq!(requests.len(), 1);
    let prompt = requests[0]["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap();
    assert!(prompt.ends_with("Dish: Chicken Biryani"));
}

#[tokio::test]
async fn test_estimate_falls_back_on_garbage() {
    let (server, _gemini) = server_replying("I am not sure what that is.").await;

    let response = server
        .post("/estimate")
        .json(&json!({ "dish": "Mystery Stew" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "dish": "Mystery Stew", "estimated_carbon_kg": 0.0, "ingredients": [] })
    );
}

#[tokio::test]
async fn test_estimate_falls_back_on_empty_reply() {
    let (server, _gemini) = server_replying("").await;

    let response = server
        .post("/estimate")
        .json(&json!({ "dish": "Plain Toast" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "dish": "Plain Toast", "estimated_carbon_kg": 0.0, "ingredients": [] })
    );
}

#[tokio::test]
async fn test_estimate_sums_ingredients_when_total_missing() {
    let (server, _gemini) = server_replying(
        r#"{"dish": "Salad", "ingredients": ["lettuce", {"name": "Tomato", "carbon_kg": 0.35}, {"carbon_kg": 0.111}]}"#,
    )
    .await;

    let response = server
        .post("/estimate")
        .json(&json!({ "dish": "Salad" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({
            "dish": "Salad",
            "estimated_carbon_kg": 0.46,
            "ingredients": [
                { "name": "Tomato", "carbon_kg": 0.35 },
                { "name": "Unknown", "carbon_kg": 0.111 }
            ]
        })
    );
}

#[tokio::test]
async fn test_estimate_blank_dish_is_bad_request() {
    let (server, gemini) = server_replying(BIRYANI_REPLY).await;

    let response = server.post("/estimate").json(&json!({ "dish": "   " })).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["code"], "E_BAD_REQUEST");
    assert_eq!(body["message"], "'dish' must be a non-empty string");
    assert!(gemini.requests().is_empty());
}

#[tokio::test]
async fn test_estimate_blank_dish_is_bad_request_without_llm() {
    let server = unconfigured_server().await;

    let response = server.post("/estimate").json(&json!({ "dish": "" })).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_estimate_missing_dish_field_is_bad_request() {
    let server = unconfigured_server().await;

    let response = server.post("/estimate").json(&json!({ "name": "Soup" })).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_estimate_without_api_key_is_internal_error() {
    let server = unconfigured_server().await;

    let response = server
        .post("/estimate")
        .json(&json!({ "dish": "Ramen" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<Value>();
    assert_eq!(body["code"], "E_INTERNAL_SERVER_ERROR");
    assert!(body["message"].as_str().unwrap().contains("GEMINI_API_KEY"));
}

#[tokio::test]
async fn test_estimate_upstream_failure_is_bad_gateway() {
    let gemini = FakeGemini::failing(
        StatusCode::SERVICE_UNAVAILABLE,
        json!({ "error": { "message": "model overloaded" } }),
    )
    .await;
    let server = test_server(test_args(Some("test-key"), &gemini.base_url)).await;

    let response = server
        .post("/estimate")
        .json(&json!({ "dish": "Ramen" }))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let message = response.json::<Value>()["message"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(message.starts_with("Model error: "));
    assert!(message.contains("model overloaded"));
    assert_eq!(gemini.requests().len(), 1);
}

#[tokio::test]
async fn test_estimate_invalid_carbon_value_is_bad_gateway() {
    let (server, _gemini) =
        server_replying(r#"{"ingredients": [{"name": "Beef", "carbon_kg": "very high"}]}"#).await;

    let response = server
        .post("/estimate")
        .json(&json!({ "dish": "Steak" }))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_estimate_image_sends_inline_image() {
    let (server, gemini) = server_replying(
        r#"{"dish": "Margherita Pizza", "estimated_carbon_kg": 2.456, "ingredients": [{"name": "Cheese", "carbon_kg": 1.9}]}"#,
    )
    .await;

    let form = MultipartForm::new().add_part(
        "image",
        Part::bytes(b"fake-png-bytes".to_vec())
            .file_name("pizza.png")
            .mime_type("image/png"),
    );
    let response = server.post("/estimate/image").multipart(form).await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({
            "dish": "Margherita Pizza",
            "estimated_carbon_kg": 2.46,
            "ingredients": [{ "name": "Cheese", "carbon_kg": 1.9 }]
        })
    );

    let requests = gemini.requests();
    let parts = &requests[0]["contents"][0]["parts"];
    assert!(parts[0]["text"].as_str().unwrap().contains("image"));
    assert_eq!(parts[1]["inline_data"]["mime_type"], "image/png");
    assert_eq!(parts[1]["inline_data"]["data"], "ZmFrZS1wbmctYnl0ZXM=");
}

#[tokio::test]
async fn test_estimate_image_uses_placeholder_dish() {
    let (server, _gemini) = server_replying("cannot tell, sorry").await;

    let form = MultipartForm::new().add_part(
        "image",
        Part::bytes(vec![0xff, 0xd8, 0xff])
            .file_name("dish.jpg")
            .mime_type("image/jpeg"),
    );
    let response = server.post("/estimate/image").multipart(form).await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "dish": "Uploaded Dish", "estimated_carbon_kg": 0.0, "ingredients": [] })
    );
}

#[tokio::test]
async fn test_estimate_image_empty_upload_is_bad_request() {
    let server = unconfigured_server().await;

    let form = MultipartForm::new().add_part(
        "image",
        Part::bytes(Vec::new())
            .file_name("empty.jpg")
            .mime_type("image/jpeg"),
    );
    let response = server.post("/estimate/image").multipart(form).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "Empty image upload");
}

#[tokio::test]
async fn test_estimate_image_missing_field_is_bad_request() {
    let server = unconfigured_server().await;

    let form = MultipartForm::new().add_text("note", "no picture");
    let response = server.post("/estimate/image").multipart(form).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "Missing image field");
}

#[tokio::test]
async fn test_estimate_image_without_api_key_is_internal_error() {
    let server = unconfigured_server().await;

    let form = MultipartForm::new().add_part(
        "image",
        Part::bytes(vec![1, 2, 3])
            .file_name("dish.jpg")
            .mime_type("image/jpeg"),
    );
    let response = server.post("/estimate/image").multipart(form).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_estimate_image_too_large_is_rejected() {
    let gemini = FakeGemini::replying(BIRYANI_REPLY).await;
    let mut args = test_args(Some("test-key"), &gemini.base_url);
    args.server.max_upload_bytes = 16;
    let server = test_server(args).await;

    let form = MultipartForm::new().add_part(
        "image",
        Part::bytes(vec![7u8; 1024])
            .file_name("big.jpg")
            .mime_type("image/jpeg"),
    );
    let response = server.post("/estimate/image").multipart(form).await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    assert!(gemini.requests().is_empty());
}
