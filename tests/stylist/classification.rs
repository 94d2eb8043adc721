use std::sync::Arc;

use super::harness::ScriptedModel;
use aurastyle::error::LlmError;
use aurastyle::stylist::ClassificationClient;
use aurastyle::wardrobe::{Category, ItemDescriptor};

const PHOTO: &str = "data:image/png;base64,iVBORw0KGgo=";

#[tokio::test]
async fn complete_answer_is_used_verbatim() {
    let model = Arc::new(ScriptedModel::replying(
        r#"{"category":"Shoes","subCategory":"Loafers","color":"Tan","style":"Smart","season":["Autumn","Winter"]}"#,
    ));
    let client = ClassificationClient::new(model.clone(), "classify-model");

    let descriptor = client.analyze(PHOTO).await;

    assert_eq!(descriptor.category, Category::Shoes);
    assert_eq!(descriptor.sub_category, "Loafers");
    assert_eq!(descriptor.color, "Tan");
    assert_eq!(descriptor.style, "Smart");
    assert_eq!(descriptor.season, vec!["Autumn", "Winter"]);
    assert_eq!(model.calls(), 1);
}

#[tokio::test]
async fn request_carries_the_photo_without_data_url_prefix() {
    let model = Arc::new(ScriptedModel::replying("{}"));
    let client = ClassificationClient::new(model.clone(), "classify-model").with_temperature(0.1);

    client.analyze(PHOTO).await;

    let request = model.last_request().expect("one request recorded");
    assert_eq!(request.model, "classify-model");
    assert!((request.temperature - 0.1).abs() < f64::EPSILON);
    let image = request.image.expect("image attached");
    assert_eq!(image.mime_type, "image/png");
    assert_eq!(image.data, "iVBORw0KGgo=");
}

#[tokio::test]
async fn missing_fields_take_per_field_defaults() {
    let model = Arc::new(ScriptedModel::replying(
        r#"{"category":"Bottom","subCategory":"Chinos"}"#,
    ));
    let client = ClassificationClient::new(model, "classify-model");

    let descriptor = client.analyze(PHOTO).await;

    assert_eq!(descriptor.category, Category::Bottom);
    assert_eq!(descriptor.sub_category, "Chinos");
    assert_eq!(descriptor.color, "Unknown");
    assert_eq!(descriptor.style, "Casual");
    assert!(descriptor.season.is_empty());
}

#[tokio::test]
async fn transport_failure_yields_fallback_descriptor() {
    let model = Arc::new(ScriptedModel::failing(LlmError::Request {
        provider: "scripted".into(),
        message: "connection refused".into(),
    }));
    let client = ClassificationClient::new(model, "classify-model");

    assert_eq!(client.analyze(PHOTO).await, ItemDescriptor::fallback());
}

#[tokio::test]
async fn non_json_answer_yields_fallback_descriptor() {
    let model = Arc::new(ScriptedModel::replying("a white shirt, probably"));
    let client = ClassificationClient::new(model, "classify-model");

    let descriptor = client.analyze(PHOTO).await;

    assert_eq!(descriptor.category, Category::Top);
    assert_eq!(descriptor.sub_category, "Classic Shirt");
    assert_eq!(descriptor.style, "Casual");
    assert_eq!(descriptor.season, vec!["Spring", "Summer"]);
}
