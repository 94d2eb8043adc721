use std::sync::Arc;

use super::harness::{ScriptedModel, wardrobe_item};
use aurastyle::calendar::{EventStore, EventType};
use aurastyle::error::LlmError;
use aurastyle::stylist::{
    NO_SUGGESTION_MESSAGE, SUGGESTION_FAILED_MESSAGE, SuggestionClient, SuggestionTrigger,
};
use aurastyle::wardrobe::{Category, ClothingItem};
use aurastyle::weather::WeatherInfo;

fn three_items() -> Vec<ClothingItem> {
    vec![
        wardrobe_item("top-1", Category::Top, "Linen Shirt"),
        wardrobe_item("bottom-1", Category::Bottom, "Chinos"),
        wardrobe_item("shoes-1", Category::Shoes, "Loafers"),
    ]
}

#[tokio::test]
async fn trigger_waits_for_three_items_then_requests_once() {
    let model = Arc::new(ScriptedModel::replying(
        r#"{"items":["top-1","bottom-1"],"reasoning":"Light layers."}"#,
    ));
    let client = SuggestionClient::new(model.clone(), "suggest-model");
    let weather = WeatherInfo::default();
    let mut trigger = SuggestionTrigger::new();

    let mut wardrobe = three_items();
    let small = &wardrobe[..2];
    assert!(
        trigger
            .on_wardrobe_changed(&client, small, &weather, &[])
            .await
            .is_none()
    );
    assert_eq!(model.calls(), 0);

    let outfit = trigger
        .on_wardrobe_changed(&client, &wardrobe, &weather, &[])
        .await
        .expect("outfit after third item");
    assert_eq!(outfit.items.len(), 2);
    assert_eq!(model.calls(), 1);

    wardrobe.push(wardrobe_item("coat-1", Category::Outerwear, "Trench"));
    trigger
        .on_wardrobe_changed(&client, &wardrobe, &weather, &[])
        .await;
    assert_eq!(model.calls(), 1);

    trigger.refresh(&client, &wardrobe, &weather, &[]).await;
    assert_eq!(model.calls(), 2);
}

#[tokio::test]
async fn dangling_ids_are_dropped_and_order_kept() {
    let model = Arc::new(ScriptedModel::replying(
        r#"{"items":["shoes-1","deleted-item","top-1"],"reasoning":"Crisp."}"#,
    ));
    let client = SuggestionClient::new(model, "suggest-model");
    let mut trigger = SuggestionTrigger::new();
    let wardrobe = three_items();

    let outfit = trigger
        .on_wardrobe_changed(&client, &wardrobe, &WeatherInfo::default(), &[])
        .await
        .expect("outfit");

    let ids: Vec<&str> = outfit.items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["shoes-1", "top-1"]);
    assert_eq!(outfit.reasoning, "Crisp.");
}

#[tokio::test]
async fn prompt_includes_weather_and_todays_events() {
    let model = Arc::new(ScriptedModel::replying(r#"{"items":[],"reasoning":""}"#));
    let client = SuggestionClient::new(model.clone(), "suggest-model");
    let mut events = EventStore::new();
    events.create("Client dinner", EventType::Formal);
    let weather = WeatherInfo {
        temp: 9.0,
        condition: "Rainy".into(),
        icon: "🌧️".into(),
    };

    client.suggest(&three_items(), &weather, &events.today()).await;

    let request = model.last_request().expect("one request recorded");
    assert_eq!(request.model, "suggest-model");
    assert!(request.image.is_none());
    assert!(request.instruction.contains("Rainy"));
    assert!(request.instruction.contains("Client dinner"));
    assert!(request.instruction.contains("Linen Shirt"));
}

#[tokio::test]
async fn transport_failure_reports_styling_failure() {
    let model = Arc::new(ScriptedModel::failing(LlmError::Api {
        provider: "scripted".into(),
        status: 500,
        message: "boom".into(),
    }));
    let client = SuggestionClient::new(model, "suggest-model");

    let result = client
        .suggest(&three_items(), &WeatherInfo::default(), &[])
        .await;

    assert!(result.items.is_empty());
    assert_eq!(result.reasoning, SUGGESTION_FAILED_MESSAGE);
}

#[tokio::test]
async fn empty_response_reports_no_suggestion() {
    let model = Arc::new(ScriptedModel::failing(LlmError::EmptyResponse {
        provider: "scripted".into(),
    }));
    let client = SuggestionClient::new(model, "suggest-model");

    let result = client
        .suggest(&three_items(), &WeatherInfo::default(), &[])
        .await;

    assert!(result.items.is_empty());
    assert_eq!(result.reasoning, NO_SUGGESTION_MESSAGE);
}
