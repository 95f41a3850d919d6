//! Conversation integration tests.

mod common;

use anyhow::Result;
use assistant_client::api::{BulkClassifyOptions, MessageOptions};
use assistant_client::{AdditionalProperties, RuntimeResponseGeneric};
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use common::TestService;

fn message_response(context: serde_json::Value) -> serde_json::Value {
    json!({
        "input": {"text": "hi"},
        "intents": [{"intent": "greeting", "confidence": 0.97}],
        "entities": [],
        "context": context,
        "output": {
            "text": ["Hello! How can I help?"],
            "nodes_visited": ["welcome"],
            "generic": [
                {"response_type": "text", "text": "Hello! How can I help?"},
                {"response_type": "pause", "time": 500, "typing": true},
                {
                    "response_type": "option",
                    "title": "Pick one",
                    "options": [{"label": "Weather", "value": {"input": {"text": "weather"}}}]
                }
            ]
        }
    })
}

#[tokio::test]
async fn test_message_context_round_trip() -> Result<()> {
    let service = TestService::start().await?;

    let context = json!({
        "conversation_id": "c-1",
        "system": {"dialog_stack": [{"dialog_node": "root"}], "dialog_turn_counter": 1},
        "user_name": "Ada"
    });

    Mock::given(method("POST"))
        .and(path("/v1/workspaces/W1/message"))
        .and(body_json(json!({"input": {"text": "hi"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(message_response(context.clone())))
        .expect(1)
        .mount(&service.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/workspaces/W1/message"))
        .and(body_json(json!({"input": {"text": "weather"}, "context": context})))
        .respond_with(ResponseTemplate::new(200).set_body_json(message_response(context.clone())))
        .expect(1)
        .mount(&service.server)
        .await;

    let first = service
        .client
        .conversation()
        .message(MessageOptions::new("W1").with_text("hi"))
        .await?
        .into_result();

    assert_eq!(first.response_texts(), ["Hello! How can I help?"]);
    assert_eq!(first.intents[0].intent, "greeting");
    assert_eq!(first.context.conversation_id.as_deref(), Some("c-1"));
    assert_eq!(first.context.get_property("user_name"), Some(&json!("Ada")));

    let generic = first.output.generic.clone().unwrap_or_default();
    assert!(matches!(generic[1], RuntimeResponseGeneric::Pause(_)));
    assert!(matches!(generic[2], RuntimeResponseGeneric::Option(_)));

    // Unknown context keys and service-owned state go back unchanged.
    let second = service
        .client
        .conversation()
        .message_text("W1", "weather", Some(first.context))
        .await?;
    assert_eq!(second.output.nodes_visited, Some(vec!["welcome".to_string()]));
    Ok(())
}

#[tokio::test]
async fn test_message_nodes_visited_details_query() -> Result<()> {
    let service = TestService::start().await?;

    Mock::given(method("POST"))
        .and(path("/v1/workspaces/W1/message"))
        .and(query_param("nodes_visited_details", "true"))
        .and(body_partial_json(json!({"alternate_intents": true, "user_id": "u-7"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(message_response(json!({}))))
        .expect(1)
        .mount(&service.server)
        .await;

    let mut options = MessageOptions::new("W1").with_text("hi");
    options.nodes_visited_details = Some(true);
    options.alternate_intents = Some(true);
    options.user_id = Some("u-7".to_string());

    service.client.conversation().message(options).await?;
    Ok(())
}

#[tokio::test]
async fn test_unknown_response_type_is_decode_error() -> Result<()> {
    let service = TestService::start().await?;

    Mock::given(method("POST"))
        .and(path("/v1/workspaces/W1/message"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "input": {"text": "hi"},
            "intents": [],
            "entities": [],
            "context": {},
            "output": {"generic": [{"response_type": "hologram", "text": "?"}]}
        })))
        .expect(1)
        .mount(&service.server)
        .await;

    let err = service
        .client
        .conversation()
        .message(MessageOptions::new("W1").with_text("hi"))
        .await
        .unwrap_err();

    assert!(err.is_decode());
    assert!(err.to_string().contains("hologram"));
    Ok(())
}

#[tokio::test]
async fn test_bulk_classify() -> Result<()> {
    let service = TestService::start().await?;

    Mock::given(method("POST"))
        .and(path("/v1/workspaces/W1/bulk_classify"))
        .and(body_json(json!({"input": [{"text": "hello"}, {"text": "set an alarm"}]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "output": [
                {"input": {"text": "hello"}, "intents": [{"intent": "greeting", "confidence": 0.9}], "entities": []},
                {"input": {"text": "set an alarm"}, "intents": [{"intent": "alarm", "confidence": 0.8}], "entities": []}
            ]
        })))
        .expect(1)
        .mount(&service.server)
        .await;

    let response = service
        .client
        .conversation()
        .bulk_classify(BulkClassifyOptions::new("W1", ["hello", "set an alarm"]))
        .await?
        .into_result();

    let output = response.output.unwrap_or_default();
    assert_eq!(output.len(), 2);
    let top: Vec<_> = output
        .iter()
        .filter_map(|o| o.intents.as_ref()?.first().map(|i| i.intent.as_str()))
        .collect();
    assert_eq!(top, ["greeting", "alarm"]);
    Ok(())
}
