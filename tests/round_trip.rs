//! Full round trip: conversation client -> gateway -> mock upstream -> back.

use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use serde_json::json;

use parley::api::client::HttpCompletionGateway;
use parley::core::config::GatewayConfig;
use parley::core::constants::ERROR_APOLOGY;
use parley::core::conversation::{Conversation, RequestPhase, SubmitOutcome};
use parley::gateway::{router, GatewayState};

async fn spawn(app: Router) -> std::net::SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn spawn_stack(upstream_status: StatusCode, upstream_body: String) -> String {
    let upstream = Router::new().route(
        "/v1/chat/completions",
        post(move || {
            let body = upstream_body.clone();
            async move { (upstream_status, body) }
        }),
    );
    let upstream_addr = spawn(upstream).await;

    let config = GatewayConfig::resolve(
        Some(format!("http://{upstream_addr}/v1/chat/completions")),
        Some("test-key".to_string()),
    );
    let gateway_addr = spawn(router(GatewayState::new(config, reqwest::Client::new()))).await;
    format!("http://{gateway_addr}/api/chat")
}

#[tokio::test]
async fn submit_round_trip_appends_the_assistant_reply() {
    let body = json!({
        "choices": [{ "message": { "role": "assistant", "content": "hello" } }]
    })
    .to_string();
    let gateway_url = spawn_stack(StatusCode::OK, body).await;

    let conversation = Conversation::new(HttpCompletionGateway::new(
        reqwest::Client::new(),
        gateway_url,
    ));
    let outcome = conversation.submit("say hello").await;

    assert_eq!(outcome, SubmitOutcome::Completed);
    assert_eq!(conversation.phase(), RequestPhase::Resolved);
    assert!(!conversation.is_in_flight());

    let log = conversation.messages();
    assert_eq!(log.len(), 2);
    assert_eq!(log[1].content, "hello");
}

#[tokio::test]
async fn gateway_failure_surfaces_as_the_apology_message() {
    let gateway_url = spawn_stack(StatusCode::BAD_GATEWAY, "upstream down".to_string()).await;

    let conversation = Conversation::new(HttpCompletionGateway::new(
        reqwest::Client::new(),
        gateway_url,
    ));
    let outcome = conversation.submit("say hello").await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(conversation.phase(), RequestPhase::Failed);
    assert!(!conversation.is_in_flight());

    let log = conversation.messages();
    assert_eq!(log.len(), 2);
    assert_eq!(log[1].content, ERROR_APOLOGY);
}
