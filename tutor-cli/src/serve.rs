//! HTTP front end: `POST /ask` runs the agent once per request.
//!
//! The body is `{"prompt": "..."}` and a successful run answers
//! `{"reply": "<final_output>"}`. A failed run answers with a non-2xx status
//! and the error text as a plain-text body.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, signal};
use tutor::prelude::*;

/// Shared state of the `/ask` route.
#[derive(Clone)]
struct AskState {
    agent: Arc<Agent>,
    config: RunConfig,
}

/// Body of `POST /ask`.
#[derive(Debug, Deserialize)]
pub(crate) struct AskRequest {
    pub(crate) prompt: String,
}

/// Successful answer of `POST /ask`.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct AskResponse {
    pub(crate) reply: String,
}

/// Build the axum router with the `/ask` endpoint.
pub(crate) fn router(agent: Agent, config: RunConfig) -> Router {
    let state = AskState {
        agent: Arc::new(agent),
        config,
    };
    Router::new().route("/ask", post(ask)).with_state(state)
}

/// Serve `app` on `listener` until ctrl-c.
pub(crate) async fn serve(listener: TcpListener, app: Router) -> Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server shut down");
    Ok(())
}

async fn ask(State(state): State<AskState>, Json(request): Json<AskRequest>) -> Response {
    match Runner::run(&state.agent, request.prompt, state.config.clone()).await {
        Ok(result) => Json(AskResponse {
            reply: result.final_output,
        })
        .into_response(),
        Err(err) => {
            tracing::warn!("ask failed: {err}");
            (status_for(&err), err.to_string()).into_response()
        }
    }
}

/// Upstream failures are a bad gateway, except rate limits which pass through.
fn status_for(err: &Error) -> StatusCode {
    match err.llm_kind() {
        Some(LlmErrorKind::RateLimited) => StatusCode::TOO_MANY_REQUESTS,
        Some(_) => StatusCode::BAD_GATEWAY,
        None => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Wait for ctrl-c signal for graceful shutdown.
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::warn!("failed to install ctrl-c handler: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("received shutdown signal");
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::clone_on_ref_ptr)]

    use super::*;
    use std::net::SocketAddr;

    fn math_teacher(provider: &Arc<MockProvider>) -> Agent {
        let client: SharedChatProvider = provider.clone();
        Agent::new("Math Teacher")
            .instructions("You are a math tutor")
            .model(ChatCompletionsModel::new("llama-3.3-70b-versatile", client).shared())
    }

    async fn spawn(provider: &Arc<MockProvider>) -> SocketAddr {
        let app = router(math_teacher(provider), RunConfig::new().tracing_disabled(true));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await });
        addr
    }

    async fn post(addr: SocketAddr, body: serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("http://{addr}/ask"))
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn ask_replies_with_final_output() {
        let provider = Arc::new(MockProvider::new(vec!["2 + 2 = 4".to_owned()]));
        let addr = spawn(&provider).await;

        let response = post(addr, serde_json::json!({"prompt": "2+2="})).await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body: AskResponse = response.json().await.unwrap();
        assert_eq!(body.reply, "2 + 2 = 4");

        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].messages[0].text(), Some("You are a math tutor"));
        assert_eq!(requests[0].messages[1].text(), Some("2+2="));
    }

    #[tokio::test]
    async fn each_ask_is_a_fresh_run() {
        let provider = Arc::new(MockProvider::new(vec!["4".to_owned(), "9".to_owned()]));
        let addr = spawn(&provider).await;

        post(addr, serde_json::json!({"prompt": "2+2="})).await;
        let body: AskResponse = post(addr, serde_json::json!({"prompt": "3*3="}))
            .await
            .json()
            .await
            .unwrap();

        assert_eq!(body.reply, "9");
        let requests = provider.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].messages.len(), 2);
        assert_eq!(requests[1].messages[1].text(), Some("3*3="));
    }

    #[tokio::test]
    async fn upstream_failure_is_bad_gateway_with_text() {
        let provider = Arc::new(MockProvider::failing(LlmError::auth("groq", "bad key")));
        let addr = spawn(&provider).await;

        let response = post(addr, serde_json::json!({"prompt": "2+2="})).await;
        assert_eq!(response.status(), reqwest::StatusCode::BAD_GATEWAY);
        assert!(response.text().await.unwrap().contains("bad key"));
    }

    #[tokio::test]
    async fn rate_limit_passes_through() {
        let provider = Arc::new(MockProvider::failing(LlmError::rate_limited("groq")));
        let addr = spawn(&provider).await;

        let response = post(addr, serde_json::json!({"prompt": "2+2="})).await;
        assert_eq!(response.status(), reqwest::StatusCode::TOO_MANY_REQUESTS);
    }

    #[tokio::test]
    async fn missing_prompt_is_rejected_before_the_model() {
        let provider = Arc::new(MockProvider::new(vec!["4".to_owned()]));
        let addr = spawn(&provider).await;

        let response = post(addr, serde_json::json!({"question": "2+2="})).await;
        assert!(response.status().is_client_error());
        assert_eq!(provider.call_count(), 0);
    }

    #[test]
    fn agent_errors_are_internal() {
        let err = Error::agent("no model configured");
        assert_eq!(status_for(&err), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
