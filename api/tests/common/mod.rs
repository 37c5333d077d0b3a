use std::sync::{Arc, Mutex};

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use axum_test::TestServer;
use foodprint_api::{
    application::http::server::http_server::{router, state},
    args::{Args, DEFAULT_MAX_UPLOAD_BYTES, LlmArgs, LogArgs, ServerArgs},
};
use serde_json::{Value, json};

/// Stand-in for the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct FakeGemini {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl FakeGemini {
    /// Answers every call with a single candidate whose text is `text`.
    pub async fn replying(text: &str) -> Self {
        Self::spawn(
            StatusCode::OK,
            json!({ "candidates": [{ "content": { "parts": [{ "text": text }], "role": "model" } }] }),
        )
        .await
    }

    pub async fn failing(status: StatusCode, body: Value) -> Self {
        Self::spawn(status, body).await
    }

    async fn spawn(status: StatusCode, reply: Value) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));

        let app = Router::new()
            .route(
                "/v1beta/models/{model_call}",
                post(
                    move |State(requests): State<Arc<Mutex<Vec<Value>>>>,
                          Json(body): Json<Value>| {
                        let reply = reply.clone();
                        async move {
                            requests.lock().unwrap().push(body);
                            (status, Json(reply))
                        }
                    },
                ),
            )
            .with_state(requests.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

pub fn test_args(api_key: Option<&str>, base_url: &str) -> Args {
    Args {
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_path: String::new(),
            allowed_origins: vec!["*".to_string()],
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        },
        llm: LlmArgs {
            gemini_api_key: api_key.map(str::to_string),
            gemini_model: "gemini-test".to_string(),
            gemini_base_url: base_url.to_string(),
            json_mode: false,
        },
        log: LogArgs {
            filter: "info".to_string(),
            json: false,
        },
    }
}

pub async fn test_server(args: Args) -> TestServer {
    let app_state = state(Arc::new(args)).await.unwrap();
    TestServer::new(router(app_state).unwrap()).unwrap()
}

/// Server wired to a fake Gemini that answers with `text`.
pub async fn server_replying(text: &str) -> (TestServer, FakeGemini) {
    let gemini = FakeGemini::replying(text).await;
    let server = test_server(test_args(Some("test-key"), &gemini.base_url)).await;
    (server, gemini)
}

/// Server started without an API key.
pub async fn unconfigured_server() -> TestServer {
    test_server(test_args(None, "http://127.0.0.1:9")).await
}
