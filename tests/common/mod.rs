#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use serde_json::Value;
use std::sync::Arc;
use todo_pincode_service::domain::repositories::PincodeClient;
use todo_pincode_service::error::AppError;
use todo_pincode_service::infrastructure::http::HttpPincodeClient;
use todo_pincode_service::infrastructure::persistence::InMemoryTodoRepository;
use todo_pincode_service::routes::router;
use todo_pincode_service::state::AppState;

/// Pincode client answering every lookup with a fixed document.
pub struct StubPincodeClient {
    pub response: Value,
}

#[async_trait]
impl PincodeClient for StubPincodeClient {
    async fn pin_details(&self, _pin: &str) -> Result<Value, AppError> {
        Ok(self.response.clone())
    }

    fn base_url(&self) -> String {
        "http://stub.invalid/api/pincode/".to_string()
    }
}

/// State with `seed` bootstrap todos and a stub pincode client.
pub fn create_test_state(seed: usize) -> AppState {
    AppState::new(
        Arc::new(InMemoryTodoRepository::seeded(seed)),
        Arc::new(StubPincodeClient {
            response: Value::Null,
        }),
    )
}

/// State whose pincode client talks HTTP to `base_url`.
pub fn create_proxy_state(base_url: &str) -> AppState {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    AppState::new(
        Arc::new(InMemoryTodoRepository::seeded(0)),
        Arc::new(HttpPincodeClient::with_client(client, base_url).unwrap()),
    )
}

pub fn make_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}

/// Serves `app` on an ephemeral local port and returns its `http://host:port` origin.
pub async fn spawn_http(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}
