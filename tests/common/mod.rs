#![allow(dead_code)]
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{post, Router};
use axum::Json;
use formrelay::config::{Application, Credentials};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

pub const BOT_TOKEN: &str = "123456:test-token";
pub const CHAT_ID: &str = "-1001";

/// A request the fake Bot API received.
#[derive(Debug, Clone)]
pub struct Call {
    pub bot: String,
    pub body: Value,
}

#[derive(Clone)]
pub struct FakeTelegram {
    pub addr: SocketAddr,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl FakeTelegram {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[derive(Clone)]
struct Reply {
    status: StatusCode,
    body: &'static str,
    calls: Arc<Mutex<Vec<Call>>>,
}

async fn send_message(
    State(reply): State<Reply>,
    Path(bot): Path<String>,
    Json(body): Json<Value>,
) -> (StatusCode, &'static str) {
    reply.calls.lock().unwrap().push(Call { bot, body });
    (reply.status, reply.body)
}

/// Spawns a fake Bot API answering every `sendMessage` with `status` and `body`.
pub async fn spawn_telegram(status: StatusCode, body: &'static str) -> FakeTelegram {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let reply = Reply {
        status,
        body,
        calls: calls.clone(),
    };
    let app = Router::new()
        .route("/:bot/sendMessage", post(send_message))
        .with_state(reply);

    let server = axum::Server::bind(&"127.0.0.1:0".parse().unwrap()).serve(app.into_make_service());
    let addr = server.local_addr();
    tokio::spawn(server);

    FakeTelegram { addr, calls }
}

pub fn settings(api_url: String, credentials: Credentials) -> Application {
    Application {
        base: formrelay_cfg::Config {
            api_url,
            ..Default::default()
        },
        credentials,
    }
}

/// Spawns the relay on an ephemeral port and returns its base URL.
pub async fn spawn_app(settings: &Application) -> String {
    let app = formrelay::setup_app(settings).expect("Failed to setup app");
    let server = axum::Server::bind(&"127.0.0.1:0".parse().unwrap()).serve(app.into_make_service());
    let addr = server.local_addr();
    tokio::spawn(server);
    format!("http://{addr}")
}
