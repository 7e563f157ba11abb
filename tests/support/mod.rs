// One-time stub backend shared by the integration tests. Handlers are
// stateless so tests can run concurrently against the same server.

use std::{
    collections::HashMap,
    convert::Infallible,
    sync::{Arc, Mutex, OnceLock},
    time::Duration,
};

use axum::{
    Router,
    body::Body,
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde_json::{Value, json};

use gameshow_client::{ApiClient, Locale, NotificationSink};

static SERVER_URL: OnceLock<String> = OnceLock::new();

/// Ensures the stub backend is running and returns its base URL.
pub fn ensure_server() -> &'static str {
    SERVER_URL.get_or_init(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let (url_tx, url_rx) = std::sync::mpsc::channel::<String>();
        // Own OS thread with its own runtime, so the server outlives the
        // per-test tokio runtimes.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral test port");
                let addr = listener.local_addr().expect("get local addr");
                url_tx
                    .send(format!("http://{addr}"))
                    .expect("publish stub url");
                axum::serve(listener, router()).await.expect("stub failed");
            });
        });

        let base_url = url_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("stub url published");

        // Wait until the socket accepts connections before handing it out.
        let addr = base_url.strip_prefix("http://").expect("http url");
        for _ in 0..100 {
            if std::net::TcpStream::connect(addr).is_ok() {
                return base_url;
            }
            std::thread::sleep(Duration::from_millis(20));
        }
        panic!("stub backend did not become ready in time");
    })
}

/// Sink that records every report for assertion.
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("sink lock").clone()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, message: &str) {
        self.messages
            .lock()
            .expect("sink lock")
            .push(message.to_string());
    }
}

/// Client wired against the stub backend with a recording sink.
pub fn api_client(sink: Arc<RecordingSink>) -> ApiClient {
    let base = ensure_server();
    ApiClient::new(
        &format!("{base}/api/"),
        &format!("{base}/events/"),
        Duration::from_secs(5),
        Locale::En,
        sink,
    )
    .expect("client setup")
}

fn router() -> Router {
    Router::new()
        .route("/api/set_name", get(set_name))
        .route("/api/get_name", get(get_name))
        .route("/api/get_question_sets", get(get_question_sets))
        .route("/api/create_lobby", get(create_lobby))
        .route("/api/join_lobby", get(join_lobby))
        .route("/api/leave_lobby", get(leave_lobby))
        .route("/api/get_player_data", get(get_player_data))
        .route("/api/get_events", get(get_events))
        .route("/api/get_joker", get(get_joker))
        .route("/api/next_state", get(ack))
        .route("/api/bet_money", get(ack))
        .route("/api/attack_player", get(ack))
        .route("/api/answer_question", get(ack))
        .route("/api/update_lobby", post(update_lobby))
        .route("/api/upload_custom_questions", post(upload_custom_questions))
        .route("/api/kick_player", post(kick_player))
        .route("/api/set_player_attributes", post(set_player_attributes))
        .route("/events/{lobby_id}", get(event_stream))
}

type Params = Query<HashMap<String, String>>;

fn param(params: &HashMap<String, String>, key: &str) -> String {
    params.get(key).cloned().unwrap_or_default()
}

// Echoes the decoded name so tests can assert the query round-trip.
async fn set_name(Query(params): Params) -> Json<Value> {
    Json(json!(format!("sid:{}", param(&params, "name"))))
}

async fn get_name() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "no session")
}

async fn get_question_sets() -> Json<Value> {
    Json(json!([{ "name": "general" }, { "name": "science" }]))
}

async fn create_lobby() -> Json<Value> {
    Json(json!(["lobby-1", true]))
}

async fn join_lobby(Query(params): Params) -> Response {
    match param(&params, "uuid").as_str() {
        "missing" => (
            StatusCode::NOT_FOUND,
            "Lobby not found: Lobby UUID not in database!",
        )
            .into_response(),
        "closed" => (StatusCode::FORBIDDEN, "Lobby is closed!").into_response(),
        "boom" => (StatusCode::INTERNAL_SERVER_ERROR, "backend exploded").into_response(),
        _ => Json(json!({ "admin": false, "new_name": "Alice" })).into_response(),
    }
}

async fn leave_lobby(Query(params): Params) -> Response {
    match param(&params, "uuid").as_str() {
        "missing" => (StatusCode::NOT_FOUND, "Lobby not found").into_response(),
        "boom" => (StatusCode::INTERNAL_SERVER_ERROR, "backend exploded").into_response(),
        _ => StatusCode::OK.into_response(),
    }
}

async fn get_player_data(Query(params): Params) -> Response {
    if param(&params, "lobby_id") == "boom" {
        return (StatusCode::INTERNAL_SERVER_ERROR, "backend exploded").into_response();
    }
    Json(json!([
        { "name": "Alice", "money": 500, "jokers": 3 },
        { "name": "Bob", "money": 250, "jokers": 1 },
    ]))
    .into_response()
}

async fn get_events(Query(params): Params) -> Response {
    if param(&params, "lobby_id") == "boom" {
        return (StatusCode::INTERNAL_SERVER_ERROR, "backend exploded").into_response();
    }
    Json(json!([{ "kind": "PlayerListUpdate" }])).into_response()
}

async fn get_joker(Query(params): Params) -> Response {
    if param(&params, "lobby_id") == "boom" {
        return (StatusCode::INTERNAL_SERVER_ERROR, "backend exploded").into_response();
    }
    Json(json!([1, 3])).into_response()
}

async fn ack(Query(params): Params) -> Response {
    if param(&params, "lobby_id") == "boom" {
        return (StatusCode::INTERNAL_SERVER_ERROR, "backend exploded").into_response();
    }
    StatusCode::OK.into_response()
}

// Rejects bodies whose fields arrive with the wrong JSON types.
async fn update_lobby(Json(body): Json<Value>) -> StatusCode {
    let typed = body["lobby_id"].is_string()
        && body["open"].is_boolean()
        && body["initial_money"].is_i64()
        && body["initial_jokers"].is_u64()
        && body["normal_q_money"].is_i64()
        && body["estimation_q_money"].is_i64()
        && body["question_set"].is_string();
    if typed {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    }
}

async fn upload_custom_questions(Json(body): Json<Value>) -> StatusCode {
    if body["lobby_id"].is_string() && body["questions"].is_array() {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    }
}

async fn kick_player(Json(body): Json<Value>) -> StatusCode {
    if body["lobby_id"].is_string() && body["name"].is_string() {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    }
}

async fn set_player_attributes(Json(body): Json<Value>) -> StatusCode {
    let typed = body["lobby_id"].is_string()
        && body["name"].is_string()
        && body["money"].is_i64()
        && body["jokers"].is_u64();
    if typed {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    }
}

async fn event_stream(Path(lobby_id): Path<String>) -> Response {
    if lobby_id == "missing" {
        return (StatusCode::NOT_FOUND, "Lobby not found").into_response();
    }
    let chunks: Vec<Result<String, Infallible>> = vec![
        Ok("event: ping\ndata: \"ping\"\n\n".to_string()),
        Ok(format!(
            "event: game_event\ndata: {{\"kind\":\"PlayerListUpdate\",\"lobby\":\"{lobby_id}\"}}\n\n"
        )),
        Ok("event: game_event\ndata: {\"kind\":\"LobbySettingsUpdate\"}\n\n".to_string()),
    ];
    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "text/event-stream")
        .header("Cache-Control", "no-cache")
        .body(Body::from_stream(futures_util::stream::iter(chunks)))
        .expect("stream response")
}
