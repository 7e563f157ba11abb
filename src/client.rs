// Thin reqwest client for the gameshow backend. Every method maps to exactly
// one HTTP request; failures are classified once, here, and surface either as
// a silent sentinel (where the UI distinguishes the case) or as one report
// through the injected notification sink plus the operation's zero value.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::config;
use crate::events::EventStream;
use crate::i18n::{self, Locale};
use crate::notify::NotificationSink;
use crate::protocol::{
    CreateLobbyOutcome, CreatedLobby, JoinLobbyOutcome, JoinLobbyResponse, KickPlayerRequest,
    LobbyPreferences, PlayerIdentity, SetPlayerAttributesRequest, UpdateLobbyRequest,
    UploadQuestionsRequest,
};

// Catalog key for the generic connection-failure line.
const CONNECTION_FAILED_KEY: &str = "Connection to server failed!";

/// Errors from client construction.
#[derive(Debug)]
pub enum ClientError {
    InvalidBaseUrl(url::ParseError),
    Http(reqwest::Error),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::InvalidBaseUrl(err) => write!(f, "invalid base url: {err}"),
            ClientError::Http(err) => write!(f, "http client setup error: {err}"),
        }
    }
}

impl std::error::Error for ClientError {}

// How one response was resolved against the operation's silent-status set.
enum Classified {
    Success(reqwest::Response),
    // Special-cased status plus the diagnostic body, no notification sent.
    Silent(StatusCode, String),
    // Already reported through the sink.
    Failed,
}

/// Async client for the gameshow lobby/game API.
///
/// Stateless apart from the shared connection pool and cookie store; the
/// backend tracks the player session via cookies, so `set_name`/`get_name`
/// only cohere when issued through the same `ApiClient`.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    // Separate client without the request timeout, for the long-lived event
    // stream. Shares the session cookie jar with `http`.
    stream_http: reqwest::Client,
    api_base: Url,
    events_base: Url,
    locale: Locale,
    sink: Arc<dyn NotificationSink>,
}

impl ApiClient {
    /// Creates a client against the given request and event-stream roots.
    pub fn new(
        api_base: &str,
        events_base: &str,
        timeout: Duration,
        locale: Locale,
        sink: Arc<dyn NotificationSink>,
    ) -> Result<Self, ClientError> {
        let jar = Arc::new(reqwest::cookie::Jar::default());
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .cookie_provider(jar.clone())
            .build()
            .map_err(ClientError::Http)?;
        let stream_http = reqwest::Client::builder()
            .cookie_provider(jar)
            .build()
            .map_err(ClientError::Http)?;
        Ok(Self {
            http,
            stream_http,
            api_base: normalized(api_base)?,
            events_base: normalized(events_base)?,
            locale,
            sink,
        })
    }

    /// Creates a client from the `GAMESHOW_*` environment defaults.
    pub fn from_env(locale: Locale, sink: Arc<dyn NotificationSink>) -> Result<Self, ClientError> {
        Self::new(
            &config::api_base_url(),
            &config::events_base_url(),
            config::request_timeout(),
            locale,
            sink,
        )
    }

    /// Registers (or changes) the player name. Returns the session id.
    pub async fn set_name(&self, nickname: &str) -> Option<String> {
        let request = self
            .http
            .get(self.endpoint("set_name"))
            .query(&[("name", nickname)]);
        match self.execute(request, &[]).await {
            Classified::Success(response) => self.decode_json(response).await,
            _ => None,
        }
    }

    /// Fetches the identity registered for this session, if any.
    pub async fn get_name(&self) -> Option<PlayerIdentity> {
        let request = self.http.get(self.endpoint("get_name"));
        match self.execute(request, &[StatusCode::NOT_FOUND]).await {
            Classified::Success(response) => self.decode_json(response).await,
            // Not registered yet; the caller shows the login form.
            Classified::Silent(..) => None,
            Classified::Failed => None,
        }
    }

    /// Lists the question sets available for lobby setup.
    pub async fn get_question_sets(&self) -> Vec<Value> {
        self.fetch_list(self.http.get(self.endpoint("get_question_sets")))
            .await
    }

    /// Creates a new lobby owned by this session.
    pub async fn create_lobby(&self) -> CreateLobbyOutcome {
        let request = self.http.get(self.endpoint("create_lobby"));
        match self.execute(request, &[]).await {
            Classified::Success(response) => match self.decode_json::<CreatedLobby>(response).await
            {
                Some(lobby) => CreateLobbyOutcome::Created(lobby),
                None => CreateLobbyOutcome::Failed,
            },
            _ => CreateLobbyOutcome::Failed,
        }
    }

    /// Joins an existing lobby. Not-found and closed lobbies resolve
    /// silently so the caller can render the distinction.
    pub async fn join_lobby(&self, lobby_id: &str) -> JoinLobbyOutcome {
        let request = self
            .http
            .get(self.endpoint("join_lobby"))
            .query(&[("uuid", lobby_id)]);
        let silent = [StatusCode::NOT_FOUND, StatusCode::FORBIDDEN];
        match self.execute(request, &silent).await {
            Classified::Success(response) => {
                match self.decode_json::<JoinLobbyResponse>(response).await {
                    Some(body) => JoinLobbyOutcome::Joined {
                        admin: body.admin,
                        new_name: body.new_name,
                    },
                    None => JoinLobbyOutcome::Failed,
                }
            }
            Classified::Silent(status, message) if status == StatusCode::NOT_FOUND => {
                JoinLobbyOutcome::NotFound { message }
            }
            Classified::Silent(_, message) => JoinLobbyOutcome::Closed { message },
            Classified::Failed => JoinLobbyOutcome::Failed,
        }
    }

    /// Leaves a lobby. A vanished lobby resolves to `false` without a
    /// notification; the caller drops the lobby reference either way.
    pub async fn leave_lobby(&self, lobby_id: &str) -> bool {
        let request = self
            .http
            .get(self.endpoint("leave_lobby"))
            .query(&[("uuid", lobby_id)]);
        matches!(
            self.execute(request, &[StatusCode::NOT_FOUND]).await,
            Classified::Success(_)
        )
    }

    /// Fetches the lobby's player records.
    pub async fn get_player_data(&self, lobby_id: &str) -> Vec<Value> {
        self.fetch_lobby_list("get_player_data", lobby_id).await
    }

    /// Fetches the lobby's accumulated game events.
    pub async fn get_events(&self, lobby_id: &str) -> Vec<Value> {
        self.fetch_lobby_list("get_events", lobby_id).await
    }

    /// Opens the lobby's live event stream. The returned handle is owned by
    /// the caller; this client does not track or close it.
    pub async fn event_stream(&self, lobby_id: &str) -> Option<EventStream> {
        let mut url = self.events_base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(lobby_id);
        }
        match self.execute(self.stream_http.get(url), &[]).await {
            Classified::Success(response) => Some(EventStream::new(response)),
            _ => None,
        }
    }

    /// Submits new lobby preferences (admin only).
    pub async fn update_lobby(&self, lobby_id: &str, prefs: &LobbyPreferences) -> bool {
        let request = self
            .http
            .post(self.endpoint("update_lobby"))
            .json(&UpdateLobbyRequest::new(lobby_id, prefs));
        self.execute_ack(request).await
    }

    /// Uploads a caller-provided custom question list (admin only). The
    /// question schema is owned by the backend and passed through verbatim.
    pub async fn upload_custom_questions(&self, lobby_id: &str, questions: &[Value]) -> bool {
        let request = self
            .http
            .post(self.endpoint("upload_custom_questions"))
            .json(&UploadQuestionsRequest {
                lobby_id,
                questions,
            });
        self.execute_ack(request).await
    }

    /// Removes a player from the lobby (admin only).
    pub async fn kick_player(&self, lobby_id: &str, name: &str) -> bool {
        let request = self
            .http
            .post(self.endpoint("kick_player"))
            .json(&KickPlayerRequest { lobby_id, name });
        self.execute_ack(request).await
    }

    /// Overrides a player's money and joker count (admin only).
    pub async fn set_player_attributes(
        &self,
        lobby_id: &str,
        name: &str,
        money: i64,
        jokers: u64,
    ) -> bool {
        let request = self
            .http
            .post(self.endpoint("set_player_attributes"))
            .json(&SetPlayerAttributesRequest {
                lobby_id,
                name,
                money,
                jokers,
            });
        self.execute_ack(request).await
    }

    /// Forces the lobby into its next game state (admin only).
    pub async fn next_state(&self, lobby_id: &str) -> bool {
        let request = self
            .http
            .get(self.endpoint("next_state"))
            .query(&[("lobby_id", lobby_id)]);
        self.execute_ack(request).await
    }

    /// Places a bet for the current betting question.
    pub async fn bet_money(&self, lobby_id: &str, money_bet: i64) -> bool {
        let request = self
            .http
            .get(self.endpoint("bet_money"))
            .query(&[("lobby_id", lobby_id)])
            .query(&[("money_bet", money_bet)]);
        self.execute_ack(request).await
    }

    /// Selects an opponent for the current versus question.
    pub async fn attack_player(&self, lobby_id: &str, vs_player: &str) -> bool {
        let request = self
            .http
            .get(self.endpoint("attack_player"))
            .query(&[("lobby_id", lobby_id), ("vs_player", vs_player)]);
        self.execute_ack(request).await
    }

    /// Submits an answer for the current question.
    pub async fn answer_question(&self, lobby_id: &str, answer: &str) -> bool {
        let request = self
            .http
            .get(self.endpoint("answer_question"))
            .query(&[("lobby_id", lobby_id), ("answer", answer)]);
        self.execute_ack(request).await
    }

    /// Spends a joker and fetches the revealed distractor answers.
    pub async fn get_joker(&self, lobby_id: &str) -> Vec<Value> {
        self.fetch_lobby_list("get_joker", lobby_id).await
    }

    fn endpoint(&self, name: &str) -> String {
        // api_base is normalized to end with '/'.
        format!("{}{}", self.api_base, name)
    }

    async fn fetch_lobby_list(&self, name: &str, lobby_id: &str) -> Vec<Value> {
        let request = self
            .http
            .get(self.endpoint(name))
            .query(&[("lobby_id", lobby_id)]);
        self.fetch_list(request).await
    }

    async fn fetch_list(&self, request: RequestBuilder) -> Vec<Value> {
        match self.execute(request, &[]).await {
            Classified::Success(response) => {
                self.decode_json(response).await.unwrap_or_default()
            }
            _ => Vec::new(),
        }
    }

    async fn execute_ack(&self, request: RequestBuilder) -> bool {
        matches!(self.execute(request, &[]).await, Classified::Success(_))
    }

    // Sends one request and classifies the response. Statuses listed in
    // `silent` resolve without a notification; every other failure is
    // reported through the sink exactly once.
    async fn execute(&self, request: RequestBuilder, silent: &[StatusCode]) -> Classified {
        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(error = %err, "request transport error");
                self.sink.notify(&format!("{}\n{err}", self.failure_line()));
                return Classified::Failed;
            }
        };

        let status = response.status();
        if status.is_success() {
            return Classified::Success(response);
        }

        // Read the body as text either way; it carries the backend's
        // diagnostic message.
        let body = response.text().await.unwrap_or_default();
        if silent.contains(&status) {
            tracing::debug!(%status, "request resolved silently");
            return Classified::Silent(status, body);
        }

        tracing::warn!(%status, %body, "request failed");
        let reason = status.canonical_reason().unwrap_or("");
        self.sink.notify(&format!(
            "{}\n{} {}\n{}",
            self.failure_line(),
            status.as_u16(),
            reason,
            body
        ));
        Classified::Failed
    }

    async fn decode_json<T: DeserializeOwned>(&self, response: reqwest::Response) -> Option<T> {
        match response.json::<T>().await {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(error = %err, "response decode error");
                self.sink.notify(&format!("{}\n{err}", self.failure_line()));
                None
            }
        }
    }

    fn failure_line(&self) -> &'static str {
        i18n::text_or_key(self.locale, CONNECTION_FAILED_KEY)
    }
}

fn normalized(base: &str) -> Result<Url, ClientError> {
    let mut url = Url::parse(base).map_err(ClientError::InvalidBaseUrl)?;
    if !url.path().ends_with('/') {
        url.set_path(&format!("{}/", url.path()));
    }
    Ok(url)
}
