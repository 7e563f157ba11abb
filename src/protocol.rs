// Wire DTOs and per-operation outcome types for the gameshow backend API.
// Payloads the client never interprets (player records, game events, joker
// answers, question-set descriptors) stay `serde_json::Value`.

use serde::{Deserialize, Serialize};

/// Identity the backend associates with the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerIdentity {
    pub name: String,
    pub session_id: String,
}

// The backend encodes the identity as a `(name, uuid)` array.
impl<'de> Deserialize<'de> for PlayerIdentity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (name, session_id) = <(String, String)>::deserialize(deserializer)?;
        Ok(Self { name, session_id })
    }
}

/// Freshly created lobby, decoded from the backend's `[lobby_id, admin]` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedLobby {
    pub lobby_id: String,
    pub admin: bool,
}

impl<'de> Deserialize<'de> for CreatedLobby {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (lobby_id, admin) = <(String, bool)>::deserialize(deserializer)?;
        Ok(Self { lobby_id, admin })
    }
}

/// Result of `create_lobby`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateLobbyOutcome {
    Created(CreatedLobby),
    Failed,
}

impl CreateLobbyOutcome {
    /// Returns true if the lobby was created.
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Result of `join_lobby`. `NotFound` and `Closed` are silent outcomes the
/// caller renders contextually; `Failed` has already been reported through
/// the notification sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinLobbyOutcome {
    Joined { admin: bool, new_name: String },
    NotFound { message: String },
    Closed { message: String },
    Failed,
}

/// Success body of `join_lobby`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct JoinLobbyResponse {
    pub admin: bool,
    pub new_name: String,
}

/// Lobby settings the admin submits via `update_lobby`.
///
/// Fields are typed, so numbers always serialize as JSON numbers and `open`
/// as a JSON boolean regardless of where the caller sourced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LobbyPreferences {
    pub open: bool,
    pub initial_money: i64,
    pub initial_jokers: u64,
    pub normal_q_money: i64,
    pub estimation_q_money: i64,
    pub question_set: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateLobbyRequest<'a> {
    pub lobby_id: &'a str,
    pub open: bool,
    pub initial_money: i64,
    pub initial_jokers: u64,
    pub normal_q_money: i64,
    pub estimation_q_money: i64,
    pub question_set: &'a str,
}

impl<'a> UpdateLobbyRequest<'a> {
    pub fn new(lobby_id: &'a str, prefs: &'a LobbyPreferences) -> Self {
        Self {
            lobby_id,
            open: prefs.open,
            initial_money: prefs.initial_money,
            initial_jokers: prefs.initial_jokers,
            normal_q_money: prefs.normal_q_money,
            estimation_q_money: prefs.estimation_q_money,
            question_set: &prefs.question_set,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UploadQuestionsRequest<'a> {
    pub lobby_id: &'a str,
    pub questions: &'a [serde_json::Value],
}

#[derive(Debug, Serialize)]
pub(crate) struct KickPlayerRequest<'a> {
    pub lobby_id: &'a str,
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct SetPlayerAttributesRequest<'a> {
    pub lobby_id: &'a str,
    pub name: &'a str,
    pub money: i64,
    pub jokers: u64,
}
