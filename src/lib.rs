pub mod client;
pub mod config;
pub mod events;
pub mod i18n;
pub mod notify;
pub mod protocol;

pub use client::{ApiClient, ClientError};
pub use events::{EventStream, StreamEvent};
pub use i18n::Locale;
pub use notify::{NotificationSink, NullSink, TracingSink};
pub use protocol::{
    CreateLobbyOutcome, CreatedLobby, JoinLobbyOutcome, LobbyPreferences, PlayerIdentity,
};
