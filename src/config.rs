use std::{env, time::Duration};

// Client connection defaults (not gameplay tuning).

pub fn api_base_url() -> String {
    env::var("GAMESHOW_API_URL").unwrap_or_else(|_| "http://127.0.0.1:8000/api/".to_string())
}

pub fn events_base_url() -> String {
    env::var("GAMESHOW_EVENTS_URL").unwrap_or_else(|_| "http://127.0.0.1:8000/events/".to_string())
}

pub fn request_timeout() -> Duration {
    let millis = env::var("GAMESHOW_REQUEST_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(10_000);
    Duration::from_millis(millis)
}
