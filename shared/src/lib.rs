use std::env;

pub mod auth;
pub mod gateway;
pub mod render;

/// How `GET /best` answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingMode {
    /// HTML page, or a bare `{"data": ...}` body when the `json` query
    /// flag is set.
    Page,
    /// Always JSON, with a `count` field alongside `data`.
    Api,
}

impl ListingMode {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::to_ascii_lowercase).as_deref() {
            Some("api") => ListingMode::Api,
            _ => ListingMode::Page,
        }
    }
}

/// Deployment knobs, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the image-data server.
    pub gateway_url: String,
    /// Where unauthenticated requests get bounced to.
    pub login_url: String,
    /// Name of the session cookie issued by the host platform.
    pub session_cookie: String,
    /// When set, the rating listing only counts annotations in this
    /// namespace.
    pub rating_namespace: Option<String>,
    pub listing_mode: ListingMode,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            gateway_url: env::var("GATEWAY_URL")
                .unwrap_or_else(|_| "http://localhost:4064".to_string()),
            login_url: env::var("LOGIN_URL").unwrap_or_else(|_| "/login".to_string()),
            session_cookie: env::var("SESSION_COOKIE")
                .unwrap_or_else(|_| "sessionid".to_string()),
            rating_namespace: env::var("RATING_NAMESPACE").ok().filter(|ns| !ns.is_empty()),
            listing_mode: ListingMode::parse(env::var("LISTING_MODE").ok().as_deref()),
        }
    }
}

/// Per-process state threaded through the request handlers.
pub struct AppState {
    pub http: reqwest::Client,
    pub config: Config,
}
