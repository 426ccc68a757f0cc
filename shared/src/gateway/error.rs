use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("gateway transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered, but with an error status.
    #[error("gateway request failed: {status} {message}")]
    Api { status: u16, message: String },

    /// The session key was missing, expired or revoked. The login guard
    /// turns this into a redirect to the login flow.
    #[error("session is not valid")]
    InvalidSession,
}
