use thiserror::Error;

/// Top-level error type for the `homegate-api` crate.
///
/// Covers every failure mode of talking to the router: credentials,
/// transport, unexpected responses, and extraction misses. The CLI maps
/// these into user-facing diagnostics with exit codes.
#[derive(Debug, Error)]
pub enum Error {
    /// The router answered 401: wrong username or password.
    #[error("authentication failed: username or password is incorrect")]
    Authentication,

    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("connection down: {0}")]
    Transport(#[from] reqwest::Error),

    /// Gateway string the session cannot build a base URL from.
    #[error("invalid gateway {gateway:?} (expected a bare address like 192.168.1.1)")]
    InvalidGateway { gateway: String },

    /// URL construction error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The router answered with a status the admin pages never use.
    #[error("unexpected HTTP status {status} from {path}")]
    UnexpectedStatus { status: u16, path: String },

    /// The page the session key is mined from carried no numeric token.
    #[error("session key not found on {page}")]
    SessionKey { page: String },
}

impl Error {
    /// Whether this failure means the configured credentials are wrong.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Authentication)
    }

    /// Whether this failure means the router could not be reached at all.
    pub fn is_connection(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_connect() || e.is_timeout(),
            _ => false,
        }
    }
}
