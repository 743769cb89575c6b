//! CLI error types with miette diagnostics.
//!
//! Maps api/config/core errors into user-facing errors with actionable
//! help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use homegate_config::ConfigError;
use homegate_core::{InvalidMac, ScheduleError};

/// Exit codes, one per failure class.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Connection down: could not reach the router")]
    #[diagnostic(
        code(homegate::connection_down),
        help(
            "Check that the gateway address is right and the router is up.\n\
             See the configured gateway with: homegate config show"
        )
    )]
    ConnectionDown {
        #[source]
        source: reqwest::Error,
    },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed: username or password is incorrect")]
    #[diagnostic(
        code(homegate::auth_failed),
        help("Update the stored credentials with: homegate config init")
    )]
    AuthFailed,

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(code(homegate::not_found), help("Run: homegate {list_command}"))]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(homegate::validation))]
    Validation { field: String, reason: String },

    // ── Router ───────────────────────────────────────────────────────
    #[error("Router error: {message}")]
    #[diagnostic(code(homegate::router))]
    Router { message: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration file not found")]
    #[diagnostic(
        code(homegate::no_config),
        help(
            "Create one with: homegate config init\n\
             Expected at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(homegate::config))]
    Config { message: String },

    // ── IO ───────────────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionDown { .. } => exit_code::CONNECTION,
            Self::AuthFailed => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── Error mappings ───────────────────────────────────────────────────

impl From<homegate_api::Error> for CliError {
    fn from(err: homegate_api::Error) -> Self {
        use homegate_api::Error as Api;

        match err {
            Api::Authentication => Self::AuthFailed,

            Api::Transport(source) => Self::ConnectionDown { source },

            Api::InvalidGateway { gateway } => Self::Validation {
                field: "gateway".into(),
                reason: format!("{gateway:?} is not a bare address like 192.168.1.1"),
            },

            Api::InvalidUrl(e) => Self::Validation {
                field: "gateway".into(),
                reason: e.to_string(),
            },

            Api::SessionKey { page } => Self::Router {
                message: format!("session key not found on {page}"),
            },

            Api::UnexpectedStatus { status, path } => Self::Router {
                message: format!("unexpected HTTP status {status} from {path}"),
            },
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidMac(e) => Self::Validation {
                field: "mac".into(),
                reason: e.to_string(),
            },
            ConfigError::EmptyAlias => Self::Validation {
                field: "name".into(),
                reason: "alias name cannot be empty".into(),
            },
            other => Self::Config {
                message: other.to_string(),
            },
        }
    }
}

impl From<InvalidMac> for CliError {
    fn from(err: InvalidMac) -> Self {
        Self::Validation {
            field: "mac".into(),
            reason: err.to_string(),
        }
    }
}

impl From<ScheduleError> for CliError {
    fn from(err: ScheduleError) -> Self {
        let field = match err {
            ScheduleError::InvalidTime { .. } => "time",
            ScheduleError::UnknownDay { .. } | ScheduleError::TooManyDays { .. } => "days",
        };
        Self::Validation {
            field: field.into(),
            reason: err.to_string(),
        }
    }
}
