use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;
use url::ParseError;

#[derive(Debug, Error)]
pub enum FtkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] ParseError),

    #[error("Figma API error (status: {status:?}): {message}")]
    FigmaApi {
        status: Option<StatusCode>,
        message: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl FtkError {
    pub fn figma_api(status: Option<StatusCode>, message: impl Into<String>) -> Self {
        FtkError::FigmaApi {
            status,
            message: message.into(),
        }
    }

    pub fn to_payload(&self) -> ErrorPayload {
        match self {
            FtkError::Io(e) => ErrorPayload::new(
                ErrorCategory::Filesystem,
                e.to_string(),
                "Check that the output directory is writable.",
            ),
            FtkError::Network(e) => ErrorPayload::new(
                ErrorCategory::Network,
                e.to_string(),
                "Check connectivity/proxy/VPN and retry.",
            ),
            FtkError::InvalidUrl(e) => ErrorPayload::new(
                ErrorCategory::Config,
                e.to_string(),
                "Verify base_url in the config file (e.g., https://api.figma.com).",
            ),
            FtkError::FigmaApi { status, message } => {
                let remediation = match status.map(|s| s.as_u16()) {
                    Some(401) | Some(403) => {
                        "Check FIGMA_TOKEN and that it has access to the file."
                    }
                    Some(404) => "Check the file key (FIGMA_FILE_KEY or --file-key).",
                    Some(429) => "Rate limited; wait before retrying.",
                    _ => "Check FIGMA_TOKEN/file key and rate limits; retry after waiting.",
                };
                ErrorPayload::new(
                    ErrorCategory::Figma,
                    format!("Figma API error (status {:?}): {}", status, message),
                    remediation,
                )
            }
            FtkError::Serialization(e) => ErrorPayload::new(
                ErrorCategory::Figma,
                e.to_string(),
                "The Figma response could not be parsed; run with --verbose for details.",
            ),
            FtkError::NodeNotFound(id) => ErrorPayload::new(
                ErrorCategory::NotFound,
                format!("Node {id} not found in Figma response"),
                "Use a node id from the Figma URL (node-id=12-34 or 12:34).",
            ),
            FtkError::Config(msg) => {
                let lower = msg.to_ascii_lowercase();
                if lower.contains("figma_token") || lower.contains("figma token") {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Set FIGMA_TOKEN (or FIGMA_OAUTH_TOKEN) before running.",
                    )
                } else if lower.contains("file key") {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Set FIGMA_FILE_KEY or pass --file-key <FILE_KEY>.",
                    )
                } else if lower.contains("config") {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Fix the TOML config file or remove it to use defaults.",
                    )
                } else {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Check flags/paths and required tokens.",
                    )
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FtkError>;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Config,
    Network,
    Figma,
    Filesystem,
    NotFound,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub category: ErrorCategory,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

impl ErrorPayload {
    pub fn new(category: ErrorCategory, message: String, remediation: impl Into<String>) -> Self {
        Self {
            category,
            message,
            remediation: Some(remediation.into()),
        }
    }
}
