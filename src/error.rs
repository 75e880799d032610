use crate::flows::Violations;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input for flow '{flow}': {violations}")]
    Validation {
        flow: &'static str,
        violations: Violations,
    },

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Malformed model output for flow '{flow}': {reason}")]
    Shape { flow: &'static str, reason: String },

    #[error("Template error: {0}")]
    Template(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("OpenAI error: {0}")]
    OpenAi(#[from] async_openai::error::OpenAIError),
}

/// Coarse classification callers use to decide how to report a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never left the gateway.
    Validation,
    Provider,
    Shape,
    Internal,
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    pub fn shape(flow: &'static str, reason: impl Into<String>) -> Self {
        Self::Shape {
            flow,
            reason: reason.into(),
        }
    }

    pub fn template(msg: impl Into<String>) -> Self {
        Self::Template(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Provider(_) | Self::Network(_) | Self::OpenAi(_) => ErrorKind::Provider,
            Self::Shape { .. } => ErrorKind::Shape,
            Self::Config(_)
            | Self::Template(_)
            | Self::Serialization(_)
            | Self::Yaml(_)
            | Self::Io(_)
            | Self::AddrParse(_) => ErrorKind::Internal,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }
}
