use thiserror::Error;

/// Local precondition failures. These never reach the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name required")]
    NameRequired,
    #[error("file required")]
    FileRequired,
    #[error("image required")]
    ImageRequired,
}

impl ValidationError {
    /// Text shown to the operator on the status line.
    pub fn prompt(&self) -> &'static str {
        match self {
            ValidationError::NameRequired => "Please enter a person's name.",
            ValidationError::FileRequired => "Please select an image.",
            ValidationError::ImageRequired => "Please select an image first.",
        }
    }
}

/// The request could not complete, or came back in a shape we do not accept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("{0}")]
    Network(String),
    #[error("Request failed with status code {status}")]
    Status {
        status: u16,
        status_text: String,
        body: String,
    },
    #[error("Malformed response: {reason}")]
    Malformed { reason: String, body: String },
    #[error("Could not build request: {0}")]
    Request(String),
}

impl TransportError {
    /// Human readable description, if there is anything worth showing.
    pub fn description(&self) -> Option<String> {
        match self {
            TransportError::Network(desc) if desc.trim().is_empty() => None,
            other => Some(other.to_string()),
        }
    }
}

/// Everything a controller can end up reporting for one operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("backend reported failure")]
    Backend { detail: Option<String> },
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Why `submit` handed back no request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("a request is already in flight")]
    Busy,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("image payload is not valid base64: {0}")]
    InvalidPayload(#[from] base64::DecodeError),
}
