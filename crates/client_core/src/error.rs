use thiserror::Error;

/// Failure classes for talking to the agenda service. A 404 on the list
/// endpoint is not represented here: that is a control-flow signal handled
/// inside the load path, see [`crate::api::ListOutcome`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx status with a parseable error body.
    #[error("error {status}: {detail}")]
    Api { status: u16, detail: String },

    /// Non-2xx status whose body could not be parsed; the status still
    /// names the failure.
    #[error("error {status}: unreadable error body")]
    Status { status: u16 },

    /// A 2xx response whose body was not the expected shape.
    #[error("unexpected response shape: {what}")]
    UnexpectedShape { what: &'static str },

    /// Edit flows look the contact up locally first; the service has no
    /// single-contact read to fall back on.
    #[error("contact {id} is not in the loaded list; reload and try again")]
    ContactNotLoaded { id: i64 },

    /// A create/update draft with an empty mandatory field, rejected
    /// before any request is issued.
    #[error("{field} must not be empty")]
    InvalidDraft { field: &'static str },
}

impl ClientError {
    /// HTTP status carried by this error, when there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } | ClientError::Status { status } => Some(*status),
            ClientError::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
