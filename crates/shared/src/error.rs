use serde::{Deserialize, Serialize};

/// Machine-readable error body the agenda service attaches to non-2xx
/// responses. The `detail` field is usually a string but the service is
/// free to send structured values (validation errors arrive as arrays).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: serde_json::Value,
}

impl ErrorBody {
    /// Best-effort parse; `None` when the body is not the expected shape.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        serde_json::from_slice(bytes).ok()
    }

    /// The detail rendered for humans: bare strings lose their quotes,
    /// anything else is serialized as JSON.
    pub fn detail_text(&self) -> String {
        match &self.detail {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}
