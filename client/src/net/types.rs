//! Wire DTOs for the RAG backend's HTTP API.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON payloads exactly so serde needs no
//! renames. Response types tolerate unknown fields.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Session selector the backend's document-selection model requires.
pub const DEFAULT_SELECTION_SESSION: &str = "default";

/// Identity returned by `GET auth/validate`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
}

/// Credentials posted form-encoded to `auth/login`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// Form fields in the order the backend's OAuth2 password form expects.
    pub fn fields(&self) -> [(&'static str, &str); 2] {
        [("username", self.username.as_str()), ("password", self.password.as_str())]
    }
}

/// JSON body for `auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Account summary returned from a successful signup.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SignupResponse {
    pub id: String,
    pub username: String,
}

/// A stored document as listed by `GET documents/list`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Document identifier (UUID string).
    pub id: String,
    /// Original file name.
    pub name: String,
    /// Upload timestamp, ISO-8601.
    pub created_at: String,
    /// Whether the document participates in retrieval.
    pub enabled_for_qa: bool,
}

/// JSON body for `documents/select`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DocumentSelection {
    pub session_id: String,
    pub document_ids: Vec<String>,
}

impl DocumentSelection {
    pub fn new(document_ids: Vec<String>) -> Self {
        Self { session_id: DEFAULT_SELECTION_SESSION.to_owned(), document_ids }
    }
}

/// JSON body for `rag/query`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QueryRequest {
    pub question: String,
}

/// Generated answer returned by `rag/query`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct QueryAnswer {
    pub answer: String,
}

/// Error envelope the backend attaches to non-2xx responses.
///
/// Application errors arrive as `{"error": {"code", "message"}}`; framework
/// errors as `{"detail": ...}`. Some handlers add a `type` discriminator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<ErrorDetail>,
    #[serde(default, deserialize_with = "deserialize_detail")]
    pub detail: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Structured `error` member of [`ErrorBody`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `detail` is a string for raised HTTP errors but a list of field errors for
/// request validation failures; the latter is flattened to its `msg` entries.
fn deserialize_detail<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Array(items)) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                .collect();
            if messages.is_empty() { None } else { Some(messages.join("; ")) }
        }
        Some(other) => Some(other.to_string()),
    })
}
