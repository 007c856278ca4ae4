//! Notion API error type.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::models::de::null_as_empty;

/// Errors that can occur when calling the Notion API
#[derive(Error, Debug)]
pub enum NotionApiError {
    /// The request never produced a response: DNS, connect, timeout or
    /// cancellation. The underlying error is surfaced unchanged.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Notion answered with a non-200 status and a structured error body
    #[error("{code}: {message}")]
    Api {
        /// HTTP status of the response
        status: StatusCode,
        /// Machine-readable error code, e.g. `unauthorized`
        code: String,
        /// Human-readable explanation
        message: String,
    },

    /// Notion answered with a non-200 status and a body that was not a
    /// structured error
    #[error("HTTP {}", .0.as_u16())]
    Status(StatusCode),

    /// A 200 response whose body did not match the expected shape
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

impl NotionApiError {
    /// Build the error for a non-200 response from its raw body.
    ///
    /// Falls back to [`NotionApiError::Status`] when the body is not a
    /// `{code, message}` object.
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        match serde_json::from_slice::<ErrorBody>(body) {
            Ok(err) => Self::Api {
                status,
                code: err.code,
                message: err.message,
            },
            Err(_) => Self::Status(status),
        }
    }

    /// HTTP status of the response, if one was received
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } | Self::Status(status) => Some(*status),
            Self::Transport(err) => err.status(),
            Self::Decode(_) => None,
        }
    }

    /// Returns true if the token was rejected by the API
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

/// Error payload Notion returns alongside non-200 statuses.
///
/// Missing or `null` fields decode as empty strings.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default, deserialize_with = "null_as_empty")]
    code: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    message: String,
}
