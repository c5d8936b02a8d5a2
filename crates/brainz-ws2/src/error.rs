// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MusicBrainzError>;

#[derive(Debug, Error)]
pub enum MusicBrainzError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Malformed response document: {0}")]
    MalformedDocument(String),

    #[error("Failed to decode field `{field}` from {raw:?}: {reason}")]
    FieldDecode {
        field: String,
        raw: String,
        reason: String,
    },

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Coarse classification of a [`MusicBrainzError`].
///
/// `Transport` failures mean the service could not be reached or refused the
/// request; the other kinds mean it answered but the exchange is unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    MalformedDocument,
    FieldDecode,
    InvalidQuery,
}

impl MusicBrainzError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::RequestFailed(_)
            | Self::RateLimitExceeded
            | Self::NotFound(_)
            | Self::ApiError { .. } => ErrorKind::Transport,
            Self::MalformedDocument(_) => ErrorKind::MalformedDocument,
            Self::FieldDecode { .. } => ErrorKind::FieldDecode,
            Self::InvalidQuery(_) | Self::InvalidUrl(_) => ErrorKind::InvalidQuery,
        }
    }

    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }

    pub(crate) fn field(field: &str, raw: &str, reason: impl ToString) -> Self {
        Self::FieldDecode {
            field: field.to_string(),
            raw: raw.to_string(),
            reason: reason.to_string(),
        }
    }
}
