//! The `{ success, data }` response envelope used by every backend route.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShopdeskError};

/// Pagination block attached to list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    #[serde(default)]
    pub total_pages: u32,
}

/// Error payload; the backend sends either a bare string or an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiErrorBody {
    Text(String),
    Detailed {
        message: String,
        #[serde(default)]
        code: Option<String>,
    },
}

impl ApiErrorBody {
    pub fn message(&self) -> &str {
        match self {
            Self::Text(message) => message,
            Self::Detailed { message, .. } => message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
    #[serde(default)]
    pub meta: Option<PageMeta>,
}

fn default_success() -> bool {
    true
}

impl<T> ApiEnvelope<T> {
    /// Best human-readable explanation the server gave, if any.
    pub fn server_message(&self) -> Option<&str> {
        self.error
            .as_ref()
            .map(ApiErrorBody::message)
            .or(self.message.as_deref())
    }

    /// Unwraps the payload, turning `success: false` into an HTTP error that
    /// carries `status` and the server message.
    pub fn into_data(self, status: u16) -> Result<T> {
        if !self.success {
            let message = self
                .server_message()
                .unwrap_or("Request failed")
                .to_string();
            return Err(ShopdeskError::http(status, message));
        }
        self.data
            .ok_or_else(|| ShopdeskError::serialization("JSON", "response envelope has no data"))
    }

    /// Like [`into_data`](Self::into_data) but keeps the pagination block.
    pub fn into_page(self, status: u16) -> Result<(T, Option<PageMeta>)> {
        let meta = self.meta;
        self.into_data(status).map(|data| (data, meta))
    }
}
