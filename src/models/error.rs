use super::result::RelayResult;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("Unsupported Media Type")]
    UnsupportedMediaType,
    #[error("Missing BOT_TOKEN or CHAT_ID")]
    MissingCredentials,
    #[error("{source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
    #[error("request body must be a JSON object")]
    NotAnObject,
    #[error("Telegram API Error: {status} - {body}")]
    Upstream { status: u16, body: String },
    #[error("{source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },
}

impl RelayError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::MissingCredentials
            | Self::Json { .. }
            | Self::NotAnObject
            | Self::Upstream { .. }
            | Self::Transport { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_client_error() {
            warn!(%status, "Rejected request: {self}");
            return (status, self.to_string()).into_response();
        }

        error!(%status, "Error handling request: {self:?}");
        (status, Json(RelayResult::failed(self.to_string()))).into_response()
    }
}
