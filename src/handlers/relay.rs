use crate::models::{
    error::RelayError, message::Message, result::RelayResult, submission::Submission,
};
use crate::services::{render::render_message, telegram::send_message};
use crate::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tap::Tap;
use tracing::{debug, info};

#[tracing::instrument(skip(state, headers, body))]
pub async fn relay_handler(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, RelayError> {
    if method == Method::OPTIONS {
        debug!("Answering preflight");
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    if method != Method::POST {
        return Err(RelayError::MethodNotAllowed);
    }
    if !is_json(&headers) {
        return Err(RelayError::UnsupportedMediaType);
    }

    let submission = Submission::from_slice(&body)?
        .tap(|submission| info!(fields = submission.len(), "Got submission"));
    let (token, chat_id) = state.credentials.require()?;

    let message = Message::html(chat_id, render_message(&submission));
    send_message(&state.reqwest_client, &state.api_url, token, &message).await?;

    Ok((StatusCode::OK, Json(RelayResult::sent())).into_response())
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.to_ascii_lowercase().contains("application/json"))
}
