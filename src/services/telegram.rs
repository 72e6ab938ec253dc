use crate::models::{error::RelayError, message::Message};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info};

/// # Errors
///
/// `RelayError::Transport` if the request could not be sent,
/// `RelayError::Upstream` if the Bot API answered with a non-success status.
#[tracing::instrument(
    skip(client, token, message),
    fields(chat_id = %message.chat_id, parse_mode = %message.parse_mode)
)]
pub async fn send_message(
    client: &reqwest::Client,
    api_url: &str,
    token: &SecretString,
    message: &Message,
) -> Result<(), RelayError> {
    let url = format!("{api_url}/bot{}/sendMessage", token.expose_secret());

    debug!(?message, "Sending message");
    // reqwest errors embed the URL, which carries the token.
    let response = client
        .post(&url)
        .json(message)
        .send()
        .await
        .map_err(reqwest::Error::without_url)?;
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .map_err(reqwest::Error::without_url)?;
        return Err(RelayError::Upstream {
            status: status.as_u16(),
            body,
        });
    }
    info!(%status, "Sent message");
    Ok(())
}
