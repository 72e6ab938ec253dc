use crate::models::error::RelayError;
use camino::Utf8PathBuf;
use color_eyre::Result;
use config::{Config, Environment, File};
use secrecy::SecretString;
use std::env;
use tap::Tap;
use tracing::{debug, info, warn};

pub const BOT_TOKEN_VAR: &str = "BOT_TOKEN";
pub const CHAT_ID_VAR: &str = "CHAT_ID";
const CONFIG_FILE_VAR: &str = "FORMRELAY_CONFIG_FILE";

#[tracing::instrument]
pub fn new_config() -> Result<Application> {
    let base = base_config()?;
    let credentials = Credentials::from_env();
    if credentials.require().is_err() {
        warn!("{BOT_TOKEN_VAR} or {CHAT_ID_VAR} is not set, every submission will fail");
    }

    Ok(Application { base, credentials })
}

#[tracing::instrument]
pub fn new_config_with_credentials(credentials: Credentials) -> Result<Application> {
    let base = base_config()?;
    Ok(Application { base, credentials })
}

fn base_config() -> Result<formrelay_cfg::Config> {
    let mut builder = Config::builder();
    match env::var(CONFIG_FILE_VAR) {
        Ok(path) => {
            let path = Utf8PathBuf::from(path);
            info!(%path, "Reading config file");
            builder = builder.add_source(File::with_name(path.as_str()));
        }
        Err(error) => {
            info!("{CONFIG_FILE_VAR} is not specified, using defaults");
            debug!(?error);
        }
    }

    let base: formrelay_cfg::Config = builder
        .add_source(Environment::with_prefix("formrelay"))
        .build()?
        .try_deserialize()?;
    debug!(?base, "Loaded config");
    Ok(base)
}

#[derive(Clone, Debug)]
pub struct Application {
    pub base: formrelay_cfg::Config,
    pub credentials: Credentials,
}

/// Bot token and destination chat. Either may be missing; that is reported
/// per request rather than at startup.
#[derive(Clone, Debug, Default)]
pub struct Credentials {
    pub bot_token: Option<SecretString>,
    pub chat_id: Option<String>,
}

impl Credentials {
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            bot_token: non_empty(bot_token.into()).map(SecretString::from),
            chat_id: non_empty(chat_id.into()),
        }
    }

    #[tracing::instrument]
    pub fn from_env() -> Self {
        let bot_token = env::var(BOT_TOKEN_VAR)
            .ok()
            .and_then(non_empty)
            .map(SecretString::from)
            .tap(|token| debug!(present = token.is_some(), "Read bot token"));
        let chat_id = env::var(CHAT_ID_VAR)
            .ok()
            .and_then(non_empty)
            .tap(|chat_id| debug!(?chat_id, "Read chat id"));
        info!("Read credentials from environment");

        Self { bot_token, chat_id }
    }

    /// # Errors
    ///
    /// `RelayError::MissingCredentials` if either value is absent.
    pub fn require(&self) -> Result<(&SecretString, &str), RelayError> {
        match (&self.bot_token, &self.chat_id) {
            (Some(token), Some(chat_id)) => Ok((token, chat_id)),
            _ => Err(RelayError::MissingCredentials),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
