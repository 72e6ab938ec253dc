use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ParseMode {
    #[serde(rename = "HTML")]
    #[display(fmt = "HTML")]
    Html,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Message {
    pub chat_id: String,
    pub text: String,
    pub parse_mode: ParseMode,
}

impl Message {
    pub fn html(chat_id: impl Into<String>, text: String) -> Self {
        Self {
            chat_id: chat_id.into(),
            text,
            parse_mode: ParseMode::Html,
        }
    }
}
