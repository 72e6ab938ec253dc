use serde::{Deserialize, Serialize};

pub const SENT: &str = "Message sent successfully.";

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct RelayResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RelayResult {
    pub fn sent() -> Self {
        Self {
            success: true,
            message: Some(SENT.to_string()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sent_shape() {
        let json = serde_json::to_string(&RelayResult::sent()).unwrap();
        assert_eq!(
            json,
            r#"{"success":true,"message":"Message sent successfully."}"#
        );
    }

    #[test]
    fn failed_shape() {
        let json = serde_json::to_string(&RelayResult::failed("boom")).unwrap();
        assert_eq!(json, r#"{"success":false,"error":"boom"}"#);
    }
}
