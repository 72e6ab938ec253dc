use crate::models::submission::Submission;
use serde_json::Value;

pub const HEADER: &str = "رسالة جديدة من الموقع:";

/// `first_name` becomes `First Name`. Only the first character of each
/// alphanumeric run changes case.
pub fn format_key(key: &str) -> String {
    let mut formatted = String::with_capacity(key.len());
    let mut in_word = false;
    for c in key.chars().map(|c| if c == '_' { ' ' } else { c }) {
        if c.is_alphanumeric() {
            if in_word {
                formatted.push(c);
            } else {
                formatted.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            formatted.push(c);
            in_word = false;
        }
    }
    formatted
}

pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[tracing::instrument(skip(submission), fields(fields = submission.len()))]
pub fn render_message(submission: &Submission) -> String {
    let lines: String = submission
        .fields()
        .map(|(key, value)| format!("**{}:** {}\n", format_key(key), format_value(value)))
        .collect();
    format!("{HEADER}\n\n{lines}")
}
