use super::error::RelayError;
use serde_json::{Map, Value};

/// Form fields in the order the client sent them.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Submission(Map<String, Value>);

impl Submission {
    /// # Errors
    ///
    /// `RelayError::Json` if the body is not valid JSON,
    /// `RelayError::NotAnObject` if it is JSON but not an object.
    pub fn from_slice(body: &[u8]) -> Result<Self, RelayError> {
        match serde_json::from_slice::<Value>(body)? {
            Value::Object(fields) => Ok(Self(fields)),
            _ => Err(RelayError::NotAnObject),
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Value)> for Submission {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
