use super::field::{required, FieldError};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct ContactName(String);

impl ContactName {
    pub fn parse(value: Option<Value>) -> Result<ContactName, FieldError> {
        required("name", value).map(Self)
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContactName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
