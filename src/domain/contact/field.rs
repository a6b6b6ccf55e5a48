use derive_more::Display;

/// A form field that must carry a non-empty value.
///
/// Whitespace counts as content: only absent and empty values are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "{}", _0)]
pub struct RequiredField(String);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("{0} is required")]
pub struct MissingField(pub &'static str);

impl RequiredField {
    pub fn parse(field: &'static str, value: Option<String>) -> Result<Self, MissingField> {
        match value {
            Some(value) if !value.is_empty() => Ok(Self(value)),
            _ => Err(MissingField(field)),
        }
    }
}

impl AsRef<str> for RequiredField {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
