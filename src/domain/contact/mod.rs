mod field;

pub use self::field::{MissingField, RequiredField};

/// A validated contact form message. Lives for a single request.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub name: RequiredField,
    pub email: RequiredField,
    pub message: RequiredField,
}

impl ContactSubmission {
    pub fn parse(
        name: Option<String>,
        email: Option<String>,
        message: Option<String>,
    ) -> Result<Self, MissingField> {
        Ok(Self {
            name: RequiredField::parse("name", name)?,
            email: RequiredField::parse("email", email)?,
            message: RequiredField::parse("message", message)?,
        })
    }

    /// The message split at newlines, ready to be joined with line breaks.
    pub fn message_lines(&self) -> impl Iterator<Item = &str> {
        self.message.as_ref().split('\n')
    }
}
