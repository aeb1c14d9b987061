//! Message body validation

use super::ValidationError;

/// Maximum length for a point's message body.
const MAX_BODY_LEN: usize = 4096;

/// Validated message body.
///
/// The original text is kept as submitted; trimming is only applied for the
/// emptiness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBody(String);

impl MessageBody {
    /// Create a message body.
    ///
    /// # Rules
    /// - Must be non-empty after trimming
    /// - Max 4096 bytes
    ///
    /// # Example
    /// ```
    /// use mapdrop_core::MessageBody;
    ///
    /// assert!(MessageBody::new("meet here").is_ok());
    /// assert!(MessageBody::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::Empty { field: "message" });
        }

        if s.len() > MAX_BODY_LEN {
            return Err(ValidationError::TooLong {
                field: "message",
                max: MAX_BODY_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for MessageBody {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
