//! Contact Form Wire Types
//!
//! Request and response bodies exchanged with the contact endpoint. Sending
//! is the host's business; this module only shapes and validates the data.
//!
//! # Wire Format
//!
//! ```text
//! request:  {"name": "...", "email": "...", "message": "..."}
//! response: {"success": true, "id": "..."}   or   {"error": "..."}
//! ```
//!
//! # Validation
//!
//! - Every field is non-empty after trimming
//! - `email` has exactly one `@` with a dotted domain and no whitespace
//! - Length limits per field (in characters)
//! - No control characters, except newlines and tabs in `message`

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Limits
// =============================================================================

/// Maximum name length in characters
pub const MAX_NAME_LEN: usize = 200;

/// Maximum email length in characters
pub const MAX_EMAIL_LEN: usize = 254;

/// Maximum message length in characters
pub const MAX_MESSAGE_LEN: usize = 5_000;

// =============================================================================
// Error Types
// =============================================================================

/// Contact form validation errors
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactError {
    /// A required field is blank
    #[error("{field} is required")]
    MissingField {
        /// Name of the blank field
        field: String,
    },

    /// A field is longer than allowed
    #[error("{field} is {len} characters (max: {max})")]
    TooLong {
        /// Name of the field
        field: String,
        /// Length in characters
        len: usize,
        /// Limit in characters
        max: usize,
    },

    /// The email address is not plausible
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    /// A field contains a control character
    #[error("{field} contains control character U+{codepoint:04X}")]
    ControlCharacter {
        /// Name of the field
        field: String,
        /// Offending code point
        codepoint: u32,
    },
}

// =============================================================================
// Request
// =============================================================================

/// Body posted to the contact endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    /// Sender's name
    pub name: String,
    /// Reply address
    pub email: String,
    /// Free-form message
    pub message: String,
}

impl ContactRequest {
    /// Build a request with trimmed fields
    #[must_use]
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// Check the request before it is sent
    ///
    /// # Errors
    ///
    /// Returns the first problem found, checking name, email and message in
    /// that order.
    pub fn validate(&self) -> Result<(), ContactError> {
        check_field("name", &self.name, MAX_NAME_LEN, false)?;
        check_field("email", &self.email, MAX_EMAIL_LEN, false)?;
        if !is_plausible_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }
        check_field("message", &self.message, MAX_MESSAGE_LEN, true)
    }

    /// Validate and serialize to the JSON body
    ///
    /// # Errors
    ///
    /// Returns the validation error, if any.
    pub fn to_json(&self) -> Result<String, ContactError> {
        self.validate()?;
        // A struct of strings always serializes
        Ok(serde_json::to_string(self).unwrap_or_default())
    }
}

fn check_field(
    field: &str,
    value: &str,
    max: usize,
    multiline: bool,
) -> Result<(), ContactError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ContactError::MissingField {
            field: field.to_string(),
        });
    }

    let len = value.chars().count();
    if len > max {
        return Err(ContactError::TooLong {
            field: field.to_string(),
            len,
            max,
        });
    }

    let allowed = |c: char| multiline && matches!(c, '\n' | '\r' | '\t');
    if let Some(c) = value.chars().find(|&c| c.is_control() && !allowed(c)) {
        return Err(ContactError::ControlCharacter {
            field: field.to_string(),
            codepoint: u32::from(c),
        });
    }

    Ok(())
}

fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

// =============================================================================
// Response
// =============================================================================

/// Body returned by the contact endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContactResponse {
    /// Message accepted
    Sent {
        /// Always `true`
        success: bool,
        /// Provider message id
        id: String,
    },
    /// Message rejected
    Failed {
        /// Reason given by the endpoint
        error: String,
    },
}

impl ContactResponse {
    /// Whether the message was accepted
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Sent { success: true, .. })
    }

    /// Error text, if the endpoint reported one
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { error } => Some(error),
            Self::Sent { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn request() -> ContactRequest {
        ContactRequest::new(
            "  Ada Lovelace ",
            "ada@example.com",
            "We'd like to automate our invoicing.\nCan we talk?",
        )
    }

    #[test]
    fn test_valid_request() {
        let request = request();
        assert_eq!(request.name, "Ada Lovelace");
        assert!(request.validate().is_ok());

        let json = request.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["email"], "ada@example.com");
    }

    #[test]
    fn test_blank_field_rejected() {
        let request = ContactRequest::new("Ada", "ada@example.com", "   ");
        assert_eq!(
            request.validate(),
            Err(ContactError::MissingField {
                field: "message".to_string()
            })
        );
    }

    #[test]
    fn test_invalid_emails() {
        for email in ["ada", "ada@", "@example.com", "ada@example", "a@b@c.com", "ada @x.io", "ada@x..io"] {
            let request = ContactRequest::new("Ada", email, "Hello");
            assert!(
                matches!(request.validate(), Err(ContactError::InvalidEmail(_))),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn test_too_long_rejected() {
        let request = ContactRequest::new("Ada", "ada@example.com", &"x".repeat(MAX_MESSAGE_LEN + 1));
        assert!(matches!(
            request.validate(),
            Err(ContactError::TooLong { len, max, .. }) if len == MAX_MESSAGE_LEN + 1 && max == MAX_MESSAGE_LEN
        ));
    }

    #[test]
    fn test_control_characters() {
        let request = ContactRequest::new("Ada\u{7}", "ada@example.com", "Hi");
        assert_eq!(
            request.validate(),
            Err(ContactError::ControlCharacter {
                field: "name".to_string(),
                codepoint: 7
            })
        );

        let request = ContactRequest::new("Ada", "ada@example.com", "line one\n\tline two");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_parse_responses() {
        let sent: ContactResponse =
            serde_json::from_str(r#"{"success": true, "id": "msg_123"}"#).unwrap();
        assert!(sent.is_success());
        assert_eq!(sent.error(), None);

        let failed: ContactResponse =
            serde_json::from_str(r#"{"error": "rate limited"}"#).unwrap();
        assert!(!failed.is_success());
        assert_eq!(failed.error(), Some("rate limited"));
    }
}
