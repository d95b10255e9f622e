use serde::{Deserialize, Serialize};

use super::{is_blank, is_valid_email, FieldErrors};

const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    /// Set by the footer form.
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if is_blank(&self.name) {
            errors.insert("name", "Name is required");
        }

        if is_blank(&self.email) {
            errors.insert("email", "Email is required");
        } else if !is_valid_email(&self.email) {
            errors.insert("email", "Please enter a valid email");
        }

        let message = self.message.trim();
        if message.is_empty() {
            errors.insert("message", "Message is required");
        } else if message.chars().count() < MIN_MESSAGE_CHARS {
            errors.insert("message", "Message must be at least 10 characters");
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            company: String::new(),
            subject: String::new(),
            message: "We would like a chatbot demo.".into(),
        }
    }

    #[test]
    fn test_valid_without_company() {
        assert!(filled().validate().is_empty());
    }

    #[test]
    fn test_all_required() {
        let errors = ContactForm::default().validate();
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("message"), Some("Message is required"));
        assert!(!errors.has("company"));
        assert!(!errors.has("subject"));
    }

    #[test]
    fn test_invalid_email() {
        let form = ContactForm {
            email: "ada.example.com".into(),
            ..filled()
        };
        assert_eq!(form.validate().get("email"), Some("Please enter a valid email"));
    }

    #[test]
    fn test_message_length_counts_trimmed_chars() {
        let form = ContactForm {
            message: "   too short   ".into(),
            ..filled()
        };
        assert_eq!(
            form.validate().get("message"),
            Some("Message must be at least 10 characters")
        );

        let form = ContactForm {
            message: "ünïcødé ök".into(),
            ..filled()
        };
        assert!(form.validate().is_empty());
    }
}
