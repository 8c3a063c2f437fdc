use regex::Regex;
use std::sync::OnceLock;

pub const INCOMPLETE_MESSAGE: &str = "Please complete all required fields.";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const SENDING_MESSAGE: &str = "Sending message...";

const EMAIL_PATTERN: &str = r"^\S+@\S+\.\S+$";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactError {
    Incomplete,
    InvalidEmail,
}

impl ContactError {
    pub fn message(self) -> &'static str {
        match self {
            Self::Incomplete => INCOMPLETE_MESSAGE,
            Self::InvalidEmail => INVALID_EMAIL_MESSAGE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Submission {
    pub fn success_message(&self) -> String {
        format!("Thanks {}! Message received. I will reply shortly.", self.name)
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// Loose on purpose: anything shaped like `x@y.z` without whitespace passes.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Checks presence of all fields first, then the email shape.
pub fn validate(name: &str, email: &str, message: &str) -> Result<Submission, ContactError> {
    let (name, email, message) = (name.trim(), email.trim(), message.trim());

    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(ContactError::Incomplete);
    }

    if !is_valid_email(email) {
        return Err(ContactError::InvalidEmail);
    }

    Ok(Submission {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Accent,
    Error,
}

impl StatusTone {
    pub fn color(self) -> &'static str {
        match self {
            Self::Accent => "var(--accent)",
            Self::Error => "#ff6b6b",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormStatus {
    pub text: String,
    pub tone: StatusTone,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: Option<FormStatus>,
}

impl ContactForm {
    /// Validates the current fields. On success the form shows the sending
    /// status and the caller schedules [`ContactForm::complete`].
    pub fn submit(&mut self) -> Option<Submission> {
        match validate(&self.name, &self.email, &self.message) {
            Ok(submission) => {
                self.status = Some(FormStatus {
                    text: SENDING_MESSAGE.to_string(),
                    tone: StatusTone::Accent,
                });
                Some(submission)
            }
            Err(error) => {
                self.status = Some(FormStatus {
                    text: error.message().to_string(),
                    tone: StatusTone::Error,
                });
                None
            }
        }
    }

    pub fn complete(&mut self, submission: &Submission) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.status = Some(FormStatus {
            text: submission.success_message(),
            tone: StatusTone::Accent,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            status: None,
        }
    }

    #[test]
    fn any_empty_field_is_incomplete() {
        assert_eq!(validate("", "a@b.co", "hi"), Err(ContactError::Incomplete));
        assert_eq!(validate("Jane", "   ", "hi"), Err(ContactError::Incomplete));
        assert_eq!(validate("Jane", "a@b.co", "\n"), Err(ContactError::Incomplete));
    }

    #[test]
    fn incomplete_is_reported_before_email_shape() {
        assert_eq!(validate("", "not-an-email", ""), Err(ContactError::Incomplete));
    }

    #[test]
    fn email_check_is_permissive() {
        assert!(is_valid_email("jane@x.com"));
        assert!(is_valid_email("a@b@c.d"));
        assert!(is_valid_email("weird!@host.tld."));
        assert!(!is_valid_email("foo@bar"));
        assert!(!is_valid_email("@bar.com"));
        assert!(!is_valid_email("foo@.com"));
        assert!(!is_valid_email("foo@bar."));
        assert!(!is_valid_email("jane doe@x.com"));
    }

    #[test]
    fn malformed_email_is_rejected_with_format_message() {
        let mut contact = form("Jane", "foo@bar", "hi");

        assert!(contact.submit().is_none());
        let status = contact.status.expect("status shown");
        assert_eq!(status.text, INVALID_EMAIL_MESSAGE);
        assert_eq!(status.tone, StatusTone::Error);
    }

    #[test]
    fn empty_form_is_rejected_with_completeness_message() {
        let mut contact = ContactForm::default();

        assert!(contact.submit().is_none());
        assert_eq!(contact.status.expect("status shown").text, INCOMPLETE_MESSAGE);
    }

    #[test]
    fn valid_submission_sends_then_thanks_and_clears() {
        let mut contact = form(" Jane ", "jane@x.com", "hi");

        let submission = contact.submit().expect("valid form");
        assert_eq!(submission.name, "Jane");
        assert_eq!(contact.status.as_ref().map(|s| s.text.as_str()), Some(SENDING_MESSAGE));

        contact.complete(&submission);
        let status = contact.status.clone().expect("status shown");
        assert!(status.text.contains("Jane"));
        assert_eq!(status.tone, StatusTone::Accent);
        assert!(contact.name.is_empty() && contact.email.is_empty() && contact.message.is_empty());
    }
}
