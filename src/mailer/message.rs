//! The message a [`Mailer`](super::Mailer) composes before each send.

use super::Priority;
use crate::error::DeliveryError;

/// Envelope fields for a single message.
///
/// One instance is reused across many sends: the recipient is swapped
/// between each one while the sender, subject and body stay put.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    recipient: Option<String>,
    sender: Option<String>,
    subject: Option<String>,
    body: Option<String>,
    priority: Priority,
}

impl Message {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to(&mut self, recipient: impl Into<String>) -> &mut Self {
        self.recipient = Some(recipient.into());
        self
    }

    pub fn from(&mut self, sender: impl Into<String>) -> &mut Self {
        self.sender = Some(sender.into());
        self
    }

    pub fn subject(&mut self, subject: impl Into<String>) -> &mut Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn body(&mut self, body: impl Into<String>) -> &mut Self {
        self.body = Some(body.into());
        self
    }

    pub fn priority(&mut self, priority: Priority) -> &mut Self {
        self.priority = priority;
        self
    }

    /// Sets the priority from its name. Unknown names leave the current
    /// priority untouched.
    pub fn set_priority_str(&mut self, priority: &str) -> &mut Self {
        self.priority = self.priority.or_keep(priority);
        self
    }

    #[must_use]
    pub fn recipient(&self) -> Option<&str> {
        self.recipient.as_deref()
    }

    #[must_use]
    pub fn sender(&self) -> Option<&str> {
        self.sender.as_deref()
    }

    #[must_use]
    pub fn subject_line(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        self.body.as_deref()
    }

    #[must_use]
    pub const fn priority_level(&self) -> Priority {
        self.priority
    }

    /// Renders the message headers, followed by the body if one is set.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::MissingField`] if no recipient has been set.
    pub fn render(&self) -> Result<String, DeliveryError> {
        let recipient = self
            .recipient
            .as_deref()
            .ok_or(DeliveryError::MissingField("recipient"))?;

        let mut headers = Vec::with_capacity(4);
        if let Some(sender) = &self.sender {
            headers.push(format!("From: {sender}"));
        }
        headers.push(format!("To: {recipient}"));
        if let Some(subject) = &self.subject {
            headers.push(format!("Subject: {subject}"));
        }
        if self.priority != Priority::Normal {
            headers.push(format!(
                "X-Priority: {} ({})",
                self.priority.header_value(),
                self.priority
            ));
        }

        let mut rendered = headers.join("\r\n");
        rendered.push_str("\r\n\r\n");
        if let Some(body) = &self.body {
            rendered.push_str(body);
        }

        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use mailparse::{parse_mail, MailHeaderMap};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_setters_chain() {
        let mut message = Message::new();
        message
            .from("training@develop.me")
            .subject("Wombat Wisdom")
            .to("bob@bob.com");

        assert_eq!(message.sender(), Some("training@develop.me"));
        assert_eq!(message.subject_line(), Some("Wombat Wisdom"));
        assert_eq!(message.recipient(), Some("bob@bob.com"));
        assert_eq!(message.priority_level(), Priority::Normal);
    }

    #[test]
    fn test_recipient_is_swapped() {
        let mut message = Message::new();
        message.from("training@develop.me").to("bob@bob.com");
        message.to("yoko@ono.com");

        assert_eq!(message.recipient(), Some("yoko@ono.com"));
        assert_eq!(message.sender(), Some("training@develop.me"));
    }

    #[test]
    fn test_set_priority_str_ignores_unknown() {
        let mut message = Message::new();
        message.set_priority_str("high").set_priority_str("wombat");

        assert_eq!(message.priority_level(), Priority::High);
    }

    #[test]
    fn test_render_requires_recipient() {
        let err = Message::new().subject("Hello").render().unwrap_err();
        assert!(matches!(err, DeliveryError::MissingField("recipient")));
    }

    #[test]
    fn test_render_parses_as_mail() {
        let mut message = Message::new();
        message
            .from("training@develop.me")
            .to("bob@bob.com")
            .subject("Wombat Wisdom")
            .priority(Priority::High);

        let rendered = message.render().unwrap();
        let parsed = parse_mail(rendered.as_bytes()).unwrap();

        assert_eq!(
            parsed.headers.get_first_value("From"),
            Some("training@develop.me".to_string())
        );
        assert_eq!(
            parsed.headers.get_first_value("To"),
            Some("bob@bob.com".to_string())
        );
        assert_eq!(
            parsed.headers.get_first_value("Subject"),
            Some("Wombat Wisdom".to_string())
        );
        assert_eq!(
            parsed.headers.get_first_value("X-Priority"),
            Some("1 (high)".to_string())
        );
    }

    #[test]
    fn test_render_includes_body() {
        let mut message = Message::new();
        message
            .from("training@develop.me")
            .to("yoko@ono.com")
            .subject("Wombat Wisdom")
            .body("Welcome to Wombat Wisdom");

        let rendered = message.render().unwrap();
        let parsed = parse_mail(rendered.as_bytes()).unwrap();

        assert_eq!(parsed.get_body().unwrap(), "Welcome to Wombat Wisdom");
        assert_eq!(
            parsed.headers.get_first_value("Subject"),
            Some("Wombat Wisdom".to_string())
        );
    }

    #[test]
    fn test_body_survives_recipient_swap() {
        let mut message = Message::new();
        message.body("Welcome").to("bob@bob.com");
        message.to("yoko@ono.com");

        assert_eq!(message.body_text(), Some("Welcome"));
    }

    #[test]
    fn test_render_omits_normal_priority() {
        let mut message = Message::new();
        message.to("bob@bob.com");

        assert_eq!(message.render().unwrap(), "To: bob@bob.com\r\n\r\n");
    }
}
