//! Broadcasting one subject line to an ordered list of recipients.

use crate::{
    config::MailingListConfig,
    error::DeliveryError,
    internal,
    mailer::{Mailer, Priority},
};

/// The address every list mailing is sent from unless configured otherwise.
pub const DEFAULT_SENDER: &str = "training@develop.me";

/// An ordered list of recipients sharing a subject and message body.
///
/// The list owns its recipients; the [`Mailer`] is only borrowed for the
/// duration of [`send_with`](Self::send_with).
///
/// ```
/// use exemplar::{LocalMail, MailingList};
///
/// let mut list = MailingList::new();
/// list.subject("Wombat Wisdom")
///     .add_email("bob@bob.com")
///     .add_email("yoko@ono.com");
///
/// let mut mailer = LocalMail::with_writer(Vec::new());
/// assert_eq!(list.send_with(&mut mailer)?, 2);
/// # Ok::<(), exemplar::DeliveryError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailingList {
    recipients: Vec<String>,
    subject: String,
    message: Option<String>,
    sender: String,
    priority: Priority,
}

impl MailingList {
    #[must_use]
    pub fn new() -> Self {
        Self {
            recipients: Vec::new(),
            subject: String::new(),
            message: None,
            sender: DEFAULT_SENDER.to_string(),
            priority: Priority::default(),
        }
    }

    /// Appends a recipient. Duplicates are kept.
    pub fn add_email(&mut self, email: impl Into<String>) -> &mut Self {
        self.recipients.push(email.into());
        self
    }

    pub fn subject(&mut self, subject: impl Into<String>) -> &mut Self {
        self.subject = subject.into();
        self
    }

    /// Sets the body sent to every recipient.
    pub fn message(&mut self, message: impl Into<String>) -> &mut Self {
        self.message = Some(message.into());
        self
    }

    pub fn sender(&mut self, sender: impl Into<String>) -> &mut Self {
        self.sender = sender.into();
        self
    }

    /// Sets the priority by name. Unknown names are ignored and the previous
    /// priority is kept.
    pub fn priority(&mut self, priority: &str) -> &mut Self {
        self.priority = self.priority.or_keep(priority);
        self
    }

    #[must_use]
    pub fn recipients(&self) -> &[String] {
        &self.recipients
    }

    #[must_use]
    pub fn subject_line(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn message_body(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn sender_address(&self) -> &str {
        &self.sender
    }

    #[must_use]
    pub const fn priority_level(&self) -> Priority {
        self.priority
    }

    /// Sends the list's subject to every recipient, in order, through
    /// `mailer`.
    ///
    /// Returns the number of deliveries made.
    ///
    /// # Errors
    ///
    /// Stops at the first failed delivery and returns its error. Deliveries
    /// already made are not undone.
    pub fn send_with<M: Mailer>(&self, mailer: &mut M) -> Result<usize, DeliveryError> {
        mailer
            .from(&self.sender)
            .subject(&self.subject)
            .priority(self.priority);
        if let Some(message) = &self.message {
            mailer.body(message);
        }

        for (sent, recipient) in self.recipients.iter().enumerate() {
            if let Err(err) = mailer.to(recipient).send() {
                internal!(
                    level = WARN,
                    recipient = recipient.as_str(),
                    sent,
                    "Delivery failed: {err}"
                );
                return Err(err);
            }
        }

        internal!(
            level = DEBUG,
            subject = self.subject.as_str(),
            "Sent to {} recipients",
            self.recipients.len()
        );

        Ok(self.recipients.len())
    }
}

impl Default for MailingList {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&MailingListConfig> for MailingList {
    fn from(config: &MailingListConfig) -> Self {
        let mut list = Self::new();
        list.sender(config.sender.as_str())
            .subject(config.subject.as_str())
            .priority(&config.priority);
        if let Some(body) = &config.body {
            list.message(body.as_str());
        }

        for recipient in &config.recipients {
            list.add_email(recipient.as_str());
        }

        list
    }
}
