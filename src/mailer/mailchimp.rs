use std::io::{self, Stdout, Write};

use super::{Mailer, Message, Outbox, Priority};
use crate::error::DeliveryError;

/// Delivers through the MailChimp bulk mailing service.
#[derive(Debug)]
pub struct MailChimp<W = Stdout> {
    outbox: Outbox<W>,
}

impl MailChimp {
    #[must_use]
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for MailChimp {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> MailChimp<W> {
    pub const VIA: &'static str = "MailChimp";

    pub fn with_writer(writer: W) -> Self {
        Self {
            outbox: Outbox::new(writer),
        }
    }

    #[must_use]
    pub const fn deliveries(&self) -> u64 {
        self.outbox.deliveries.count()
    }

    pub fn into_writer(self) -> W {
        self.outbox.writer
    }
}

impl<W: Write> Mailer for MailChimp<W> {
    fn to(&mut self, recipient: &str) -> &mut Self {
        self.outbox.message.to(recipient);
        self
    }

    fn from(&mut self, sender: &str) -> &mut Self {
        self.outbox.message.from(sender);
        self
    }

    fn subject(&mut self, subject: &str) -> &mut Self {
        self.outbox.message.subject(subject);
        self
    }

    fn body(&mut self, body: &str) -> &mut Self {
        self.outbox.message.body(body);
        self
    }

    fn priority(&mut self, priority: Priority) -> &mut Self {
        self.outbox.message.priority(priority);
        self
    }

    fn send(&mut self) -> Result<(), DeliveryError> {
        self.outbox.deliver(Self::VIA)
    }

    fn message(&self) -> &Message {
        &self.outbox.message
    }
}
