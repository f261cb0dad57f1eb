//! Pluggable delivery strategies.
//!
//! Anything implementing [`Mailer`] can be handed to
//! [`MailingList::send_with`](crate::MailingList::send_with). The two senders
//! here only differ in the confirmation they emit for each delivery.

use std::io::Write;

mod local;
mod mailchimp;
mod message;
mod priority;

pub use local::LocalMail;
pub use mailchimp::MailChimp;
pub use message::Message;
pub use priority::Priority;

use crate::{counter::Counter, error::DeliveryError, outgoing};

/// Composes and dispatches a message.
///
/// The setters return the mailer itself so calls can be chained:
///
/// ```
/// use exemplar::{LocalMail, Mailer};
///
/// let mut mailer = LocalMail::with_writer(Vec::new());
/// mailer
///     .from("training@develop.me")
///     .subject("Wombat Wisdom")
///     .to("bob@bob.com")
///     .send()?;
///
/// assert_eq!(mailer.deliveries(), 1);
/// # Ok::<(), exemplar::DeliveryError>(())
/// ```
pub trait Mailer {
    fn to(&mut self, recipient: &str) -> &mut Self;

    fn from(&mut self, sender: &str) -> &mut Self;

    fn subject(&mut self, subject: &str) -> &mut Self;

    /// Mailers without a notion of a body may ignore it.
    fn body(&mut self, _body: &str) -> &mut Self {
        self
    }

    /// Mailers that cannot express a priority may ignore it.
    fn priority(&mut self, _priority: Priority) -> &mut Self {
        self
    }

    /// Delivers the current message.
    ///
    /// # Errors
    ///
    /// Fails if the message has no recipient, or if the delivery itself fails.
    fn send(&mut self) -> Result<(), DeliveryError>;

    /// The message as it currently stands.
    fn message(&self) -> &Message;
}

/// State shared by the bundled mailers: the message being composed, where
/// confirmations are written, and how many deliveries succeeded.
#[derive(Debug)]
struct Outbox<W> {
    writer: W,
    message: Message,
    deliveries: Counter,
}

impl<W: Write> Outbox<W> {
    fn new(writer: W) -> Self {
        Self {
            writer,
            message: Message::new(),
            deliveries: Counter::new(),
        }
    }

    fn deliver(&mut self, via: &str) -> Result<(), DeliveryError> {
        let recipient = self
            .message
            .recipient()
            .ok_or(DeliveryError::MissingField("recipient"))?;

        let confirmation = format!("Sending to {recipient} with {via}");
        writeln!(self.writer, "{confirmation}")?;
        self.deliveries.increment();

        outgoing!(
            level = DEBUG,
            recipient,
            sender = self.message.sender().unwrap_or_default(),
            "{confirmation}"
        );

        Ok(())
    }
}
