#![warn(clippy::pedantic)]

pub mod config;
pub mod counter;
pub mod error;
pub mod logging;
pub mod mailer;
pub mod mailing_list;
pub mod sequence;

pub use config::Config;
pub use counter::{BeanCounter, Counter};
pub use error::{ConfigError, DeliveryError, SequenceError, ValueError};
pub use mailer::{LocalMail, MailChimp, Mailer, Message, Priority};
pub use mailing_list::MailingList;
pub use sequence::{Alphabet, Range};

pub use tracing;
