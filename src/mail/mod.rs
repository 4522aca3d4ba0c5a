mod in_memory;
mod smtp;

pub use in_memory::InMemoryMailProvider;
pub use smtp::SmtpMailProvider;

use async_trait::async_trait;

// A named mailbox, one end of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailAddress {
    pub name: String,
    pub email: String,
}

// A single outbound email: constructed for one send, never persisted.
#[derive(Debug, Clone)]
pub struct Message {
    pub to: MailAddress,
    pub from: MailAddress,
    pub subject: String,
    // Html body.
    pub body: String,
}

#[derive(thiserror::Error, Debug)]
#[error("failed to deliver the message to {recipient}")]
pub struct DeliveryError {
    pub recipient: String,
    #[source]
    pub source: anyhow::Error,
}

// Fire-and-forget delivery of a single message. No retry, no queueing, no
// delivery confirmation.
#[async_trait]
pub trait MailProvider: Send + Sync {
    async fn send_mail(&self, message: Message) -> Result<(), DeliveryError>;
}
