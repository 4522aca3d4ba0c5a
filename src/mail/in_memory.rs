use anyhow::anyhow;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::mail::{DeliveryError, MailProvider, Message};

// Records accepted messages instead of transmitting them. Used by the test
// suites and by local wiring without a reachable smtp endpoint.
#[derive(Default)]
pub struct InMemoryMailProvider {
    sent: RwLock<Vec<Message>>,
    reject_sends: bool,
}

impl InMemoryMailProvider {
    pub fn new() -> Self {
        Self::default()
    }

    // A provider whose transport refuses every message.
    pub fn rejecting() -> Self {
        Self {
            sent: RwLock::new(Vec::new()),
            reject_sends: true,
        }
    }

    pub async fn sent_messages(&self) -> Vec<Message> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl MailProvider for InMemoryMailProvider {
    async fn send_mail(&self, message: Message) -> Result<(), DeliveryError> {
        if self.reject_sends {
            return Err(DeliveryError {
                recipient: message.to.email,
                source: anyhow!("the transport refused the message"),
            });
        }

        self.sent.write().await.push(message);
        Ok(())
    }
}
