use anyhow::Context;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use secrecy::ExposeSecret;

use crate::configuration::MailSettings;
use crate::mail::{DeliveryError, MailProvider, Message};

// Smtp-backed provider. The transport handle is acquired at construction
// with fixed host, port and credentials, and lives as long as the provider.
pub struct SmtpMailProvider {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailProvider {
    pub fn new(config: &MailSettings) -> Self {
        let credentials = Credentials::new(
            config.username.clone(),
            config.password.expose_secret().clone(),
        );

        // The sandbox endpoint speaks plaintext smtp on a non-standard port.
        let transport =
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
                .port(config.port)
                .credentials(credentials)
                .build();

        Self { transport }
    }

    fn build_email(message: &Message) -> Result<lettre::Message, anyhow::Error> {
        let to = Mailbox::new(
            Some(message.to.name.clone()),
            message
                .to
                .email
                .parse::<Address>()
                .context("invalid recipient address")?,
        );
        let from = Mailbox::new(
            Some(message.from.name.clone()),
            message
                .from
                .email
                .parse::<Address>()
                .context("invalid sender address")?,
        );

        lettre::Message::builder()
            .to(to)
            .from(from)
            .subject(message.subject.clone())
            .header(ContentType::TEXT_HTML)
            .body(message.body.clone())
            .context("failed to assemble the email")
    }
}

#[async_trait]
impl MailProvider for SmtpMailProvider {
    #[tracing::instrument(
        name = "sending email over smtp",
        skip(self, message),
        fields(recipient = %message.to.email, subject = %message.subject)
    )]
    async fn send_mail(&self, message: Message) -> Result<(), DeliveryError> {
        let recipient = message.to.email.clone();

        let email = Self::build_email(&message).map_err(|e| DeliveryError {
            recipient: recipient.clone(),
            source: e,
        })?;

        self.transport
            .send(email)
            .await
            .context("the smtp transport rejected the message")
            .map_err(|e| DeliveryError {
                recipient,
                source: e,
            })?;

        Ok(())
    }
}
