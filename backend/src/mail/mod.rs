//! Outbound email dispatch through the configured SMTP relay.
//!
//! Sending is best-effort for every flow except the reply-to-contact
//! endpoint, where delivery success gates the status transition. An
//! unconfigured relay is reported as [`MailError::NotConfigured`] without
//! touching the network, so a dev setup without credentials stays usable.

pub mod templates;

use crate::config::MailConfig;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("Email configuration is not properly set up")]
    NotConfigured,
    #[error("Email error: {0}")]
    Transport(String),
}

#[derive(Clone)]
pub struct Mailer {
    cfg: MailConfig,
}

impl Mailer {
    pub fn new(cfg: MailConfig) -> Self {
        Self { cfg }
    }

    /// Placeholder values shipped in .env templates count as unconfigured.
    fn is_configured(&self) -> bool {
        let c = &self.cfg;
        !(c.server.is_empty()
            || c.username.is_empty()
            || c.password.is_empty()
            || c.username == "your-email@gmail.com"
            || c.password == "your-gmail-app-password-here")
    }

    /// Sends one plain-text message, bounded by the configured timeout.
    pub async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError> {
        if !self.is_configured() {
            return Err(MailError::NotConfigured);
        }

        let from: Mailbox = self
            .cfg
            .username
            .parse()
            .map_err(|e| MailError::Transport(format!("invalid sender address: {e}")))?;
        let to: Mailbox = to
            .parse()
            .map_err(|e| MailError::Transport(format!("invalid recipient address: {e}")))?;
        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(subject)
            .body(body.to_string())
            .map_err(|e| MailError::Transport(e.to_string()))?;

        let timeout = Duration::from_secs(self.cfg.timeout_secs);
        let transport = self.transport(timeout)?;
        match tokio::time::timeout(timeout, transport.send(message)).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => Err(MailError::Transport(e.to_string())),
            Err(_) => Err(MailError::Transport("mail relay timed out".to_string())),
        }
    }

    fn transport(
        &self,
        timeout: Duration,
    ) -> Result<AsyncSmtpTransport<Tokio1Executor>, MailError> {
        let c = &self.cfg;
        let builder = if c.use_ssl {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&c.server)
                .map_err(|e| MailError::Transport(e.to_string()))?
        } else if c.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&c.server)
                .map_err(|e| MailError::Transport(e.to_string()))?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&c.server)
        };
        Ok(builder
            .credentials(Credentials::new(c.username.clone(), c.password.clone()))
            .port(c.port)
            .timeout(Some(timeout))
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unconfigured() -> Mailer {
        Mailer::new(MailConfig {
            server: String::new(),
            port: 587,
            use_tls: true,
            use_ssl: false,
            username: String::new(),
            password: String::new(),
            timeout_secs: 1,
        })
    }

    #[actix_web::test]
    async fn missing_credentials_fail_without_network() {
        let err = unconfigured().send("x@example.com", "s", "b").await;
        assert!(matches!(err, Err(MailError::NotConfigured)));
    }

    #[actix_web::test]
    async fn placeholder_credentials_count_as_unconfigured() {
        let mailer = Mailer::new(MailConfig {
            server: "smtp.gmail.com".into(),
            port: 587,
            use_tls: true,
            use_ssl: false,
            username: "your-email@gmail.com".into(),
            password: "your-gmail-app-password-here".into(),
            timeout_secs: 1,
        });
        let err = mailer.send("x@example.com", "s", "b").await;
        assert!(matches!(err, Err(MailError::NotConfigured)));
    }
}
