use async_trait::async_trait;

use crate::config::EmailConfig;
use crate::user::errors::EmailSenderError;
use crate::user::ports::EmailSender;

/// Outbound mailer posting to the Mailgun messages API.
///
/// One HTTP POST per message; delivery failures are reported immediately
/// and never retried.
pub struct MailgunEmailSender {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    from: String,
}

impl MailgunEmailSender {
    pub fn new(config: &EmailConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!(
                "{}/{}/messages",
                config.api_base.trim_end_matches('/'),
                config.mailgun_domain
            ),
            api_key: config.mailgun_api_key.clone(),
            from: format!("Social Media <mailgun@{}>", config.mailgun_domain),
        }
    }
}

#[async_trait]
impl EmailSender for MailgunEmailSender {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailSenderError> {
        tracing::debug!(to, subject, "Sending email");

        let response = self
            .client
            .post(&self.endpoint)
            .basic_auth("api", Some(&self.api_key))
            .form(&[
                ("from", self.from.as_str()),
                ("to", to),
                ("subject", subject),
                ("text", body),
            ])
            .send()
            .await
            .map_err(|e| EmailSenderError::DeliveryFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(EmailSenderError::DeliveryFailed(format!(
                "Mail API responded with status {status}: {message}"
            )));
        }

        Ok(())
    }
}
