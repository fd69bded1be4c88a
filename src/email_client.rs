use std::time::Duration;

use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::NotificationMessage;

/// Sender and recipient mailboxes are fixed: every notification goes to the
/// team inbox, and replies go to the submitter via the reply-to header.
pub const SENDER_ADDRESS: &str = "notifications@lumora.io";
pub const NOTIFICATION_RECIPIENT: &str = "hello@lumora.io";

#[derive(Clone)]
pub struct EmailClient {
    http_client: Client,
    base_url: Url,
    auth_token: SecretString,
}

#[derive(Serialize)]
struct EmailUnit<'a> {
    email: &'a str,
}

impl<'a> EmailUnit<'a> {
    fn new(email: &'a str) -> Self {
        Self { email }
    }
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: EmailUnit<'a>,
    to: Vec<EmailUnit<'a>>,
    subject: &'a str,
    html: &'a str,
    reply_to: &'a str,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}

impl EmailClient {
    pub fn new(base_url: String, auth_token: SecretString, timeout: Duration) -> Self {
        Self {
            http_client: Client::builder().timeout(timeout).build().unwrap(),
            base_url: Url::parse(&base_url).expect("Failed parsing base email api url."),
            auth_token,
        }
    }

    /// Hands the message to the provider once and returns the provider's
    /// message identifier. No retry on failure.
    pub async fn send_email(&self, message: &NotificationMessage) -> Result<String, reqwest::Error> {
        let url = self
            .base_url
            .join("v1/email")
            .expect("Failed joining route to email api url.");

        let body = SendEmailRequest {
            from: EmailUnit::new(SENDER_ADDRESS),
            to: vec![EmailUnit::new(NOTIFICATION_RECIPIENT)],
            subject: &message.subject,
            html: &message.html_body,
            reply_to: message.reply_to.as_ref(),
        };

        let response = self
            .http_client
            .post(url)
            .header(
                "Authorization",
                "Bearer ".to_owned() + self.auth_token.expose_secret(),
            )
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let response: SendEmailResponse = response.json().await?;
        Ok(response.id)
    }
}
