//! Delivery of build notifications to the chat webhook

use std::time::Duration;

use reqwest::StatusCode;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::message::Message;
use crate::webhook::WebhookPayload;

/// Upper bound for the whole request, connect included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// What came back from the webhook endpoint.
#[derive(Debug, Clone, Copy)]
pub struct DeliveryReport {
    pub status: StatusCode,
}

pub struct DiscordNotifier {
    webhook_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl DiscordNotifier {
    pub fn new(webhook_url: String) -> Self {
        Self {
            webhook_url,
            timeout: DEFAULT_TIMEOUT,
            client: reqwest::Client::new(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Posts the message once as `application/json`.
    ///
    /// Only transport failures are errors. Any HTTP response, 4xx and 5xx included,
    /// counts as delivered; a non-2xx status is logged and reported back.
    pub async fn send(&self, message: Message) -> Result<DeliveryReport> {
        let payload = WebhookPayload::from(message);
        debug!("Webhook payload: {:?}", payload);

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&payload)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            info!("Webhook accepted notification ({})", status);
        } else {
            warn!("Webhook responded with {}; not treated as a failure", status);
        }

        // Drain the body so the connection is released before exit
        if let Err(e) = response.bytes().await {
            debug!("Discarding unreadable response body: {}", e);
        }

        Ok(DeliveryReport { status })
    }
}
