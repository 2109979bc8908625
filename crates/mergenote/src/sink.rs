use reqwest::StatusCode;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::WebhookConfig;
use crate::error::DeliveryError;

#[derive(Debug, Serialize)]
struct SlackPayload<'a> {
    text: &'a str,
}

/// POST `text` to the webhook once. Only a 200 counts as delivered; any
/// failure is written to stderr and reported as `false`.
pub async fn post_slack(client: &reqwest::Client, webhook: &WebhookConfig, text: &str) -> bool {
    match deliver(client, webhook, text).await {
        Ok(()) => true,
        Err(err) => {
            eprintln!("{err}");
            false
        }
    }
}

async fn deliver(
    client: &reqwest::Client,
    webhook: &WebhookConfig,
    text: &str,
) -> Result<(), DeliveryError> {
    debug!(bytes = text.len(), "sending Slack webhook");

    // `.json()` sets `Content-Type: application/json`.
    let response = client
        .post(&webhook.url)
        .json(&SlackPayload { text })
        .send()
        .await?;

    let status = response.status();
    if status == StatusCode::OK {
        debug!("Slack webhook accepted");
        return Ok(());
    }

    warn!(status = %status, "Slack webhook rejected message");
    if !status.is_success() {
        Err(DeliveryError::Http {
            code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        })
    } else {
        Err(DeliveryError::UnexpectedStatus(status.as_u16()))
    }
}
