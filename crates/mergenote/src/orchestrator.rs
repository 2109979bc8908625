use tracing::info;

use crate::config::{Config, WebhookConfig, ENV_SLACK_WEBHOOK_URL};
use crate::error::AnnounceError;
use crate::message::format_message;
use crate::provider::PrSource;
use crate::sink::post_slack;

/// Inputs for one announcement, straight from the command line.
#[derive(Debug, Clone)]
pub struct AnnounceRequest {
    pub number: u64,
    pub summary: String,
    pub repo: Option<String>,
    pub webhook_url: Option<String>,
    pub dry_run: bool,
}

/// How a non-fatal run ended. Every variant carries the rendered message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Previewed { message: String },
    Posted { number: u64, message: String },
    DeliveryFailed { number: u64, message: String },
}

/// Fetch, format, then either preview or publish.
///
/// `lookup_env` is only consulted on the publish branch.
pub async fn run_announcement(
    request: &AnnounceRequest,
    source: &dyn PrSource,
    config: &Config,
    client: &reqwest::Client,
    lookup_env: &dyn Fn(&str) -> Option<String>,
) -> Result<Outcome, AnnounceError> {
    let pr = source
        .fetch_pr(request.number, request.repo.as_deref())
        .await?;
    let message = format_message(&pr, &request.summary);

    if request.dry_run {
        info!(pr = pr.number, "dry run, skipping webhook");
        return Ok(Outcome::Previewed { message });
    }

    let webhook = WebhookConfig::resolve(
        request.webhook_url.as_deref(),
        lookup_env(ENV_SLACK_WEBHOOK_URL),
        config.webhook_url.as_deref(),
    )?;

    if post_slack(client, &webhook, &message).await {
        info!(pr = pr.number, "announcement delivered");
        Ok(Outcome::Posted {
            number: pr.number,
            message,
        })
    } else {
        Ok(Outcome::DeliveryFailed {
            number: pr.number,
            message,
        })
    }
}
