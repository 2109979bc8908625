//! Error types for the announcement pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while retrieving pull request metadata from the hosting CLI.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The hosting CLI could not be located on `PATH`.
    #[error("Error fetching PR: `{tool}` not found on PATH")]
    ToolNotFound { tool: String },

    /// The hosting CLI exists but could not be started.
    #[error("Error fetching PR: failed to run `{tool}`: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// The hosting CLI exited non-zero.
    #[error("Error fetching PR #{number}: {stderr}")]
    CommandFailed { number: u64, stderr: String },

    /// Stdout was not the expected JSON object.
    #[error("Error fetching PR: unreadable JSON from hosting CLI: {0}")]
    Parse(#[from] serde_json::Error),

    /// JSON parsed but the record cannot be announced.
    #[error("Error fetching PR: {0}")]
    InvalidPullRequest(#[from] PullRequestError),
}

/// The fetched record does not have the shape the formatter relies on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PullRequestError {
    #[error("PR url `{url}` is not an absolute URL")]
    NotAbsolute { url: String },

    #[error("PR url `{url}` has no repository segment (expected https://host/owner/repo/pull/N)")]
    MissingRepo { url: String },
}

/// Configuration problems. All of these are fatal before any network I/O.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Error: No webhook URL provided. Use --webhook-url or set SLACK_WEBHOOK_URL env var.")]
    MissingWebhookUrl,

    #[error("Reading config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parsing TOML config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Why a webhook delivery did not succeed.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// A 2xx response other than 200.
    #[error("Slack returned status {0}")]
    UnexpectedStatus(u16),

    /// The endpoint answered with a non-2xx status.
    #[error("Slack webhook error: {code} {reason}")]
    Http { code: u16, reason: String },

    /// No response at all (DNS, refused connection, reset, ...).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Fatal pipeline errors surfaced to `main`.
#[derive(Debug, Error)]
pub enum AnnounceError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
