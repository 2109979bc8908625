use clap::Parser;
use std::path::PathBuf;

use crate::orchestrator::AnnounceRequest;

/// Mergenote – post a PR merge announcement to Slack
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Activate verbose output (-v, -vv, etc.)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// PR number to announce
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    pub pr_number: u64,

    /// Summary of the PR changes
    #[arg(long)]
    pub summary: String,

    /// Repository in owner/repo format
    #[arg(long, value_name = "OWNER/REPO")]
    pub repo: Option<String>,

    /// Slack webhook URL (or set SLACK_WEBHOOK_URL env var)
    #[arg(long, value_name = "URL")]
    pub webhook_url: Option<String>,

    /// Preview the message without posting
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    pub fn request(&self) -> AnnounceRequest {
        AnnounceRequest {
            number: self.pr_number,
            summary: self.summary.clone(),
            repo: self.repo.clone(),
            webhook_url: self.webhook_url.clone(),
            dry_run: self.dry_run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_full_invocation() {
        let cli = Cli::try_parse_from([
            "mergenote",
            "42",
            "--summary",
            "Adds retries",
            "--repo",
            "acme/widgets",
            "--webhook-url",
            "https://hooks.example/x",
            "--dry-run",
            "-vv",
        ])
        .unwrap();
        let req = cli.request();
        assert_eq!(req.number, 42);
        assert_eq!(req.summary, "Adds retries");
        assert_eq!(req.repo.as_deref(), Some("acme/widgets"));
        assert_eq!(req.webhook_url.as_deref(), Some("https://hooks.example/x"));
        assert!(req.dry_run);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn summary_is_required() {
        assert!(Cli::try_parse_from(["mergenote", "42"]).is_err());
    }

    #[test]
    fn pr_number_must_be_positive_integer() {
        assert!(Cli::try_parse_from(["mergenote", "0", "--summary", "s"]).is_err());
        assert!(Cli::try_parse_from(["mergenote", "abc", "--summary", "s"]).is_err());
    }
}
