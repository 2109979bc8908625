use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::FetchError;
use crate::pull_request::{PullRequest, RawPullRequest, PR_JSON_FIELDS};

/// Something that can look up a pull request by number.
#[async_trait]
pub trait PrSource: Send + Sync {
    async fn fetch_pr(&self, number: u64, repo: Option<&str>) -> Result<PullRequest, FetchError>;
}

pub fn source_from_config(config: &Config) -> Box<dyn PrSource> {
    Box::new(GhCliSource::new(config.gh_bin()))
}

/// Runs `gh pr view <n> --json ...` as a child process.
pub struct GhCliSource {
    bin: String,
}

impl GhCliSource {
    pub fn new(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }

    fn args(number: u64, repo: Option<&str>) -> Vec<String> {
        let mut args = vec![
            "pr".to_string(),
            "view".to_string(),
            number.to_string(),
            "--json".to_string(),
            PR_JSON_FIELDS.to_string(),
        ];
        if let Some(repo) = repo {
            args.push("--repo".to_string());
            args.push(repo.to_string());
        }
        args
    }
}

#[async_trait]
impl PrSource for GhCliSource {
    async fn fetch_pr(&self, number: u64, repo: Option<&str>) -> Result<PullRequest, FetchError> {
        let bin = which::which(&self.bin).map_err(|_| FetchError::ToolNotFound {
            tool: self.bin.clone(),
        })?;
        debug!(tool = %bin.display(), pr = number, repo = ?repo, "invoking hosting CLI");

        let output = Command::new(&bin)
            .args(Self::args(number, repo))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| FetchError::Spawn {
                tool: self.bin.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(FetchError::CommandFailed {
                number,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let raw: RawPullRequest = serde_json::from_slice(&output.stdout)?;
        let pr = PullRequest::try_from(raw)?;
        info!(pr = pr.number, repo = %pr.repo_name, "fetched pull request");
        Ok(pr)
    }
}
