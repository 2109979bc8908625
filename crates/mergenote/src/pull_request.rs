use serde::Deserialize;
use url::Url;

use crate::error::PullRequestError;

/// Fields requested from `gh pr view --json`.
pub const PR_JSON_FIELDS: &str = "number,title,url,headRefName,baseRefName,body";

/// Wire shape emitted by the hosting CLI.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPullRequest {
    pub number: u64,
    pub title: String,
    pub url: String,
    pub head_ref_name: String,
    pub base_ref_name: String,
    #[serde(default)]
    pub body: String,
}

/// A pull request whose url has already been checked for a repository segment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawPullRequest")]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub url: String,
    pub head_ref_name: String,
    pub base_ref_name: String,
    pub body: String,
    /// Second path segment of `url` (`https://host/owner/<repo>/pull/N`).
    pub repo_name: String,
}

impl TryFrom<RawPullRequest> for PullRequest {
    type Error = PullRequestError;

    fn try_from(raw: RawPullRequest) -> Result<Self, Self::Error> {
        let repo_name = repo_name_from_url(&raw.url)?;
        Ok(Self {
            number: raw.number,
            title: raw.title,
            url: raw.url,
            head_ref_name: raw.head_ref_name,
            base_ref_name: raw.base_ref_name,
            body: raw.body,
            repo_name,
        })
    }
}

/// Extract the repository name from a PR url.
pub fn repo_name_from_url(raw: &str) -> Result<String, PullRequestError> {
    let parsed = Url::parse(raw).map_err(|_| PullRequestError::NotAbsolute {
        url: raw.to_string(),
    })?;

    parsed
        .path_segments()
        .and_then(|mut segments| segments.nth(1))
        .filter(|repo| !repo.is_empty())
        .map(str::to_string)
        .ok_or_else(|| PullRequestError::MissingRepo {
            url: raw.to_string(),
        })
}
