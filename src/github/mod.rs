//! GitHub star API client and the sequential star loop.
//!
//! Two endpoints, both keyed by repository reference:
//!
//! - `GET /user/starred/{owner}/{repo}` - 204 means already starred
//! - `PUT /user/starred/{owner}/{repo}` - 204 means newly starred,
//!   401 means the token is bad
//!
//! Every request carries `Authorization: token <TOKEN>` and a fixed 10 s
//! connect/total timeout. There are no retries, no backoff, and no batching;
//! repositories are starred one at a time in set order.
//!
//! Error handling is split between client and loop: the client masks
//! unexpected HTTP statuses on the check call as "not starred" but lets
//! transport errors propagate; [`star_all`] catches those per repository so
//! one unreachable host does not abort the rest of the run. The single
//! exception is 401 from the star call, which short-circuits the remaining
//! iteration - every further attempt would fail the same way.

use anyhow::Result;
use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use std::collections::BTreeSet;

use crate::constants::{GITHUB_API, HTTP_TIMEOUT, USER_AGENT};
use crate::core::RepoRef;

/// Client for the GitHub star endpoints.
pub struct StarClient {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

impl StarClient {
    /// Build a client holding the given token.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(HTTP_TIMEOUT)
            .timeout(HTTP_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            token: token.into(),
            base_url: GITHUB_API.to_string(),
        })
    }

    /// Point the client at a different API base URL. Used by tests.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Whether the authenticated user has already starred `repo`.
    ///
    /// True only for a 204 response; any other status - including error
    /// statuses - reads as "not starred". Transport failures propagate.
    pub async fn is_starred(&self, repo: &RepoRef) -> Result<bool> {
        let response = self
            .client
            .get(self.starred_url(repo))
            .header(AUTHORIZATION, self.auth_header())
            .send()
            .await?;
        tracing::debug!(target: "github", "GET starred {} -> {}", repo, response.status());
        Ok(response.status() == StatusCode::NO_CONTENT)
    }

    /// Star `repo`, returning the raw response status.
    pub async fn star(&self, repo: &RepoRef) -> Result<StatusCode> {
        let response = self
            .client
            .put(self.starred_url(repo))
            .header(AUTHORIZATION, self.auth_header())
            .send()
            .await?;
        tracing::debug!(target: "github", "PUT starred {} -> {}", repo, response.status());
        Ok(response.status())
    }

    fn starred_url(&self, repo: &RepoRef) -> String {
        format!("{}/user/starred/{}", self.base_url, repo)
    }

    fn auth_header(&self) -> String {
        format!("token {}", self.token)
    }
}

/// Outcome of one repository's trip through the star loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StarOutcome {
    /// The repository was already starred.
    AlreadyStarred,
    /// The star call returned 204.
    Starred,
    /// The star call returned 401; the loop stops here.
    AuthenticationFailed,
    /// Any other status or a transport error; the loop continues.
    Failed(String),
}

/// Walk the repository set, starring what is not yet starred.
///
/// Prints one status line per repository and returns the outcomes in
/// iteration order. A 401 ends the iteration after being reported; every
/// other failure is isolated to its repository.
pub async fn star_all(
    client: &StarClient,
    repositories: &BTreeSet<RepoRef>,
) -> Vec<(RepoRef, StarOutcome)> {
    let mut outcomes = Vec::new();

    for repo in repositories {
        let outcome = star_one(client, repo).await;
        match &outcome {
            StarOutcome::AlreadyStarred => println!("\u{2b50} {repo}"),
            StarOutcome::Starred => println!("\u{1f31f} {repo}"),
            StarOutcome::AuthenticationFailed => {
                println!("Authentication failed for {repo}, skipping remaining repositories");
            }
            StarOutcome::Failed(reason) => println!("Failed to star {repo}: {reason}"),
        }

        let stop = outcome == StarOutcome::AuthenticationFailed;
        outcomes.push((repo.clone(), outcome));
        if stop {
            break;
        }
    }

    outcomes
}

async fn star_one(client: &StarClient, repo: &RepoRef) -> StarOutcome {
    match client.is_starred(repo).await {
        Ok(true) => StarOutcome::AlreadyStarred,
        Ok(false) => match client.star(repo).await {
            Ok(status) => match status.as_u16() {
                204 => StarOutcome::Starred,
                401 => StarOutcome::AuthenticationFailed,
                code => StarOutcome::Failed(format!("HTTP {code}")),
            },
            Err(e) => StarOutcome::Failed(e.to_string()),
        },
        Err(e) => StarOutcome::Failed(e.to_string()),
    }
}
