//! GitHub API client
//!
//! Minimal GitHub API client for fetching user and repository data.

use crate::Result;
use crate::roster::ParentName;
use chrono::{DateTime, Utc};
use core::time::Duration;
use octocrab::Octocrab;
use ohno::IntoAppError;
use regex::Regex;
use reqwest::header::{HeaderMap, LINK};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::sync::LazyLock;

const LOG_TARGET: &str = "    github";

/// Number of repositories requested per listing page. A page shorter than
/// this ends the listing.
const REPO_PAGE_SIZE: usize = 100;

/// Pattern to extract the last page number from a GitHub API Link header
static PAGE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"page=(\d+)>; rel=.last.").expect("invalid regex"));

/// Repository fields captured from the listing response, straight off the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoDescriptor {
    pub name: String,
    pub full_name: String,
    pub owner: OwnerRef,
    #[serde(default)]
    pub description: Option<String>,
    /// Size in KB, as reported by the API.
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub license: Option<LicenseRef>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub forks_count: Option<u64>,
    #[serde(default)]
    pub open_issues_count: Option<u64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwnerRef {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LicenseRef {
    #[serde(default)]
    pub name: Option<String>,
}

/// User fields shown by the `user` command.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    pub login: String,
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub account_type: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub blog: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub followers: Option<u64>,
    #[serde(default)]
    pub following: Option<u64>,
    #[serde(default)]
    pub public_repos: Option<u64>,
    #[serde(default)]
    pub public_gists: Option<u64>,
    #[serde(default)]
    pub disk_usage: Option<u64>,
    #[serde(default)]
    pub owned_private_repos: Option<u64>,
    #[serde(default)]
    pub total_private_repos: Option<u64>,
    #[serde(default)]
    pub private_gists: Option<u64>,
}

/// README metadata; only the display name is needed.
#[derive(Debug, Deserialize)]
struct ReadmeInfo {
    name: String,
}

/// Just enough of a repository document to find its parent.
#[derive(Debug, Deserialize)]
struct ParentEnvelope {
    #[serde(default)]
    parent: Option<ParentRef>,
}

#[derive(Debug, Deserialize)]
struct ParentRef {
    full_name: String,
}

/// GitHub API client handle, shared read-only by all concurrent fetches.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    octocrab: Octocrab,
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    /// Create a new API client with optional token authentication.
    ///
    /// `user_agent` identifies this client to GitHub and must be passed in
    /// explicitly; `timeout` bounds each individual enrichment fetch.
    pub fn new(token: Option<&str>, user_agent: &str, base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        use reqwest::header::{AUTHORIZATION, HeaderValue};

        let base_url = base_url.into();
        let mut http_builder = reqwest::Client::builder().user_agent(user_agent);
        let mut octo_builder = Octocrab::builder().base_uri(base_url.clone())?;

        if let Some(t) = token {
            let mut auth_val = HeaderValue::from_str(&format!("token {t}"))?;
            auth_val.set_sensitive(true);

            let mut headers = HeaderMap::new();
            let _ = headers.insert(AUTHORIZATION, auth_val);

            http_builder = http_builder.default_headers(headers);
            octo_builder = octo_builder.personal_token(t.to_string());
        }

        Ok(Self {
            http: http_builder.build()?,
            octocrab: octo_builder.build()?,
            base_url,
            timeout,
        })
    }

    /// Get the base URL for this client
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Per-fetch timeout for enrichment operations
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Construct API URL for a repository with optional path suffix
    fn repo_url(&self, owner: &str, repo: &str, suffix: &str) -> String {
        format!("{}/repos/{owner}/{repo}{suffix}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let resp = self.http.get(url).send().await?.error_for_status()?;
        Ok(resp.json().await?)
    }

    /// Fetch the authenticated user.
    pub async fn current_user(&self) -> Result<UserInfo> {
        self.get_json(&format!("{}/user", self.base_url)).await
    }

    /// Fetch an arbitrary user by login.
    pub async fn user(&self, login: &str) -> Result<UserInfo> {
        self.get_json(&format!("{}/users/{login}", self.base_url)).await
    }

    /// List repositories for the given owner, or for the authenticated user
    /// when `owner` is `None`.
    ///
    /// Pages are requested 100 at a time and the listing stops at the first
    /// page shorter than 100 entries, so the result is the complete set in
    /// the order the API reports it.
    pub async fn list_repositories(&self, owner: Option<&str>) -> Result<Vec<RepoDescriptor>> {
        let base = match owner {
            Some(login) => format!("{}/users/{login}/repos", self.base_url),
            None => format!("{}/user/repos", self.base_url),
        };

        let mut repositories = Vec::new();
        let mut page_num = 1u32;

        loop {
            let url = format!("{base}?per_page={REPO_PAGE_SIZE}&page={page_num}");
            log::debug!(target: LOG_TARGET, "Fetching repository listing page {page_num}");

            let page: Vec<RepoDescriptor> = self
                .get_json(&url)
                .await
                .into_app_err_with(|| format!("fetching repository listing page {page_num}"))?;

            let page_len = page.len();
            repositories.extend(page);

            if page_len < REPO_PAGE_SIZE {
                break;
            }

            page_num += 1;
        }

        log::info!(target: LOG_TARGET, "Listed {} repositories across {page_num} page(s)", repositories.len());
        Ok(repositories)
    }

    /// Number of published releases for a repository.
    pub async fn release_count(&self, owner: &str, repo: &str) -> Result<u64> {
        self.count_via_link_header(&self.repo_url(owner, repo, "/releases?per_page=1")).await
    }

    /// Number of collaborators. The API restricts this endpoint to users
    /// with push access, so it routinely fails for foreign repositories.
    pub async fn collaborator_count(&self, owner: &str, repo: &str) -> Result<u64> {
        self.count_via_link_header(&self.repo_url(owner, repo, "/collaborators?per_page=1")).await
    }

    /// Number of stargazers.
    pub async fn stargazer_count(&self, owner: &str, repo: &str) -> Result<u64> {
        self.count_via_link_header(&self.repo_url(owner, repo, "/stargazers?per_page=1")).await
    }

    /// Number of watchers. Uses the `subscribers` endpoint; the repository
    /// document's `watchers_count` field reports stars, not watchers.
    pub async fn watcher_count(&self, owner: &str, repo: &str) -> Result<u64> {
        self.count_via_link_header(&self.repo_url(owner, repo, "/subscribers?per_page=1")).await
    }

    /// Display name of the repository's README, if it has one.
    pub async fn readme_name(&self, owner: &str, repo: &str) -> Result<String> {
        let readme: ReadmeInfo = self.get_json(&self.repo_url(owner, repo, "/readme")).await?;
        Ok(readme.name)
    }

    /// Full name of the repository this repository was forked from.
    ///
    /// Goes straight to the REST endpoint and parses just the parent's
    /// `full_name` out of the repository document. Never fails; every
    /// failure shape maps to its own sentinel so callers can tell a
    /// missing parent apart from a failed request.
    pub async fn parent_full_name(&self, owner: &str, repo: &str) -> ParentName {
        let url = self.repo_url(owner, repo, "");

        let resp = match self.http.get(&url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::debug!(target: LOG_TARGET, "Parent lookup request for '{owner}/{repo}' failed: {e:#}");
                return ParentName::Exception;
            }
        };

        let status = resp.status();
        if !status.is_success() {
            return ParentName::Status(status.as_u16());
        }

        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) => {
                log::debug!(target: LOG_TARGET, "Could not read parent lookup body for '{owner}/{repo}': {e:#}");
                return ParentName::Exception;
            }
        };

        if body.is_empty() {
            return ParentName::NotFound;
        }

        match serde_json::from_str::<ParentEnvelope>(&body) {
            Ok(envelope) => envelope.parent.map_or(ParentName::NoParent, |parent| ParentName::Named(parent.full_name)),
            Err(_) => ParentName::NotFound,
        }
    }

    /// Current rate limit status.
    pub async fn rate_limits(&self) -> Result<octocrab::models::RateLimit> {
        Ok(self.octocrab.ratelimit().get().await?)
    }

    /// Number of elements in a paged collection, in one request.
    ///
    /// Asks for a single-element page and reads the last page number from
    /// the `Link` header. Collections that fit in one page carry no `Link`
    /// header, in which case the body itself is counted.
    async fn count_via_link_header(&self, url: &str) -> Result<u64> {
        log::debug!(target: LOG_TARGET, "Fetching count via Link header from '{url}'");

        let resp = self.http.get(url).send().await?.error_for_status()?;

        if let Some(link_header) = resp.headers().get(LINK) {
            let link_str = link_header.to_str()?;
            if let Some(count) = PAGE_REGEX.captures(link_str).and_then(|caps| caps.get(1)) {
                return Ok(count.as_str().parse()?);
            }
        }

        let bytes = resp
            .bytes()
            .await
            .into_app_err_with(|| format!("could not read response body from '{url}'"))?;

        count_json_array_elements(&bytes).into_app_err_with(|| format!("could not count items in JSON response from '{url}'"))
    }
}

/// Count elements in a JSON array without allocating parsed values.
/// Uses `IgnoredAny` to skip deserialization of element contents, only counting them.
fn count_json_array_elements(json: &[u8]) -> Result<u64> {
    use serde::de::IgnoredAny;

    let array: Vec<IgnoredAny> = serde_json::from_slice(json).into_app_err("malformed JSON while counting array elements")?;

    Ok(array.len() as u64)
}
