use crate::github::RepoDescriptor;
use chrono::{DateTime, Utc};
use core::fmt;

/// Outcome of the fork-parent lookup for one repository.
///
/// The lookup distinguishes four failure shapes, and reports render each as
/// a distinct sentinel string so that a repository without a parent is
/// never confused with a lookup that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParentName {
    /// The repository has a parent with this "owner/repo" full name.
    Named(String),

    /// The repository document was fetched and carries no parent.
    NoParent,

    /// The repository document was empty or not parseable.
    NotFound,

    /// The API answered with a non-success HTTP status.
    Status(u16),

    /// The request itself failed (network error, timeout).
    Exception,
}

impl ParentName {
    /// The value written to CSV output. `NoParent` is written as an empty
    /// field rather than its `<None>` sentinel.
    #[must_use]
    pub fn csv_field(&self) -> String {
        match self {
            Self::NoParent => String::new(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for ParentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(full_name) => f.write_str(full_name),
            Self::NoParent => f.write_str("<None>"),
            Self::NotFound => f.write_str("<Not Found>"),
            Self::Status(code) => write!(f, "<{code}>"),
            Self::Exception => f.write_str("<Exception>"),
        }
    }
}

/// Render a count for display, using `-1` for values that were never
/// successfully fetched. The two cases must stay distinguishable: a real
/// zero means the collection is empty, `-1` means nobody knows.
#[must_use]
pub fn count_or_unknown(count: Option<u64>) -> String {
    count.map_or_else(|| "-1".to_string(), |c| c.to_string())
}

/// One repository in a batch: static metadata captured from the listing
/// response plus enriched fields filled in (best effort) by the fan-out.
///
/// Enriched fields are `None` until successfully fetched. Each record is
/// written by exactly one enrichment task, so no locking is needed.
#[derive(Debug, Clone)]
pub struct RepoRecord {
    pub name: String,
    pub full_name: String,
    pub owner: String,
    pub description: Option<String>,
    pub size_kb: u64,
    pub private: bool,
    pub language: Option<String>,
    pub license: Option<String>,
    pub fork: bool,
    pub forks_count: Option<u64>,
    pub open_issues_count: Option<u64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub pushed_at: Option<DateTime<Utc>>,

    // Enriched fields

    pub release_count: Option<u64>,
    pub readme: Option<String>,
    pub collaborators_count: Option<u64>,
    pub star_count: Option<u64>,
    pub watcher_count: Option<u64>,
    pub parent_name: ParentName,
}

impl RepoRecord {
    /// Build a record from a listing descriptor. Enriched fields start out
    /// unknown and are filled in by the fan-out.
    #[must_use]
    pub fn new(descriptor: RepoDescriptor) -> Self {
        Self {
            name: descriptor.name,
            full_name: descriptor.full_name,
            owner: descriptor.owner.login,
            description: descriptor.description,
            size_kb: descriptor.size,
            private: descriptor.private,
            language: descriptor.language,
            license: descriptor.license.and_then(|license| license.name),
            fork: descriptor.fork,
            forks_count: descriptor.forks_count,
            open_issues_count: descriptor.open_issues_count,
            created_at: descriptor.created_at,
            updated_at: descriptor.updated_at,
            pushed_at: descriptor.pushed_at,
            release_count: None,
            readme: None,
            collaborators_count: None,
            star_count: None,
            watcher_count: None,
            parent_name: ParentName::NoParent,
        }
    }
}
