use super::record::RepoRecord;

/// Aggregate statistics over one completed batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub repositories: u64,
    pub private: u64,
    pub forked: u64,
    pub missing_descriptions: u64,
    pub missing_readmes: u64,
    pub missing_licenses: u64,

    /// Number of repositories with at least one open issue.
    pub open_issues: u64,

    /// Sum of star counts across the batch. A repository whose star count
    /// could not be fetched contributes `-1`, so the total can undercount
    /// when any fetch failed.
    pub stars: i64,

    /// Sum of watcher counts, with the same `-1` convention as `stars`.
    pub watchers: i64,
}

/// Compute batch statistics over a finished roster.
///
/// Pure and deterministic; the records are not modified.
#[must_use]
pub fn summarize(records: &[RepoRecord]) -> Summary {
    let mut summary = Summary {
        repositories: records.len() as u64,
        ..Summary::default()
    };

    for record in records {
        if record.private {
            summary.private += 1;
        }
        if record.fork {
            summary.forked += 1;
        }
        if record.description.as_deref().is_none_or(str::is_empty) {
            summary.missing_descriptions += 1;
        }
        if record.readme.as_deref().is_none_or(str::is_empty) {
            summary.missing_readmes += 1;
        }
        if record.license.as_deref().is_none_or(str::is_empty) {
            summary.missing_licenses += 1;
        }
        if record.open_issues_count.is_some_and(|count| count > 0) {
            summary.open_issues += 1;
        }
        summary.stars += count_for_sum(record.star_count);
        summary.watchers += count_for_sum(record.watcher_count);
    }

    summary
}

#[expect(clippy::cast_possible_wrap, reason = "repository counts are far below i64::MAX")]
fn count_for_sum(count: Option<u64>) -> i64 {
    count.map_or(-1, |c| c as i64)
}
