use super::record::{ParentName, RepoRecord};
use crate::Result;
use crate::github::ApiClient;
use crate::github::RepoDescriptor;
use core::time::Duration;
use futures_util::future::join_all;

const LOG_TARGET: &str = " collector";

/// Fetch the repository list for `owner` and enrich every entry.
///
/// `owner` of `None` means the authenticated user. A failure of the listing
/// call itself fails the whole batch and no partial result is returned;
/// enrichment failures never do.
pub async fn fetch_and_enrich(client: &ApiClient, owner: Option<&str>) -> Result<Vec<RepoRecord>> {
    let descriptors = client.list_repositories(owner).await?;
    Ok(enrich_all(client, descriptors).await)
}

/// Enrich a batch of repository descriptors, preserving their order.
///
/// Every enrichment fetch for every repository is dispatched at once; the
/// function returns only once all of them have settled. No fetch depends on
/// any other, so the batch takes roughly as long as its slowest fetch.
pub async fn enrich_all(client: &ApiClient, descriptors: Vec<RepoDescriptor>) -> Vec<RepoRecord> {
    let total = descriptors.len();
    log::info!(target: LOG_TARGET, "Enriching {total} repositories");

    let records = join_all(descriptors.into_iter().map(|descriptor| enrich_one(client, descriptor))).await;

    log::info!(target: LOG_TARGET, "Enrichment settled for {total} repositories");
    records
}

/// Run the five enrichment fetches for a single repository.
async fn enrich_one(client: &ApiClient, descriptor: RepoDescriptor) -> RepoRecord {
    let mut record = RepoRecord::new(descriptor);

    let (release_count, readme, collaborators_count, (star_count, watcher_count), parent_name) = tokio::join!(
        field(
            client.timeout(),
            "release count",
            &record.full_name,
            client.release_count(&record.owner, &record.name),
        ),
        field(
            client.timeout(),
            "readme",
            &record.full_name,
            client.readme_name(&record.owner, &record.name),
        ),
        field(
            client.timeout(),
            "collaborator count",
            &record.full_name,
            client.collaborator_count(&record.owner, &record.name),
        ),
        activity(client, &record.owner, &record.name, &record.full_name),
        parent(client, &record.owner, &record.name),
    );

    record.release_count = release_count;
    record.readme = readme;
    record.collaborators_count = collaborators_count;
    record.star_count = star_count;
    record.watcher_count = watcher_count;
    record.parent_name = parent_name;
    record
}

/// Run one enrichment fetch, converting any failure or timeout into the
/// unknown value for that field.
async fn field<T>(limit: Duration, what: &str, repo: &str, fut: impl Future<Output = Result<T>>) -> Option<T> {
    match tokio::time::timeout(limit, fut).await {
        Ok(Ok(value)) => Some(value),
        Ok(Err(e)) => {
            log::debug!(target: LOG_TARGET, "Could not fetch {what} for '{repo}': {e:#}");
            None
        }
        Err(_) => {
            log::debug!(target: LOG_TARGET, "Timed out fetching {what} for '{repo}'");
            None
        }
    }
}

/// Stars, then watchers. The two counts share one failure scope: when the
/// stargazer fetch fails both stay unknown, while a watcher failure leaves
/// only the watcher count unknown.
async fn activity(client: &ApiClient, owner: &str, name: &str, repo: &str) -> (Option<u64>, Option<u64>) {
    let Some(stars) = field(client.timeout(), "stargazer count", repo, client.stargazer_count(owner, name)).await else {
        return (None, None);
    };

    let watchers = field(client.timeout(), "watcher count", repo, client.watcher_count(owner, name)).await;
    (Some(stars), watchers)
}

/// Parent lookup with its own timeout; expiry maps to the same sentinel as
/// any other request failure.
async fn parent(client: &ApiClient, owner: &str, name: &str) -> ParentName {
    tokio::time::timeout(client.timeout(), client.parent_full_name(owner, name))
        .await
        .unwrap_or(ParentName::Exception)
}
