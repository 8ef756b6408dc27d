//! Repository roster assembly
//!
//! This module owns the data model and the enrichment fan-out. A batch is
//! built in three steps:
//!
//! 1. The repository listing is fetched once; a failure here fails the
//!    whole batch.
//! 2. One [`RepoRecord`] per repository is built synchronously from the
//!    listing response, preserving the listing order.
//! 3. Five enrichment fetches per record (releases, readme, collaborators,
//!    stars/watchers, fork parent) are dispatched across the entire batch
//!    at once and the batch completes only when every one of them has
//!    settled. A failed or timed-out fetch leaves its field at the unknown
//!    value and never disturbs any other fetch.
//!
//! [`summarize`] computes batch-level statistics over a finished roster.

mod collector;
mod record;
mod summary;

pub use collector::{enrich_all, fetch_and_enrich};
pub use record::{ParentName, RepoRecord, count_or_unknown};
pub use summary::{Summary, summarize};
