//! Report generation for repository batches
//!
//! Two generators are provided, each accessed through a `generate`
//! function writing into any [`core::fmt::Write`] sink:
//!
//! - **Console**: numbered per-repository blocks followed by the batch
//!   summary, with optional bold headings
//! - **CSV**: a title line and summary section, then one fixed-column row
//!   per repository in batch order
//!
//! Both operate on the same inputs (owner login, enriched records, batch
//! summary) so callers can produce either format from one batch. Unknown
//! counts render as `-1` in both formats, never as `0`.

mod common;
mod console;
mod csv;

pub use console::generate as generate_console;
pub use csv::generate as generate_csv;
