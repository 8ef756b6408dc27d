//! Command-line interface and orchestration for gh-roster
//!
//! This module implements the CLI commands and coordinates the other
//! modules to perform end-to-end fetching, enrichment, and reporting. It
//! handles argument parsing, logging setup, and report output.
//!
//! # Implementation Model
//!
//! The module is organized around three commands:
//!
//! - **repos**: Fetch a user's repositories, enrich them concurrently,
//!   print the console report, and optionally export CSV
//! - **user**: Show information about the authenticated or a named user
//! - **limits**: Show the current API rate limit status
//!
//! The `run` function parses command-line arguments using clap and routes
//! to the appropriate command handler. All output goes through the [`Host`]
//! trait so command behavior can be tested against captured buffers.

mod common;
mod host;
mod limits;
mod repos;
mod run;
mod user;

pub use common::{ColorMode, CommonArgs, LogLevel};
pub use host::Host;
pub use limits::{LimitsArgs, process_limits};
pub use repos::{ReposArgs, process_repos};
pub use run::run;
pub use user::{UserArgs, process_user};
