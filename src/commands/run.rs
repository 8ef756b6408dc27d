//! Command dispatch logic for gh-roster

use super::{LimitsArgs, ReposArgs, UserArgs, process_limits, process_repos, process_user};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "gh-roster", author, version, display_name = "gh-roster")]
#[command(about = "Report on a GitHub user's repositories")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: RosterSubcommand,
}

#[derive(Subcommand, Debug)]
enum RosterSubcommand {
    /// Fetch and report a user's repositories with enriched metadata
    Repos(Box<ReposArgs>),

    /// Show information about a user
    User(Box<UserArgs>),

    /// Show the current API rate limit status
    Limits(LimitsArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = Cli::parse_from(args);

    match &cli.command {
        RosterSubcommand::Repos(repos_args) => process_repos(host, repos_args).await,
        RosterSubcommand::User(user_args) => process_user(host, user_args).await,
        RosterSubcommand::Limits(limits_args) => process_limits(host, limits_args).await,
    }
}
