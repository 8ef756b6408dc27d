use super::Host;
use super::common::CommonArgs;
use crate::Result;
use crate::github::UserInfo;
use clap::Parser;
use core::fmt;
use ohno::{IntoAppError, app_err};
use std::io::Write;

/// Timestamp rendering for the user report.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

#[derive(Parser, Debug)]
pub struct UserArgs {
    /// User to look up (defaults to the authenticated user)
    #[arg(value_name = "LOGIN")]
    pub login: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub async fn process_user<H: Host>(host: &mut H, args: &UserArgs) -> Result<()> {
    args.common.init_logging();

    let client = args.common.build_client()?;

    let user = match &args.login {
        Some(login) => client
            .user(login)
            .await
            .into_app_err_with(|| format!("could not fetch user '{login}'"))?,
        None => {
            if args.common.github_token.is_none() {
                return Err(app_err!(
                    "looking up the authenticated user requires authentication; pass --github-token or set GITHUB_TOKEN"
                ));
            }

            client.current_user().await.into_app_err("could not fetch the authenticated user")?
        }
    };

    let mut output = String::new();
    write_user(&user, &mut output)?;
    let _ = write!(host.output(), "{output}");

    Ok(())
}

fn write_user<W: fmt::Write>(user: &UserInfo, writer: &mut W) -> Result<()> {
    writeln!(writer, "Login={}", user.login)?;
    writeln!(writer, "Name={}", user.name.as_deref().unwrap_or_default())?;
    writeln!(writer, "Id={}", user.id)?;
    writeln!(writer, "AccountType={}", user.account_type.as_deref().unwrap_or_default())?;
    writeln!(writer, "CreatedAt={}", user.created_at.format(TIMESTAMP_FORMAT))?;
    writeln!(writer, "UpdatedAt={}", user.updated_at.format(TIMESTAMP_FORMAT))?;
    writeln!(writer, "Email={}", user.email.as_deref().unwrap_or_default())?;
    writeln!(writer, "Company={}", user.company.as_deref().unwrap_or_default())?;
    writeln!(writer, "Blog={}", user.blog.as_deref().unwrap_or_default())?;
    writeln!(writer, "Bio={}", user.bio.as_deref().unwrap_or_default())?;
    writeln!(writer, "HtmlUrl={}", user.html_url.as_deref().unwrap_or_default())?;
    writeln!(writer, "Location={}", user.location.as_deref().unwrap_or_default())?;
    writeln!(writer, "Followers={}", user.followers.unwrap_or_default())?;
    writeln!(writer, "Following={}", user.following.unwrap_or_default())?;
    writeln!(writer, "PublicRepos={}", user.public_repos.unwrap_or_default())?;
    writeln!(writer, "PublicGists={}", user.public_gists.unwrap_or_default())?;
    writeln!(writer, "The following, if zero, may be inaccurate, owing to access restrictions:")?;
    writeln!(writer, "DiskUsage={}", user.disk_usage.unwrap_or_default())?;
    writeln!(writer, "OwnedPrivateRepos={}", user.owned_private_repos.unwrap_or_default())?;
    writeln!(writer, "TotalPrivateRepos={}", user.total_private_repos.unwrap_or_default())?;
    writeln!(writer, "PrivateGists={}", user.private_gists.unwrap_or_default())?;
    Ok(())
}
