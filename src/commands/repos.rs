use super::Host;
use super::common::CommonArgs;
use crate::Result;
use crate::reports::{generate_console, generate_csv};
use crate::roster::{fetch_and_enrich, summarize};
use camino::Utf8PathBuf;
use clap::Parser;
use ohno::{IntoAppError, app_err};
use std::fs;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ReposArgs {
    /// User whose repositories to report on (defaults to the authenticated user)
    #[arg(value_name = "OWNER")]
    pub owner: Option<String>,

    /// Output repository information to a CSV file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub csv: Option<Utf8PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub async fn process_repos<H: Host>(host: &mut H, args: &ReposArgs) -> Result<()> {
    args.common.init_logging();

    let client = args.common.build_client()?;

    // Resolve the owner login up front so the reports can carry it. Listing
    // the authenticated user's own repositories requires credentials.
    let owner = match &args.owner {
        Some(owner) => owner.clone(),
        None => {
            if args.common.github_token.is_none() {
                return Err(app_err!(
                    "listing your own repositories requires authentication; pass --github-token or set GITHUB_TOKEN"
                ));
            }

            client
                .current_user()
                .await
                .into_app_err("could not determine the authenticated user")?
                .login
        }
    };

    let records = fetch_and_enrich(&client, args.owner.as_deref()).await?;
    let summary = summarize(&records);

    let mut console_output = String::new();
    generate_console(&owner, &records, &summary, args.common.use_colors(), &mut console_output)?;
    let _ = write!(host.output(), "{console_output}");

    if let Some(filename) = &args.csv {
        let mut csv_output = String::new();
        generate_csv(&owner, &records, &summary, &mut csv_output)?;
        fs::write(filename, csv_output).into_app_err_with(|| format!("could not write CSV file '{filename}'"))?;
        let _ = writeln!(host.output(), "Wrote {filename}");
    }

    Ok(())
}
