use super::Host;
use super::common::CommonArgs;
use crate::Result;
use chrono::DateTime;
use clap::Parser;
use ohno::IntoAppError;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct LimitsArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

pub async fn process_limits<H: Host>(host: &mut H, args: &LimitsArgs) -> Result<()> {
    args.common.init_logging();

    let client = args.common.build_client()?;
    let limits = client.rate_limits().await.into_app_err("could not fetch rate limits")?;

    let mut output = String::new();
    {
        use core::fmt::Write;

        writeln!(&mut output, "Rate Limits")?;
        for (label, rate) in [("Core", &limits.resources.core), ("Search", &limits.resources.search)] {
            writeln!(&mut output, "{label}")?;
            writeln!(&mut output, "  Limit={}", rate.limit)?;
            writeln!(&mut output, "  Remaining={}", rate.remaining)?;
            writeln!(&mut output, "  Reset={}", format_reset(rate.reset))?;
        }
    }

    let _ = write!(host.output(), "{output}");

    Ok(())
}

/// Render a rate limit reset time, which the API reports as epoch seconds.
fn format_reset(reset: u64) -> String {
    i64::try_from(reset)
        .ok()
        .and_then(|seconds| DateTime::from_timestamp(seconds, 0))
        .map_or_else(|| reset.to_string(), |when| when.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}
