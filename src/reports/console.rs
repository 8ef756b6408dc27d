use super::common::{self, TIMESTAMP_FORMAT};
use crate::Result;
use crate::roster::{RepoRecord, Summary, count_or_unknown};
use core::fmt::Write;
use owo_colors::OwoColorize;

pub fn generate<W: Write>(owner: &str, records: &[RepoRecord], summary: &Summary, use_colors: bool, writer: &mut W) -> Result<()> {
    let heading = format!("Repositories for {owner} ({})", records.len());
    if use_colors {
        writeln!(writer, "{}", heading.bold())?;
    } else {
        writeln!(writer, "{heading}")?;
    }

    for (index, record) in records.iter().enumerate() {
        write_record(index + 1, record, writer)?;
    }

    if use_colors {
        writeln!(writer, "{}", "Summary".bold())?;
    } else {
        writeln!(writer, "Summary")?;
    }

    common::write_summary(summary, writer)
}

fn write_record<W: Write>(ordinal: usize, record: &RepoRecord, writer: &mut W) -> Result<()> {
    writeln!(writer, "{ordinal} Name={}", record.name)?;
    writeln!(writer, "    FullName={}", record.full_name)?;
    writeln!(writer, "    Description={}", record.description.as_deref().unwrap_or_default())?;
    writeln!(writer, "    Size={} KB", record.size_kb)?;
    writeln!(writer, "    Private={}", record.private)?;
    writeln!(writer, "    Language={}", record.language.as_deref().unwrap_or_default())?;
    writeln!(writer, "    License={}", record.license.as_deref().unwrap_or("<NA>"))?;
    writeln!(writer, "    Readme={}", record.readme.as_deref().unwrap_or("<None>"))?;
    writeln!(writer, "    ReleaseCount={}", count_or_unknown(record.release_count))?;
    writeln!(writer, "    Collaborators={}", count_or_unknown(record.collaborators_count))?;
    writeln!(writer, "    OpenIssuesCount={}", count_or_unknown(record.open_issues_count))?;
    writeln!(writer, "    Fork={}", record.fork)?;
    writeln!(writer, "    ParentName={}", record.parent_name)?;
    writeln!(writer, "    ForksCount={}", count_or_unknown(record.forks_count))?;
    writeln!(writer, "    StarCount={}", count_or_unknown(record.star_count))?;
    writeln!(writer, "    Watchers={}", count_or_unknown(record.watcher_count))?;
    writeln!(writer, "    CreatedAt={}", record.created_at.format(TIMESTAMP_FORMAT))?;
    writeln!(writer, "    UpdatedAt={}", record.updated_at.format(TIMESTAMP_FORMAT))?;
    match record.pushed_at {
        Some(pushed_at) => writeln!(writer, "    PushedAt={}", pushed_at.format(TIMESTAMP_FORMAT))?,
        None => writeln!(writer, "    PushedAt=Never")?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::{OwnerRef, RepoDescriptor};
    use crate::roster::{ParentName, summarize};

    fn test_record(name: &str) -> RepoRecord {
        RepoRecord::new(RepoDescriptor {
            name: name.to_string(),
            full_name: format!("octocat/{name}"),
            owner: OwnerRef {
                login: "octocat".to_string(),
            },
            description: None,
            size: 12,
            private: false,
            language: None,
            license: None,
            fork: false,
            forks_count: Some(2),
            open_issues_count: Some(0),
            created_at: "2020-05-01T10:30:00Z".parse().unwrap(),
            updated_at: "2021-06-01T11:00:00Z".parse().unwrap(),
            pushed_at: None,
        })
    }

    fn render(records: &[RepoRecord]) -> String {
        let summary = summarize(records);
        let mut output = String::new();
        generate("octocat", records, &summary, false, &mut output).unwrap();
        output
    }

    #[test]
    fn test_empty_batch() {
        let output = render(&[]);
        assert!(output.starts_with("Repositories for octocat (0)\n"));
        assert!(output.contains("Summary\n"));
        assert!(output.contains("    Repositories=0\n"));
    }

    #[test]
    fn test_records_are_numbered_in_order() {
        let output = render(&[test_record("alpha"), test_record("beta")]);

        let alpha = output.find("1 Name=alpha").unwrap();
        let beta = output.find("2 Name=beta").unwrap();
        assert!(alpha < beta);
    }

    #[test]
    fn test_unknown_values_render_as_sentinels() {
        let output = render(&[test_record("alpha")]);

        // Unknown counts must be distinguishable from a real zero
        assert!(output.contains("    ReleaseCount=-1\n"));
        assert!(output.contains("    Collaborators=-1\n"));
        assert!(output.contains("    StarCount=-1\n"));
        assert!(output.contains("    Watchers=-1\n"));

        assert!(output.contains("    License=<NA>\n"));
        assert!(output.contains("    Readme=<None>\n"));
        assert!(output.contains("    PushedAt=Never\n"));
    }

    #[test]
    fn test_known_values_render_plainly() {
        let mut record = test_record("alpha");
        record.release_count = Some(4);
        record.readme = Some("README.md".to_string());
        record.star_count = Some(0);
        record.parent_name = ParentName::Named("upstream/alpha".to_string());
        record.pushed_at = Some("2023-01-01T00:00:00Z".parse().unwrap());

        let output = render(&[record]);
        assert!(output.contains("    ReleaseCount=4\n"));
        assert!(output.contains("    Readme=README.md\n"));
        assert!(output.contains("    StarCount=0\n"));
        assert!(output.contains("    ParentName=upstream/alpha\n"));
        assert!(output.contains("    PushedAt=2023-01-01 00:00:00 UTC\n"));
        assert!(output.contains("    OpenIssuesCount=0\n"));
    }

    #[test]
    fn test_colors_add_bold_headings() {
        let records = [test_record("alpha")];
        let summary = summarize(&records);

        let mut output = String::new();
        generate("octocat", &records, &summary, true, &mut output).unwrap();

        // ANSI escapes only appear in the colored rendition
        assert!(output.contains("\u{1b}["));
    }
}
