use super::common;
use crate::Result;
use crate::roster::{RepoRecord, Summary, count_or_unknown};
use chrono::{DateTime, SecondsFormat, Utc};
use core::fmt::Write;
use std::borrow::Cow;

/// Fixed column set, one row per repository.
const HEADER: &[&str] = &[
    "Name",
    "FullName",
    "Description",
    "Size (KB)",
    "Private",
    "Language",
    "License",
    "Readme",
    "ReleaseCount",
    "CollaboratorsCount",
    "OpenIssuesCount",
    "Fork",
    "ParentName",
    "ForksCount",
    "StarCount",
    "Watchers",
    "CreatedAt",
    "UpdatedAt",
    "PushedAt",
];

pub fn generate<W: Write>(owner: &str, records: &[RepoRecord], summary: &Summary, writer: &mut W) -> Result<()> {
    writeln!(writer, "Repository Information for {owner}")?;
    common::write_summary(summary, writer)?;
    writeln!(writer, "{}", HEADER.join(","))?;

    for record in records {
        write_row(record, writer)?;
    }

    Ok(())
}

fn write_row<W: Write>(record: &RepoRecord, writer: &mut W) -> Result<()> {
    write!(writer, "{}", escape_csv(&record.name))?;
    write!(writer, ",{}", escape_csv(&record.full_name))?;
    // The description is always quoted, even when empty
    write!(writer, ",\"{}\"", record.description.as_deref().unwrap_or_default().replace('"', "\"\""))?;
    write!(writer, ",{}", record.size_kb)?;
    write!(writer, ",{}", record.private)?;
    write!(writer, ",{}", escape_csv(record.language.as_deref().unwrap_or_default()))?;
    write!(writer, ",{}", escape_csv(record.license.as_deref().unwrap_or_default()))?;
    write!(writer, ",{}", escape_csv(record.readme.as_deref().unwrap_or_default()))?;
    write!(writer, ",{}", count_or_unknown(record.release_count))?;
    write!(writer, ",{}", count_or_unknown(record.collaborators_count))?;
    write!(writer, ",{}", count_or_unknown(record.open_issues_count))?;
    write!(writer, ",{}", record.fork)?;
    write!(writer, ",{}", escape_csv(&record.parent_name.csv_field()))?;
    write!(writer, ",{}", count_or_unknown(record.forks_count))?;
    write!(writer, ",{}", count_or_unknown(record.star_count))?;
    write!(writer, ",{}", count_or_unknown(record.watcher_count))?;
    write!(writer, ",{}", timestamp(record.created_at))?;
    write!(writer, ",{}", timestamp(record.updated_at))?;
    match record.pushed_at {
        Some(pushed_at) => writeln!(writer, ",{}", timestamp(pushed_at))?,
        None => writeln!(writer, ",")?,
    }

    Ok(())
}

fn timestamp(when: DateTime<Utc>) -> String {
    when.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Escape a value for RFC compliant CSV output.
///
/// Wraps the value in double quotes if it contains commas, newlines, or double quotes.
/// Internal double quotes are doubled per the RFC.
fn escape_csv(s: &str) -> Cow<'_, str> {
    if s.contains('"') {
        Cow::Owned(format!("\"{}\"", s.replace('"', "\"\"")))
    } else if s.contains(',') || s.contains('\n') || s.contains('\r') {
        Cow::Owned(format!("\"{s}\""))
    } else {
        Cow::Borrowed(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::{LicenseRef, OwnerRef, RepoDescriptor};
    use crate::roster::{ParentName, summarize};

    fn test_record(name: &str) -> RepoRecord {
        let mut record = RepoRecord::new(RepoDescriptor {
            name: name.to_string(),
            full_name: format!("octocat/{name}"),
            owner: OwnerRef {
                login: "octocat".to_string(),
            },
            description: Some("does things, occasionally".to_string()),
            size: 5,
            private: false,
            language: Some("Rust".to_string()),
            license: Some(LicenseRef {
                name: Some("MIT License".to_string()),
            }),
            fork: true,
            forks_count: Some(1),
            open_issues_count: Some(2),
            created_at: "2020-01-01T00:00:00Z".parse().unwrap(),
            updated_at: "2021-01-01T00:00:00Z".parse().unwrap(),
            pushed_at: Some("2022-01-01T00:00:00Z".parse().unwrap()),
        });

        record.release_count = Some(3);
        record.readme = Some("README.md".to_string());
        record.collaborators_count = Some(1);
        record.star_count = Some(9);
        record.watcher_count = Some(4);
        record
    }

    fn render(records: &[RepoRecord]) -> String {
        let summary = summarize(records);
        let mut output = String::new();
        generate("octocat", records, &summary, &mut output).unwrap();
        output
    }

    #[test]
    fn test_title_summary_then_header() {
        let output = render(&[]);
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines[0], "Repository Information for octocat");
        assert_eq!(lines[1], "    Repositories=0");
        assert!(lines[10].starts_with("Name,FullName,Description,Size (KB),"));
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn test_row_values_in_header_order() {
        let output = render(&[test_record("widget")]);
        let row = output.lines().last().unwrap();

        assert_eq!(
            row,
            "widget,octocat/widget,\"does things, occasionally\",5,false,Rust,MIT License,README.md,3,1,2,true,,1,9,4,2020-01-01T00:00:00Z,2021-01-01T00:00:00Z,2022-01-01T00:00:00Z"
        );
    }

    #[test]
    fn test_none_parent_writes_empty_field() {
        let mut record = test_record("widget");
        record.parent_name = ParentName::NoParent;

        let row_none = render(core::slice::from_ref(&record));
        assert!(row_none.lines().last().unwrap().contains(",true,,1,"));

        record.parent_name = ParentName::Named("upstream/widget".to_string());
        let row_named = render(&[record]);
        assert!(row_named.lines().last().unwrap().contains(",true,upstream/widget,1,"));
    }

    #[test]
    fn test_failure_sentinels_survive_in_csv() {
        let mut record = test_record("widget");
        record.parent_name = ParentName::Status(404);
        record.release_count = None;
        record.star_count = None;

        let output = render(&[record]);
        let row = output.lines().last().unwrap();

        assert!(row.contains("<404>"));
        assert!(row.contains(",-1,1,2,"));
        assert!(row.contains(",-1,4,"));
    }

    #[test]
    fn test_description_always_quoted() {
        let mut record = test_record("widget");
        record.description = None;

        let output = render(&[record]);
        assert!(output.lines().last().unwrap().starts_with("widget,octocat/widget,\"\","));
    }

    #[test]
    fn test_description_quotes_are_doubled() {
        let mut record = test_record("widget");
        record.description = Some("the \"best\" repo".to_string());

        let output = render(&[record]);
        assert!(output.contains("\"the \"\"best\"\" repo\""));
    }

    #[test]
    fn test_missing_pushed_at_is_empty() {
        let mut record = test_record("widget");
        record.pushed_at = None;

        let output = render(&[record]);
        assert!(output.lines().last().unwrap().ends_with("2021-01-01T00:00:00Z,"));
    }

    #[test]
    fn test_rows_follow_batch_order() {
        let output = render(&[test_record("alpha"), test_record("beta"), test_record("gamma")]);
        let rows: Vec<_> = output.lines().skip(11).collect();

        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("alpha,"));
        assert!(rows[1].starts_with("beta,"));
        assert!(rows[2].starts_with("gamma,"));
    }

    #[test]
    fn test_escape_csv_no_special_chars() {
        let result = escape_csv("hello world");
        assert_eq!(result, "hello world");
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_csv_with_quotes() {
        let result = escape_csv("hello \"world\"");
        assert_eq!(result, "\"hello \"\"world\"\"\"");
        assert!(matches!(result, Cow::Owned(_)));
    }

    #[test]
    fn test_escape_csv_with_comma() {
        let result = escape_csv("hello,world");
        assert_eq!(result, "\"hello,world\"");
        assert!(matches!(result, Cow::Owned(_)));
    }

    #[test]
    fn test_escape_csv_empty() {
        let result = escape_csv("");
        assert_eq!(result, "");
        assert!(matches!(result, Cow::Borrowed(_)));
    }
}
