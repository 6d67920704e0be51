use chrono::SecondsFormat;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use thiserror::Error;

use crate::{ContestRules, Entry, Golfer, Roster};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write csv record: {0}")]
    Write(#[from] csv::Error),

    #[error("failed to flush csv output: {0}")]
    Flush(String),
}

/// An entry with its picks looked up in the current roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    pub entry: Entry,
    /// One slot per required pick; `None` where the pick is missing or the
    /// golfer no longer exists.
    pub golfers: Vec<Option<Golfer>>,
    pub total_salary: u64,
}

pub fn resolve_entry(entry: &Entry, roster: &Roster, rules: &ContestRules) -> ResolvedEntry {
    let golfers: Vec<Option<Golfer>> = (0..rules.required_picks)
        .map(|slot| {
            entry
                .picks
                .get(slot)
                .and_then(|id| roster.get(*id))
                .cloned()
        })
        .collect();
    let total_salary = golfers
        .iter()
        .flatten()
        .map(|g| u64::from(g.salary))
        .sum();
    ResolvedEntry {
        entry: entry.clone(),
        golfers,
        total_salary,
    }
}

fn header(rules: &ContestRules) -> Vec<String> {
    let mut cols: Vec<String> = ["First", "Last", "Email", "Entry"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    cols.extend((1..=rules.required_picks).map(|i| format!("Golfer {}", i)));
    cols.extend((1..=rules.required_picks).map(|i| format!("Salary {}", i)));
    cols.push("Total Salary".to_string());
    cols.push("Timestamp".to_string());
    cols
}

fn row(resolved: &ResolvedEntry) -> Vec<String> {
    let entry = &resolved.entry;
    let mut cols = vec![
        entry.first_name.clone(),
        entry.last_name.clone(),
        entry.email.clone(),
        entry.entry_name.clone(),
    ];
    cols.extend(
        resolved
            .golfers
            .iter()
            .map(|g| g.as_ref().map(|g| g.name.clone()).unwrap_or_default()),
    );
    cols.extend(
        resolved
            .golfers
            .iter()
            .map(|g| g.as_ref().map(|g| g.salary.to_string()).unwrap_or_default()),
    );
    cols.push(resolved.total_salary.to_string());
    cols.push(
        entry
            .created_at
            .to_rfc3339_opts(SecondsFormat::Secs, true),
    );
    cols
}

/// Renders entries as a fully quoted, CRLF separated CSV document.
///
/// Picks are resolved against `roster` as it is now, so renamed golfers and
/// salary changes show up in old entries.
pub fn export_entries(
    entries: &[Entry],
    roster: &Roster,
    rules: &ContestRules,
) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(header(rules))?;
    for entry in entries {
        writer.write_record(row(&resolve_entry(entry, roster, rules)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Flush(e.to_string()))
}
