//! Roster sources: the embedded sample list and CSV imports.

use crate::models::{RosterEntry, SchedulerError};
use std::io::Read;
use std::path::Path;

/// Sample registrations shipped with the app. Every address appears twice.
const SEED_CSV: &str = include_str!("../data/roster.csv");

/// Parse a roster CSV with an `email` header column.
///
/// Cells are trimmed and blank rows skipped. A non-blank cell without `@` rejects
/// the whole file.
pub fn parse_roster_csv<R: Read>(reader: R) -> Result<Vec<RosterEntry>, SchedulerError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut roster = Vec::new();
    for (row, record) in rdr.deserialize::<RosterEntry>().enumerate() {
        let entry = record.map_err(|e| SchedulerError::InvalidRoster(e.to_string()))?;
        if entry.email.is_empty() {
            continue;
        }
        if !entry.email.contains('@') {
            return Err(SchedulerError::InvalidRoster(format!(
                "row {}: '{}' is not an email address",
                row + 2,
                entry.email
            )));
        }
        roster.push(entry);
    }
    Ok(roster)
}

/// Load a roster from a CSV file on disk.
pub fn load_roster_file(path: &Path) -> Result<Vec<RosterEntry>, SchedulerError> {
    let file = std::fs::File::open(path)
        .map_err(|e| SchedulerError::InvalidRoster(format!("{}: {}", path.display(), e)))?;
    parse_roster_csv(file)
}

/// The embedded sample roster.
pub fn seed_roster() -> Vec<RosterEntry> {
    parse_roster_csv(SEED_CSV.as_bytes()).unwrap_or_default()
}

/// Build a roster from raw emails (e.g. a JSON body), with the same rules as the CSV import.
pub fn roster_from_emails<I, S>(emails: I) -> Result<Vec<RosterEntry>, SchedulerError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut roster = Vec::new();
    for email in emails {
        let email = email.as_ref().trim();
        if email.is_empty() {
            continue;
        }
        if !email.contains('@') {
            return Err(SchedulerError::InvalidRoster(format!(
                "'{}' is not an email address",
                email
            )));
        }
        roster.push(RosterEntry::new(email));
    }
    Ok(roster)
}
