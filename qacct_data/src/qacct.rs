use derive_more::derive::{Deref, Into};
use indexmap::IndexMap;
use itertools::Itertools as _;
use log::debug;

use crate::error::ParseError;

/// `qacct -j` prints this line between job records.
pub const ENTRY_SEPARATOR: &str = "==============================================================";

/// The field whose value identifies a job record.
pub const JOBNUMBER: &str = "jobnumber";

/// All `key value` pairs of one job record, in file order.
pub type Record = IndexMap<String, String>;

/// Parsed qacct output: one [`Record`] per job, keyed by its `jobnumber`,
/// in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, Into)]
pub struct Table(IndexMap<String, Record>);

impl Table {
    /// Parse the full text of a qacct log into a table.
    ///
    /// Entries are delimited by [`ENTRY_SEPARATOR`]; whitespace-only entries
    /// and blank lines are skipped. A later entry with an already-seen
    /// `jobnumber` replaces the earlier record but keeps its row position.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let entries = input
            .split(ENTRY_SEPARATOR)
            .map(str::trim)
            .filter(|entry| !entry.is_empty());

        let mut table = IndexMap::new();
        for (index, entry) in entries.enumerate() {
            let record = parse_entry(index, entry)?;
            let jobnumber = record
                .get(JOBNUMBER)
                .ok_or(ParseError::MissingJobNumber { entry: index })?
                .clone();
            table.insert(jobnumber, record);
        }

        debug!("parsed {} job records", table.len());
        Ok(Table(table))
    }

    /// Union of all record keys, in order of first appearance across records.
    /// Records that were parsed from incomplete entries simply lack some of
    /// these keys.
    pub fn columns(&self) -> Vec<&str> {
        self.0
            .values()
            .flat_map(|record| record.keys())
            .map(String::as_str)
            .unique()
            .collect_vec()
    }
}

/// Splits each line of one entry at its first run of whitespace. The value is
/// everything after that run, so embedded spaces and commas survive as-is.
fn parse_entry(index: usize, entry: &str) -> Result<Record, ParseError> {
    entry
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let (key, value) = line
                .split_once(char::is_whitespace)
                .ok_or_else(|| ParseError::MalformedLine {
                    entry: index,
                    line: line.to_owned(),
                })?;
            Ok((key.to_owned(), value.trim_start().to_owned()))
        })
        .process_results(|pairs| pairs.collect())
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;

    fn entry(body: &str) -> String {
        format!("{ENTRY_SEPARATOR}\n{body}\n")
    }

    #[test]
    fn separator_is_62_equals() {
        assert_eq!(ENTRY_SEPARATOR.len(), 62);
        assert!(ENTRY_SEPARATOR.chars().all(|c| c == '='));
    }

    #[test]
    fn parses_one_record_per_entry() {
        let input = entry("jobnumber 1\nowner alice") + &entry("jobnumber 2\nowner bob");
        let table = Table::parse(&input).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table["1"]["owner"], "alice");
        assert_eq!(table["2"]["owner"], "bob");
    }

    #[test]
    fn skips_whitespace_only_entries() {
        let input = format!("\n  \n{ENTRY_SEPARATOR}\njobnumber 7\n{ENTRY_SEPARATOR}\n   \n");
        let table = Table::parse(&input).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn value_keeps_embedded_commas_and_spaces() {
        let input = entry("jobnumber 1\njobname foo bar,baz\nqsub_time Mon Mar  4 10:15:01 2024");
        let table = Table::parse(&input).unwrap();

        assert_eq!(table["1"]["jobname"], "foo bar,baz");
        assert_eq!(table["1"]["qsub_time"], "Mon Mar  4 10:15:01 2024");
    }

    #[test]
    fn single_token_line_is_malformed() {
        let input = entry("jobnumber 1\nloneword");
        assert_eq!(
            Table::parse(&input),
            Err(ParseError::MalformedLine {
                entry: 0,
                line: "loneword".to_owned(),
            })
        );
    }

    #[test]
    fn entry_without_jobnumber_is_rejected() {
        let input = entry("jobnumber 1\nowner alice") + &entry("owner bob");
        assert_eq!(Table::parse(&input), Err(ParseError::MissingJobNumber { entry: 1 }));
    }

    #[test]
    fn duplicate_jobnumber_keeps_the_later_record() {
        let input = entry("jobnumber 5\nowner alice")
            + &entry("jobnumber 6\nowner carol")
            + &entry("jobnumber 5\nowner bob\nslots 4");
        let table = Table::parse(&input).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table["5"]["owner"], "bob");
        assert_eq!(table["5"]["slots"], "4");
        // the replaced record keeps its original row position
        assert_eq!(table.keys().map(String::as_str).collect_vec(), ["5", "6"]);
    }

    #[test]
    fn columns_are_the_first_seen_union() {
        let input = entry("jobnumber 1\nowner alice") + &entry("jobnumber 2\nslots 8\nowner bob");
        let table = Table::parse(&input).unwrap();
        assert_eq!(table.columns(), ["jobnumber", "owner", "slots"]);
    }
}
