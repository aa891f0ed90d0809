use thiserror::Error;

/// Parsing is all-or-nothing: the first bad line or entry aborts the whole
/// run, there is no partial table.
///
/// `entry` is the 0-based position among the non-empty entries of the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("entry {entry}: no value after the key in line {line:?}")]
    MalformedLine { entry: usize, line: String },
    #[error("entry {entry} has no `jobnumber` field")]
    MissingJobNumber { entry: usize },
}
