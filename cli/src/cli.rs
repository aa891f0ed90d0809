use std::path::PathBuf;

use clap::Parser;

/// Transpose qacct logs into a CSV format.
#[derive(Debug, Clone, PartialEq, Parser)]
pub struct Args {
    /// Input file path (reads stdin when omitted)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output file path (writes stdout when omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,
}
