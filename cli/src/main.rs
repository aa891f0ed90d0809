mod cli;

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser as _;
use log::{info, LevelFilter};
use qacct_data::Table;

use cli::Args;

fn main() -> Result<()> {
    init_logger();

    let args = Args::parse();

    let input = read_input(args.input.as_deref())?;
    let table = Table::parse(&input)?;
    write_output(&table, args.output.as_deref())?;

    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, LevelFilter::Info)
        .parse_default_env()
        .init();
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading input file {}", path.display()))
        }
        None => {
            info!("No input file specified. Reading from stdin.");
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(table: &Table, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("creating output file {}", path.display()))?;
            table
                .write_csv(file)
                .with_context(|| format!("writing output file {}", path.display()))
        }
        None => table.write_csv(io::stdout().lock()).context("writing to stdout"),
    }
}
