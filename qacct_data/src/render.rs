use std::io;
use std::iter;

use crate::qacct::{Record, Table};

/// Header of the index column holding each record's `jobnumber`.
pub const ID_COLUMN: &str = "ID";

/// Spreadsheet importers auto-convert these into date/number cells; a leading
/// `'` forces them to stay literal text.
pub const DATETIME_FIELDS: [&str; 3] = ["qsub_time", "start_time", "end_time"];

impl Table {
    /// Write the table as CSV: header `ID,<columns...>`, then one row per
    /// job. Cells containing commas, quotes or newlines are quoted by the
    /// writer; everything else is emitted verbatim.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> csv::Result<()> {
        let columns = self.columns();
        let mut csv = csv::Writer::from_writer(writer);

        csv.write_record(iter::once(ID_COLUMN).chain(columns.iter().copied()))?;
        for (jobnumber, record) in self.iter() {
            csv.write_record(
                iter::once(jobnumber.clone()).chain(columns.iter().map(|&column| cell(record, column))),
            )?;
        }
        csv.flush()?;

        Ok(())
    }

    pub fn to_csv_string(&self) -> csv::Result<String> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

fn cell(record: &Record, column: &str) -> String {
    match record.get(column) {
        Some(value) if DATETIME_FIELDS.contains(&column) => format!("'{value}"),
        Some(value) => value.clone(),
        // a record lacking a datetime field gets a plain empty cell, not a
        // lone `'`
        None => String::new(),
    }
}
