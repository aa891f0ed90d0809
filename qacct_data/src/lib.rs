pub mod error;
pub mod qacct;
pub mod render;

pub use error::ParseError;
pub use qacct::{Record, Table, ENTRY_SEPARATOR, JOBNUMBER};
pub use render::{DATETIME_FIELDS, ID_COLUMN};
