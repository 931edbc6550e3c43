pub mod delimited;
pub mod error;

pub use delimited::{read_records, read_records_from, write_contacts, write_contacts_to};
pub use error::{IoError, Result};
