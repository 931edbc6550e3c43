use crate::error::{IoError, Result};
use csv::{ReaderBuilder, WriterBuilder};
use phonebook_core::domain::{Contact, RawRecord, COLUMNS};
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::debug;

const BOM: char = '\u{feff}';

/// Reads every row of a delimited phonebook file.
pub fn read_records(path: &Path, delimiter: u8) -> Result<Vec<RawRecord>> {
    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => IoError::MissingInput(path.to_path_buf()),
        _ => IoError::Io(err),
    })?;
    let records = read_records_from(file, delimiter)?;
    debug!(path = %path.display(), rows = records.len(), "phonebook read");
    Ok(records)
}

/// Reads rows from any reader. The header row names the columns; columns it
/// does not name, and cells missing from short rows, read as empty.
pub fn read_records_from<R: Read>(reader: R, delimiter: u8) -> Result<Vec<RawRecord>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut index: HashMap<String, usize> = HashMap::new();
    for (idx, name) in reader.headers()?.iter().enumerate() {
        index.insert(name.trim_start_matches(BOM).to_string(), idx);
    }
    let unknown: Vec<&str> = COLUMNS
        .iter()
        .copied()
        .filter(|column| !index.contains_key(*column))
        .collect();
    if !unknown.is_empty() {
        debug!(missing = ?unknown, "columns absent from header");
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(RawRecord::from_columns(|name| {
            index.get(name).and_then(|&idx| row.get(idx))
        }));
    }
    Ok(records)
}

/// Writes contacts with a header row, even when there are none.
pub fn write_contacts(path: &Path, contacts: &[Contact], delimiter: u8) -> Result<()> {
    let file = File::create(path)?;
    write_contacts_to(file, contacts, delimiter)?;
    debug!(path = %path.display(), rows = contacts.len(), "phonebook written");
    Ok(())
}

pub fn write_contacts_to<W: Write>(writer: W, contacts: &[Contact], delimiter: u8) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(COLUMNS)?;
    for contact in contacts {
        writer.write_record(contact.fields())?;
    }
    writer.flush()?;
    Ok(())
}
