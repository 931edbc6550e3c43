use crate::commands::{print_json, Context};
use anyhow::{Context as _, Result};
use clap::Args;
use phonebook_config as config;
use phonebook_core::domain::{merge_contacts, Contact};
use phonebook_core::normalize_record;
use phonebook_io::IoError;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Default, Args)]
pub struct ProcessArgs {
    #[arg(help = "Raw phonebook to read (config `input`, else phonebook_raw.csv)")]
    pub input: Option<PathBuf>,
    #[arg(help = "Where to write the result (config `output`, else phonebook.csv)")]
    pub output: Option<PathBuf>,
    #[arg(long, help = "Field delimiter, a single ASCII character")]
    pub delimiter: Option<String>,
}

#[derive(Debug, Serialize)]
struct ProcessReport {
    input: String,
    output: String,
    read: usize,
    normalized: usize,
    merged: usize,
    contacts: Vec<Contact>,
}

pub fn process(ctx: &Context<'_>, args: ProcessArgs) -> Result<()> {
    let input = args.input.unwrap_or_else(|| ctx.config.input.clone());
    let output = args.output.unwrap_or_else(|| ctx.config.output.clone());
    let delimiter = match args.delimiter.as_deref() {
        Some(raw) => config::parse_delimiter(raw)?,
        None => ctx.config.delimiter,
    };

    let summary = process_address_book(ctx, &input, &output, delimiter)?;

    if ctx.json {
        let report = ProcessReport {
            input: input.display().to_string(),
            output: output.display().to_string(),
            read: summary.read,
            normalized: summary.normalized,
            merged: summary.contacts.len(),
            contacts: summary.contacts,
        };
        return print_json(&report);
    }

    Ok(())
}

struct Summary {
    read: usize,
    normalized: usize,
    contacts: Vec<Contact>,
}

/// Reads, normalizes, merges and writes the phonebook, reporting the row
/// count after each stage.
fn process_address_book(
    ctx: &Context<'_>,
    input: &Path,
    output: &Path,
    delimiter: u8,
) -> Result<Summary> {
    let records = match phonebook_io::read_records(input, delimiter) {
        Ok(records) => records,
        Err(err @ IoError::MissingInput(_)) => return Err(err.into()),
        Err(err) => {
            return Err(err).with_context(|| format!("read phonebook {}", input.display()))
        }
    };
    progress(ctx, format_args!("Read {} contacts from {}", records.len(), input.display()));

    let normalized: Vec<Contact> = records.iter().map(normalize_record).collect();
    progress(
        ctx,
        format_args!("After normalizing names and phones: {} contacts", normalized.len()),
    );

    let read = records.len();
    let normalized_count = normalized.len();
    let contacts = merge_contacts(normalized);
    debug!(
        duplicates = normalized_count - contacts.len(),
        "duplicates merged"
    );
    progress(
        ctx,
        format_args!("After merging duplicates: {} contacts", contacts.len()),
    );

    phonebook_io::write_contacts(output, &contacts, delimiter)
        .with_context(|| format!("write phonebook {}", output.display()))?;
    progress(ctx, format_args!("Result written to {}", output.display()));

    Ok(Summary {
        read,
        normalized: normalized_count,
        contacts,
    })
}

fn progress(ctx: &Context<'_>, line: std::fmt::Arguments<'_>) {
    if !ctx.json {
        println!("{line}");
    }
}
