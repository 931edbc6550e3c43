use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use phonebook_core::domain::normalize_phone_with_extension;
use serde::Serialize;

#[derive(Debug, Args)]
pub struct PhoneArgs {
    /// Phone as written, optionally with a "доб." extension
    pub raw: String,
}

#[derive(Debug, Serialize)]
struct PhoneReport<'a> {
    raw: &'a str,
    phone: String,
}

pub fn phone(ctx: &Context<'_>, args: PhoneArgs) -> Result<()> {
    let phone = normalize_phone_with_extension(&args.raw);
    if ctx.json {
        return print_json(&PhoneReport {
            raw: &args.raw,
            phone,
        });
    }
    println!("{}", phone);
    Ok(())
}
