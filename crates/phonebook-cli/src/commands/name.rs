use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use phonebook_core::domain::parse_full_name;

#[derive(Debug, Args)]
pub struct NameArgs {
    /// Full name, "Last First Patronymic"
    pub full: String,
}

pub fn name(ctx: &Context<'_>, args: NameArgs) -> Result<()> {
    let parsed = parse_full_name(&args.full);
    if ctx.json {
        return print_json(&parsed);
    }
    println!("lastname: {}", parsed.last_name);
    println!("firstname: {}", parsed.first_name);
    println!("surname: {}", parsed.patronymic);
    Ok(())
}
