//! Read-only commands: get and find.

use std::path::Path;

use dotdict::{Value, convert::load_from_file};

use crate::cli::{FindArgs, GetArgs};
use crate::output::{OutputFormat, print_value};

/// Run the get command
pub fn get(
    file: &Path,
    args: &GetArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let dict = load_from_file(file, false)?;
    let default = args.default.as_deref().map(super::parse_value);

    let value = match (args.typed, default) {
        (Some(kind), default) => {
            dict.get_typed(&args.path, default.unwrap_or(Value::Null), kind.into())
        }
        (None, Some(default)) => dict.get_or(&args.path, default),
        (None, None) => dict.get_item(&args.path)?.into_owned(),
    };

    print_value(&value, format)?;
    Ok(())
}

/// Run the find command
pub fn find(
    file: &Path,
    args: &FindArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let dict = load_from_file(file, false)?;
    match dict.find(args.key.as_str()) {
        Some(value) => print_value(value, format)?,
        None => {
            eprintln!("key not found: {}", args.key);
            std::process::exit(1);
        }
    }
    Ok(())
}
