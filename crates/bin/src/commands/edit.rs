//! Commands that modify the file: set, delete and merge.

use std::path::Path;

use dotdict::{
    convert::{JsonOptions, load_from_file},
    merge::merge,
};

use crate::cli::{DeleteArgs, MergeArgs, SetArgs};
use crate::output::{OutputFormat, print_value};

/// Run the set command
pub fn set(
    file: &Path,
    args: &SetArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut dict = load_from_file(file, false)?;
    let value = super::parse_value(&args.value);
    dict.set(args.path.as_str(), value.clone())?;
    dict.save(file)?;
    tracing::info!(path = %args.path, file = %file.display(), "value set");

    if format == OutputFormat::Json {
        print_value(&value, format)?;
    }
    Ok(())
}

/// Run the delete command
pub fn delete(
    file: &Path,
    args: &DeleteArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut dict = load_from_file(file, false)?;
    let removed = dict.pop(args.path.as_str())?;
    dict.save(file)?;
    tracing::info!(path = %args.path, file = %file.display(), "value removed");

    if format == OutputFormat::Json {
        print_value(&removed, format)?;
    }
    Ok(())
}

/// Run the merge command
pub fn merge_file(
    file: &Path,
    args: &MergeArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let base = load_from_file(file, false)?;
    let overlay = load_from_file(&args.overlay, false)?;
    let merged = merge(&base, &overlay);
    merged.save(file)?;
    tracing::info!(
        file = %file.display(),
        overlay = %args.overlay.display(),
        changed = base.changes(&merged).len(),
        "merged overlay"
    );

    match format {
        OutputFormat::Json => println!("{}", merged.to_json_string(&JsonOptions::compact())?),
        OutputFormat::Human => println!("{}", merged.to_json_string(&JsonOptions::pretty())?),
    }
    Ok(())
}
