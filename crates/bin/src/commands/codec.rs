//! Compact encodings: encode and decode.

use std::path::Path;

use dotdict::convert::{JsonOptions, from_compressed, from_urlsafe_text, load_from_file};

use crate::cli::{DecodeArgs, EncodeArgs, Encoding};
use crate::output::OutputFormat;

/// Run the encode command
pub fn encode(
    file: &Path,
    args: &EncodeArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let dict = load_from_file(file, false)?;
    let text = match args.format {
        Encoding::Compressed => dict.to_compressed_text()?,
        Encoding::Urlsafe => dict.to_urlsafe_text()?,
    };

    match format {
        OutputFormat::Human => println!("{text}"),
        OutputFormat::Json => println!("{}", serde_json::json!({ "encoded": text })),
    }
    Ok(())
}

/// Run the decode command
pub fn decode(args: &DecodeArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let dict = match args.format {
        Encoding::Compressed => from_compressed(args.text.as_bytes())?,
        Encoding::Urlsafe => from_urlsafe_text(&args.text)?,
    };

    let options = match format {
        OutputFormat::Human => JsonOptions::pretty(),
        OutputFormat::Json => JsonOptions::compact(),
    };
    println!("{}", dict.to_json_string(&options)?);
    Ok(())
}
