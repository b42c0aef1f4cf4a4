//! CLI argument definitions for the dotdict binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use dotdict::dict::Typed;

/// Target kind for typed reads
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Kind {
    Text,
    Int,
    Float,
    Bool,
    List,
    Dict,
    Date,
    Datetime,
}

impl From<Kind> for Typed {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Text => Typed::Text,
            Kind::Int => Typed::Int,
            Kind::Float => Typed::Float,
            Kind::Bool => Typed::Bool,
            Kind::List => Typed::List,
            Kind::Dict => Typed::Dict,
            Kind::Date => Typed::Date,
            Kind::Datetime => Typed::DateTime,
        }
    }
}

/// Compact text encodings
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Encoding {
    /// zlib-compressed JSON as base64
    Compressed,
    /// base64url JSON, safe for query strings
    Urlsafe,
}

/// Read and edit JSON settings files with dotted paths
#[derive(Parser, Debug)]
#[command(name = "dotdict")]
#[command(about = "Read and edit JSON settings files with dotted paths")]
#[command(version)]
pub struct Cli {
    /// JSON file to operate on; created as `{}` when missing
    #[arg(env = "DOTDICT_FILE")]
    pub file: PathBuf,

    /// Print machine-readable JSON instead of human output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value at a path
    Get(GetArgs),
    /// Set the value at a path, creating intermediate maps
    Set(SetArgs),
    /// Remove the value at a path
    Delete(DeleteArgs),
    /// Deep-merge another JSON file into this one; null removes keys
    Merge(MergeArgs),
    /// Print the file in a compact text encoding
    Encode(EncodeArgs),
    /// Decode a compact text encoding and print the map
    Decode(DecodeArgs),
    /// Find the first occurrence of a key anywhere in the file
    Find(FindArgs),
}

/// Arguments for the get command
#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// Dotted path to read
    pub path: String,

    /// Coerce the value to this kind
    #[arg(short, long)]
    pub typed: Option<Kind>,

    /// JSON value to print when the path is absent or cannot be coerced
    #[arg(short, long)]
    pub default: Option<String>,
}

/// Arguments for the set command
#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Dotted path to write
    pub path: String,

    /// Value as JSON; anything that is not valid JSON is stored as text
    pub value: String,
}

/// Arguments for the delete command
#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// Dotted path to remove
    pub path: String,
}

/// Arguments for the merge command
#[derive(clap::Args, Debug)]
pub struct MergeArgs {
    /// JSON file whose entries are merged on top
    pub overlay: PathBuf,
}

/// Arguments for the encode command
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    /// Encoding to produce
    #[arg(short, long, default_value = "compressed")]
    pub format: Encoding,
}

/// Arguments for the decode command
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    /// Encoding of the input
    #[arg(short, long, default_value = "compressed")]
    pub format: Encoding,

    /// Encoded text
    pub text: String,
}

/// Arguments for the find command
#[derive(clap::Args, Debug)]
pub struct FindArgs {
    /// Literal key to search for
    pub key: String,
}
