//! Command line argument parsing for the unidoc CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// unidoc - query the term dictionary of a single JSON document
#[derive(Parser, Debug, Clone)]
#[command(name = "unidoc")]
#[command(about = "Index one JSON document and query its term dictionary")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct UnidocArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Index configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "UNIDOC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Tokenize text fields by this regular expression instead of whitespace
    #[arg(long, value_name = "REGEX")]
    pub token_pattern: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl UnidocArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the fields of the document
    Fields(DocumentArgs),

    /// Enumerate the terms of a field
    Terms(TermsArgs),

    /// Show the posting of one term
    Postings(PostingsArgs),

    /// Check whether terms occur in a field
    Contains(ContainsArgs),

    /// Show index statistics
    Stats(DocumentArgs),
}

/// The document every command indexes first.
#[derive(Args, Debug, Clone)]
pub struct DocumentArgs {
    /// Document file path (a JSON object)
    #[arg(value_name = "DOCUMENT_FILE")]
    pub document_file: PathBuf,
}

/// Arguments for term enumeration
#[derive(Args, Debug, Clone)]
pub struct TermsArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    /// Field to enumerate
    #[arg(long)]
    pub field: String,

    /// Only terms starting with this prefix
    #[arg(long, conflicts_with_all = ["range", "regex", "fuzzy"])]
    pub prefix: Option<String>,

    /// Only terms within START and END, both inclusive
    #[arg(long, num_args = 2, value_names = ["START", "END"], conflicts_with_all = ["regex", "fuzzy"])]
    pub range: Option<Vec<String>>,

    /// Only terms fully matching this regular expression
    #[arg(long, conflicts_with = "fuzzy")]
    pub regex: Option<String>,

    /// Only terms within --distance edits of this term
    #[arg(long, value_name = "TERM")]
    pub fuzzy: Option<String>,

    /// Maximum edit distance for --fuzzy
    #[arg(long, default_value = "1")]
    pub distance: usize,

    /// Literal prefix fuzzy candidates must share
    #[arg(long, default_value = "", requires = "fuzzy")]
    pub fuzzy_prefix: String,
}

impl TermsArgs {
    /// The dictionary variant selected by the flags.
    pub fn query(&self) -> TermsQuery {
        if let Some(prefix) = &self.prefix {
            return TermsQuery::Prefix(prefix.clone());
        }
        if let Some(range) = &self.range
            && let [start, end] = range.as_slice()
        {
            return TermsQuery::Range(start.clone(), end.clone());
        }
        if let Some(regex) = &self.regex {
            return TermsQuery::Regex(regex.clone());
        }
        if let Some(term) = &self.fuzzy {
            return TermsQuery::Fuzzy {
                term: term.clone(),
                distance: self.distance,
                prefix: self.fuzzy_prefix.clone(),
            };
        }
        TermsQuery::All
    }
}

/// A term dictionary request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermsQuery {
    /// Every term
    All,
    /// Terms sharing a prefix
    Prefix(String),
    /// Terms within an inclusive range
    Range(String, String),
    /// Terms matching a regular expression
    Regex(String),
    /// Terms within an edit distance
    Fuzzy {
        term: String,
        distance: usize,
        prefix: String,
    },
}

/// Arguments for postings lookup
#[derive(Args, Debug, Clone)]
pub struct PostingsArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    /// Field holding the term
    #[arg(long)]
    pub field: String,

    /// Term to look up
    #[arg(long)]
    pub term: String,

    /// Leave out the term frequency
    #[arg(long)]
    pub no_freq: bool,

    /// Leave out the length normalization
    #[arg(long)]
    pub no_norm: bool,

    /// Leave out the occurrence vectors
    #[arg(long)]
    pub no_vectors: bool,
}

/// Arguments for presence checks
#[derive(Args, Debug, Clone)]
pub struct ContainsArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    /// Field to check
    #[arg(long)]
    pub field: String,

    /// Terms to check
    #[arg(value_name = "TERM", required = true)]
    pub terms: Vec<String>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
