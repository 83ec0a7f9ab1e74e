//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, UnidocArgs};
use crate::error::Result;
use crate::index::postings::TermFieldDoc;

/// Summary of one field.
#[derive(Debug, Serialize, Deserialize)]
pub struct FieldSummary {
    pub name: String,
    pub unique_terms: usize,
    pub analyzed_length: usize,
    pub vector_dims: usize,
}

/// Result structure for the fields command.
#[derive(Debug, Serialize, Deserialize)]
pub struct FieldsResult {
    pub document_id: String,
    pub fields: Vec<FieldSummary>,
}

/// Result structure for term enumeration.
#[derive(Debug, Serialize, Deserialize)]
pub struct TermsResult {
    pub field: String,
    pub terms: Vec<String>,
}

/// Result structure for postings lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct PostingsResult {
    pub field: String,
    pub term: String,
    pub count: u64,
    pub posting: Option<TermFieldDoc>,
}

/// Presence of one term.
#[derive(Debug, Serialize, Deserialize)]
pub struct TermPresence {
    pub term: String,
    pub present: bool,
}

/// Result structure for presence checks.
#[derive(Debug, Serialize, Deserialize)]
pub struct ContainsResult {
    pub field: String,
    pub terms: Vec<TermPresence>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &UnidocArgs) -> Result<()> {
    let rendered = render_result(message, result, args)?;
    println!("{rendered}");
    Ok(())
}

/// Render a result in the specified format.
pub fn render_result<T: Serialize>(message: &str, result: &T, args: &UnidocArgs) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => render_human(message, result, args),
        OutputFormat::Json => render_json(result, args),
    }
}

fn render_human<T: Serialize>(message: &str, result: &T, args: &UnidocArgs) -> Result<String> {
    let value = serde_json::to_value(result)?;
    let mut lines = Vec::new();
    if args.verbosity() > 1 {
        lines.push(message.to_string());
        lines.push(String::new());
    }
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in &obj {
                match val {
                    serde_json::Value::Array(items) => {
                        lines.push(format!("{key}:"));
                        for item in items {
                            lines.push(format!("  {}", format_value(item)));
                        }
                    }
                    _ => lines.push(format!("{key}: {}", format_value(val))),
                }
            }
        }
        other => lines.push(format_value(&other)),
    }
    Ok(lines.join("\n"))
}

fn render_json<T: Serialize>(result: &T, args: &UnidocArgs) -> Result<String> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

/// Format a JSON value for human-readable output.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "-".to_string(),
        serde_json::Value::Object(obj) => obj
            .iter()
            .map(|(k, v)| format!("{k}={}", format_value(v)))
            .collect::<Vec<_>>()
            .join(" "),
        serde_json::Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(format_value).collect();
            format!("[{}]", parts.join(", "))
        }
        other => other.to_string(),
    }
}
