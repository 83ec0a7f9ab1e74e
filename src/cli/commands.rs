//! Command implementations for the unidoc CLI.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::analysis::analyzer::SimpleAnalyzer;
use crate::analysis::tokenizer::RegexTokenizer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::IndexConfig;
use crate::document::document::{Document, DocumentBuilder, ID_FIELD_NAME};
use crate::document::field::{CompositeTextField, TextField};
use crate::error::Result;
use crate::index::single::SingleDocIndex;

/// Execute a CLI command.
pub fn execute_command(args: UnidocArgs) -> Result<()> {
    match &args.command {
        Command::Fields(fields_args) => list_fields(fields_args.clone(), &args),
        Command::Terms(terms_args) => list_terms(terms_args.clone(), &args),
        Command::Postings(postings_args) => show_postings(postings_args.clone(), &args),
        Command::Contains(contains_args) => check_contains(contains_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// The analyzer for text fields: whitespace by default, or every match of
/// `token_pattern`.
pub fn text_analyzer(token_pattern: Option<&str>) -> Result<SimpleAnalyzer> {
    let Some(pattern) = token_pattern else {
        return Ok(SimpleAnalyzer::default());
    };
    let tokenizer = RegexTokenizer::with_pattern(pattern)?;
    Ok(SimpleAnalyzer::new(Arc::new(tokenizer)))
}

/// Load a document from a JSON file.
///
/// The identifier is taken from the `_id` key, or from the file stem.
pub fn load_document<P: AsRef<Path>>(path: P, analyzer: &SimpleAnalyzer) -> Result<Document> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)?;

    let fallback_id = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    document_from_value(&value, &fallback_id, analyzer)
}

/// Convert a JSON object into a document.
///
/// Strings, numbers and booleans become text fields. Arrays of numbers
/// become vector fields, other arrays repeated text fields. Nested objects
/// are flattened into dotted field names and nulls are skipped. Every
/// document gets an `_id` field and an `_all` composite.
pub fn document_from_value(
    value: &Value,
    fallback_id: &str,
    analyzer: &SimpleAnalyzer,
) -> Result<Document> {
    let Value::Object(obj) = value else {
        return Err(anyhow::anyhow!("document must be a JSON object").into());
    };

    let id = match obj.get(ID_FIELD_NAME) {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Null) | None => fallback_id.to_string(),
        Some(other) => other.to_string(),
    };

    let mut builder = Document::builder(id).add_id_field();
    for (key, val) in obj {
        if key == ID_FIELD_NAME {
            continue;
        }
        builder = add_json_field(builder, analyzer, key, val, &[]);
    }
    Ok(builder.add_composite(CompositeTextField::all()).build())
}

fn add_json_field(
    builder: DocumentBuilder,
    analyzer: &SimpleAnalyzer,
    name: &str,
    value: &Value,
    array_positions: &[u64],
) -> DocumentBuilder {
    match value {
        Value::Null => builder,
        Value::String(_) | Value::Number(_) | Value::Bool(_) => builder.add_field(
            TextField::new(name, scalar_text(value))
                .with_analyzer(analyzer.clone())
                .with_array_positions(array_positions.to_vec()),
        ),
        Value::Array(items) => {
            let numbers: Option<Vec<f32>> = items
                .iter()
                .map(|item| item.as_f64().map(|n| n as f32))
                .collect();
            match numbers {
                Some(vector) if !vector.is_empty() => builder.add_vector(name, vector),
                _ => items.iter().enumerate().fold(builder, |builder, (i, item)| {
                    let mut positions = array_positions.to_vec();
                    positions.push(i as u64);
                    add_json_field(builder, analyzer, name, item, &positions)
                }),
            }
        }
        Value::Object(obj) => obj.iter().fold(builder, |builder, (key, val)| {
            add_json_field(builder, analyzer, &format!("{name}.{key}"), val, array_positions)
        }),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Build an index over the document named by `args`.
fn open_index(args: &DocumentArgs, cli_args: &UnidocArgs) -> Result<SingleDocIndex> {
    let config = match &cli_args.config {
        Some(path) => {
            log::info!("Loading configuration from: {}", path.display());
            IndexConfig::from_json_file(path)?
        }
        None => IndexConfig::default(),
    };

    let analyzer = text_analyzer(cli_args.token_pattern.as_deref())?;
    log::info!("Indexing document: {}", args.document_file.display());
    let document = load_document(&args.document_file, &analyzer)?;

    let mut index = SingleDocIndex::new(config);
    index.open()?;
    index.update(document)?;
    Ok(index)
}

/// List the fields of the document.
fn list_fields(args: DocumentArgs, cli_args: &UnidocArgs) -> Result<()> {
    let index = open_index(&args, cli_args)?;
    let model = &index.model;

    let fields = model
        .fields()
        .iter()
        .map(|name| {
            let entry = model.entry(name)?;
            Ok(FieldSummary {
                name: name.clone(),
                unique_terms: entry.token_frequencies().len(),
                analyzed_length: entry.analyzed_length(),
                vector_dims: entry.vector_dims(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let result = FieldsResult {
        document_id: model.document_id().unwrap_or_default().to_string(),
        fields,
    };
    output_result("Fields", &result, cli_args)
}

/// Enumerate the terms of a field.
fn list_terms(args: TermsArgs, cli_args: &UnidocArgs) -> Result<()> {
    let mut index = open_index(&args.document, cli_args)?;
    let mut reader = index.reader();

    let query = args.query();
    log::debug!("Enumerating {query:?} in field {:?}", args.field);
    let mut dict = match &query {
        TermsQuery::All => reader.field_dict(&args.field)?,
        TermsQuery::Prefix(prefix) => reader.field_dict_prefix(&args.field, prefix)?,
        TermsQuery::Range(start, end) => reader.field_dict_range(&args.field, start, end)?,
        TermsQuery::Regex(pattern) => reader.field_dict_regexp(&args.field, pattern)?,
        TermsQuery::Fuzzy {
            term,
            distance,
            prefix,
        } => reader.field_dict_fuzzy(&args.field, term, *distance, prefix)?,
    };

    let result = TermsResult {
        field: args.field.clone(),
        terms: dict.collect_terms()?,
    };
    output_result("Terms", &result, cli_args)
}

/// Show the posting of one term.
fn show_postings(args: PostingsArgs, cli_args: &UnidocArgs) -> Result<()> {
    let mut index = open_index(&args.document, cli_args)?;
    let reader = index.reader();

    let mut postings = reader.term_field_reader(
        args.term.as_bytes(),
        &args.field,
        !args.no_freq,
        !args.no_norm,
        !args.no_vectors,
    )?;
    let count = postings.count();
    let posting = postings.next(None)?;

    let result = PostingsResult {
        field: args.field.clone(),
        term: args.term.clone(),
        count,
        posting,
    };
    output_result("Postings", &result, cli_args)
}

/// Check whether terms occur in a field.
fn check_contains(args: ContainsArgs, cli_args: &UnidocArgs) -> Result<()> {
    let mut index = open_index(&args.document, cli_args)?;
    let reader = index.reader();
    let contains = reader.field_dict_contains(&args.field)?;

    let terms = args
        .terms
        .iter()
        .map(|term| {
            Ok(TermPresence {
                term: term.clone(),
                present: contains.contains(term.as_bytes())?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let result = ContainsResult {
        field: args.field.clone(),
        terms,
    };
    output_result("Contains", &result, cli_args)
}

/// Show index statistics.
fn show_stats(args: DocumentArgs, cli_args: &UnidocArgs) -> Result<()> {
    let index = open_index(&args, cli_args)?;
    output_result("Index statistics", &index.stats(), cli_args)
}
