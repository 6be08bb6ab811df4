//! Field inference for the generated form requests.
//!
//! Primary source is live table introspection through an injected
//! [`SchemaSource`]; the fallback reads the table's creation migration. Both
//! failures degrade to a commented placeholder block, never to an error.

pub mod migration;
pub mod rules;

use std::path::PathBuf;

use console::style;
use thiserror::Error;

use crate::inflect;

use rules::{RequestKind, RuleContext, RuleGuesser};

/// Columns a form request should never ask the client for.
pub const EXCLUDED_COLUMNS: [&str; 5] = [
    "id",
    "created_at",
    "updated_at",
    "deleted_at",
    "remember_token",
];

/// Introspection failure. Never fatal: inference logs it and falls back.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SchemaError {
    pub message: String,
}

impl SchemaError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Live database introspection, injected by the caller. The CLI ships without
/// a driver; library consumers and tests can provide one.
pub trait SchemaSource {
    /// Column names of `table` in definition order, or `None` when the table
    /// does not exist.
    fn columns(&self, table: &str) -> std::result::Result<Option<Vec<String>>, SchemaError>;
}

/// Everything the rules-block computation needs, passed in explicitly.
pub struct FieldInference<'a> {
    pub schema: Option<&'a dyn SchemaSource>,
    pub migrations_dir: PathBuf,
    pub guesser: &'a dyn RuleGuesser,
}

impl FieldInference<'_> {
    /// Formatted rules block for a request file: one line per inferred field,
    /// or the commented placeholder block when nothing can be learned.
    pub fn rules_block(&self, model: &str, request: RequestKind) -> String {
        let table = inflect::table_name(model);

        if let Some(fields) = self.fields_from_schema(&table) {
            return self.format_rules(model, Some(&table), &fields, request);
        }

        if let Some(fields) = migration::fields_from_migrations(&self.migrations_dir, &table) {
            return self.format_rules(model, None, &fields, request);
        }

        placeholder_block().to_string()
    }

    /// `None` means "no answer from this source": no schema injected, table
    /// absent, or introspection failed (logged, then treated as absent).
    fn fields_from_schema(&self, table: &str) -> Option<Vec<String>> {
        let source = self.schema?;
        match source.columns(table) {
            Ok(Some(columns)) => Some(
                columns
                    .into_iter()
                    .filter(|c| !EXCLUDED_COLUMNS.contains(&c.as_str()))
                    .collect(),
            ),
            Ok(None) => None,
            Err(e) => {
                eprintln!(
                    "{} could not read table '{table}': {e}",
                    style("warning:").yellow().bold()
                );
                None
            }
        }
    }

    fn format_rules(
        &self,
        model: &str,
        table: Option<&str>,
        fields: &[String],
        request: RequestKind,
    ) -> String {
        if fields.is_empty() {
            return placeholder_block().to_string();
        }

        let model_variable = inflect::lower_camel(model);
        let ctx = RuleContext {
            table,
            request,
            model_variable: &model_variable,
        };

        fields
            .iter()
            .map(|field| {
                let rule = self.guesser.guess(field, &ctx);
                format!("            '{field}' => '{rule}',")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Fixed block emitted when no field source is available.
pub fn placeholder_block() -> &'static str {
    concat!(
        "            // TODO: add the validation rules for your model\n",
        "            // Example:\n",
        "            // 'name' => 'required|string|max:255',\n",
        "            // 'email' => 'required|email|unique:users',"
    )
}
