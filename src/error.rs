use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum SolidsmithError {
    #[error("Model '{model}' not found at {path}")]
    #[diagnostic(help(
        "Create the model first (e.g. `php artisan make:model {model} -mf`), then re-run the scaffold"
    ))]
    ModelNotFound { model: String, path: PathBuf },

    #[error("Custom path '{path}' contains invalid characters")]
    #[diagnostic(help(
        "Use forward-slash segments like V1/Admin; avoid colons, backslashes and surrounding whitespace"
    ))]
    InvalidPath { path: String },

    #[error("Missing template files: {}", names.join(", "))]
    #[diagnostic(help(
        "Point --templates (or [templates].dir in solidsmith.toml) at a directory containing all eight stubs"
    ))]
    MissingTemplates { names: Vec<String> },

    #[error("Template not found: {path}")]
    TemplateNotFound { path: PathBuf },

    #[error("Failed to parse solidsmith.toml")]
    #[diagnostic(help("Check the TOML syntax in your solidsmith.toml file"))]
    ConfigParse {
        #[source]
        source: toml::de::Error,
    },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SolidsmithError>;
