//! Fallback field discovery: scan the creation migration when the live table
//! is unavailable.

use std::path::{Path, PathBuf};

use globset::Glob;
use regex_lite::Regex;
use walkdir::WalkDir;

use super::EXCLUDED_COLUMNS;

/// Find the `*_create_{table}_table.php` migration for `table` and extract
/// its field names. Returns `None` when the directory, the file, or the
/// fields cannot be found.
pub fn fields_from_migrations(dir: &Path, table: &str) -> Option<Vec<String>> {
    let file = find_migration_file(dir, table)?;
    let content = std::fs::read_to_string(file).ok()?;
    let fields = extract_fields(&content);
    if fields.is_empty() {
        None
    } else {
        Some(fields)
    }
}

/// Lexicographically first match wins when several migrations qualify.
fn find_migration_file(dir: &Path, table: &str) -> Option<PathBuf> {
    if !dir.is_dir() {
        return None;
    }

    let pattern = format!("*_create_{table}_table.php");
    let matcher = Glob::new(&pattern).ok()?.compile_matcher();

    let mut matches: Vec<PathBuf> = WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| matcher.is_match(Path::new(e.file_name())))
        .map(|e| e.into_path())
        .collect();

    matches.sort();
    matches.into_iter().next()
}

/// Pull field names out of `$table->method('field', ...)` builder calls,
/// skipping framework-managed columns. First occurrence wins; order is
/// preserved.
pub fn extract_fields(content: &str) -> Vec<String> {
    let re = Regex::new(r#"\$table->\w+\(\s*['"](\w+)['"]"#).expect("valid regex");

    let mut fields: Vec<String> = Vec::new();
    for caps in re.captures_iter(content) {
        let field = &caps[1];
        if EXCLUDED_COLUMNS.contains(&field) {
            continue;
        }
        if !fields.iter().any(|f| f == field) {
            fields.push(field.to_string());
        }
    }
    fields
}
