//! Idempotent registration of the interface→repository binding inside the
//! shared `RepositoryServiceProvider`.
//!
//! Pure text transforms: locate the insertion point, verify the fragment is
//! absent, splice it in. Nothing is ever removed or reordered.

use regex_lite::Regex;

/// Exact fragment inserted into the provider's `register()` body.
pub fn binding_fragment(model: &str) -> String {
    format!(
        "        $this->app->bind(\n            \\App\\Contracts\\{model}RepositoryInterface::class,\n            \\App\\Repositories\\{model}Repository::class\n        );\n"
    )
}

/// Outcome of patching provider source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingPatch {
    /// Fragment spliced in right after the `register()` opening brace.
    Updated(String),
    /// Fragment already present verbatim; content untouched.
    AlreadyPresent,
    /// No `register()` signature found; content untouched.
    AnchorNotFound,
}

/// Ensure the binding for `model` exists exactly once in `content`.
///
/// The anchor pattern tolerates an optional `: void` return annotation and
/// flexible whitespace before the opening brace.
pub fn apply_binding(content: &str, model: &str) -> BindingPatch {
    let fragment = binding_fragment(model);
    if content.contains(&fragment) {
        return BindingPatch::AlreadyPresent;
    }

    let re = Regex::new(r"public function register\(\)(?:\s*:\s*void)?\s*\{").expect("valid regex");
    let Some(m) = re.find(content) else {
        return BindingPatch::AnchorNotFound;
    };

    let mut patched = String::with_capacity(content.len() + fragment.len() + 1);
    patched.push_str(&content[..m.end()]);
    patched.push('\n');
    patched.push_str(&fragment);
    patched.push_str(&content[m.end()..]);
    BindingPatch::Updated(patched)
}
