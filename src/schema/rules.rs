//! Validation-rule strategy for inferred fields.

/// Which request file the rules are being generated for. Carried through to
/// the guesser even though the shipped strategy does not yet differentiate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Store,
    Update,
}

/// Context handed to a [`RuleGuesser`] for each field.
pub struct RuleContext<'a> {
    /// Live table the field came from, when known.
    pub table: Option<&'a str>,
    pub request: RequestKind,
    pub model_variable: &'a str,
}

/// Maps a column name to a validation rule string.
pub trait RuleGuesser {
    fn guess(&self, field: &str, ctx: &RuleContext<'_>) -> String;
}

/// The shipped strategy: every field is simply `required`. Type-aware rules
/// (`email`, `integer`, ...) can be layered in with a custom [`RuleGuesser`].
pub struct AlwaysRequired;

impl RuleGuesser for AlwaysRequired {
    fn guess(&self, _field: &str, _ctx: &RuleContext<'_>) -> String {
        "required".to_string()
    }
}
