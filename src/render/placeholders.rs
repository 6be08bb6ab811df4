//! The placeholder table: every `{{token}}` a stub may reference, computed
//! from the model name plus caller-supplied values.

use std::collections::BTreeMap;

use crate::inflect;

/// Root namespace of the target application.
pub const ROOT_NAMESPACE: &str = "App";

/// Map from literal `{{token}}` markers to their replacement values.
///
/// Keys are stored with their braces so substitution can match them directly
/// against template text.
#[derive(Debug, Clone)]
pub struct Placeholders {
    entries: BTreeMap<String, String>,
}

impl Placeholders {
    /// Build the full table for `model`. The controller namespace defaults to
    /// the root controllers namespace; the rule blocks default to empty and
    /// the page size to 15 — callers override via [`Placeholders::set`].
    pub fn for_model(model: &str) -> Self {
        let plural = inflect::pluralize(model);

        let mut table = Self {
            entries: BTreeMap::new(),
        };
        table.set("namespace", ROOT_NAMESPACE);
        table.set(
            "controllerNamespace",
            format!("{ROOT_NAMESPACE}\\Http\\Controllers"),
        );
        table.set("class", model);
        table.set("variable", inflect::lower_camel(model));
        table.set("variablePlural", inflect::lower_camel(&plural));
        table.set("model", model);
        table.set("modelVariable", inflect::lower_camel(model));
        table.set("modelVariablePlural", inflect::lower_camel(&plural));
        table.set("modelTitle", inflect::title_spaced(model));
        table.set("modelTitlePlural", inflect::title_spaced(&plural));
        table.set("routeName", inflect::kebab(&plural));
        table.set("routePath", inflect::kebab(&plural));
        table.set("tableName", inflect::snake(&plural));
        table.set("storeRules", "");
        table.set("updateRules", "");
        table.set("perPage", "15");
        table
    }

    /// Set (or override) a token by its bare name.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.entries.insert(format!("{{{{{name}}}}}"), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&format!("{{{{{name}}}}}"))
            .map(String::as_str)
    }

    pub(crate) fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }
}
