//! Stub loading and placeholder substitution.

use std::fmt;
use std::path::Path;

use crate::error::{Result, SolidsmithError};

use super::placeholders::Placeholders;

/// The fixed set of generated artifacts. Each kind maps to exactly one stub
/// file and one output path pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Controller,
    Interface,
    Repository,
    Service,
    RequestStore,
    RequestUpdate,
    Provider,
    Test,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 8] = [
        ArtifactKind::Controller,
        ArtifactKind::Interface,
        ArtifactKind::Repository,
        ArtifactKind::Service,
        ArtifactKind::RequestStore,
        ArtifactKind::RequestUpdate,
        ArtifactKind::Provider,
        ArtifactKind::Test,
    ];

    pub fn template_file(self) -> &'static str {
        match self {
            ArtifactKind::Controller => "controller.stub",
            ArtifactKind::Interface => "interface.stub",
            ArtifactKind::Repository => "repository.stub",
            ArtifactKind::Service => "service.stub",
            ArtifactKind::RequestStore => "request.store.stub",
            ArtifactKind::RequestUpdate => "request.update.stub",
            ArtifactKind::Provider => "provider.stub",
            ArtifactKind::Test => "test.stub",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArtifactKind::Controller => "controller",
            ArtifactKind::Interface => "interface",
            ArtifactKind::Repository => "repository",
            ArtifactKind::Service => "service",
            ArtifactKind::RequestStore => "store request",
            ArtifactKind::RequestUpdate => "update request",
            ArtifactKind::Provider => "provider",
            ArtifactKind::Test => "test",
        };
        f.write_str(name)
    }
}

/// Check all stubs up front so a run never dies halfway through; every
/// missing name is reported at once.
pub fn verify_templates(template_dir: &Path) -> Result<()> {
    let missing: Vec<String> = ArtifactKind::ALL
        .iter()
        .map(|kind| kind.template_file())
        .filter(|name| !template_dir.join(name).exists())
        .map(str::to_string)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(SolidsmithError::MissingTemplates { names: missing })
    }
}

/// Load the stub for `kind` and substitute the placeholder table.
pub fn render_artifact(
    template_dir: &Path,
    kind: ArtifactKind,
    placeholders: &Placeholders,
) -> Result<String> {
    let path = template_dir.join(kind.template_file());
    if !path.exists() {
        return Err(SolidsmithError::TemplateNotFound { path });
    }

    let text = std::fs::read_to_string(&path).map_err(|e| SolidsmithError::Io {
        context: format!("reading {}", path.display()),
        source: e,
    })?;

    Ok(substitute(&text, placeholders))
}

/// Single left-to-right literal pass. Replacement values are never re-scanned
/// and unknown `{{...}}` markers pass through verbatim.
pub fn substitute(input: &str, placeholders: &Placeholders) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        match placeholders
            .entries()
            .iter()
            .find(|(token, _)| tail.starts_with(token.as_str()))
        {
            Some((token, value)) => {
                out.push_str(value);
                rest = &tail[token.len()..];
            }
            None => {
                out.push_str("{{");
                rest = &tail[2..];
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_known_tokens() {
        let table = Placeholders::for_model("Post");
        let rendered = substitute("class {{class}}Controller uses ${{variable}};", &table);
        assert_eq!(rendered, "class PostController uses $post;");
    }

    #[test]
    fn test_unmatched_tokens_remain_verbatim() {
        let table = Placeholders::for_model("Post");
        let rendered = substitute("{{class}} and {{unknownToken}}", &table);
        assert_eq!(rendered, "Post and {{unknownToken}}");
    }

    #[test]
    fn test_replacement_values_are_not_rescanned() {
        let mut table = Placeholders::for_model("Post");
        table.set("storeRules", "'title' => '{{class}}',");

        let rendered = substitute("[{{storeRules}}]", &table);
        assert_eq!(rendered, "['title' => '{{class}}',]");
    }

    #[test]
    fn test_longer_token_not_shadowed_by_prefix() {
        let table = Placeholders::for_model("Post");
        let rendered = substitute("{{model}} / {{modelVariablePlural}}", &table);
        assert_eq!(rendered, "Post / posts");
    }

    #[test]
    fn test_verify_templates_lists_every_missing_stub() {
        let dir = tempfile::tempdir().unwrap();
        for kind in [ArtifactKind::Controller, ArtifactKind::Service] {
            std::fs::write(dir.path().join(kind.template_file()), "stub").unwrap();
        }

        let err = verify_templates(dir.path()).unwrap_err();
        match err {
            SolidsmithError::MissingTemplates { names } => {
                assert_eq!(names.len(), 6);
                assert!(names.contains(&"interface.stub".to_string()));
                assert!(names.contains(&"test.stub".to_string()));
                assert!(!names.contains(&"controller.stub".to_string()));
            }
            other => panic!("expected MissingTemplates, got {other:?}"),
        }
    }

    #[test]
    fn test_render_artifact_missing_stub() {
        let dir = tempfile::tempdir().unwrap();
        let table = Placeholders::for_model("Post");

        let result = render_artifact(dir.path(), ArtifactKind::Controller, &table);
        assert!(matches!(
            result,
            Err(SolidsmithError::TemplateNotFound { .. })
        ));
    }
}
