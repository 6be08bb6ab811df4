pub mod config;
pub mod error;
pub mod inflect;
pub mod provider;
pub mod render;
pub mod schema;

use std::path::{Path, PathBuf};

use console::style;

use crate::config::layout::{validate_custom_path, ProjectLayout};
use crate::error::{Result, SolidsmithError};
use crate::provider::{apply_binding, BindingPatch};
use crate::render::{render_artifact, verify_templates, ArtifactKind, Placeholders};
use crate::schema::rules::{AlwaysRequired, RequestKind};
use crate::schema::{FieldInference, SchemaSource};

pub struct ScaffoldOptions {
    pub model: String,
    pub root: PathBuf,
    pub template_dir: PathBuf,
    pub custom_path: Option<String>,
    pub per_page: u32,
    pub with_tests: bool,
    pub overwrite: bool,
}

/// One file the scaffold will write.
pub struct PlannedArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub content: String,
}

/// What will happen to the shared provider file.
pub enum ProviderAction {
    /// First scaffold in this project: generate the provider from its stub.
    /// This is the only time it is ever generated.
    Create { path: PathBuf, content: String },
    /// Provider exists: splice the binding in, or leave it alone.
    Patch { path: PathBuf, patch: BindingPatch },
}

/// Everything needed to execute a scaffold that has been planned but not yet
/// written to disk.
pub struct ScaffoldPlan {
    pub artifacts: Vec<PlannedArtifact>,
    pub skipped: Vec<PathBuf>,
    pub provider: ProviderAction,
    pub directories: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingStatus {
    ProviderCreated,
    Added,
    AlreadyPresent,
    AnchorNotFound,
}

pub struct ScaffoldReport {
    pub files_written: Vec<PathBuf>,
    pub files_skipped: Vec<PathBuf>,
    pub binding: BindingStatus,
}

/// Plan a scaffold: validate inputs, infer fields, render every artifact in
/// memory, and decide what happens to the provider. Writes nothing.
pub fn plan_scaffold(
    options: &ScaffoldOptions,
    schema: Option<&dyn SchemaSource>,
) -> Result<ScaffoldPlan> {
    let layout = ProjectLayout::new(&options.root);
    let model = options.model.as_str();

    let model_path = layout.model_path(model);
    if !model_path.exists() {
        return Err(SolidsmithError::ModelNotFound {
            model: model.to_string(),
            path: model_path,
        });
    }

    let custom_path = options.custom_path.as_deref().filter(|p| !p.is_empty());
    if let Some(path) = custom_path {
        validate_custom_path(path)?;
    }

    verify_templates(&options.template_dir)?;

    let guesser = AlwaysRequired;
    let inference = FieldInference {
        schema,
        migrations_dir: layout.migrations_dir(),
        guesser: &guesser,
    };
    let store_rules = inference.rules_block(model, RequestKind::Store);
    let update_rules = inference.rules_block(model, RequestKind::Update);

    let mut placeholders = Placeholders::for_model(model);
    placeholders.set(
        "controllerNamespace",
        ProjectLayout::controller_namespace(custom_path),
    );
    placeholders.set("storeRules", store_rules);
    placeholders.set("updateRules", update_rules);
    placeholders.set("perPage", options.per_page.to_string());
    if let Some(path) = custom_path {
        placeholders.set(
            "routePath",
            format!("{}/{}", path.to_lowercase(), inflect::route_segment(model)),
        );
    }

    let mut targets: Vec<(ArtifactKind, PathBuf)> = vec![
        (
            ArtifactKind::Controller,
            layout.controller_path(model, custom_path),
        ),
        (ArtifactKind::RequestStore, layout.store_request_path(model)),
        (
            ArtifactKind::RequestUpdate,
            layout.update_request_path(model),
        ),
        (ArtifactKind::Interface, layout.interface_path(model)),
        (ArtifactKind::Repository, layout.repository_path(model)),
        (ArtifactKind::Service, layout.service_path(model)),
    ];
    if options.with_tests {
        targets.push((ArtifactKind::Test, layout.feature_test_path(model)));
    }

    let mut artifacts = Vec::new();
    let mut skipped = Vec::new();
    for (kind, path) in targets {
        if path.exists() && !options.overwrite {
            eprintln!(
                "{} {} already exists (use --force to overwrite)",
                style("⚠").yellow(),
                file_name(&path)
            );
            skipped.push(path);
            continue;
        }

        match render_artifact(&options.template_dir, kind, &placeholders) {
            Ok(content) => artifacts.push(PlannedArtifact {
                kind,
                path,
                content,
            }),
            Err(SolidsmithError::TemplateNotFound { path: stub }) => {
                eprintln!(
                    "{} {} template not found: {}",
                    style("⚠").yellow(),
                    kind,
                    stub.display()
                );
                skipped.push(path);
            }
            Err(e) => return Err(e),
        }
    }

    let provider_path = layout.provider_path();
    let provider = if provider_path.exists() {
        let content = std::fs::read_to_string(&provider_path).map_err(|e| SolidsmithError::Io {
            context: format!("reading {}", provider_path.display()),
            source: e,
        })?;
        ProviderAction::Patch {
            path: provider_path,
            patch: apply_binding(&content, model),
        }
    } else {
        let content =
            render_artifact(&options.template_dir, ArtifactKind::Provider, &placeholders)?;
        ProviderAction::Create {
            path: provider_path,
            content,
        }
    };

    Ok(ScaffoldPlan {
        artifacts,
        skipped,
        provider,
        directories: layout.scaffold_dirs(custom_path),
    })
}

/// Execute a previously planned scaffold: create directories, write files,
/// and apply the provider action.
pub fn execute_scaffold(plan: ScaffoldPlan) -> Result<ScaffoldReport> {
    for dir in &plan.directories {
        create_dir_all(dir)?;
    }

    let mut files_written = Vec::new();
    for artifact in &plan.artifacts {
        if let Some(parent) = artifact.path.parent() {
            create_dir_all(parent)?;
        }
        std::fs::write(&artifact.path, &artifact.content).map_err(|e| SolidsmithError::Io {
            context: format!("writing {}", artifact.path.display()),
            source: e,
        })?;
        println!(
            "{} {} created",
            style("✓").green(),
            file_name(&artifact.path)
        );
        files_written.push(artifact.path.clone());
    }

    let binding = match plan.provider {
        ProviderAction::Create { path, content } => {
            if let Some(parent) = path.parent() {
                create_dir_all(parent)?;
            }
            std::fs::write(&path, content).map_err(|e| SolidsmithError::Io {
                context: format!("writing {}", path.display()),
                source: e,
            })?;
            println!("{} RepositoryServiceProvider created", style("✓").green());
            eprintln!(
                "{} register the provider in bootstrap/providers.php (or config/app.php)",
                style("⚠").yellow()
            );
            files_written.push(path);
            BindingStatus::ProviderCreated
        }
        ProviderAction::Patch { path, patch } => match patch {
            BindingPatch::Updated(content) => {
                std::fs::write(&path, content).map_err(|e| SolidsmithError::Io {
                    context: format!("writing {}", path.display()),
                    source: e,
                })?;
                println!(
                    "{} binding added to RepositoryServiceProvider",
                    style("✓").green()
                );
                BindingStatus::Added
            }
            BindingPatch::AlreadyPresent => {
                println!("  (binding already present)");
                BindingStatus::AlreadyPresent
            }
            BindingPatch::AnchorNotFound => BindingStatus::AnchorNotFound,
        },
    };

    Ok(ScaffoldReport {
        files_written,
        files_skipped: plan.skipped,
        binding,
    })
}

/// Plan and execute in one call.
pub fn scaffold(
    options: &ScaffoldOptions,
    schema: Option<&dyn SchemaSource>,
) -> Result<ScaffoldReport> {
    let plan = plan_scaffold(options, schema)?;
    execute_scaffold(plan)
}

fn create_dir_all(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| SolidsmithError::Io {
        context: format!("creating directory {}", dir.display()),
        source: e,
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
