use std::path::{Path, PathBuf};

use solidsmith::error::SolidsmithError;
use solidsmith::provider::binding_fragment;
use solidsmith::render::ArtifactKind;
use solidsmith::schema::{SchemaError, SchemaSource};
use solidsmith::{plan_scaffold, scaffold, BindingStatus, ProviderAction, ScaffoldOptions};

fn stubs_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("stubs")
}

/// Minimal project tree: just the model file the scaffold requires.
fn setup_project(models: &[&str]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let models_dir = dir.path().join("app").join("Models");
    std::fs::create_dir_all(&models_dir).unwrap();
    for model in models {
        std::fs::write(
            models_dir.join(format!("{model}.php")),
            format!("<?php\n\nclass {model}\n{{\n}}\n"),
        )
        .unwrap();
    }
    dir
}

fn write_migration(root: &Path, table: &str, body: &str) {
    let migrations = root.join("database").join("migrations");
    std::fs::create_dir_all(&migrations).unwrap();
    std::fs::write(
        migrations.join(format!("2024_01_01_000000_create_{table}_table.php")),
        body,
    )
    .unwrap();
}

fn options(root: &Path, model: &str) -> ScaffoldOptions {
    ScaffoldOptions {
        model: model.to_string(),
        root: root.to_path_buf(),
        template_dir: stubs_dir(),
        custom_path: None,
        per_page: 15,
        with_tests: false,
        overwrite: false,
    }
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn test_scaffold_generates_all_artifacts() {
    let project = setup_project(&["Post"]);
    let root = project.path();

    let report = scaffold(&options(root, "Post"), None).unwrap();

    let expected = [
        "app/Http/Controllers/PostController.php",
        "app/Http/Requests/StorePostRequest.php",
        "app/Http/Requests/UpdatePostRequest.php",
        "app/Contracts/PostRepositoryInterface.php",
        "app/Repositories/PostRepository.php",
        "app/Services/PostService.php",
        "app/Providers/RepositoryServiceProvider.php",
    ];
    for rel in expected {
        assert!(root.join(rel).exists(), "{rel} should exist");
    }
    assert_eq!(report.files_written.len(), expected.len());
    assert!(report.files_skipped.is_empty());
    assert_eq!(report.binding, BindingStatus::ProviderCreated);

    let controller = read(&root.join("app/Http/Controllers/PostController.php"));
    assert!(controller.contains("namespace App\\Http\\Controllers;"));
    assert!(controller.contains("class PostController"));
    assert!(controller.contains("$request->integer('per_page', 15)"));
    assert!(!controller.contains("{{"), "no unexpanded tokens expected");

    let repository = read(&root.join("app/Repositories/PostRepository.php"));
    assert!(repository.contains("paginate(int $perPage = 15)"));

    // No test file without --test
    assert!(!root.join("tests/Feature/PostTest.php").exists());
}

#[test]
fn test_second_run_skips_everything_without_force() {
    let project = setup_project(&["Post"]);
    let root = project.path();

    scaffold(&options(root, "Post"), None).unwrap();
    let controller_path = root.join("app/Http/Controllers/PostController.php");
    let before = read(&controller_path);

    let report = scaffold(&options(root, "Post"), None).unwrap();

    assert!(report.files_written.is_empty());
    assert_eq!(report.files_skipped.len(), 6);
    assert_eq!(report.binding, BindingStatus::AlreadyPresent);
    assert_eq!(read(&controller_path), before);
}

#[test]
fn test_model_not_found_aborts_before_any_write() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    let result = scaffold(&options(root, "Post"), None);

    assert!(matches!(
        result,
        Err(SolidsmithError::ModelNotFound { .. })
    ));
    assert!(!root.join("app/Contracts").exists());
    assert!(!root.join("app/Providers").exists());
}

#[test]
fn test_invalid_custom_path_rejected_before_any_write() {
    let project = setup_project(&["Post"]);
    let root = project.path();

    for bad in ["V1:Admin", "V1\\Admin", " V1/Admin", "V1/Admin "] {
        let mut opts = options(root, "Post");
        opts.custom_path = Some(bad.to_string());
        let result = scaffold(&opts, None);
        assert!(
            matches!(result, Err(SolidsmithError::InvalidPath { .. })),
            "'{bad}' should be rejected"
        );
    }
    assert!(!root.join("app/Contracts").exists());
}

#[test]
fn test_custom_path_shapes_namespace_and_route() {
    let project = setup_project(&["Post"]);
    let root = project.path();

    let mut opts = options(root, "Post");
    opts.custom_path = Some("V1/Admin".to_string());
    opts.with_tests = true;
    scaffold(&opts, None).unwrap();

    let controller_path = root.join("app/Http/Controllers/V1/Admin/PostController.php");
    assert!(controller_path.exists());
    let controller = read(&controller_path);
    assert!(controller.contains("namespace App\\Http\\Controllers\\V1\\Admin;"));

    let test_file = read(&root.join("tests/Feature/PostTest.php"));
    assert!(test_file.contains("/api/v1/admin/posts"));
}

#[test]
fn test_missing_templates_lists_every_name() {
    let project = setup_project(&["Post"]);
    let root = project.path();

    // Partial template set: everything except two stubs.
    let partial = tempfile::tempdir().unwrap();
    for kind in ArtifactKind::ALL {
        if matches!(kind, ArtifactKind::Interface | ArtifactKind::Test) {
            continue;
        }
        std::fs::copy(
            stubs_dir().join(kind.template_file()),
            partial.path().join(kind.template_file()),
        )
        .unwrap();
    }

    let mut opts = options(root, "Post");
    opts.template_dir = partial.path().to_path_buf();
    let result = scaffold(&opts, None);

    match result {
        Err(SolidsmithError::MissingTemplates { names }) => {
            assert_eq!(names, vec!["interface.stub", "test.stub"]);
        }
        other => panic!("expected MissingTemplates, got {:?}", other.map(|_| ())),
    }
    assert!(!root.join("app/Contracts").exists(), "fail-fast, not partial");
}

#[test]
fn test_rules_inferred_from_migration() {
    let project = setup_project(&["Post"]);
    let root = project.path();
    write_migration(
        root,
        "posts",
        r#"<?php
        Schema::create('posts', function (Blueprint $table) {
            $table->id();
            $table->string('title');
            $table->text('body');
            $table->timestamp('created_at');
        });
        "#,
    );

    scaffold(&options(root, "Post"), None).unwrap();

    let store = read(&root.join("app/Http/Requests/StorePostRequest.php"));
    assert!(store.contains("'title' => 'required',"));
    assert!(store.contains("'body' => 'required',"));
    assert!(!store.contains("'id' =>"));
    assert!(!store.contains("'created_at' =>"));

    let update = read(&root.join("app/Http/Requests/UpdatePostRequest.php"));
    assert!(update.contains("'title' => 'required',"));
}

#[test]
fn test_placeholder_block_when_no_field_source() {
    let project = setup_project(&["Post"]);
    let root = project.path();

    scaffold(&options(root, "Post"), None).unwrap();

    let store = read(&root.join("app/Http/Requests/StorePostRequest.php"));
    assert!(store.contains("// TODO: add the validation rules for your model"));
    assert!(store.contains("// 'email' => 'required|email|unique:users',"));
}

struct FakeSchema {
    columns: Vec<&'static str>,
}

impl SchemaSource for FakeSchema {
    fn columns(&self, table: &str) -> Result<Option<Vec<String>>, SchemaError> {
        if table == "posts" {
            Ok(Some(self.columns.iter().map(|c| c.to_string()).collect()))
        } else {
            Ok(None)
        }
    }
}

#[test]
fn test_rules_from_live_schema_exclude_framework_columns() {
    let project = setup_project(&["Post"]);
    let root = project.path();

    let schema = FakeSchema {
        columns: vec!["a", "b", "id", "created_at"],
    };
    scaffold(&options(root, "Post"), Some(&schema)).unwrap();

    let store = read(&root.join("app/Http/Requests/StorePostRequest.php"));
    assert!(store.contains("'a' => 'required',"));
    assert!(store.contains("'b' => 'required',"));
    assert!(!store.contains("'id' =>"));
    assert!(!store.contains("'created_at' =>"));
}

struct FailingSchema;

impl SchemaSource for FailingSchema {
    fn columns(&self, _table: &str) -> Result<Option<Vec<String>>, SchemaError> {
        Err(SchemaError::new("connection refused"))
    }
}

#[test]
fn test_schema_failure_degrades_to_migration() {
    let project = setup_project(&["Post"]);
    let root = project.path();
    write_migration(root, "posts", "$table->string('title');");

    scaffold(&options(root, "Post"), Some(&FailingSchema)).unwrap();

    let store = read(&root.join("app/Http/Requests/StorePostRequest.php"));
    assert!(store.contains("'title' => 'required',"));
}

#[test]
fn test_binding_inserted_exactly_once_per_model() {
    let project = setup_project(&["Post", "Comment"]);
    let root = project.path();
    let provider_path = root.join("app/Providers/RepositoryServiceProvider.php");

    scaffold(&options(root, "Post"), None).unwrap();

    let report = scaffold(&options(root, "Comment"), None).unwrap();
    assert_eq!(report.binding, BindingStatus::Added);

    // Re-scaffolding the same model must not duplicate its fragment.
    let report = scaffold(&options(root, "Comment"), None).unwrap();
    assert_eq!(report.binding, BindingStatus::AlreadyPresent);

    let provider = read(&provider_path);
    assert_eq!(provider.matches(&binding_fragment("Post")).count(), 1);
    assert_eq!(provider.matches(&binding_fragment("Comment")).count(), 1);
}

#[test]
fn test_force_overwrites_artifacts_but_never_the_provider() {
    let project = setup_project(&["Post"]);
    let root = project.path();

    scaffold(&options(root, "Post"), None).unwrap();

    let service_path = root.join("app/Services/PostService.php");
    std::fs::write(&service_path, "<?php // hand-edited\n").unwrap();

    let provider_path = root.join("app/Providers/RepositoryServiceProvider.php");
    let mut provider = read(&provider_path);
    provider.push_str("// hand-edited marker\n");
    std::fs::write(&provider_path, &provider).unwrap();

    let mut opts = options(root, "Post");
    opts.overwrite = true;
    let report = scaffold(&opts, None).unwrap();

    assert!(read(&service_path).contains("class PostService"));
    assert!(
        read(&provider_path).contains("// hand-edited marker"),
        "provider is never regenerated"
    );
    assert_eq!(report.binding, BindingStatus::AlreadyPresent);
}

#[test]
fn test_provider_without_register_anchor_is_left_untouched() {
    let project = setup_project(&["Post"]);
    let root = project.path();

    let providers_dir = root.join("app").join("Providers");
    std::fs::create_dir_all(&providers_dir).unwrap();
    let provider_path = providers_dir.join("RepositoryServiceProvider.php");
    let odd = "<?php\n\nclass RepositoryServiceProvider\n{\n}\n";
    std::fs::write(&provider_path, odd).unwrap();

    let report = scaffold(&options(root, "Post"), None).unwrap();

    assert_eq!(report.binding, BindingStatus::AnchorNotFound);
    assert_eq!(read(&provider_path), odd);
}

#[test]
fn test_plan_scaffold_writes_nothing() {
    let project = setup_project(&["Post"]);
    let root = project.path();

    let plan = plan_scaffold(&options(root, "Post"), None).unwrap();

    assert_eq!(plan.artifacts.len(), 6);
    assert!(matches!(plan.provider, ProviderAction::Create { .. }));
    assert!(!root.join("app/Contracts").exists());
    assert!(!root.join("app/Providers").exists());
}

#[test]
fn test_generated_provider_register_body_matches_fragment() {
    let project = setup_project(&["Post"]);
    let root = project.path();

    scaffold(&options(root, "Post"), None).unwrap();

    let provider = read(&root.join("app/Providers/RepositoryServiceProvider.php"));
    assert_eq!(provider.matches(&binding_fragment("Post")).count(), 1);
}

#[test]
fn test_custom_per_page_flows_into_artifacts() {
    let project = setup_project(&["Post"]);
    let root = project.path();

    let mut opts = options(root, "Post");
    opts.per_page = 25;
    opts.with_tests = true;
    scaffold(&opts, None).unwrap();

    let repository = read(&root.join("app/Repositories/PostRepository.php"));
    assert!(repository.contains("paginate(int $perPage = 25)"));

    let test_file = read(&root.join("tests/Feature/PostTest.php"));
    assert!(test_file.contains("count(25)"));
}
