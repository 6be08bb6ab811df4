//! Path and namespace conventions of the target application tree.
//!
//! Everything the scaffold reads or writes is computed here from an explicit
//! root directory, so the orchestrator never touches ambient process state.

use std::path::{Path, PathBuf};

use regex_lite::Regex;

use crate::error::{Result, SolidsmithError};

#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The model file whose existence gates the whole scaffold.
    pub fn model_path(&self, model: &str) -> PathBuf {
        self.app_dir("Models").join(format!("{model}.php"))
    }

    pub fn controller_dir(&self, custom_path: Option<&str>) -> PathBuf {
        let mut dir = self.app_dir("Http").join("Controllers");
        if let Some(custom) = custom_path {
            for segment in custom.split('/').filter(|s| !s.is_empty()) {
                dir.push(segment);
            }
        }
        dir
    }

    pub fn controller_path(&self, model: &str, custom_path: Option<&str>) -> PathBuf {
        self.controller_dir(custom_path)
            .join(format!("{model}Controller.php"))
    }

    /// `App\Http\Controllers`, extended segment-by-segment by the custom path.
    pub fn controller_namespace(custom_path: Option<&str>) -> String {
        let base = "App\\Http\\Controllers".to_string();
        match custom_path {
            Some(custom) => {
                let segments: Vec<&str> = custom.split('/').filter(|s| !s.is_empty()).collect();
                format!("{base}\\{}", segments.join("\\"))
            }
            None => base,
        }
    }

    pub fn contracts_dir(&self) -> PathBuf {
        self.app_dir("Contracts")
    }

    pub fn interface_path(&self, model: &str) -> PathBuf {
        self.contracts_dir()
            .join(format!("{model}RepositoryInterface.php"))
    }

    pub fn repositories_dir(&self) -> PathBuf {
        self.app_dir("Repositories")
    }

    pub fn repository_path(&self, model: &str) -> PathBuf {
        self.repositories_dir().join(format!("{model}Repository.php"))
    }

    pub fn services_dir(&self) -> PathBuf {
        self.app_dir("Services")
    }

    pub fn service_path(&self, model: &str) -> PathBuf {
        self.services_dir().join(format!("{model}Service.php"))
    }

    pub fn requests_dir(&self) -> PathBuf {
        self.app_dir("Http").join("Requests")
    }

    pub fn store_request_path(&self, model: &str) -> PathBuf {
        self.requests_dir().join(format!("Store{model}Request.php"))
    }

    pub fn update_request_path(&self, model: &str) -> PathBuf {
        self.requests_dir().join(format!("Update{model}Request.php"))
    }

    /// The shared provider file: generated once, then only ever patched.
    pub fn provider_path(&self) -> PathBuf {
        self.app_dir("Providers").join("RepositoryServiceProvider.php")
    }

    pub fn feature_test_path(&self, model: &str) -> PathBuf {
        self.root
            .join("tests")
            .join("Feature")
            .join(format!("{model}Test.php"))
    }

    pub fn migrations_dir(&self) -> PathBuf {
        self.root.join("database").join("migrations")
    }

    /// Directories created up front (recursively, idempotently) before any
    /// artifact write.
    pub fn scaffold_dirs(&self, custom_path: Option<&str>) -> Vec<PathBuf> {
        vec![
            self.contracts_dir(),
            self.repositories_dir(),
            self.services_dir(),
            self.requests_dir(),
            self.controller_dir(custom_path),
        ]
    }

    fn app_dir(&self, name: &str) -> PathBuf {
        self.root.join("app").join(name)
    }
}

/// Reject custom paths that could not be a forward-slash segment list:
/// colons, backslashes and surrounding whitespace. Runs before any
/// filesystem mutation.
pub fn validate_custom_path(path: &str) -> Result<()> {
    let re = Regex::new(r"[:\\]|^\s|\s$").expect("valid regex");
    if re.is_match(path) {
        return Err(SolidsmithError::InvalidPath {
            path: path.to_string(),
        });
    }
    Ok(())
}
