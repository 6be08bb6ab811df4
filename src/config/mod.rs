pub mod layout;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, SolidsmithError};

pub const CONFIG_FILE: &str = "solidsmith.toml";
pub const DEFAULT_PER_PAGE: u32 = 15;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct SolidsmithConfig {
    #[serde(default)]
    pub templates: TemplatesConfig,

    #[serde(default)]
    pub scaffold: ScaffoldDefaults,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TemplatesConfig {
    /// Overrides the stub directory search.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScaffoldDefaults {
    /// Page size used when --paginate is not given.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

impl Default for ScaffoldDefaults {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Load `solidsmith.toml` from the project root. A missing file is not an
/// error; a malformed one is.
pub fn load_config(root: &Path) -> Result<SolidsmithConfig> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(SolidsmithConfig::default());
    }

    let text = std::fs::read_to_string(&path).map_err(|e| SolidsmithError::Io {
        context: format!("reading {}", path.display()),
        source: e,
    })?;

    toml::from_str(&text).map_err(|source| SolidsmithError::ConfigParse { source })
}

/// Resolve the stub directory: explicit flag, then config, then the per-user
/// data directory, then `stubs/` next to the executable.
pub fn resolve_template_dir(explicit: Option<PathBuf>, config: &SolidsmithConfig) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }
    if let Some(dir) = &config.templates.dir {
        return dir.clone();
    }
    if let Some(data) = dirs::data_dir() {
        let candidate = data.join("solidsmith").join("stubs");
        if candidate.exists() {
            return candidate;
        }
    }

    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("stubs")))
        .unwrap_or_else(|| PathBuf::from("stubs"))
}
