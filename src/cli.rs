use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "solidsmith",
    about = "Scaffold a layered Controller/Service/Repository architecture around an existing Laravel model",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate controller, service, repository, interface and form requests for a model
    Make {
        /// Name of the existing model (PascalCase, e.g. BlogPost)
        model: String,

        /// Custom sub-path (and namespace) for the controller, e.g. V1/Admin
        #[arg(long)]
        path: Option<String>,

        /// Items per page used by the generated repository
        #[arg(long, value_name = "N")]
        paginate: Option<u32>,

        /// Also generate a feature test
        #[arg(long)]
        test: bool,

        /// Overwrite existing files (the provider is never overwritten)
        #[arg(long)]
        force: bool,

        /// Project root directory
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Directory containing the stub templates
        #[arg(long, value_name = "DIR")]
        templates: Option<PathBuf>,

        /// Show planned files without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Verify that all stub templates are present
    Check {
        /// Directory containing the stub templates
        #[arg(long, value_name = "DIR")]
        templates: Option<PathBuf>,

        /// Project root directory (for solidsmith.toml)
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
}
