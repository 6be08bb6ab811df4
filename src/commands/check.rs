use std::path::PathBuf;

use console::style;
use miette::Result;

use solidsmith::config::{load_config, resolve_template_dir};
use solidsmith::error::SolidsmithError;
use solidsmith::render::{verify_templates, ArtifactKind};

pub fn run(templates: Option<PathBuf>, root: PathBuf) -> Result<()> {
    let config = load_config(&root)?;
    let template_dir = resolve_template_dir(templates, &config);

    println!(
        "{} {}",
        style("Checking templates at").bold(),
        style(template_dir.display()).cyan()
    );

    match verify_templates(&template_dir) {
        Ok(()) => {
            println!(
                "\n{} All {} stubs present",
                style("✓").green().bold(),
                ArtifactKind::ALL.len()
            );
            Ok(())
        }
        Err(SolidsmithError::MissingTemplates { names }) => {
            println!("\n{}", style("Missing:").red().bold());
            for name in &names {
                println!("  {} {}", style("✗").red(), name);
            }
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
