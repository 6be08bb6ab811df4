mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> miette::Result<()> {
    match Cli::parse().command {
        Commands::Make {
            model,
            path,
            paginate,
            test,
            force,
            root,
            templates,
            dry_run,
        } => commands::make::run(
            model, path, paginate, test, force, root, templates, dry_run,
        ),
        Commands::Check { templates, root } => commands::check::run(templates, root),
    }
}
