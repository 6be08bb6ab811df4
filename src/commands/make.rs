use std::path::PathBuf;

use console::style;
use miette::Result;

use solidsmith::config::{load_config, resolve_template_dir};
use solidsmith::inflect;
use solidsmith::{plan_scaffold, scaffold, BindingStatus, ProviderAction, ScaffoldOptions};

#[allow(clippy::too_many_arguments)]
pub fn run(
    model: String,
    path: Option<String>,
    paginate: Option<u32>,
    test: bool,
    force: bool,
    root: PathBuf,
    templates: Option<PathBuf>,
    dry_run: bool,
) -> Result<()> {
    let config = load_config(&root)?;
    let template_dir = resolve_template_dir(templates, &config);
    let per_page = paginate.unwrap_or(config.scaffold.per_page);

    let options = ScaffoldOptions {
        model: model.clone(),
        root,
        template_dir,
        custom_path: path.clone(),
        per_page,
        with_tests: test,
        overwrite: force,
    };

    println!(
        "{} Scaffolding layered architecture for {}",
        style("==>").cyan().bold(),
        style(&model).cyan()
    );
    if let Some(custom) = &path {
        println!("  controller path: {custom}");
    }
    println!("  pagination: {per_page} per page");

    if dry_run {
        let plan = plan_scaffold(&options, None)?;

        println!(
            "\n{} Dry run \u{2014} files that would be generated:",
            style("==>").cyan().bold()
        );
        for artifact in &plan.artifacts {
            println!("  {} {}", style("create").green(), artifact.path.display());
        }
        match &plan.provider {
            ProviderAction::Create { path, .. } => {
                println!("  {} {}", style("create").green(), path.display());
            }
            ProviderAction::Patch { path, .. } => {
                println!("  {} {}", style("patch").yellow(), path.display());
            }
        }

        println!(
            "\n{} Dry run \u{2014} no files written.",
            style("\u{2139}").blue().bold()
        );
        return Ok(());
    }

    let report = scaffold(&options, None)?;

    println!(
        "\n{} Architecture scaffolded for {}",
        style("✓").green().bold(),
        style(&model).cyan()
    );
    println!(
        "  {} files written, {} skipped",
        report.files_written.len(),
        report.files_skipped.len()
    );

    show_next_steps(&model, path.as_deref(), per_page, test, report.binding);

    Ok(())
}

fn show_next_steps(
    model: &str,
    custom_path: Option<&str>,
    per_page: u32,
    with_tests: bool,
    binding: BindingStatus,
) {
    let route_path = match custom_path {
        Some(custom) => format!(
            "{}/{}",
            custom.to_lowercase(),
            inflect::route_segment(model)
        ),
        None => inflect::route_segment(model),
    };
    let controller = match custom_path {
        Some(custom) => format!("{}\\{model}Controller", custom.replace('/', "\\")),
        None => format!("{model}Controller"),
    };

    println!("\n{}", style("Next steps:").bold());
    if binding == BindingStatus::ProviderCreated {
        println!("  1. Register the provider:");
        println!("     App\\Providers\\RepositoryServiceProvider::class in bootstrap/providers.php");
    }
    println!("  Review the validation rules in:");
    println!("     app/Http/Requests/Store{model}Request.php");
    println!("     app/Http/Requests/Update{model}Request.php");
    println!("  Add the routes in routes/api.php:");
    println!(
        "     {}",
        style(format!(
            "Route::apiResource('{route_path}', {controller}::class);"
        ))
        .dim()
    );
    println!("     GET    /api/{route_path}          ({per_page} per page)");
    println!("     POST   /api/{route_path}");
    println!("     GET    /api/{route_path}/{{id}}");
    println!("     PUT    /api/{route_path}/{{id}}");
    println!("     DELETE /api/{route_path}/{{id}}");
    if with_tests {
        println!("  Fill in the fixtures in tests/Feature/{model}Test.php");
    }
}
