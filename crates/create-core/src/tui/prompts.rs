//! The interactive scaffolding wizard

use crate::answers::{self, AnswerSet, PackageManager, ProjectKind};
use crate::install::{self, InstallOutcome};
use crate::product::ProductConfig;
use crate::scaffold::{self, TargetDisposition};
use crate::templates;
use crate::tui::report;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Local directory to use as the template root instead of the installed one
    pub template_dir: Option<PathBuf>,

    /// Auto-confirm the overwrite prompt (non-interactive mode)
    pub yes: bool,
}

/// Run the interactive wizard end to end
///
/// Stages run strictly top to bottom: prompt, resolve, populate, patch,
/// seed, install, report. The only non-fatal stage is the dependency
/// install; everything else propagates to the caller and exits nonzero.
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    // Step 1: Resolve the template root (computed once, passed down)
    let template_root = match &args.template_dir {
        Some(path) => {
            cliclack::log::info(format!("Using templates from {}", path.display()))?;
            path.clone()
        }
        None => templates::resolve_template_root(&install_dir()?),
    };

    // Step 2: Collect answers
    let answers = collect_answers(config)?;

    if answers.kind == ProjectKind::ComingSoon {
        // Nothing to scaffold yet; bail out before touching the filesystem
        cliclack::outro("Coming Soon!")?;
        return Ok(());
    }

    // Step 3: Validate the template before any mutation
    let template_dir = templates::validate_template(&template_root, answers.kind.template_name())?;

    // Step 4: Resolve the target directory, confirm overwrite if it exists
    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let target = scaffold::resolve_target(&cwd, &answers.project_name);

    let confirmed = if target.exists() {
        args.yes
            || cliclack::confirm(format!(
                "Directory {} already exists. Overwrite?",
                answers.project_name
            ))
            .initial_value(false)
            .interact()?
    } else {
        false
    };

    let disposition = scaffold::check_target(&target, confirmed);
    if disposition == TargetDisposition::Declined {
        cliclack::outro("Operation cancelled.".yellow())?;
        return Ok(());
    }

    // Step 5: Materialize, patch, seed
    let spinner = cliclack::spinner();
    spinner.start("Creating project files...");

    let copied = match scaffold::materialize_project(
        &template_dir,
        &target,
        disposition,
        &answers.project_name,
        &answers.description,
    )
    .await?
    {
        Some(copied) => copied,
        // Declined overwrites already returned above
        None => return Ok(()),
    };

    spinner.stop(format!("Created {} files in {}", copied, target.display()));

    // Step 6: Install dependencies (best-effort, never fatal)
    let spinner = cliclack::spinner();
    spinner.start("Installing dependencies... This may take a few minutes");

    match install::install_dependencies(&target, answers.package_manager).await {
        InstallOutcome::Success => spinner.stop("Dependencies installed"),
        InstallOutcome::Failed { error } => {
            spinner.error("Failed to install dependencies");
            cliclack::log::warning(format!(
                "{}\n\nYou can install dependencies manually:\n  {}",
                error,
                install::manual_install_hint(&answers.project_name, answers.package_manager)
            ))?;
        }
    }

    // Step 7: Show the summary
    report::print_summary(config, &answers);
    cliclack::outro("Happy coding!")?;

    Ok(())
}

fn collect_answers<C: ProductConfig>(config: &C) -> Result<AnswerSet> {
    let kind: ProjectKind = cliclack::select("Select project type")
        .item(
            ProjectKind::CreateExpressApi,
            ProjectKind::CreateExpressApi.display_name(),
            "REST API with JWT auth and user CRUD",
        )
        .item(
            ProjectKind::ComingSoon,
            ProjectKind::ComingSoon.display_name(),
            "",
        )
        .interact()?;

    let project_name: String = cliclack::input("Project name")
        .default_input(config.default_project_name())
        .validate(|input: &String| answers::validate_project_name(input))
        .interact()?;

    let description: String = cliclack::input("Project description")
        .default_input(config.default_description())
        .interact()?;

    let package_manager: PackageManager = cliclack::select("Select package manager")
        .item(PackageManager::Npm, "npm", "")
        .item(PackageManager::Yarn, "yarn", "")
        .interact()?;

    Ok(AnswerSet {
        kind,
        project_name: project_name.trim().to_string(),
        description,
        package_manager,
    })
}

/// Directory the running executable lives in
fn install_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}
