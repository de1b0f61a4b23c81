//! create-new-project CLI - Interactive scaffolding for Express API projects

use anyhow::Result;
use clap::Parser;
use create_core::answers::PackageManager;
use create_core::tui::CreateArgs;
use create_core::ProductConfig;
use std::path::{Path, PathBuf};

/// create-new-project product configuration
#[derive(Clone)]
pub struct CreateNewProjectConfig;

impl ProductConfig for CreateNewProjectConfig {
    fn display_name(&self) -> &'static str {
        "create-new-project"
    }

    fn default_project_name(&self) -> &'static str {
        "my-express-api"
    }

    fn default_description(&self) -> &'static str {
        "A modern Express.js API"
    }

    fn next_steps(&self, dir: &Path, package_manager: PackageManager) -> Vec<String> {
        vec![
            format!("cd {}", dir.display()),
            package_manager.script_command("dev"),
        ]
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-new-project")]
#[command(about = "Interactive CLI for scaffolding Express API projects")]
#[command(version)]
pub struct Args {
    /// Local directory to use as the template root instead of the installed one (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Auto-confirm the overwrite prompt (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            template_dir: args.template_dir,
            yes: args.yes,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = CreateNewProjectConfig;

    let result = create_core::run(&config, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
