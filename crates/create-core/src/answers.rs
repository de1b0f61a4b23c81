//! Wizard answers and the enums behind them

use std::fmt;

/// Project types offered by the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectKind {
    /// Express REST API with JWT auth and user CRUD
    CreateExpressApi,
    /// Placeholder entry shown in the wizard, not yet scaffold-able
    ComingSoon,
}

impl ProjectKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectKind::CreateExpressApi => "Create Express API",
            ProjectKind::ComingSoon => "Coming Soon...",
        }
    }

    /// Name of the template directory under the template root
    pub fn template_name(&self) -> &'static str {
        match self {
            ProjectKind::CreateExpressApi => "create-express-api",
            ProjectKind::ComingSoon => "coming-soon",
        }
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Npm,
    Yarn,
}

impl PackageManager {
    pub fn display_name(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
        }
    }

    /// Program name to spawn
    pub fn program(&self) -> &'static str {
        self.display_name()
    }

    /// The full install command line, as shown to the user and as executed
    pub fn install_command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm install",
            PackageManager::Yarn => "yarn install",
        }
    }

    /// Command string for running a package.json script
    ///
    /// npm has shorthand invocations for `start` and `test`; everything else
    /// goes through `npm run`. yarn runs every script directly.
    pub fn script_command(&self, script: &str) -> String {
        match self {
            PackageManager::Npm => match script {
                "start" | "test" => format!("npm {script}"),
                _ => format!("npm run {script}"),
            },
            PackageManager::Yarn => format!("yarn {script}"),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Everything the wizard collects; immutable once built
#[derive(Debug, Clone)]
pub struct AnswerSet {
    pub kind: ProjectKind,
    pub project_name: String,
    pub description: String,
    pub package_manager: PackageManager,
}

/// Validate a raw project-name input from the wizard
///
/// Returns the error message shown inline by the prompt when the trimmed
/// input is empty.
pub fn validate_project_name(input: &str) -> Result<(), &'static str> {
    if input.trim().is_empty() {
        Err("Project name is required")
    } else {
        Ok(())
    }
}
