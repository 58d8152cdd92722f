//! Mapping verbs onto the detected package manager's commands

use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, info, warn};

use crate::error::XeError;
use crate::manager::PackageManager;
use crate::prompt::Prompt;
use crate::request::{PrismaAction, ShadcnAction, Verb};
use crate::runner::Runner;
use crate::settings::Settings;
use crate::template::{self, Invocation};

/// Directory whose presence means dependencies are installed.
pub const DEPENDENCY_DIR: &str = "node_modules";

/// Build a migration name from the current time: `migration_<unix seconds>`.
#[must_use]
pub fn migration_name(now: SystemTime) -> String {
    let secs = now
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    format!("migration_{secs}")
}

/// Command lines for a prisma action, in execution order.
#[must_use]
pub fn prisma_steps(manager: PackageManager, action: &PrismaAction) -> Vec<Invocation> {
    match action {
        PrismaAction::Sync => vec![
            template::prisma(manager, &["generate"]),
            template::prisma(manager, &["db", "push"]),
            template::prisma(manager, &["db", "pull"]),
        ],
        PrismaAction::Migrate { name } => {
            let name = name
                .clone()
                .unwrap_or_else(|| migration_name(SystemTime::now()));
            vec![template::prisma(manager, &["migrate", "dev", "--name", name.as_str()])]
        }
        PrismaAction::Reset => vec![template::prisma(manager, &["migrate", "reset"])],
    }
}

/// Command line for a shadcn action.
#[must_use]
pub fn shadcn_step(manager: PackageManager, action: &ShadcnAction) -> Invocation {
    match action {
        ShadcnAction::Init => template::shadcn(manager, &["init"]),
        ShadcnAction::Add { component } => template::shadcn(manager, &["add", component.as_str()]),
    }
}

/// Command line for `install`: everything, or the given packages in order.
#[must_use]
pub fn install_step(manager: PackageManager, packages: &[String]) -> Invocation {
    if packages.is_empty() {
        template::install_all(manager)
    } else {
        template::install_packages(manager, packages)
    }
}

/// Runs single verbs against one detected package manager.
pub struct Dispatcher<'a> {
    manager: PackageManager,
    settings: &'a Settings,
    runner: &'a mut dyn Runner,
}

impl<'a> Dispatcher<'a> {
    pub fn new(manager: PackageManager, settings: &'a Settings, runner: &'a mut dyn Runner) -> Self {
        debug!(
            "Dispatching with {manager} in {} (scope: {:?})",
            settings.cwd.display(),
            settings.scope
        );
        Dispatcher {
            manager,
            settings,
            runner,
        }
    }

    #[must_use]
    pub fn dependencies_installed(&self) -> bool {
        self.settings.cwd.join(DEPENDENCY_DIR).is_dir()
    }

    /// Run one verb to completion.
    ///
    /// `prompt` is only consulted by `dev` when dependencies are missing.
    ///
    /// # Errors
    ///
    /// Returns `XeError::DependenciesMissing` if the install prompt is declined,
    /// and any error from the runner. `dev init` is not a single verb and is
    /// rejected with `XeError::Usage`.
    pub fn dispatch(&mut self, verb: &Verb, prompt: &mut dyn Prompt) -> Result<(), XeError> {
        match verb {
            Verb::Install { packages } => self.install(packages),
            Verb::Dev => self.dev(prompt),
            Verb::DevInit => Err(XeError::Usage(
                "`dev init` runs as a sequence, not a single command".to_string(),
            )),
            Verb::Build => self.exec(&template::build(self.manager)),
            Verb::Lint => self.exec(&template::lint(self.manager)),
            Verb::Prisma(action) => self.prisma(action),
            Verb::Shadcn(action) => self.exec(&shadcn_step(self.manager, action)),
        }
    }

    /// # Errors
    ///
    /// Returns any error from the runner.
    pub fn install(&mut self, packages: &[String]) -> Result<(), XeError> {
        self.exec(&install_step(self.manager, packages))
    }

    /// Start the dev server, offering to install dependencies first if they are missing.
    ///
    /// # Errors
    ///
    /// Returns `XeError::DependenciesMissing` if the offer is declined, and any
    /// error from the prompt or runner.
    pub fn dev(&mut self, prompt: &mut dyn Prompt) -> Result<(), XeError> {
        if !self.dependencies_installed() {
            warn!("Dependencies are not installed ({DEPENDENCY_DIR} is missing)");
            if !prompt.confirm("Install dependencies now?")? {
                if let Some(hint) = prompt.decline_hint() {
                    warn!("{hint}");
                }
                return Err(XeError::DependenciesMissing);
            }
            self.install(&[])?;
        }
        self.start_dev_server()
    }

    /// Start the dev server without checking for dependencies.
    ///
    /// # Errors
    ///
    /// Returns any error from the runner.
    pub fn start_dev_server(&mut self) -> Result<(), XeError> {
        self.exec(&template::dev(self.manager))
    }

    /// Run every step of a prisma action, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first error from the runner.
    pub fn prisma(&mut self, action: &PrismaAction) -> Result<(), XeError> {
        let steps = prisma_steps(self.manager, action);
        if let PrismaAction::Migrate { name: None } = action {
            info!("No migration name given, using a timestamped one");
        }
        for step in &steps {
            self.exec(step)?;
        }
        Ok(())
    }

    fn exec(&mut self, invocation: &Invocation) -> Result<(), XeError> {
        self.runner.run(invocation, &self.settings.cwd)
    }
}
