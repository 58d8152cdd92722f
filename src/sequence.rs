//! `xe dev init`: detect, install, set up the database, start the dev server

use std::path::Path;

use log::info;

use crate::dispatch::Dispatcher;
use crate::error::XeError;
use crate::manager;
use crate::request::PrismaAction;
use crate::runner::Runner;
use crate::settings::Settings;

/// Schema file whose presence enables the database step.
pub const PRISMA_SCHEMA: &str = "prisma/schema.prisma";

/// Steps of `dev init`, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Detect,
    Install,
    Database,
    DevServer,
}

#[must_use]
pub fn has_prisma_schema(dir: &Path) -> bool {
    dir.join(PRISMA_SCHEMA).is_file()
}

/// Run the whole `dev init` flow. The first failing step ends it.
///
/// The database step is skipped when there is no schema file. When there is
/// one, a missing or failing schema tool is fatal like any other step.
///
/// # Errors
///
/// Returns `XeError::NoPackageManager` if detection fails, otherwise the
/// first error from the runner.
pub fn dev_init(settings: &Settings, runner: &mut dyn Runner) -> Result<(), XeError> {
    info!("[1/4] {:?}", Step::Detect);
    let manager = manager::detect(&settings.cwd)?;
    let mut dispatcher = Dispatcher::new(manager, settings, runner);

    info!("[2/4] {:?}", Step::Install);
    dispatcher.install(&[])?;

    info!("[3/4] {:?}", Step::Database);
    if has_prisma_schema(&settings.cwd) {
        dispatcher.prisma(&PrismaAction::Sync)?;
    } else {
        info!("No {PRISMA_SCHEMA} found, skipping database setup");
    }

    info!("[4/4] {:?}", Step::DevServer);
    dispatcher.start_dev_server()
}
