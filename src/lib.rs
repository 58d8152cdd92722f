//! Core implementation of the `xe` command dispatcher
//!
//! `xe` detects which package manager a project uses (bun, pnpm or npm) from
//! its lock file and translates a small set of verbs (install, dev, build,
//! lint, prisma, shadcn) into that manager's command line. All real work is
//! delegated to the external tool, whose exit status becomes `xe`'s own.

use log::debug;

use crate::dispatch::Dispatcher;
use crate::error::XeError;
use crate::prompt::Prompt;
use crate::request::Verb;
use crate::runner::Runner;
use crate::settings::Settings;

pub mod dispatch;
pub mod error;
pub mod logger;
pub mod manager;
pub mod prompt;
pub mod request;
pub mod runner;
pub mod sequence;
pub mod settings;
pub mod style;
pub mod template;

/// Run one top-level request in `settings.cwd`.
///
/// # Errors
///
/// Returns `XeError::NoPackageManager` if no lock file is found, and any error
/// from the dispatched verb.
pub fn run(
    verb: &Verb,
    settings: &Settings,
    runner: &mut dyn Runner,
    prompt: &mut dyn Prompt,
) -> Result<(), XeError> {
    debug!("Request: {verb:?}");
    if *verb == Verb::DevInit {
        return sequence::dev_init(settings, runner);
    }
    let manager = manager::detect(&settings.cwd)?;
    Dispatcher::new(manager, settings, runner).dispatch(verb, prompt)
}
