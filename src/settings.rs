use std::path::PathBuf;

/// Which half of the project a command targets.
///
/// Accepted on the command line but does not change any command yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    #[default]
    All,
    Frontend,
    Backend,
}

/// Immutable per-invocation configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory holding the lock file; every command runs here.
    pub cwd: PathBuf,
    pub scope: Scope,
    /// Answer the install prompt with yes without a terminal.
    pub assume_yes: bool,
    /// Print command lines instead of running them.
    pub dry_run: bool,
}

impl Settings {
    #[must_use]
    pub fn new(cwd: PathBuf) -> Self {
        Settings {
            cwd,
            scope: Scope::All,
            assume_yes: false,
            dry_run: false,
        }
    }
}
