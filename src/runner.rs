//! Running resolved command lines

use std::io::Write;
use std::path::Path;
use std::process::Command as ProcessCommand;

use log::debug;

use crate::error::XeError;
use crate::style;
use crate::template::Invocation;

/// Executes resolved command lines.
pub trait Runner {
    /// Run `invocation` in `cwd` to completion.
    ///
    /// # Errors
    ///
    /// Returns `XeError::Launch` if the program cannot be started and
    /// `XeError::CommandFailed` if it exits unsuccessfully.
    fn run(&mut self, invocation: &Invocation, cwd: &Path) -> Result<(), XeError>;
}

/// Runs commands as child processes sharing this process's stdin, stdout and stderr.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl Runner for SystemRunner {
    fn run(&mut self, invocation: &Invocation, cwd: &Path) -> Result<(), XeError> {
        debug!("Running '{invocation}' in {}", cwd.display());
        eprintln!("{}", style::command_line(&invocation.to_string()));

        let status = ProcessCommand::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(cwd)
            .status()
            .map_err(|source| XeError::Launch {
                program: invocation.program.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            debug!("'{invocation}' exited with {status}");
            Err(XeError::CommandFailed {
                command: invocation.to_string(),
                code: status.code(),
            })
        }
    }
}

/// Prints each command line to stdout instead of running it.
#[derive(Debug, Default)]
pub struct DryRunRunner;

impl Runner for DryRunRunner {
    fn run(&mut self, invocation: &Invocation, _cwd: &Path) -> Result<(), XeError> {
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "$ {invocation}");
        Ok(())
    }
}
