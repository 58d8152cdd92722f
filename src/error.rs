use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop an `xe` invocation.
#[derive(Error, Debug)]
pub enum XeError {
    #[error(
        "No supported package manager found in {}: expected bun.lock, pnpm-lock.yaml or package-lock.json",
        .dir.display()
    )]
    NoPackageManager { dir: PathBuf },

    #[error("{0}")]
    Usage(String),

    #[error("Dependencies are not installed (run `xe install` first)")]
    DependenciesMissing,

    #[error("`{command}` failed{}", .code.map(|c| format!(" with exit code {c}")).unwrap_or_default())]
    CommandFailed { command: String, code: Option<i32> },

    #[error("Unable to launch `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("Unable to read the current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}

impl XeError {
    /// Process exit code for this error.
    ///
    /// A failing external command hands its own code through; every other
    /// failure exits with 1.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            XeError::CommandFailed {
                code: Some(code), ..
            } => u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1),
            _ => 1,
        }
    }

    #[must_use]
    pub fn is_usage(&self) -> bool {
        matches!(self, XeError::Usage(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_exit_code_passes_through() {
        let err = XeError::CommandFailed {
            command: "pnpm run build".into(),
            code: Some(2),
        };
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "`pnpm run build` failed with exit code 2");
    }

    #[test]
    fn test_signal_and_out_of_range_codes_map_to_one() {
        let killed = XeError::CommandFailed {
            command: "npm run dev".into(),
            code: None,
        };
        assert_eq!(killed.exit_code(), 1);
        assert_eq!(killed.to_string(), "`npm run dev` failed");

        let negative = XeError::CommandFailed {
            command: "npm run dev".into(),
            code: Some(-1),
        };
        assert_eq!(negative.exit_code(), 1);
    }

    #[test]
    fn test_other_errors_exit_one() {
        assert_eq!(XeError::DependenciesMissing.exit_code(), 1);
        assert_eq!(XeError::Usage("bad".into()).exit_code(), 1);
        assert!(XeError::Usage("bad".into()).is_usage());
    }

    #[test]
    fn test_current_dir_failure_is_not_usage() {
        let err = XeError::CurrentDir(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(!err.is_usage());
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().starts_with("Unable to read the current directory"));
    }
}
