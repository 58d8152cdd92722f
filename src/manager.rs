//! Package manager detection from lock files

use std::fmt;
use std::path::Path;

use log::{debug, info};

use crate::error::XeError;

/// The package managers `xe` knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Bun,
    Pnpm,
    Npm,
}

impl PackageManager {
    /// Managers in detection priority order.
    pub const ALL: [PackageManager; 3] = [
        PackageManager::Bun,
        PackageManager::Pnpm,
        PackageManager::Npm,
    ];

    /// The lock file whose presence selects this manager.
    #[must_use]
    pub fn lock_file(self) -> &'static str {
        match self {
            PackageManager::Bun => "bun.lock",
            PackageManager::Pnpm => "pnpm-lock.yaml",
            PackageManager::Npm => "package-lock.json",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            PackageManager::Bun => "bun",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Npm => "npm",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pick the package manager for `dir` by looking for its lock file.
///
/// `bun.lock` wins over `pnpm-lock.yaml`, which wins over `package-lock.json`.
///
/// # Errors
///
/// Returns `XeError::NoPackageManager` if none of the lock files exist.
pub fn detect(dir: &Path) -> Result<PackageManager, XeError> {
    for manager in PackageManager::ALL {
        let lock = dir.join(manager.lock_file());
        debug!("Looking for {}", lock.display());
        if lock.is_file() {
            info!("Detected package manager: {manager}");
            return Ok(manager);
        }
    }
    Err(XeError::NoPackageManager {
        dir: dir.to_path_buf(),
    })
}
