//! Installing, removing and self-replacing the fxp binary.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use super::ReleaseError;

/// What `uninstall` found and removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UninstallOutcome {
    NotInstalled,
    Removed { directory_removed: bool },
}

/// Places the binary in a configured directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installer {
    install_dir: PathBuf,
    binary_name: String,
}

impl Installer {
    pub fn new(install_dir: impl Into<PathBuf>) -> Self {
        Self {
            install_dir: install_dir.into(),
            binary_name: default_binary_name().to_string(),
        }
    }

    pub fn with_binary_name(mut self, name: impl Into<String>) -> Self {
        self.binary_name = name.into();
        self
    }

    /// `%LOCALAPPDATA%/fxp` on Windows, `~/.local/bin` elsewhere.
    pub fn default_install_dir() -> Option<PathBuf> {
        if cfg!(windows) {
            dirs::data_local_dir().map(|d| d.join("fxp"))
        } else {
            dirs::home_dir().map(|h| h.join(".local").join("bin"))
        }
    }

    pub fn install_dir(&self) -> &Path {
        &self.install_dir
    }

    pub fn binary_path(&self) -> PathBuf {
        self.install_dir.join(&self.binary_name)
    }

    pub fn is_installed(&self) -> bool {
        self.binary_path().is_file()
    }

    /// Whether `install_dir` appears in `PATH`.
    pub fn on_path(&self) -> bool {
        std::env::var_os("PATH")
            .map(|paths| std::env::split_paths(&paths).any(|p| p == self.install_dir))
            .unwrap_or(false)
    }

    /// Copy `source` into the install directory. Returns the installed path.
    #[instrument(skip(self), fields(dir = %self.install_dir.display()))]
    pub fn install(&self, source: &Path) -> Result<PathBuf, ReleaseError> {
        std::fs::create_dir_all(&self.install_dir)
            .map_err(|e| ReleaseError::io(&self.install_dir, "create directory", e))?;

        let target = self.binary_path();
        if same_file(source, &target) {
            debug!("binary already at install location");
        } else {
            std::fs::copy(source, &target).map_err(|e| ReleaseError::io(&target, "copy binary to", e))?;
        }
        make_executable(&target)?;

        info!(path = %target.display(), "binary installed");
        Ok(target)
    }

    /// Remove the installed binary, then the directory if it is left empty.
    ///
    /// Failing to remove the directory is logged, not returned.
    #[instrument(skip(self), fields(dir = %self.install_dir.display()))]
    pub fn uninstall(&self) -> Result<UninstallOutcome, ReleaseError> {
        let target = self.binary_path();
        if !target.exists() {
            return Ok(UninstallOutcome::NotInstalled);
        }

        std::fs::remove_file(&target).map_err(|e| ReleaseError::io(&target, "remove", e))?;
        info!(path = %target.display(), "binary removed");

        let is_empty = std::fs::read_dir(&self.install_dir).map(|mut e| e.next().is_none());
        let directory_removed = match is_empty {
            Ok(true) => match std::fs::remove_dir(&self.install_dir) {
                Ok(()) => true,
                Err(e) => {
                    warn!(error = %e, "could not remove empty install directory");
                    false
                }
            },
            Ok(false) => false,
            Err(e) => {
                warn!(error = %e, "could not inspect install directory");
                false
            }
        };

        Ok(UninstallOutcome::Removed { directory_removed })
    }

    /// Swap `target` (usually the running executable) for `source`.
    ///
    /// The new binary is staged next to `target` and renamed over it, so the
    /// replacement is atomic on filesystems that support it.
    #[instrument(skip_all, fields(target = %target.display()))]
    pub fn replace_current(target: &Path, source: &Path) -> Result<(), ReleaseError> {
        let file_name = target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| default_binary_name().to_string());
        let staged = target.with_file_name(format!(".{file_name}.new"));

        std::fs::copy(source, &staged).map_err(|e| ReleaseError::io(&staged, "stage", e))?;
        if let Err(e) = make_executable(&staged) {
            let _ = std::fs::remove_file(&staged);
            return Err(e);
        }

        // Windows refuses to overwrite a running executable but allows renaming it.
        swap_in(target, &staged, cfg!(windows))?;

        info!("binary replaced");
        Ok(())
    }
}

/// Rename `staged` over `target`. With `move_aside`, `target` is first
/// renamed to `.<name>.old` and put back if the swap fails, so a failed
/// update never leaves the user without a binary.
fn swap_in(target: &Path, staged: &Path, move_aside: bool) -> Result<(), ReleaseError> {
    let old = match target.file_name() {
        Some(name) if move_aside && target.exists() => {
            let old = target.with_file_name(format!(".{}.old", name.to_string_lossy()));
            let _ = std::fs::remove_file(&old);
            std::fs::rename(target, &old).map_err(|e| {
                let _ = std::fs::remove_file(staged);
                ReleaseError::io(target, "move aside", e)
            })?;
            Some(old)
        }
        _ => None,
    };

    std::fs::rename(staged, target).map_err(|e| {
        let _ = std::fs::remove_file(staged);
        if let Some(old) = &old {
            if let Err(restore) = std::fs::rename(old, target) {
                warn!(error = %restore, "could not restore previous binary");
            }
        }
        ReleaseError::io(target, "replace", e)
    })
}

pub fn default_binary_name() -> &'static str {
    if cfg!(windows) { "fxp.exe" } else { "fxp" }
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<(), ReleaseError> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .map_err(|e| ReleaseError::io(path, "set permissions on", e))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<(), ReleaseError> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fake_binary(dir: &Path) -> PathBuf {
        let path = dir.join("downloaded");
        std::fs::write(&path, b"\x7fELF fake").unwrap();
        path
    }

    #[test]
    fn install_then_uninstall_cleans_up() {
        let temp = TempDir::new().unwrap();
        let source = fake_binary(temp.path());
        let installer = Installer::new(temp.path().join("bin")).with_binary_name("fxp");

        let installed = installer.install(&source).unwrap();
        assert_eq!(installed, temp.path().join("bin/fxp"));
        assert!(installer.is_installed());
        assert_eq!(std::fs::read(&installed).unwrap(), b"\x7fELF fake");

        let outcome = installer.uninstall().unwrap();
        assert_eq!(
            outcome,
            UninstallOutcome::Removed {
                directory_removed: true
            }
        );
        assert!(!temp.path().join("bin").exists());
    }

    #[test]
    fn uninstall_keeps_directory_with_other_files() {
        let temp = TempDir::new().unwrap();
        let source = fake_binary(temp.path());
        let bin = temp.path().join("bin");
        let installer = Installer::new(&bin).with_binary_name("fxp");

        installer.install(&source).unwrap();
        std::fs::write(bin.join("other-tool"), "x").unwrap();

        assert_eq!(
            installer.uninstall().unwrap(),
            UninstallOutcome::Removed {
                directory_removed: false
            }
        );
        assert!(bin.join("other-tool").exists());
    }

    #[test]
    fn uninstall_without_install_is_noop() {
        let temp = TempDir::new().unwrap();
        let installer = Installer::new(temp.path().join("missing"));
        assert_eq!(installer.uninstall().unwrap(), UninstallOutcome::NotInstalled);
    }

    #[cfg(unix)]
    #[test]
    fn installed_binary_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let source = fake_binary(temp.path());
        let installed = Installer::new(temp.path().join("bin"))
            .install(&source)
            .unwrap();

        let mode = std::fs::metadata(installed).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn replace_current_swaps_contents() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("fxp");
        std::fs::write(&target, "old").unwrap();
        let source = temp.path().join("new-build");
        std::fs::write(&source, "new").unwrap();

        Installer::replace_current(&target, &source).unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "new");
        assert!(!temp.path().join(".fxp.new").exists());
    }

    #[test]
    fn failed_swap_restores_the_moved_aside_binary() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("fxp");
        std::fs::write(&target, "old").unwrap();
        let missing = temp.path().join(".fxp.new");

        assert!(swap_in(&target, &missing, true).is_err());

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "old");
        assert!(!temp.path().join(".fxp.old").exists());
    }

    #[test]
    fn swap_with_move_aside_keeps_the_previous_binary() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("fxp");
        std::fs::write(&target, "old").unwrap();
        let staged = temp.path().join(".fxp.new");
        std::fs::write(&staged, "new").unwrap();

        swap_in(&target, &staged, true).unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "new");
        assert_eq!(
            std::fs::read_to_string(temp.path().join(".fxp.old")).unwrap(),
            "old"
        );
        assert!(!staged.exists());
    }
}
