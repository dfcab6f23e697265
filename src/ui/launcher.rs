//! Launch collaborator
//!
//! The browser never starts the engine itself; it hands a validated path
//! to a [`Launcher`] and records history only when the launcher reports
//! success.

use std::path::{Path, PathBuf};
use std::process::{Child, Command};
use std::thread;
use tracing::{debug, info, warn};

use crate::core::{is_archive_file, is_game_folder, StdFileSystem};

/// Starts the engine on a game path.
pub trait Launcher {
    /// Returns `true` when the engine accepted `path`.
    fn startup_from(&self, path: &Path) -> bool;
}

/// Spawns an external engine executable with the game path as its last argument.
#[derive(Clone, Debug)]
pub struct ProcessLauncher {
    program: PathBuf,
    args: Vec<String>,
}

impl ProcessLauncher {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Extra arguments placed before the game path.
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }
}

impl Launcher for ProcessLauncher {
    fn startup_from(&self, path: &Path) -> bool {
        match Command::new(&self.program).args(&self.args).arg(path).spawn() {
            Ok(child) => {
                info!(program = %self.program.display(), path = %path.display(), pid = child.id(), "engine started");
                reap(child);
                true
            }
            Err(e) => {
                warn!(program = %self.program.display(), path = %path.display(), error = %e, "failed to start engine");
                false
            }
        }
    }
}

/// Waits for the engine on a background thread so it never lingers as a zombie.
fn reap(mut child: Child) {
    let pid = child.id();
    let spawned = thread::Builder::new()
        .name(format!("reap-{pid}"))
        .spawn(move || match child.wait() {
            Ok(status) => debug!(pid, %status, "engine exited"),
            Err(e) => warn!(pid, error = %e, "failed to wait for engine"),
        });

    if let Err(e) = spawned {
        warn!(pid, error = %e, "failed to spawn reaper thread");
    }
}

/// Accepts game folders and archive files without starting anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct DryRunLauncher;

impl Launcher for DryRunLauncher {
    fn startup_from(&self, path: &Path) -> bool {
        if !is_game_folder(&StdFileSystem, path) && !is_archive_file(&StdFileSystem, path) {
            warn!(path = %path.display(), "dry run: not a game path");
            return false;
        }
        info!(path = %path.display(), "dry run: would start engine");
        true
    }
}
