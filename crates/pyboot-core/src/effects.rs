use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::launcher::ProbeOutcome;
use crate::store::{InstallRegistry, SystemStore};

/// Fully resolved interpreter invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnRequest {
    pub program: PathBuf,
    pub script: PathBuf,
    pub working_dir: PathBuf,
}

pub trait FileProbe: Send + Sync {
    fn probe(&self, path: &Path) -> ProbeOutcome;
}

pub trait ProcessLauncher: Send + Sync {
    /// Starts the process without waiting for it and returns its id.
    fn spawn(&self, request: &SpawnRequest) -> io::Result<u32>;
}

pub trait Effects: Send + Sync {
    fn store(&self) -> &dyn InstallRegistry;
    fn fs(&self) -> &dyn FileProbe;
    fn process(&self) -> &dyn ProcessLauncher;
}

pub struct SystemEffects {
    store: SystemStore,
    fs: SystemFileProbe,
    process: SystemProcessLauncher,
}

impl SystemEffects {
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: SystemStore,
            fs: SystemFileProbe,
            process: SystemProcessLauncher,
        }
    }
}

impl Default for SystemEffects {
    fn default() -> Self {
        Self::new()
    }
}

impl Effects for SystemEffects {
    fn store(&self) -> &dyn InstallRegistry {
        &self.store
    }

    fn fs(&self) -> &dyn FileProbe {
        &self.fs
    }

    fn process(&self) -> &dyn ProcessLauncher {
        &self.process
    }
}

struct SystemFileProbe;

impl FileProbe for SystemFileProbe {
    fn probe(&self, path: &Path) -> ProbeOutcome {
        match fs::metadata(path) {
            Ok(metadata) if metadata.is_dir() => ProbeOutcome::Directory,
            Ok(_) => ProbeOutcome::Found,
            Err(_) => ProbeOutcome::Missing,
        }
    }
}

struct SystemProcessLauncher;

impl ProcessLauncher for SystemProcessLauncher {
    // The child outlives the launcher; it is never waited on.
    #[allow(clippy::zombie_processes)]
    fn spawn(&self, request: &SpawnRequest) -> io::Result<u32> {
        let mut command = Command::new(&request.program);
        command
            .arg(&request.script)
            .current_dir(&request.working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        configure_console(&mut command);
        let child = command.spawn()?;
        Ok(child.id())
    }
}

/// Keeps the child on this console and stops the OS from showing its own
/// error dialog when the image fails to load.
fn configure_console(command: &mut Command) {
    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        const CREATE_DEFAULT_ERROR_MODE: u32 = 0x0400_0000;
        command.creation_flags(CREATE_DEFAULT_ERROR_MODE);
    }
    #[cfg(not(windows))]
    {
        let _ = command;
    }
}
