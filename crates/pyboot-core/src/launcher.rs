use std::path::{Path, PathBuf};

use pyboot_domain::{join_executable, CandidateDirectory};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::effects::{FileProbe, ProcessLauncher, SpawnRequest};
use crate::error::LaunchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeOutcome {
    Found,
    Missing,
    Directory,
}

/// One filesystem probe made while looking for the interpreter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeAttempt {
    pub directory: String,
    pub candidate: PathBuf,
    pub outcome: ProbeOutcome,
}

/// Probes candidates in order and stops at the first regular file.
///
/// Directories after the winner are never touched, even if the winner later
/// fails to start.
pub fn probe_candidates(
    candidates: &[CandidateDirectory],
    executable: &str,
    fs: &dyn FileProbe,
) -> (Vec<ProbeAttempt>, Option<PathBuf>) {
    let mut attempts = Vec::new();
    for candidate in candidates {
        let path = join_executable(&candidate.directory, executable);
        let outcome = fs.probe(&path);
        debug!(candidate = %path.display(), ?outcome, "probed interpreter candidate");
        attempts.push(ProbeAttempt {
            directory: candidate.directory.clone(),
            candidate: path.clone(),
            outcome,
        });
        if outcome == ProbeOutcome::Found {
            return (attempts, Some(path));
        }
    }
    (attempts, None)
}

/// Starts `program` with the companion script and returns the child pid.
pub fn spawn_interpreter(
    program: &Path,
    script: &Path,
    working_dir: &Path,
    process: &dyn ProcessLauncher,
) -> Result<u32, LaunchError> {
    let request = SpawnRequest {
        program: program.to_path_buf(),
        script: script.to_path_buf(),
        working_dir: working_dir.to_path_buf(),
    };
    match process.spawn(&request) {
        Ok(pid) => {
            info!(program = %program.display(), pid, "started interpreter");
            Ok(pid)
        }
        Err(err) => Err(LaunchError::spawn(request.program, &err)),
    }
}
