use std::env;
use std::io;
use std::path::{Path, PathBuf};

use pyboot_domain::{collapse_by_version, rank_candidates};
use tracing::{debug, info, warn};

use crate::config::{EnvSnapshot, LaunchConfig, PathPolicy};
use crate::effects::Effects;
use crate::error::LaunchError;
use crate::host::{scan_targets, HostArchitecture};
use crate::launcher::{probe_candidates, spawn_interpreter};
use crate::path_scan::scan_path_variable;
use crate::report::DiscoveryReport;
use crate::store::scan_store;

/// Runs the scan, rank and probe steps once.
///
/// Only a missing `PATH` under [`PathPolicy::Strict`] fails here; finding no
/// interpreter is reported through [`DiscoveryReport::chosen`] and turned
/// into an error by [`select_interpreter`].
pub fn discover(
    config: &LaunchConfig,
    env: &EnvSnapshot,
    effects: &dyn Effects,
) -> Result<DiscoveryReport, LaunchError> {
    let mut warnings = Vec::new();
    let path_entries =
        match scan_path_variable(env, &config.path_var, config.path_delimiter) {
            Ok(entries) => entries,
            Err(err) if config.path_policy == PathPolicy::Permissive => {
                warn!(%err, "continuing with installed-version records only");
                warnings.push(format!("{err}; searching installed versions only"));
                Vec::new()
            }
            Err(err) => return Err(err),
        };

    let host = HostArchitecture::detect(env);
    let targets = scan_targets(host);
    let indexed = scan_store(effects.store(), &config.store_root, &targets);
    let ranked = rank_candidates(&path_entries, &collapse_by_version(&indexed));
    let (attempts, chosen) =
        probe_candidates(&ranked.candidates, &config.executable, effects.fs());
    match &chosen {
        Some(path) => info!(interpreter = %path.display(), "selected interpreter"),
        None => debug!(
            candidates = ranked.candidates.len(),
            "no candidate holds the interpreter"
        ),
    }

    Ok(DiscoveryReport {
        host,
        path_entries,
        scan_targets: targets,
        store_records: indexed.into_values().collect(),
        dropped: ranked.dropped,
        candidates: ranked.candidates,
        attempts,
        chosen,
        warnings,
    })
}

pub fn select_interpreter(report: &DiscoveryReport) -> Result<&Path, LaunchError> {
    report
        .chosen
        .as_deref()
        .ok_or(LaunchError::NoInterpreter {
            searched: report.candidates.len(),
        })
}

/// Directory holding the launcher binary, unless `PYBOOT_HOME` overrides it.
pub fn launcher_dir(config: &LaunchConfig) -> Result<PathBuf, LaunchError> {
    if let Some(home) = &config.home_override {
        return Ok(home.clone());
    }
    let exe = env::current_exe().map_err(|source| LaunchError::SelfLocation { source })?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| LaunchError::SelfLocation {
            source: io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} has no parent directory", exe.display()),
            ),
        })
}

/// Hands off to the chosen interpreter with the companion script, running
/// from the launcher directory. Does not wait for the child.
pub fn launch(
    config: &LaunchConfig,
    report: &DiscoveryReport,
    effects: &dyn Effects,
) -> Result<u32, LaunchError> {
    let program = select_interpreter(report)?;
    let home = launcher_dir(config)?;
    let script = home.join(&config.script);
    spawn_interpreter(program, &script, &home, effects.process())
}
