#![deny(clippy::all, warnings)]

mod config;
mod discover;
mod effects;
mod error;
mod host;
mod launcher;
mod path_scan;
mod report;
mod store;

pub use crate::config::{EnvSnapshot, LaunchConfig, PathPolicy, DEFAULT_SCRIPT, STORE_ROOT};
pub use crate::discover::{discover, launch, launcher_dir, select_interpreter};
pub use crate::effects::{Effects, FileProbe, ProcessLauncher, SpawnRequest, SystemEffects};
pub use crate::error::LaunchError;
pub use crate::host::{scan_targets, HostArchitecture};
pub use crate::launcher::{probe_candidates, spawn_interpreter, ProbeAttempt, ProbeOutcome};
pub use crate::path_scan::scan_path_variable;
pub use crate::report::DiscoveryReport;
pub use crate::store::{
    scan_store, ConfigStore, InstallRegistry, ScanTarget, StoreKey, StoreScope, StoreView,
    SubkeyInfo,
};

pub use pyboot_domain::{CandidateDirectory, CandidateOrigin, VersionBand, VersionedInstallRecord};
