use std::path::PathBuf;

use pyboot_domain::{CandidateDirectory, VersionedInstallRecord};
use serde::Serialize;

use crate::host::HostArchitecture;
use crate::launcher::ProbeAttempt;
use crate::store::ScanTarget;

/// Everything learned during one scan/rank/probe pass.
#[derive(Debug, Clone, Serialize)]
pub struct DiscoveryReport {
    pub host: HostArchitecture,
    pub path_entries: Vec<String>,
    pub scan_targets: Vec<ScanTarget>,
    pub store_records: Vec<VersionedInstallRecord>,
    pub dropped: Vec<VersionedInstallRecord>,
    pub candidates: Vec<CandidateDirectory>,
    pub attempts: Vec<ProbeAttempt>,
    pub chosen: Option<PathBuf>,
    pub warnings: Vec<String>,
}
