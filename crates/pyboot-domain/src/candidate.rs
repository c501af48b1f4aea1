use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::version::VersionBand;

/// An install record read from the configuration store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionedInstallRecord {
    pub version: String,
    pub install_dir: String,
    /// Scope/view the record came from; diagnostics only.
    pub source: String,
}

impl VersionedInstallRecord {
    pub fn new(
        version: impl Into<String>,
        install_dir: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            install_dir: install_dir.into(),
            source: source.into(),
        }
    }

    /// Key that keeps records from different scopes/views apart.
    pub fn source_key(&self) -> String {
        format!("{}{}", self.version, self.source)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CandidateOrigin {
    Path {
        index: usize,
    },
    Store {
        version: String,
        band: VersionBand,
        source: String,
    },
}

/// A directory that may hold the interpreter executable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateDirectory {
    pub directory: String,
    pub origin: CandidateOrigin,
}

impl CandidateDirectory {
    pub fn from_path(directory: impl Into<String>, index: usize) -> Self {
        Self {
            directory: directory.into(),
            origin: CandidateOrigin::Path { index },
        }
    }

    pub fn from_store(record: &VersionedInstallRecord, band: VersionBand) -> Self {
        Self {
            directory: record.install_dir.clone(),
            origin: CandidateOrigin::Store {
                version: record.version.clone(),
                band,
                source: record.source.clone(),
            },
        }
    }
}

/// Indexes records by version and source label, in scan order.
pub fn index_by_source(
    records: impl IntoIterator<Item = VersionedInstallRecord>,
) -> IndexMap<String, VersionedInstallRecord> {
    records
        .into_iter()
        .map(|record| (record.source_key(), record))
        .collect()
}

/// Collapses source-keyed records to one record per version tag; the last
/// record scanned for a version wins.
pub fn collapse_by_version(
    records: &IndexMap<String, VersionedInstallRecord>,
) -> IndexMap<String, VersionedInstallRecord> {
    let mut by_version = IndexMap::new();
    for record in records.values() {
        by_version.insert(record.version.clone(), record.clone());
    }
    by_version
}
