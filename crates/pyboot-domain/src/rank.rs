use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::candidate::{CandidateDirectory, VersionedInstallRecord};
use crate::path_list::non_empty_entries;
use crate::version::VersionBand;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCandidates {
    pub candidates: Vec<CandidateDirectory>,
    /// Store records below the legacy floor; never probed.
    pub dropped: Vec<VersionedInstallRecord>,
}

/// Orders every candidate directory for probing.
///
/// Non-empty `PATH` entries come first in their original order. Store
/// records follow, grouped by [`VersionBand::PRIORITY`] and sorted by
/// descending version string inside each band. Records below the legacy
/// floor are returned in `dropped` instead.
pub fn rank_candidates(
    path_entries: &[String],
    store: &IndexMap<String, VersionedInstallRecord>,
) -> RankedCandidates {
    let mut candidates: Vec<CandidateDirectory> = non_empty_entries(path_entries)
        .enumerate()
        .map(|(index, directory)| CandidateDirectory::from_path(directory, index))
        .collect();

    let mut banded: Vec<(VersionBand, &VersionedInstallRecord)> = Vec::new();
    let mut dropped = Vec::new();
    for record in store.values() {
        match VersionBand::classify(&record.version) {
            Some(band) => banded.push((band, record)),
            None => {
                debug!(
                    version = %record.version,
                    source = %record.source,
                    "dropping install below the supported floor"
                );
                dropped.push(record.clone());
            }
        }
    }

    for band in VersionBand::PRIORITY {
        let mut members: Vec<&VersionedInstallRecord> = banded
            .iter()
            .filter(|(candidate_band, _)| *candidate_band == band)
            .map(|(_, record)| *record)
            .collect();
        members.sort_by(|left, right| right.version.cmp(&left.version));
        candidates.extend(
            members
                .into_iter()
                .map(|record| CandidateDirectory::from_store(record, band)),
        );
    }

    RankedCandidates {
        candidates,
        dropped,
    }
}
