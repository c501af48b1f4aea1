#![deny(clippy::all, warnings)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

pub mod candidate;
pub mod path_list;
pub mod rank;
pub mod version;

pub use candidate::{
    collapse_by_version, index_by_source, CandidateDirectory, CandidateOrigin,
    VersionedInstallRecord,
};
pub use path_list::{join_executable, non_empty_entries, split_path_list, PATH_DELIMITER};
pub use rank::{rank_candidates, RankedCandidates};
pub use version::VersionBand;
