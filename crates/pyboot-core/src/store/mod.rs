//! Configuration-store scanning.
//!
//! Each [`ScanTarget`] names one scope/view of the store. Under the root key
//! every child is a version tag whose `InstallPath` subkey holds the install
//! directory as its default value. Keys are released when their handle drops,
//! so early skips never leak.

use std::io;

use indexmap::IndexMap;
use pyboot_domain::{index_by_source, VersionedInstallRecord};
use serde::Serialize;
use tracing::debug;

#[cfg(test)]
pub(crate) mod memory;
#[cfg(not(windows))]
mod unsupported;
#[cfg(windows)]
mod windows;

#[cfg(not(windows))]
pub(crate) use unsupported::SystemStore;
#[cfg(windows)]
pub(crate) use windows::SystemStore;

const INSTALL_PATH_KEY: &str = "InstallPath";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreScope {
    CurrentUser,
    LocalMachine,
}

impl StoreScope {
    pub fn label(self) -> &'static str {
        match self {
            Self::CurrentUser => "HKCU",
            Self::LocalMachine => "HKLM",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreView {
    Default,
    Registry32,
    Registry64,
}

impl StoreView {
    pub fn bits(self) -> u32 {
        match self {
            Self::Default => usize::BITS,
            Self::Registry32 => 32,
            Self::Registry64 => 64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanTarget {
    pub scope: StoreScope,
    pub view: StoreView,
    /// Source label attached to every record from this target.
    pub label: String,
}

impl ScanTarget {
    pub fn new(scope: StoreScope, view: StoreView, bits: u32) -> Self {
        Self {
            scope,
            view,
            label: format!("{}-{bits}", scope.label()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubkeyInfo {
    pub count: u32,
    pub max_name_len: u32,
}

/// An open store key. Dropping it releases the underlying handle.
pub trait StoreKey: Sized {
    fn subkey_info(&self) -> io::Result<SubkeyInfo>;
    fn subkey_name(&self, index: u32) -> io::Result<String>;
    fn open_subkey(&self, path: &str) -> io::Result<Self>;
    fn default_string(&self) -> io::Result<String>;
}

pub trait ConfigStore {
    type Key: StoreKey;

    fn open_root(&self, target: &ScanTarget, path: &str) -> io::Result<Self::Key>;
}

/// Object-safe view over a [`ConfigStore`].
pub trait InstallRegistry: Send + Sync {
    fn scan(&self, root: &str, target: &ScanTarget) -> Vec<VersionedInstallRecord>;
}

impl<S> InstallRegistry for S
where
    S: ConfigStore + Send + Sync,
{
    fn scan(&self, root: &str, target: &ScanTarget) -> Vec<VersionedInstallRecord> {
        scan_target(self, root, target)
    }
}

/// Scans every target and keys the records by version and source label.
pub fn scan_store(
    registry: &dyn InstallRegistry,
    root: &str,
    targets: &[ScanTarget],
) -> IndexMap<String, VersionedInstallRecord> {
    index_by_source(targets.iter().flat_map(|target| registry.scan(root, target)))
}

pub(crate) fn scan_target<S>(
    store: &S,
    root: &str,
    target: &ScanTarget,
) -> Vec<VersionedInstallRecord>
where
    S: ConfigStore + ?Sized,
{
    let root_key = match store.open_root(target, root) {
        Ok(key) => key,
        Err(err) => {
            debug!(source = %target.label, %err, "store root unavailable");
            return Vec::new();
        }
    };
    let info = match root_key.subkey_info() {
        Ok(info) => info,
        Err(err) => {
            debug!(source = %target.label, %err, "store root cannot be queried");
            return Vec::new();
        }
    };
    debug!(
        source = %target.label,
        subkeys = info.count,
        max_name_len = info.max_name_len,
        "enumerating install records"
    );

    let mut versions = Vec::with_capacity(info.count as usize);
    for index in 0..info.count {
        match root_key.subkey_name(index) {
            Ok(name) => versions.push(name),
            Err(err) => debug!(source = %target.label, index, %err, "skipping unreadable subkey"),
        }
    }
    versions.sort();

    versions
        .into_iter()
        .filter_map(|version| read_install_record(&root_key, version, target))
        .collect()
}

fn read_install_record<K: StoreKey>(
    root: &K,
    version: String,
    target: &ScanTarget,
) -> Option<VersionedInstallRecord> {
    let path = format!("{version}\\{INSTALL_PATH_KEY}");
    let install_key = match root.open_subkey(&path) {
        Ok(key) => key,
        Err(err) => {
            debug!(source = %target.label, %version, %err, "no InstallPath key");
            return None;
        }
    };
    let directory = match install_key.default_string() {
        Ok(directory) => directory,
        Err(err) => {
            debug!(source = %target.label, %version, %err, "InstallPath value unreadable");
            return None;
        }
    };
    if directory.is_empty() {
        debug!(source = %target.label, %version, "InstallPath value is empty");
        return None;
    }
    debug!(source = %target.label, %version, %directory, "found install record");
    Some(VersionedInstallRecord::new(version, directory, target.label.clone()))
}
