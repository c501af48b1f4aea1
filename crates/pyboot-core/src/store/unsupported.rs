use std::io;

use super::{ConfigStore, ScanTarget, StoreKey, SubkeyInfo};

/// The configuration store only exists on Windows; elsewhere every scope
/// fails to open and contributes no records.
pub(crate) struct SystemStore;

pub(crate) enum NoKey {}

impl StoreKey for NoKey {
    fn subkey_info(&self) -> io::Result<SubkeyInfo> {
        match *self {}
    }

    fn subkey_name(&self, _index: u32) -> io::Result<String> {
        match *self {}
    }

    fn open_subkey(&self, _path: &str) -> io::Result<Self> {
        match *self {}
    }

    fn default_string(&self) -> io::Result<String> {
        match *self {}
    }
}

impl ConfigStore for SystemStore {
    type Key = NoKey;

    fn open_root(&self, target: &ScanTarget, _path: &str) -> io::Result<NoKey> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            format!("{} is not available on this platform", target.label),
        ))
    }
}
