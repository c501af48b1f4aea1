use std::io;

use winreg::enums::{
    HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE, KEY_READ, KEY_WOW64_32KEY, KEY_WOW64_64KEY,
};
use winreg::RegKey;

use super::{ConfigStore, ScanTarget, StoreKey, StoreScope, StoreView, SubkeyInfo};

/// Reads the Windows registry. View flags are carried to every subkey opened
/// below the root so the whole walk stays in one view.
pub(crate) struct SystemStore;

pub(crate) struct RegistryKey {
    key: RegKey,
    access: u32,
}

fn access_for(view: StoreView) -> u32 {
    match view {
        StoreView::Default => KEY_READ,
        StoreView::Registry32 => KEY_READ | KEY_WOW64_32KEY,
        StoreView::Registry64 => KEY_READ | KEY_WOW64_64KEY,
    }
}

impl StoreKey for RegistryKey {
    fn subkey_info(&self) -> io::Result<SubkeyInfo> {
        let info = self.key.query_info()?;
        Ok(SubkeyInfo {
            count: info.sub_keys,
            max_name_len: info.max_sub_key_len,
        })
    }

    fn subkey_name(&self, index: u32) -> io::Result<String> {
        self.key
            .enum_keys()
            .nth(index as usize)
            .unwrap_or_else(|| {
                Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no subkey at index {index}"),
                ))
            })
    }

    fn open_subkey(&self, path: &str) -> io::Result<Self> {
        Ok(Self {
            key: self.key.open_subkey_with_flags(path, self.access)?,
            access: self.access,
        })
    }

    fn default_string(&self) -> io::Result<String> {
        self.key.get_value("")
    }
}

impl ConfigStore for SystemStore {
    type Key = RegistryKey;

    fn open_root(&self, target: &ScanTarget, path: &str) -> io::Result<RegistryKey> {
        let hive = match target.scope {
            StoreScope::CurrentUser => RegKey::predef(HKEY_CURRENT_USER),
            StoreScope::LocalMachine => RegKey::predef(HKEY_LOCAL_MACHINE),
        };
        let access = access_for(target.view);
        Ok(RegistryKey {
            key: hive.open_subkey_with_flags(path, access)?,
            access,
        })
    }
}
