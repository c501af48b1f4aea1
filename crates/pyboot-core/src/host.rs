use serde::Serialize;

use crate::config::EnvSnapshot;
use crate::store::{ScanTarget, StoreScope, StoreView};

/// Set by WOW64 for 32-bit processes on a 64-bit Windows host.
const WOW64_MARKER: &str = "PROCESSOR_ARCHITEW6432";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HostArchitecture {
    /// The process runs under a different architecture than the OS, so the
    /// store exposes separate 32-bit and 64-bit views.
    Dual,
    /// The process matches the OS; only default views exist.
    Matching { bits: u32 },
}

impl HostArchitecture {
    pub fn detect(env: &EnvSnapshot) -> Self {
        Self::from_parts(usize::BITS, env.contains(WOW64_MARKER))
    }

    pub(crate) fn from_parts(pointer_bits: u32, under_wow64: bool) -> Self {
        if under_wow64 {
            Self::Dual
        } else {
            Self::Matching { bits: pointer_bits }
        }
    }
}

/// Store scans to run, in order: user scope before machine scope.
pub fn scan_targets(host: HostArchitecture) -> Vec<ScanTarget> {
    let scopes = [StoreScope::CurrentUser, StoreScope::LocalMachine];
    match host {
        HostArchitecture::Dual => scopes
            .into_iter()
            .flat_map(|scope| {
                [StoreView::Registry64, StoreView::Registry32]
                    .into_iter()
                    .map(move |view| ScanTarget::new(scope, view, view.bits()))
            })
            .collect(),
        HostArchitecture::Matching { bits } => scopes
            .into_iter()
            .map(|scope| ScanTarget::new(scope, StoreView::Default, bits))
            .collect(),
    }
}
