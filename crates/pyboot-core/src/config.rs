use std::collections::HashMap;
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use pyboot_domain::PATH_DELIMITER;

/// Registry path holding one child key per installed interpreter version.
pub const STORE_ROOT: &str = r"Software\Python\PythonCore";
pub const DEFAULT_SCRIPT: &str = "src/main.py";
const DEFAULT_PATH_VAR: &str = "PATH";
const DEFAULT_EXECUTABLE: &str = if cfg!(windows) {
    "python.exe"
} else {
    "python"
};

#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: HashMap<String, OsString>,
}

impl EnvSnapshot {
    pub fn capture() -> Self {
        Self {
            vars: env::vars_os()
                .map(|(key, value)| (normalize_key(&key.to_string_lossy()), value))
                .collect(),
        }
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<OsString>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(key, value)| (normalize_key(&Into::<String>::into(key)), value.into()))
                .collect(),
        }
    }

    pub(crate) fn flag_is_enabled(&self, key: &str) -> bool {
        matches!(self.var(key), Some("1" | "true"))
    }

    pub(crate) fn var(&self, key: &str) -> Option<&str> {
        self.var_os(key).and_then(OsStr::to_str)
    }

    pub(crate) fn var_os(&self, key: &str) -> Option<&OsStr> {
        self.vars.get(&normalize_key(key)).map(OsString::as_os_str)
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(&normalize_key(key))
    }
}

/// Windows variable names are case-insensitive (`Path` and `PATH` agree).
fn normalize_key(key: &str) -> String {
    if cfg!(windows) {
        key.to_ascii_uppercase()
    } else {
        key.to_string()
    }
}

/// What to do when the `PATH` variable is absent or unreadable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PathPolicy {
    /// Warn and continue with store candidates only.
    #[default]
    Permissive,
    /// Abort with the environment-read exit code.
    Strict,
}

#[derive(Debug, Clone)]
pub struct LaunchConfig {
    pub path_var: String,
    pub path_delimiter: char,
    pub executable: String,
    pub script: PathBuf,
    pub store_root: String,
    pub path_policy: PathPolicy,
    pub home_override: Option<PathBuf>,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            path_var: DEFAULT_PATH_VAR.to_string(),
            path_delimiter: PATH_DELIMITER,
            executable: DEFAULT_EXECUTABLE.to_string(),
            script: PathBuf::from(DEFAULT_SCRIPT),
            store_root: STORE_ROOT.to_string(),
            path_policy: PathPolicy::Permissive,
            home_override: None,
        }
    }
}

impl LaunchConfig {
    /// Reads `PYBOOT_*` overrides from the snapshot on top of the defaults.
    pub fn from_snapshot(snapshot: &EnvSnapshot) -> Self {
        let defaults = Self::default();
        Self {
            path_var: snapshot
                .var("PYBOOT_PATH_VAR")
                .filter(|value| !value.is_empty())
                .map_or(defaults.path_var, ToOwned::to_owned),
            executable: snapshot
                .var("PYBOOT_EXECUTABLE")
                .filter(|value| !value.is_empty())
                .map_or(defaults.executable, ToOwned::to_owned),
            script: snapshot
                .var_os("PYBOOT_SCRIPT")
                .filter(|value| !value.is_empty())
                .map_or(defaults.script, PathBuf::from),
            path_policy: if snapshot.flag_is_enabled("PYBOOT_STRICT_PATH") {
                PathPolicy::Strict
            } else {
                PathPolicy::Permissive
            },
            home_override: snapshot
                .var_os("PYBOOT_HOME")
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
            ..defaults
        }
    }

    #[must_use]
    pub fn with_executable(mut self, executable: impl Into<String>) -> Self {
        self.executable = executable.into();
        self
    }

    #[must_use]
    pub fn with_script(mut self, script: impl Into<PathBuf>) -> Self {
        self.script = script.into();
        self
    }

    #[must_use]
    pub fn with_path_policy(mut self, policy: PathPolicy) -> Self {
        self.path_policy = policy;
        self
    }
}
