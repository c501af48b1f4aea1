use std::io;
use std::path::PathBuf;

pub const DOWNLOAD_URL: &str = "https://www.python.org/downloads/";

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("could not determine the launcher directory: {source}")]
    SelfLocation {
        #[source]
        source: io::Error,
    },
    #[error("environment variable `{var}` {reason}")]
    EnvironmentRead { var: String, reason: String },
    #[error("no supported version of Python found on this system")]
    NoInterpreter { searched: usize },
    #[error("failed to start {}: error {code}: {description}", .program.display())]
    Spawn {
        program: PathBuf,
        code: i32,
        description: String,
    },
}

impl LaunchError {
    pub(crate) fn spawn(program: PathBuf, err: &io::Error) -> Self {
        Self::Spawn {
            program,
            code: err.raw_os_error().unwrap_or(-1),
            description: describe_io_error(err),
        }
    }

    /// Process exit code reported for this failure.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::EnvironmentRead { .. } => 1,
            Self::NoInterpreter { .. } => 2,
            Self::SelfLocation { .. } => 3,
            Self::Spawn { .. } => 4,
        }
    }

    /// Remediation shown under the error line.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::SelfLocation { .. } => {
                Some("Try running the companion script with Python directly.".to_string())
            }
            Self::EnvironmentRead { .. } => {
                Some("Are you running on the platform this launcher was built for?".to_string())
            }
            Self::NoInterpreter { .. } => Some(format!("Download Python at: {DOWNLOAD_URL}")),
            Self::Spawn { .. } => None,
        }
    }

    #[must_use]
    pub fn code_name(&self) -> &'static str {
        match self {
            Self::SelfLocation { .. } => "self_location",
            Self::EnvironmentRead { .. } => "environment_read",
            Self::NoInterpreter { .. } => "no_interpreter",
            Self::Spawn { .. } => "spawn_failed",
        }
    }
}

/// OS description without the trailing `(os error N)` std appends.
fn describe_io_error(err: &io::Error) -> String {
    let text = err.to_string();
    match text.rfind(" (os error ") {
        Some(index) => text[..index].to_string(),
        None => text,
    }
}
