use std::path::PathBuf;

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser};
use pyboot_core::{EnvSnapshot, LaunchConfig, PathPolicy};

pub const PYBOOT_ABOUT: &str =
    "Find an installed Python and hand off to the companion script next to this launcher.";

pub const PYBOOT_AFTER_HELP: &str = concat!(
    "Search order:\n",
    "  1. every directory on PATH, in order\n",
    "  2. registered installs: 2.7-2.x, then 3.x, then 2.6 (newest first)\n\n",
    "Exit codes:\n",
    "  0 started   1 PATH unreadable (--strict-path)   2 no Python found\n",
    "  3 launcher location unknown   4 interpreter failed to start\n\n",
    "With --json the envelope is printed after the interpreter starts and both\n",
    "write to the same stdout; use --json --dry-run when the output is parsed.\n",
);

#[derive(Parser, Debug)]
#[command(author, version, about = PYBOOT_ABOUT, after_help = PYBOOT_AFTER_HELP)]
#[allow(clippy::struct_excessive_bools)]
pub struct PybootCli {
    #[arg(short, long, help = "Suppress progress lines (failures still print)")]
    pub quiet: bool,
    #[arg(short, long, action = ArgAction::Count, help = "Increase logging (-vv reaches trace)")]
    pub verbose: u8,
    #[arg(long, help = "Force trace logging regardless of -v/-q")]
    pub trace: bool,
    #[arg(
        long,
        help = "Emit {status,exit_code,message,report} as JSON on stdout; a started \
                interpreter shares stdout, so add --dry-run for parseable output"
    )]
    pub json: bool,
    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,
    #[arg(long, help = "Search and report without starting the interpreter")]
    pub dry_run: bool,
    #[arg(
        long,
        env = "PYBOOT_NO_PAUSE",
        value_parser = FalseyValueParser::new(),
        help = "Exit immediately on failure instead of waiting for Enter"
    )]
    pub no_pause: bool,
    #[arg(
        long,
        env = "PYBOOT_STRICT_PATH",
        value_parser = FalseyValueParser::new(),
        help = "Fail when PATH is missing instead of searching installed versions only"
    )]
    pub strict_path: bool,
    #[arg(
        long,
        env = "PYBOOT_EXECUTABLE",
        value_name = "NAME",
        help = "Interpreter filename to look for in each candidate directory"
    )]
    pub executable: Option<String>,
    #[arg(
        long,
        env = "PYBOOT_SCRIPT",
        value_name = "PATH",
        help = "Companion script, relative to the launcher directory"
    )]
    pub script: Option<PathBuf>,
}

impl PybootCli {
    pub fn launch_config(&self, env: &EnvSnapshot) -> LaunchConfig {
        let mut config = LaunchConfig::from_snapshot(env);
        if let Some(executable) = &self.executable {
            config = config.with_executable(executable.clone());
        }
        if let Some(script) = &self.script {
            config = config.with_script(script.clone());
        }
        if self.strict_path {
            config = config.with_path_policy(PathPolicy::Strict);
        }
        config
    }

    /// Keeps a double-clicked console window open long enough to read the
    /// failure.
    pub fn pause_on_failure(&self, stdin_is_tty: bool) -> bool {
        !self.no_pause && !self.json && stdin_is_tty
    }
}
