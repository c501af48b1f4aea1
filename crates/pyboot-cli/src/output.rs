use std::path::Path;

use color_eyre::Result;
use pyboot_core::{DiscoveryReport, LaunchError, ProbeOutcome};
use serde_json::{json, Value};

use crate::cli::PybootCli;
use crate::style::Style;

/// How the run ended, once the interpreter was chosen.
pub enum Finish<'a> {
    Started { interpreter: &'a Path, script: &'a Path, pid: u32 },
    DryRun { interpreter: &'a Path, script: &'a Path },
}

/// Progress lines printed before any launch attempt.
pub fn emit_progress(cli: &PybootCli, style: &Style, report: &DiscoveryReport) {
    if cli.json || cli.quiet {
        return;
    }
    for warning in &report.warnings {
        println!("{}", style.warning(warning));
    }
    for record in &report.dropped {
        println!(
            "{}",
            style.warning(&format!(
                "Old version ({}) of Python found at {}; skipping.",
                record.version, record.install_dir
            ))
        );
    }
    if cli.verbose > 0 {
        for attempt in &report.attempts {
            println!(
                "{}",
                style.detail(&format!(
                    "{}: {}",
                    attempt.candidate.display(),
                    probe_label(attempt.outcome)
                ))
            );
        }
    }
    if let Some(chosen) = &report.chosen {
        println!("{}", style.info(&format!("Found Python at {}", chosen.display())));
    }
}

pub fn emit_success(
    cli: &PybootCli,
    style: &Style,
    report: &DiscoveryReport,
    finish: &Finish<'_>,
) -> Result<i32> {
    let (message, pid) = match finish {
        Finish::Started {
            interpreter,
            script,
            pid,
        } => (
            format!(
                "Started {} {} (pid {pid})",
                interpreter.display(),
                script.display()
            ),
            Some(*pid),
        ),
        Finish::DryRun {
            interpreter,
            script,
        } => (
            format!(
                "Would start {} {}",
                interpreter.display(),
                script.display()
            ),
            None,
        ),
    };
    if cli.json {
        let payload = json!({
            "status": "ok",
            "exit_code": 0,
            "message": message,
            "pid": pid,
            "report": report,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else if !cli.quiet {
        println!("{}", style.success(&message));
    }
    Ok(0)
}

pub fn emit_failure(
    cli: &PybootCli,
    style: &Style,
    report: Option<&DiscoveryReport>,
    err: &LaunchError,
) -> Result<i32> {
    let code = err.exit_code();
    if cli.json {
        let payload = json!({
            "status": "error",
            "exit_code": code,
            "code": err.code_name(),
            "message": err.to_string(),
            "hint": err.hint(),
            "report": report.map_or(Ok(Value::Null), serde_json::to_value)?,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(code);
    }
    println!("{}", style.failure(&capitalize(&err.to_string())));
    if let Some(hint) = err.hint() {
        println!("{}", style.hint(&hint));
    }
    Ok(code)
}

fn probe_label(outcome: ProbeOutcome) -> &'static str {
    match outcome {
        ProbeOutcome::Found => "found",
        ProbeOutcome::Missing => "missing",
        ProbeOutcome::Directory => "is a directory",
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_first_letter_only() {
        assert_eq!(
            capitalize("no supported version of Python"),
            "No supported version of Python"
        );
        assert_eq!(capitalize(""), "");
    }
}
