use std::io::{self, BufRead, Write};

use atty::Stream;
use clap::Parser;
use color_eyre::Result;
use pyboot_core::{
    discover, launch, launcher_dir, select_interpreter, EnvSnapshot, LaunchConfig,
    SystemEffects,
};
use tracing::debug;

mod cli;
mod output;
mod style;

use cli::PybootCli;
use output::Finish;
use style::Style;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = PybootCli::parse();
    init_tracing(cli.trace, cli.verbose);

    let env = EnvSnapshot::capture();
    let config = cli.launch_config(&env);
    let effects = SystemEffects::new();
    let style = Style::new(cli.no_color, atty::is(Stream::Stdout));

    let code = run(&cli, &config, &env, &effects, &style)?;
    if code == 0 {
        return Ok(());
    }
    if cli.pause_on_failure(atty::is(Stream::Stdin)) {
        acknowledge(&mut io::stdin().lock(), &mut io::stdout());
    }
    std::process::exit(code);
}

fn run(
    cli: &PybootCli,
    config: &LaunchConfig,
    env: &EnvSnapshot,
    effects: &SystemEffects,
    style: &Style,
) -> Result<i32> {
    let report = match discover(config, env, effects) {
        Ok(report) => report,
        Err(err) => return output::emit_failure(cli, style, None, &err),
    };
    output::emit_progress(cli, style, &report);

    let interpreter = match select_interpreter(&report) {
        Ok(path) => path,
        Err(err) => return output::emit_failure(cli, style, Some(&report), &err),
    };
    let home = match launcher_dir(config) {
        Ok(home) => home,
        Err(err) => return output::emit_failure(cli, style, Some(&report), &err),
    };
    let script = home.join(&config.script);

    if cli.dry_run {
        let finish = Finish::DryRun {
            interpreter,
            script: &script,
        };
        return output::emit_success(cli, style, &report, &finish);
    }

    // Flush progress before the child starts writing to the same console.
    io::stdout().flush()?;
    match launch(config, &report, effects) {
        Ok(pid) => {
            let finish = Finish::Started {
                interpreter,
                script: &script,
                pid,
            };
            output::emit_success(cli, style, &report, &finish)
        }
        Err(err) => output::emit_failure(cli, style, Some(&report), &err),
    }
}

fn init_tracing(trace: bool, verbose: u8) {
    let level = if trace {
        "trace"
    } else {
        match verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = format!("pyboot={level},pyboot_core={level},pyboot_domain={level}");
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Pauses before exiting; a broken console never changes the exit code.
fn acknowledge(input: &mut impl BufRead, out: &mut impl Write) {
    if let Err(err) = pause(input, out) {
        debug!(%err, "could not wait for acknowledgement");
    }
}

/// Waits for one line of input so a double-clicked console stays readable.
fn pause(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<()> {
    write!(out, "\nPress Enter to continue...")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}
