//! FSM Designer REPL.
//!
//! Reads `;`-terminated statements from stdin (a statement may span several
//! lines), runs each through a [`Session`] and prints its output. Input
//! that is not valid UTF-8 is decoded lossily and never ends the session.
//! Diagnostics go to stderr through `tracing`; stdout carries only session
//! output.

use anyhow::{Context, Result};
use clap::Parser;
use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use fsm_designer::command::{decode_line, StatementBuffer};
use fsm_designer::config::DesignerConfig;
use fsm_designer::session::{Outcome, Session};

#[derive(Parser)]
#[command(name = "fsm-designer")]
#[command(about = "Interactively design and run deterministic finite automata")]
#[command(version)]
struct Cli {
    /// Config file (default: $FSM_DESIGNER_CONFIG or ~/.fsm-designer/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Command script to replay before reading from stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Skip the startup banner
    #[arg(long, short)]
    quiet: bool,
}

fn init_tracing(default_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn print_outcome(stdout: &mut impl Write, outcome: &Outcome) -> Result<()> {
    for line in &outcome.lines {
        writeln!(stdout, "{line}")?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, config_warning) = match DesignerConfig::load(cli.config.as_deref()) {
        Ok(config) => (config, None),
        Err(err) => (DesignerConfig::default(), Some(err)),
    };
    init_tracing(&config.log_level);
    if let Some(err) = config_warning {
        tracing::warn!("{err}; using defaults");
    }

    let mut session = Session::new(config);
    let mut stdout = io::stdout().lock();

    if let Some(path) = session.config().default_transcript.clone() {
        if let Err(err) = session.transcript_mut().start(&path) {
            tracing::warn!("{err}");
        }
    }

    if session.config().banner && !cli.quiet {
        writeln!(
            stdout,
            "FSM DESIGNER {} {}",
            env!("CARGO_PKG_VERSION"),
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;
    }

    if let Some(script) = &cli.script {
        let outcome = session.replay_script(script);
        print_outcome(&mut stdout, &outcome)?;
    }

    let prompt = session.config().prompt.clone();
    let mut buffer = StatementBuffer::new();
    let mut stdin = io::stdin().lock();
    let mut raw = Vec::new();

    loop {
        if buffer.is_empty() {
            write!(stdout, "{prompt}")?;
            stdout.flush()?;
        }

        raw.clear();
        let read = stdin.read_until(b'\n', &mut raw).context("failed to read stdin")?;

        let statement = if read == 0 {
            // End of input: run whatever was typed, then stop.
            if let Some(statement) = buffer.finish() {
                let outcome = session.execute(&statement);
                print_outcome(&mut stdout, &outcome)?;
            }
            break;
        } else {
            let line = decode_line(&raw);
            if let Cow::Owned(_) = line {
                tracing::warn!("input line is not valid UTF-8; undecodable bytes replaced");
            }
            match buffer.push_line(&line) {
                Some(statement) => statement,
                None => continue,
            }
        };

        let outcome = session.execute(&statement);
        print_outcome(&mut stdout, &outcome)?;
        if outcome.exit {
            break;
        }
    }

    if let Err(err) = session.transcript_mut().stop() {
        tracing::warn!("{err}");
    }
    writeln!(stdout, "TERMINATED BY USER")?;
    Ok(())
}
