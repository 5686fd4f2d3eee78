//! tulip command line.
//!
//! With a file argument, parses the file as a module and prints its tree. Without one it
//! drops into an interactive prompt that parses one expression per line.

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing::Level;

use tulip::Session;
use tulip::driver::{self, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "tulip", version, about = "Parse tulip source and print its syntax tree")]
struct Args {
    /// Module file to parse; starts the interactive prompt when omitted
    file: Option<PathBuf>,

    /// How to print parsed trees
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Dump)]
    format: OutputFormat,

    /// Log more (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let mut session = Session::new();

    if let Some(path) = args.file {
        let mut stdout = io::stdout().lock();
        let parsed = driver::run_file(&mut session, &path, args.format, &mut stdout)
            .with_context(|| format!("failed to process {}", path.display()))?;
        return Ok(if parsed {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let stdin = io::stdin();
    if !stdin.is_terminal() {
        unimplemented!("reading a program from non-interactive standard input");
    }

    driver::run_repl(&mut session, stdin.lock(), &mut io::stdout().lock(), args.format)
        .context("interactive session failed")?;
    Ok(ExitCode::SUCCESS)
}
