//! File and interactive drivers.
//!
//! Both print trees the same way; they differ in what they parse (a module vs. one
//! expression per line) and in how they treat a failure (abort vs. report and continue).

use std::io::{self, BufRead, Write};
use std::path::Path;

use clap::ValueEnum;
use tracing::{debug, info};

use crate::ast::{Module, Syntax};
use crate::error::{Error, Result};
use crate::fmt::ToSource;
use crate::session::Session;
use crate::source::Source;

const LOGO: &str = "
    ) (
   (/ _) tulip
     |/
";

pub const PROMPT: &str = ": ";

/// How parsed trees are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// S-expression dump of the tree
    #[default]
    Dump,
    /// tulip source that parses back to the same tree
    Source,
}

impl OutputFormat {
    pub fn render_syntax(self, syntax: &Syntax) -> String {
        match self {
            OutputFormat::Dump => syntax.to_string(),
            OutputFormat::Source => syntax.to_source(),
        }
    }

    pub fn render_module(self, module: &Module) -> String {
        match self {
            OutputFormat::Dump => module.to_string(),
            OutputFormat::Source => module.to_source(),
        }
    }
}

/// Parse `path` as a module and print it. Returns `Ok(false)` after printing a diagnostic
/// when the file does not parse. Failing to read `path` or to write to `out` is an error.
pub fn run_file<W: Write>(
    session: &mut Session,
    path: &Path,
    format: OutputFormat,
    out: &mut W,
) -> Result<bool> {
    let source = Source::from_file(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "parsing file");

    let written = match session.parse_module(&source) {
        Ok(module) => writeln!(out, "{}", format.render_module(&module)).map(|_| true),
        Err(err) => writeln!(out, "{}", err.report(&source)).map(|_| false),
    };
    written.map_err(Error::Output)
}

/// Read-parse-print loop: one expression per line until the input runs out.
///
/// A line that fails to parse is reported and the loop carries on.
pub fn run_repl<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    out: &mut W,
    format: OutputFormat,
) -> io::Result<()> {
    writeln!(out, "{LOGO}")?;

    let mut line = String::new();
    loop {
        out.write_all(PROMPT.as_bytes())?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("end of input, leaving the prompt");
            break;
        }

        let source = Source::new("<repl>", line.trim_end_matches(['\n', '\r']));
        match session.parse_expression(&source) {
            Ok(syntax) => writeln!(out, "= {}", format.render_syntax(&syntax))?,
            Err(err) => writeln!(out, "{}", err.report(&source))?,
        }
    }

    Ok(())
}
