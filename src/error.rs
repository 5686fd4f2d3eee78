//! Crate-level error type

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::parser::ParseError;

#[derive(Debug, Error)]
pub enum Error {
    /// The input did not match the grammar
    #[error("parse error at {0}")]
    Parse(#[from] ParseError),

    /// A source file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A result or diagnostic could not be written out
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
