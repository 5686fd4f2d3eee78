//! Source text handed to the parser.
//!
//! A [`Source`] is either an in-memory string (an interactive line, a test fixture) or the
//! full contents of a file. It keeps the text as characters so the parse cursor can seek
//! freely, and it maps character offsets back to line/column pairs for diagnostics.

use std::fs;
use std::io;
use std::path::Path;

/// A line/column position inside a [`Source`]. Lines and columns start at one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone)]
pub struct Source {
    name: String,
    chars: Vec<char>,
    line_starts: Vec<usize>,
}

impl Source {
    pub fn new(name: impl Into<String>, text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let mut line_starts = vec![0];
        for (i, c) in chars.iter().enumerate() {
            if *c == '\n' {
                line_starts.push(i + 1);
            }
        }

        Self {
            name: name.into(),
            chars,
            line_starts,
        }
    }

    /// An anonymous in-memory source.
    pub fn from_string(text: &str) -> Self {
        Self::new("<input>", text)
    }

    /// Reads a whole file into memory.
    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        Ok(Self::new(path.display().to_string(), &text))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Maps a character offset to its line and column.
    ///
    /// Offsets past the end are clamped to the end of the text.
    pub fn location(&self, offset: usize) -> Location {
        let offset = offset.min(self.chars.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(next) => next - 1,
        };

        Location {
            offset,
            line: line + 1,
            column: offset - self.line_starts[line] + 1,
        }
    }

    /// The text of a line (1-based), without its terminator.
    pub fn line_text(&self, line: usize) -> String {
        let Some(&start) = self.line_starts.get(line.wrapping_sub(1)) else {
            return String::new();
        };
        self.chars[start..]
            .iter()
            .take_while(|c| **c != '\n')
            .filter(|c| **c != '\r')
            .collect()
    }
}
