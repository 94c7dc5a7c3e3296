//! Output destinations for generated text

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::infrastructure::{InfraError, InfraResult};
use crate::util::path::expand_path;

/// Where a generator writes: stdout or a file (truncated on open).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `-` selects stdout; anything else is a path with `~`/`$VAR` expansion.
    pub fn parse(arg: &str) -> Self {
        match arg.trim() {
            "-" | "" => Self::Stdout,
            path => Self::File(expand_path(path)),
        }
    }

    pub fn open(&self) -> InfraResult<Box<dyn Write>> {
        debug!("open output: {}", self);
        match self {
            Self::Stdout => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
            Self::File(path) => {
                let file = File::create(path).map_err(|source| InfraError::CreateOutput {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufWriter::new(file)))
            }
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("<stdout>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
