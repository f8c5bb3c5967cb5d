//! Failures that prevent lexing from starting.
//!
//! Defects in the source text are never errors here; they are diagnostics.

use std::io;
use std::path::PathBuf;

/// The source could not be obtained.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("cannot read `{}`: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
