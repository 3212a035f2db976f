//! Load-time error type.
//!
//! Dataset loading is the only fatal failure surface in the system:
//! handler-time inputs degrade to empty charts instead of erroring, and
//! settings fall back to defaults. Anything that goes wrong while
//! producing the in-memory table lands here and aborts startup.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dataset has no header row")]
    MissingHeader,

    #[error("dataset header is missing required column {name:?}")]
    MissingColumn { name: &'static str },
}
