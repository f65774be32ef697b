//! Top-level CLI error type: wraps whatever domain error surfaced while
//! reading, transforming, or writing so `main` has one thing to print.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: imc_core::CodecDispatchError,
    },
    #[error("writing {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: imc_core::CodecDispatchError,
    },
    #[error(transparent)]
    Transform(#[from] imc_core::TransformError),
}
