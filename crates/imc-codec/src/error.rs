//! Shared error type for every format module in this crate.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("{path}:{line}: {message}")]
    Parse {
        path: String,
        line: usize,
        message: String,
    },

    #[error("unexpected end of file in {0}")]
    UnexpectedEof(String),

    #[error("bad magic number in {path}: expected {expected:?}, found {found:?}")]
    BadMagic {
        path: String,
        expected: [u8; 4],
        found: [u8; 4],
    },

    #[error("unsupported format version {0} in {1}")]
    UnsupportedVersion(u32, String),

    #[error("size mismatch in {path}: header declares {declared}, file has {actual}")]
    SizeMismatch {
        path: String,
        declared: usize,
        actual: usize,
    },

    #[error(transparent)]
    Label(#[from] imc_core::LabelParseError),
}
