//! Registry of named graph codecs.
//!
//! Handlers are plain trait objects registered explicitly by the caller
//! (typically once, from `main`) rather than through static initializers —
//! this keeps registration order deterministic and avoids any process-wide
//! mutable state.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use crate::Graph;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("no reader registered for format {0:?}")]
    UnknownReadFormat(String),
    #[error("no writer registered for format {0:?}")]
    UnknownWriteFormat(String),
}

/// A reader that can parse a graph out of one or more files rooted at
/// `path` (e.g. a basename shared by PRISM's `.trans`/`.labels` triple).
///
/// `cycle_search` is applied as edges are inserted, not after the fact:
/// with it enabled, an edge that would close a new interactive cycle is
/// dropped and counted rather than added.
pub trait GraphReader {
    fn read(&self, path: &Path, cycle_search: bool) -> Result<Graph, Box<dyn std::error::Error>>;
}

/// A writer that serializes a graph to `path` in a specific format.
pub trait GraphWriter {
    fn write(&self, graph: &Graph, path: &Path) -> Result<(), Box<dyn std::error::Error>>;
}

/// Maps format names (`"bcg"`, `"prism"`, `"ctmdp"`, ...) to the reader or
/// writer that handles them. Owned by the caller, never a global.
#[derive(Default)]
pub struct CodecRegistry {
    readers: HashMap<String, Box<dyn GraphReader>>,
    writers: HashMap<String, Box<dyn GraphWriter>>,
}

impl CodecRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_reader(&mut self, format: impl Into<String>, reader: Box<dyn GraphReader>) {
        self.readers.insert(format.into(), reader);
    }

    pub fn register_writer(&mut self, format: impl Into<String>, writer: Box<dyn GraphWriter>) {
        self.writers.insert(format.into(), writer);
    }

    pub fn read(
        &self,
        format: &str,
        path: &Path,
        cycle_search: bool,
    ) -> Result<Graph, CodecDispatchError> {
        self.readers
            .get(format)
            .ok_or_else(|| CodecDispatchError::Format(FormatError::UnknownReadFormat(format.to_owned())))?
            .read(path, cycle_search)
            .map_err(CodecDispatchError::Codec)
    }

    pub fn write(&self, format: &str, graph: &Graph, path: &Path) -> Result<(), CodecDispatchError> {
        self.writers
            .get(format)
            .ok_or_else(|| CodecDispatchError::Format(FormatError::UnknownWriteFormat(format.to_owned())))?
            .write(graph, path)
            .map_err(CodecDispatchError::Codec)
    }

    pub fn read_formats(&self) -> impl Iterator<Item = &str> {
        self.readers.keys().map(String::as_str)
    }

    pub fn write_formats(&self) -> impl Iterator<Item = &str> {
        self.writers.keys().map(String::as_str)
    }
}

#[derive(Debug, Error)]
pub enum CodecDispatchError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Codec(Box<dyn std::error::Error>),
}
