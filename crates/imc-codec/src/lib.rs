//! File format readers and writers for the IMC/CTMDP graph engine.
//!
//! Each format module implements [`imc_core::GraphReader`] and/or
//! [`imc_core::GraphWriter`] against `imc_core::Graph`'s public API only —
//! no module here reaches into the core's private arena internals.

pub mod bcg;
pub mod ctmdp;
pub mod error;
pub mod etmcc;
pub mod lab;
pub mod marked;
pub mod prism;
pub mod registry;

pub use error::CodecError;
pub use registry::register_default_codecs;
