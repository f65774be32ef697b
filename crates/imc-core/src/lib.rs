#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Interactive Markov Chain to CTMDP graph transformation engine.
//!
//! An `imc-core::Graph` owns an arena of states addressed by `StateId`
//! handles and a per-graph label interner; transitions hold handles only,
//! never owning pointers. The transformation pipeline is:
//!
//! 1. `check_interactive_cycle` guards the input against interactive
//!    cycles (codecs consult `reachable` while inserting edges when
//!    `cycle_search` is enabled).
//! 2. `delete_unreachable` prunes states not reachable from the initial
//!    state.
//! 3. `uniformize` equalizes total outgoing Markov rate across Markov
//!    states.
//! 4. `transform_imc_to_ctmdp` closes every interactive state over its
//!    Markov successors and rebuilds a strictly alternating graph.
//! 5. `prepare_for_export` numbers and sorts states for a codec to write.
//!
//! Single-threaded and synchronous throughout: no operation in this crate
//! spawns a thread or awaits a future.

pub mod closure;
pub mod codec;
pub mod colors;
pub mod error;
pub mod graph;
pub mod interner;
pub mod label;
pub mod reachability;
pub mod rebuild;
pub mod state;
pub mod uniform;

pub use codec::{CodecDispatchError, CodecRegistry, FormatError, GraphReader, GraphWriter};
pub use colors::Colors;
pub use error::{LabelParseError, TransformError};
pub use graph::Graph;
pub use interner::{Interner, LabelId};
pub use label::Label;
pub use rebuild::TransformStats;
pub use state::{State, StateId, StateKind, Transition};
pub use uniform::UniformityReport;
