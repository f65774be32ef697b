//! States and transitions.
//!
//! States live in the `Graph`'s arena and are addressed by `StateId`, never
//! by owning pointer. A `Transition` is an edge owned inline by its source
//! state's edge list.

use crate::interner::LabelId;

/// A handle into a `Graph`'s state arena.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct StateId(u32);

impl StateId {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Classification of a state by the kind of edges leaving it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum StateKind {
    /// No outgoing edges yet (or ever — a terminal state).
    #[default]
    NotDec,
    Markov,
    Interactive,
    Hybrid,
}

/// One outgoing edge.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Transition {
    pub target: StateId,
    pub label: LabelId,
}

impl Transition {
    pub fn new(target: StateId, label: LabelId) -> Self {
        Self { target, label }
    }
}

/// A state in the graph.
#[derive(Clone, Debug, Default)]
pub struct State {
    pub(crate) edges: Vec<Transition>,
    pub kind: StateKind,
    pub mark: bool,
    pub number: Option<u32>,
    pub interactive_pred: Option<StateId>,
    pub(crate) markov_succ_finished: bool,
}

impl State {
    pub fn edges(&self) -> &[Transition] {
        &self.edges
    }
}
