//! The graph container: owns the state arena and the label interner.

use std::path::Path;

use crate::codec::{CodecDispatchError, CodecRegistry};
use crate::error::LabelParseError;
use crate::interner::{Interner, LabelId};
use crate::label::Label;
use crate::state::{State, StateId, StateKind, Transition};

/// An interactive/Markov transition graph.
///
/// Owns every state inline in a `Vec`-backed arena; transitions reference
/// other states only through `StateId` handles. The label interner is
/// scoped to this graph — two graphs never share one.
#[derive(Debug, Clone)]
pub struct Graph {
    states: Vec<State>,
    interner: Interner,
    initial_state: StateId,
    pub comment: String,
    pub cycle_search: bool,
    pub search_for_absorbing_states: bool,
    pub the_action: String,
    pub ready_for_export: bool,
}

impl Graph {
    /// Build a graph with a single initial state and no edges.
    pub fn new() -> Self {
        let mut states = Vec::new();
        states.push(State::default());
        Self {
            states,
            interner: Interner::new(),
            initial_state: StateId::from_raw(0),
            comment: String::new(),
            cycle_search: true,
            search_for_absorbing_states: false,
            the_action: String::new(),
            ready_for_export: false,
        }
    }

    pub fn new_state(&mut self) -> StateId {
        self.states.push(State::default());
        StateId::from_raw((self.states.len() - 1) as u32)
    }

    pub fn initial_state(&self) -> StateId {
        self.initial_state
    }

    pub fn set_initial_state(&mut self, id: StateId) {
        self.initial_state = id;
    }

    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.index()]
    }

    pub fn state_mut(&mut self, id: StateId) -> &mut State {
        &mut self.states[id.index()]
    }

    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    pub fn state_ids(&self) -> impl Iterator<Item = StateId> + use<> {
        (0..self.states.len() as u32).map(StateId::from_raw)
    }

    pub fn is_marked(&self, id: StateId) -> bool {
        self.state(id).mark
    }

    pub fn set_mark(&mut self, id: StateId, marked: bool) {
        self.state_mut(id).mark = marked;
    }

    pub fn intern_label(&mut self, label: Label) -> LabelId {
        self.interner.intern(label)
    }

    /// Intern raw external text (quoting it first when `quote` is true), the
    /// entry point codecs use for action names read from a file rather than
    /// built from an already-typed `Label`.
    pub fn get_or_intern(&mut self, text: &str, quote: bool) -> Result<LabelId, LabelParseError> {
        self.interner.get_or_intern(text, quote)
    }

    pub fn resolve_label(&self, id: LabelId) -> &Label {
        self.interner.resolve(id)
    }

    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    /// Append a transition to `state`'s edge list without updating its
    /// `kind` — call `determine_state_type` afterward if the caller needs
    /// the type invariant maintained incrementally.
    pub fn add_transition(&mut self, state: StateId, transition: Transition) {
        self.states[state.index()].edges.push(transition);
    }

    /// Update `state`'s `kind` to reflect having just received
    /// `new_trans`.
    pub fn determine_state_type(&mut self, state: StateId, new_trans: Transition) {
        let interactive = self.resolve_label(new_trans.label).is_interactive();
        let s = &mut self.states[state.index()];
        s.kind = match (s.kind, interactive) {
            (StateKind::NotDec, true) => StateKind::Interactive,
            (StateKind::NotDec, false) => StateKind::Markov,
            (StateKind::Markov, true) => StateKind::Hybrid,
            (StateKind::Interactive, false) => StateKind::Hybrid,
            (other, _) => other,
        };
    }

    /// Insert an edge and update its source's `kind` in one step.
    pub fn add_edge(&mut self, source: StateId, transition: Transition) {
        self.add_transition(source, transition);
        self.determine_state_type(source, transition);
    }

    /// Rewrite `state`'s edge list in place, keeping only edges for which
    /// `keep` returns `true`.
    pub fn retain_edges(&mut self, state: StateId, mut keep: impl FnMut(&Transition) -> bool) {
        self.states[state.index()].edges.retain(|t| keep(t));
    }

    pub fn replace_edges(&mut self, state: StateId, edges: Vec<Transition>) {
        self.states[state.index()].edges = edges;
    }

    /// Outgoing Markov row sum for `state` (0 if it has no Markov edges).
    pub fn markov_row_sum(&self, state: StateId) -> f64 {
        self.state(state)
            .edges()
            .iter()
            .filter_map(|t| self.resolve_label(t.label).rate())
            .sum()
    }

    /// Drop every state not present in `keep`, remapping all surviving
    /// `StateId`s (including `initial_state` and `interactive_pred`
    /// back-links) to be contiguous from zero.
    pub fn retain_states(&mut self, keep: impl Fn(StateId) -> bool) {
        let mut remap = vec![None; self.states.len()];
        let mut new_states = Vec::new();
        for old in self.state_ids() {
            if keep(old) {
                remap[old.index()] = Some(StateId::from_raw(new_states.len() as u32));
                new_states.push(self.states[old.index()].clone());
            }
        }

        for s in &mut new_states {
            s.edges.retain(|t| remap[t.target.index()].is_some());
            for t in &mut s.edges {
                t.target = remap[t.target.index()].unwrap();
            }
            s.interactive_pred = s.interactive_pred.and_then(|p| remap[p.index()]);
        }

        self.initial_state = remap[self.initial_state.index()]
            .expect("initial state must survive retain_states");
        self.states = new_states;
    }

    /// Rearrange the arena into `order` (position *i* becomes the state
    /// that used to be `order[i]`), remapping every `StateId` reference
    /// (`initial_state`, edge targets, `interactive_pred`) via `remap`.
    pub(crate) fn reindex_to(&mut self, order: &[StateId], remap: &[StateId]) {
        let mut new_states: Vec<State> = order
            .iter()
            .map(|old| self.states[old.index()].clone())
            .collect();

        for s in &mut new_states {
            for t in &mut s.edges {
                t.target = remap[t.target.index()];
            }
            s.interactive_pred = s.interactive_pred.map(|p| remap[p.index()]);
        }

        self.initial_state = remap[self.initial_state.index()];
        self.states = new_states;
    }

    /// Read a graph from `path` using the reader registered for `format`.
    pub fn read(
        registry: &CodecRegistry,
        format: &str,
        path: &Path,
        cycle_search: bool,
    ) -> Result<Graph, CodecDispatchError> {
        registry.read(format, path, cycle_search)
    }

    /// Write this graph to `path` using the writer registered for `format`.
    pub fn write(
        &self,
        registry: &CodecRegistry,
        format: &str,
        path: &Path,
    ) -> Result<(), CodecDispatchError> {
        registry.write(format, self, path)
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
