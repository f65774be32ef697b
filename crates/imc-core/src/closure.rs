//! Interactive-closure: collapse chains of interactive transitions down to
//! the Markov (or terminal) successors they ultimately reach, composing
//! labels along the way.
//!
//! Precondition: `state` is `Interactive` or `Hybrid`, and the graph
//! contains no interactive cycle (checked by the caller via
//! `check_interactive_cycle` before closure begins).

use crate::graph::Graph;
use crate::label::Label;
use crate::state::{StateId, StateKind, Transition};

/// Recursion depth above which `transform_imc_to_ctmdp` switches from the
/// recursive closure to the explicit-stack iterative one.
pub const ITERATIVE_DEPTH_HINT: usize = 4096;

impl Graph {
    /// Recursive reference implementation of the closure. Memoized via
    /// `markov_succ_finished`.
    pub fn markov_succs(&mut self, state: StateId, compute_labels: bool) {
        if self.state(state).markov_succ_finished {
            return;
        }
        self.state_mut(state).markov_succ_finished = true;
        self.fold_closure(state, compute_labels, |g, child| {
            g.markov_succs(child, compute_labels)
        });
    }

    /// Explicit-stack variant of [`Graph::markov_succs`] for graphs deep
    /// enough that the recursive form risks overflowing the call stack.
    /// Computes the identical result.
    pub fn markov_succs_iterative(&mut self, root: StateId, compute_labels: bool) {
        // Work items: states whose closure is requested, processed
        // depth-first via an explicit stack so that a child is always
        // finished before its parent folds it in.
        let mut stack = vec![root];
        let mut pending: Vec<StateId> = Vec::new();

        while let Some(s) = stack.pop() {
            if self.state(s).markov_succ_finished {
                continue;
            }
            pending.push(s);
            for e in self.state(s).edges().to_vec() {
                if !self.resolve_label(e.label).is_interactive() {
                    continue;
                }
                let tk = self.state(e.target).kind;
                if matches!(tk, StateKind::Interactive | StateKind::Hybrid)
                    && e.target != s
                    && !self.state(e.target).markov_succ_finished
                {
                    stack.push(e.target);
                }
            }
        }

        // `pending` now holds states in an order where a parent was pushed
        // before (and therefore sits earlier than) any not-yet-finished
        // child discovered while visiting it; folding from the back
        // processes children first.
        for s in pending.into_iter().rev() {
            self.close_one_state(s, compute_labels);
        }
    }

    fn close_one_state(&mut self, state: StateId, compute_labels: bool) {
        if self.state(state).markov_succ_finished {
            return;
        }
        self.state_mut(state).markov_succ_finished = true;
        self.fold_closure(state, compute_labels, |g, child| {
            // Children are closed first by the reverse-post-order walk
            // built in `markov_succs_iterative`.
            debug_assert!(g.state(child).markov_succ_finished);
        });
    }

    /// Shared closure body: rewrite `state`'s edge list to its collapsed
    /// Markov successors. `ensure_child_closed` is given the chance to
    /// recurse (or merely assert) before a child's edges are folded in.
    fn fold_closure(
        &mut self,
        state: StateId,
        compute_labels: bool,
        mut ensure_child_closed: impl FnMut(&mut Graph, StateId),
    ) {
        let edges = self.state(state).edges().to_vec();
        let mut scratch: Vec<Transition> = Vec::new();

        for e in edges {
            let label = self.resolve_label(e.label).clone();
            if !label.is_interactive() {
                // A hybrid state's Markov edges are discarded; its behavior
                // comes from the Markov successors reached through its
                // interactive edges instead.
                continue;
            }

            let target_kind = self.state(e.target).kind;
            if matches!(target_kind, StateKind::Markov | StateKind::NotDec) {
                let new_label = if compute_labels {
                    e.label
                } else {
                    self.intern_label(Label::Interactive("DFS".into()))
                };
                scratch.push(Transition::new(e.target, new_label));
                continue;
            }

            if e.target == state {
                // Interactive self-loop: unreachable under the
                // cycle-freeness precondition; drop defensively.
                continue;
            }

            ensure_child_closed(self, e.target);
            let succ_edges = self.state(e.target).edges().to_vec();
            for e2 in succ_edges {
                if compute_labels {
                    let inner = self.resolve_label(e2.label).clone();
                    let new_label = if inner.is_tau() {
                        e.label
                    } else if label.is_tau() {
                        e2.label
                    } else {
                        self.intern_label(label.prepend(&inner))
                    };
                    scratch.push(Transition::new(e2.target, new_label));
                } else {
                    scratch.push(e2);
                }
            }
        }

        if !self.is_marked(state) && scratch.iter().any(|t| self.is_marked(t.target)) {
            self.set_mark(state, true);
        }

        self.replace_edges(state, scratch);
    }
}

#[cfg(test)]
mod closure_tests;
