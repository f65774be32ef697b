//! Alternating-graph rebuilder: turns a closed IMC into a strictly
//! alternating interactive/Markov CTMDP.

use crate::error::TransformError;
use crate::label::Label;
use crate::state::{StateId, StateKind, Transition};
use crate::Graph;

/// Outcome counters from a transformation pass, surfaced to callers that
/// want to report on what happened without scraping log output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformStats {
    pub hybrid_states_converted: usize,
    pub synthetic_interactive_states: usize,
    pub orphan_interactive_states_pruned: usize,
    pub initial_state_promoted: bool,
}

impl Graph {
    /// Run the full IMC -> CTMDP transformation: closure over every
    /// interactive state, insertion of synthetic interactive predecessors
    /// in front of Markov states with Markov predecessors, pruning of
    /// orphaned interactive states, and promotion of a Markov initial
    /// state.
    ///
    /// Returns an error without mutating further if the graph contains an
    /// undetected interactive cycle and `cycle_search` was left disabled.
    pub fn transform_imc_to_ctmdp(
        &mut self,
        compute_labels: bool,
    ) -> Result<TransformStats, TransformError> {
        if !self.cycle_search && self.check_interactive_cycle(false) {
            return Err(TransformError::UndetectedInteractiveCycle);
        }

        let mut stats = TransformStats::default();

        // Pre-pass: Hybrid states are closed the same way Interactive ones
        // are; their Markov edges get dropped inside the closure itself.
        for id in self.state_ids().collect::<Vec<_>>() {
            if self.state(id).kind == StateKind::Hybrid {
                stats.hybrid_states_converted += 1;
            }
        }

        for id in self.state_ids().collect::<Vec<_>>() {
            if matches!(self.state(id).kind, StateKind::Interactive | StateKind::Hybrid) {
                self.markov_succs(id, compute_labels);
                if self.state(id).kind == StateKind::Hybrid {
                    self.state_mut(id).kind = StateKind::Interactive;
                }
            }
        }

        let mut has_markov_pred = vec![false; self.num_states()];
        let tau = self.intern_label(Label::tau());

        for id in self.state_ids().collect::<Vec<_>>() {
            if self.state(id).kind != StateKind::Markov {
                continue;
            }
            let edges = self.state(id).edges().to_vec();
            let mut rewritten = Vec::with_capacity(edges.len());
            for t in edges {
                if self.state(t.target).kind != StateKind::Markov {
                    has_markov_pred[t.target.index()] = true;
                    rewritten.push(t);
                    continue;
                }
                let synthetic = match self.state(t.target).interactive_pred {
                    Some(u) => u,
                    None => {
                        let u = self.new_state();
                        self.add_edge(u, Transition::new(t.target, tau));
                        self.state_mut(u).kind = StateKind::Interactive;
                        self.state_mut(u).mark = self.state(t.target).mark;
                        self.state_mut(t.target).interactive_pred = Some(u);
                        stats.synthetic_interactive_states += 1;
                        u
                    }
                };
                has_markov_pred.resize(self.num_states(), false);
                has_markov_pred[synthetic.index()] = true;
                rewritten.push(Transition::new(synthetic, t.label));
            }
            self.replace_edges(id, rewritten);
        }
        has_markov_pred.resize(self.num_states(), false);

        let initial = self.initial_state();
        let kinds: Vec<StateKind> = self.state_ids().map(|id| self.state(id).kind).collect();
        let keep = |id: StateId| {
            if id == initial {
                return true;
            }
            match kinds[id.index()] {
                StateKind::Interactive => has_markov_pred[id.index()],
                _ => true,
            }
        };
        let before = self.num_states();
        self.retain_states(keep);
        stats.orphan_interactive_states_pruned = before - self.num_states();

        if self.state(self.initial_state()).kind == StateKind::Markov {
            let old_initial = self.initial_state();
            let u = self.new_state();
            self.add_edge(u, Transition::new(old_initial, tau));
            self.state_mut(u).kind = StateKind::Interactive;
            self.state_mut(u).mark = self.state(old_initial).mark;
            self.set_initial_state(u);
            stats.initial_state_promoted = true;
        }

        debug_assert!(
            self.state_ids()
                .all(|id| self.state(id).kind != StateKind::Hybrid),
            "no state should remain Hybrid after transform"
        );
        debug_assert_eq!(self.state(self.initial_state()).kind, StateKind::Interactive);

        Ok(stats)
    }
}

#[cfg(test)]
mod rebuild_tests;
