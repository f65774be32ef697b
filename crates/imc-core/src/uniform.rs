//! Uniformization, unreachable-state pruning, sequential numbering, and
//! internal-nondeterminism diagnostics.

use crate::graph::Graph;
use crate::label::Label;
use crate::state::{StateId, StateKind, Transition};

const UNIFORM_EPSILON: f64 = 1e-8;

/// Result of [`Graph::check_uniformity`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformityReport {
    pub uniform: bool,
    pub max_outgoing_rate: f64,
    pub min_outgoing_rate: f64,
}

impl Graph {
    /// Compute the max/min total outgoing Markov rate across all `Markov`
    /// states. A graph with no Markov states is trivially uniform.
    pub fn check_uniformity(&self, warn: bool) -> UniformityReport {
        let mut max = f64::MIN;
        let mut min = f64::MAX;
        let mut any = false;

        for id in self.state_ids() {
            if self.state(id).kind != StateKind::Markov {
                continue;
            }
            any = true;
            let sum = self.markov_row_sum(id);
            max = max.max(sum);
            min = min.min(sum);
        }

        if !any {
            return UniformityReport {
                uniform: true,
                max_outgoing_rate: 0.0,
                min_outgoing_rate: 0.0,
            };
        }

        let uniform = max <= UNIFORM_EPSILON || (max - min) / max <= UNIFORM_EPSILON;
        if !uniform && warn {
            tracing::warn!(
                max_outgoing_rate = max,
                min_outgoing_rate = min,
                "graph is not uniform"
            );
        }

        UniformityReport {
            uniform,
            max_outgoing_rate: max,
            min_outgoing_rate: min,
        }
    }

    /// Add self-loop transitions to every Markov state whose row sum falls
    /// short of `target_rate`, so all Markov states share the same total
    /// outgoing rate.
    pub fn uniformize_to(&mut self, target_rate: f64) {
        let ids: Vec<StateId> = self
            .state_ids()
            .filter(|id| self.state(*id).kind == StateKind::Markov)
            .collect();

        for id in ids {
            let sum = self.markov_row_sum(id);
            let threshold = target_rate * UNIFORM_EPSILON;
            if sum < target_rate - threshold {
                let label = self.intern_label(Label::Markov {
                    rate: target_rate - sum,
                    prefix: None,
                });
                self.add_edge(id, Transition::new(id, label));
            } else if sum > target_rate + threshold {
                tracing::warn!(
                    state = id.as_u32(),
                    row_sum = sum,
                    target_rate,
                    "state outgoing rate exceeds uniformization target"
                );
            }
        }
    }

    /// Discover the current maximum outgoing Markov rate and uniformize to
    /// it.
    pub fn uniformize(&mut self) {
        let report = self.check_uniformity(false);
        self.uniformize_to(report.max_outgoing_rate);
    }

    /// Remove every state not reachable from the initial state. Returns the
    /// number of states removed.
    pub fn delete_unreachable(&mut self) -> usize {
        let initial = self.initial_state();
        let mut visited = vec![false; self.num_states()];
        let mut queue = std::collections::VecDeque::new();
        visited[initial.index()] = true;
        queue.push_back(initial);
        while let Some(node) = queue.pop_front() {
            for t in self.state(node).edges().to_vec() {
                if !visited[t.target.index()] {
                    visited[t.target.index()] = true;
                    queue.push_back(t.target);
                }
            }
        }

        let before = self.num_states();
        self.retain_states(|id| visited[id.index()]);
        let removed = before - self.num_states();
        if removed > 0 {
            tracing::debug!(removed, "pruned unreachable states");
        }
        removed
    }

    /// Assign sequential numbers: the initial state gets 0, then non-Markov
    /// non-initial states, then Markov non-initial states.
    pub fn number_states(&mut self) {
        let initial = self.initial_state();
        self.state_mut(initial).number = Some(0);
        let mut next = 1u32;

        for id in self.state_ids() {
            if id == initial || self.state(id).kind == StateKind::Markov {
                continue;
            }
            self.state_mut(id).number = Some(next);
            next += 1;
        }
        for id in self.state_ids() {
            if id == initial || self.state(id).kind != StateKind::Markov {
                continue;
            }
            self.state_mut(id).number = Some(next);
            next += 1;
        }

        if next as usize != self.num_states() {
            tracing::warn!(
                assigned = next,
                total = self.num_states(),
                "numbering did not cover every state; initial state handle may be invalid"
            );
        }
    }

    /// Rearrange the state arena so position `i` holds the state numbered
    /// `i`. Must be called after `number_states`.
    pub fn sort_states_by_nr(&mut self) {
        let mut order: Vec<StateId> = self.state_ids().collect();
        order.sort_by_key(|id| match self.state(*id).number {
            Some(n) => n,
            None => {
                tracing::warn!(state = id.as_u32(), "state has no assigned number");
                u32::MAX
            }
        });

        let mut remap = vec![StateId::from_raw(0); self.num_states()];
        for (new_idx, old_id) in order.iter().enumerate() {
            remap[old_id.index()] = StateId::from_raw(new_idx as u32);
        }

        self.reindex_to(&order, &remap);
    }

    /// Run `number_states` then `sort_states_by_nr`, marking the graph
    /// ready for export.
    pub fn prepare_for_export(&mut self) {
        if self.ready_for_export {
            return;
        }
        self.number_states();
        self.sort_states_by_nr();
        self.ready_for_export = true;
    }

    /// `true` iff some non-Markov state has two outgoing transitions
    /// sharing the same label.
    pub fn has_internal_nondeterminism(&self) -> bool {
        for id in self.state_ids() {
            if self.state(id).kind == StateKind::Markov {
                continue;
            }
            let edges = self.state(id).edges();
            for i in 0..edges.len() {
                for j in (i + 1)..edges.len() {
                    if edges[i].label == edges[j].label {
                        return true;
                    }
                }
            }
        }
        false
    }
}
