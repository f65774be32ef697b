//! Interactive-cycle detection and general reachability, both as iterative
//! (non-recursive) depth-first / breadth-first work-list scans.

use crate::graph::Graph;
use crate::state::{StateId, StateKind};

impl Graph {
    /// `true` iff the subgraph of interactive edges between non-Markov
    /// states contains a cycle.
    ///
    /// Uses an explicit stack carrying DFS colour scratch state local to
    /// this call; no per-state bits are stored on `State` itself.
    pub fn check_interactive_cycle(&self, warn: bool) -> bool {
        let n = self.num_states();
        let mut finished = vec![false; n];
        let mut on_stack = vec![false; n];

        for start in self.state_ids() {
            if finished[start.index()] {
                continue;
            }
            if self.dfs_has_cycle_from(start, &mut finished, &mut on_stack) {
                if warn {
                    tracing::warn!(state = start.as_u32(), "interactive cycle detected");
                }
                return true;
            }
        }
        false
    }

    fn dfs_has_cycle_from(
        &self,
        start: StateId,
        finished: &mut [bool],
        on_stack: &mut [bool],
    ) -> bool {
        // Explicit-stack DFS; each frame tracks the next edge index to try.
        let mut stack: Vec<(StateId, usize)> = vec![(start, 0)];
        on_stack[start.index()] = true;

        'outer: while let Some(&(node, mut idx)) = stack.last() {
            let eligible = matches!(
                self.state(node).kind,
                StateKind::Interactive | StateKind::Hybrid
            );
            let edges = self.state(node).edges();

            while eligible && idx < edges.len() {
                let t = edges[idx];
                idx += 1;
                if !self.resolve_label(t.label).is_interactive()
                    || self.state(t.target).kind == StateKind::Markov
                {
                    continue;
                }
                stack.last_mut().unwrap().1 = idx;
                if on_stack[t.target.index()] {
                    return true;
                }
                if !finished[t.target.index()] {
                    on_stack[t.target.index()] = true;
                    stack.push((t.target, 0));
                }
                continue 'outer;
            }

            let (done, _) = stack.pop().unwrap();
            on_stack[done.index()] = false;
            finished[done.index()] = true;
        }

        false
    }

    /// `true` iff `to` is reachable from `from` following edges; when
    /// `only_interactive` is set, only interactive edges are followed.
    pub fn reachable(&self, from: StateId, to: StateId, only_interactive: bool) -> bool {
        if from == to {
            return true;
        }
        let mut visited = vec![false; self.num_states()];
        let mut queue = std::collections::VecDeque::new();
        visited[from.index()] = true;
        queue.push_back(from);

        while let Some(node) = queue.pop_front() {
            for t in self.state(node).edges() {
                if only_interactive && !self.resolve_label(t.label).is_interactive() {
                    continue;
                }
                if t.target == to {
                    return true;
                }
                if !visited[t.target.index()] {
                    visited[t.target.index()] = true;
                    queue.push_back(t.target);
                }
            }
        }
        false
    }
}
