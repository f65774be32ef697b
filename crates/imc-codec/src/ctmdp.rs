//! CTMDP and CTMDPI text writers.
//!
//! Both number states 1-based using `State::number` when the graph has
//! been through `prepare_for_export` (falling back to arena order
//! otherwise), and declare the set of distinct interactive action names
//! up front.
//!
//! `CtmdpWriter` emits one line per `(source, action)` pair, dropping
//! (and counting) extra edges that share a source and action beyond the
//! first. `CtmdpiWriter` instead groups them into a block with one `*`
//! line per surviving target, each carrying a uniform branching
//! probability.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use imc_core::{Graph, GraphWriter, StateId, StateKind};

use crate::error::CodecError;

fn state_number(graph: &Graph, id: StateId) -> u32 {
    graph.state(id).number.unwrap_or(id.as_u32())
}

fn declaration_block(actions: &[String]) -> String {
    let mut out = String::from("#DECLARATION\n");
    for a in actions {
        out.push_str(a);
        out.push('\n');
    }
    out.push_str("#END\n");
    out
}

/// Group `state`'s outgoing interactive edges by action text, in first-seen
/// order. Returns `(action_name, target_state_numbers)` pairs.
fn group_by_action(graph: &Graph, state: StateId) -> Vec<(String, Vec<u32>)> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: BTreeMap<String, Vec<u32>> = BTreeMap::new();
    for t in graph.state(state).edges() {
        let label = graph.resolve_label(t.label);
        let name = label.canonical();
        if !groups.contains_key(&name) {
            order.push(name.clone());
        }
        groups.entry(name).or_default().push(state_number(graph, t.target));
    }
    order.into_iter().map(|name| (name.clone(), groups.remove(&name).unwrap())).collect()
}

fn distinct_actions(graph: &Graph) -> Vec<String> {
    let mut seen = std::collections::BTreeSet::new();
    for id in graph.state_ids() {
        if graph.state(id).kind != StateKind::Interactive {
            continue;
        }
        for t in graph.state(id).edges() {
            seen.insert(graph.resolve_label(t.label).canonical());
        }
    }
    seen.into_iter().collect()
}

pub struct CtmdpWriter;

impl GraphWriter for CtmdpWriter {
    fn write(&self, graph: &Graph, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let actions = distinct_actions(graph);
        let n_interactive = graph
            .state_ids()
            .filter(|id| graph.state(*id).kind == StateKind::Interactive)
            .count();

        let mut out = BufWriter::new(File::create(path)?);
        writeln!(out, "STATES {n_interactive}")?;
        write!(out, "{}", declaration_block(&actions))?;

        let mut dropped = 0usize;
        for id in graph.state_ids() {
            if graph.state(id).kind != StateKind::Interactive {
                continue;
            }
            for (action, targets) in group_by_action(graph, id) {
                dropped += targets.len().saturating_sub(1);
                let Some(&first) = targets.first() else {
                    continue;
                };
                writeln!(
                    out,
                    "{} {} {} {:.10}",
                    state_number(graph, id) + 1,
                    first + 1,
                    action,
                    1.0
                )?;
            }
        }
        if dropped > 0 {
            tracing::warn!(dropped, "CTMDP writer dropped duplicate action targets");
        }

        out.flush().map_err(CodecError::from)?;
        Ok(())
    }
}

pub struct CtmdpiWriter;

impl GraphWriter for CtmdpiWriter {
    fn write(&self, graph: &Graph, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let actions = distinct_actions(graph);
        let n_interactive = graph
            .state_ids()
            .filter(|id| graph.state(*id).kind == StateKind::Interactive)
            .count();

        let mut out = BufWriter::new(File::create(path)?);
        writeln!(out, "STATES {n_interactive}")?;
        write!(out, "{}", declaration_block(&actions))?;

        for id in graph.state_ids() {
            if graph.state(id).kind != StateKind::Interactive {
                continue;
            }
            for (action, targets) in group_by_action(graph, id) {
                writeln!(out, "{} {}", state_number(graph, id) + 1, action)?;
                let prob = 1.0 / targets.len() as f64;
                for target in targets {
                    writeln!(out, "* {} {prob:.10}", target + 1)?;
                }
            }
        }

        out.flush().map_err(CodecError::from)?;
        Ok(())
    }
}
