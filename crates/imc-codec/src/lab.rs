//! MRMC `.lab` writer.
//!
//! Marked states are labelled `reach`; when
//! `Graph::search_for_absorbing_states` is set, states that can only ever
//! return to themselves after two hops are additionally labelled
//! `absorbing`. States carrying neither label are omitted.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use imc_core::{Graph, GraphWriter, StateId};

fn state_number(graph: &Graph, id: StateId) -> u32 {
    graph.state(id).number.unwrap_or(id.as_u32())
}

/// `true` iff every two-step path from `id` returns to `id`: for every
/// outgoing edge's target, every one of that target's own targets is
/// `id`.
fn is_absorbing(graph: &Graph, id: StateId) -> bool {
    graph.state(id).edges().iter().all(|t| {
        graph
            .state(t.target)
            .edges()
            .iter()
            .all(|t2| t2.target == id)
    })
}

pub struct LabWriter;

impl GraphWriter for LabWriter {
    fn write(&self, graph: &Graph, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let mut out = BufWriter::new(File::create(path)?);
        writeln!(out, "#DECLARATION")?;
        writeln!(out, "reach")?;
        if graph.search_for_absorbing_states {
            writeln!(out, "absorbing")?;
        }
        writeln!(out, "#END")?;

        for id in graph.state_ids() {
            let mut labels = Vec::new();
            if graph.is_marked(id) {
                labels.push("reach");
            }
            if graph.search_for_absorbing_states && is_absorbing(graph, id) {
                labels.push("absorbing");
            }
            if labels.is_empty() {
                continue;
            }
            writeln!(out, "{} {}", state_number(graph, id) + 1, labels.join(" "))?;
        }

        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod lab_tests;
