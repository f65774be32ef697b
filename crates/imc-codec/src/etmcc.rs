//! ETMCC `.tra` writer.
//!
//! ```text
//! STATES <n>
//! TRANSITIONS <m>
//! r 1 2 3.5000000000 M
//! d 2 1 0.0000000000 I
//! ```
//! `r`/`d` mark a rate (Markov) vs. a discrete (interactive) transition;
//! the trailing `M`/`I` repeats the same distinction for readers that key
//! off the last column instead.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use imc_core::{Graph, GraphWriter, StateId};

fn state_number(graph: &Graph, id: StateId) -> u32 {
    graph.state(id).number.unwrap_or(id.as_u32())
}

pub struct EtmccWriter;

impl GraphWriter for EtmccWriter {
    fn write(&self, graph: &Graph, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let total_transitions: usize = graph.state_ids().map(|id| graph.state(id).edges().len()).sum();

        let mut out = BufWriter::new(File::create(path)?);
        writeln!(out, "STATES {}", graph.num_states())?;
        writeln!(out, "TRANSITIONS {total_transitions}")?;

        for id in graph.state_ids() {
            for t in graph.state(id).edges() {
                let label = graph.resolve_label(t.label);
                let (kind_char, rate, kind_word) = match label.rate() {
                    Some(rate) => ('r', rate, 'M'),
                    None => ('d', 0.0, 'I'),
                };
                writeln!(
                    out,
                    "{} {} {} {:.10} {}",
                    kind_char,
                    state_number(graph, id) + 1,
                    state_number(graph, t.target) + 1,
                    rate,
                    kind_word
                )?;
            }
        }

        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod etmcc_tests;
