//! `.marked` writer: one 0-based state number per line, for every marked
//! interactive state.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use imc_core::{Graph, GraphWriter, StateId};

fn state_number(graph: &Graph, id: StateId) -> u32 {
    graph.state(id).number.unwrap_or(id.as_u32())
}

pub struct MarkedWriter;

impl GraphWriter for MarkedWriter {
    fn write(&self, graph: &Graph, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let mut out = BufWriter::new(File::create(path)?);
        for id in graph.state_ids() {
            if graph.is_marked(id) {
                writeln!(out, "{}", state_number(graph, id))?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod marked_tests;
