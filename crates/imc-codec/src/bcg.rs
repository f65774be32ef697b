//! Binary, CADP-style graph container ("BCG"): a compact little-endian
//! format with a fixed header, a comment blob, a concatenated label blob,
//! a list of marked state numbers, and a flat transition table.
//!
//! Layout, in order:
//! `Header` | comment bytes | label offsets (`n_labels + 1` x u32) |
//! label blob bytes | marked state numbers (u32 each) |
//! transitions (`src:u32, label_id:u32, dst:u32` each).

use std::fs;
use std::path::Path;

use imc_core::{Graph, GraphReader, GraphWriter, Label, Transition};

use crate::error::CodecError;

pub const MAGIC: [u8; 4] = *b"IMCB";
pub const VERSION: u32 = 1;

/// Fixed-size binary header, `repr(C)` for a stable on-disk layout.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct Header {
    pub magic: [u8; 4],
    pub version: u32,
    pub n_states: u32,
    pub n_transitions: u32,
    pub n_labels: u32,
    pub initial_state: u32,
    pub comment_len: u32,
    pub label_blob_size: u32,
    pub n_marked: u32,
}

pub const HEADER_SIZE: usize = 4 + 4 * 8;
const _: () = assert!(std::mem::size_of::<Header>() >= HEADER_SIZE);

impl Default for Header {
    fn default() -> Self {
        Self {
            magic: MAGIC,
            version: VERSION,
            n_states: 0,
            n_transitions: 0,
            n_labels: 0,
            initial_state: 0,
            comment_len: 0,
            label_blob_size: 0,
            n_marked: 0,
        }
    }
}

impl Header {
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];
        buf[0..4].copy_from_slice(&self.magic);
        buf[4..8].copy_from_slice(&self.version.to_le_bytes());
        buf[8..12].copy_from_slice(&self.n_states.to_le_bytes());
        buf[12..16].copy_from_slice(&self.n_transitions.to_le_bytes());
        buf[16..20].copy_from_slice(&self.n_labels.to_le_bytes());
        buf[20..24].copy_from_slice(&self.initial_state.to_le_bytes());
        buf[24..28].copy_from_slice(&self.comment_len.to_le_bytes());
        buf[28..32].copy_from_slice(&self.label_blob_size.to_le_bytes());
        buf[32..36].copy_from_slice(&self.n_marked.to_le_bytes());
        buf
    }

    pub fn from_bytes(buf: &[u8], path: &str) -> Result<Self, CodecError> {
        if buf.len() < HEADER_SIZE {
            return Err(CodecError::UnexpectedEof(path.to_owned()));
        }
        let mut magic = [0u8; 4];
        magic.copy_from_slice(&buf[0..4]);
        if magic != MAGIC {
            return Err(CodecError::BadMagic {
                path: path.to_owned(),
                expected: MAGIC,
                found: magic,
            });
        }
        let version = u32::from_le_bytes(buf[4..8].try_into().unwrap());
        if version != VERSION {
            return Err(CodecError::UnsupportedVersion(version, path.to_owned()));
        }
        Ok(Self {
            magic,
            version,
            n_states: u32::from_le_bytes(buf[8..12].try_into().unwrap()),
            n_transitions: u32::from_le_bytes(buf[12..16].try_into().unwrap()),
            n_labels: u32::from_le_bytes(buf[16..20].try_into().unwrap()),
            initial_state: u32::from_le_bytes(buf[20..24].try_into().unwrap()),
            comment_len: u32::from_le_bytes(buf[24..28].try_into().unwrap()),
            label_blob_size: u32::from_le_bytes(buf[28..32].try_into().unwrap()),
            n_marked: u32::from_le_bytes(buf[32..36].try_into().unwrap()),
        })
    }
}

pub struct BcgReader;
pub struct BcgWriter;

impl GraphReader for BcgReader {
    fn read(&self, path: &Path, cycle_search: bool) -> Result<Graph, Box<dyn std::error::Error>> {
        let bytes = fs::read(path)?;
        let path_str = path.display().to_string();
        let header = Header::from_bytes(&bytes, &path_str)?;

        let mut cursor = HEADER_SIZE;
        let comment_end = cursor + header.comment_len as usize;
        if bytes.len() < comment_end {
            return Err(Box::new(CodecError::UnexpectedEof(path_str)));
        }
        let comment = String::from_utf8_lossy(&bytes[cursor..comment_end]).into_owned();
        cursor = comment_end;

        let n_offsets = header.n_labels as usize + 1;
        let offsets_end = cursor + n_offsets * 4;
        if bytes.len() < offsets_end {
            return Err(Box::new(CodecError::UnexpectedEof(path_str)));
        }
        let offsets: Vec<u32> = bytes[cursor..offsets_end]
            .chunks_exact(4)
            .map(|c| u32::from_le_bytes(c.try_into().unwrap()))
            .collect();
        cursor = offsets_end;

        let blob_end = cursor + header.label_blob_size as usize;
        if bytes.len() < blob_end {
            return Err(Box::new(CodecError::UnexpectedEof(path_str)));
        }
        let blob = &bytes[cursor..blob_end];
        cursor = blob_end;

        let mut label_texts = Vec::with_capacity(header.n_labels as usize);
        for w in offsets.windows(2) {
            let text = std::str::from_utf8(&blob[w[0] as usize..w[1] as usize])
                .map_err(|_| CodecError::Parse {
                    path: path_str.clone(),
                    line: 0,
                    message: "label blob is not valid UTF-8".into(),
                })?;
            label_texts.push(text.to_owned());
        }

        let marked_end = cursor + header.n_marked as usize * 4;
        if bytes.len() < marked_end {
            return Err(Box::new(CodecError::UnexpectedEof(path_str)));
        }
        let marked: Vec<u32> = bytes[cursor..marked_end]
            .chunks_exact(4)
            .map(|c| u32::from_le_bytes(c.try_into().unwrap()))
            .collect();
        cursor = marked_end;

        let mut graph = Graph::new();
        graph.cycle_search = cycle_search;
        let mut ids = vec![graph.initial_state()];
        for _ in 1..header.n_states {
            ids.push(graph.new_state());
        }
        graph.set_initial_state(ids[header.initial_state as usize]);
        graph.comment = comment;
        for m in marked {
            graph.set_mark(ids[m as usize], true);
        }

        let mut label_ids = Vec::with_capacity(label_texts.len());
        for text in &label_texts {
            label_ids.push(graph.get_or_intern(text, true)?);
        }

        let trans_end = cursor + header.n_transitions as usize * 12;
        if bytes.len() < trans_end {
            return Err(Box::new(CodecError::UnexpectedEof(path_str)));
        }
        for chunk in bytes[cursor..trans_end].chunks_exact(12) {
            let src = u32::from_le_bytes(chunk[0..4].try_into().unwrap());
            let label_id = u32::from_le_bytes(chunk[4..8].try_into().unwrap());
            let dst = u32::from_le_bytes(chunk[8..12].try_into().unwrap());
            let source = ids[src as usize];
            let target = ids[dst as usize];
            let label = label_ids[label_id as usize];
            if graph.cycle_search
                && graph.resolve_label(label).is_interactive()
                && graph.reachable(target, source, true)
            {
                tracing::debug!(src, dst, "dropped edge that would close an interactive cycle");
                continue;
            }
            graph.add_edge(source, Transition::new(target, label));
        }

        Ok(graph)
    }
}

impl GraphWriter for BcgWriter {
    fn write(&self, graph: &Graph, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let (label_blob, label_offsets) = graph.interner().to_blob();

        let marked: Vec<u32> = graph
            .state_ids()
            .filter(|id| graph.is_marked(*id))
            .map(|id| id.as_u32())
            .collect();

        let override_label = if graph.the_action.is_empty() {
            None
        } else {
            graph
                .interner()
                .iter()
                .find(|(_, l)| matches!(l, Label::Interactive(a) if a == &graph.the_action))
                .map(|(id, _)| id)
        };

        let mut transitions = Vec::new();
        for id in graph.state_ids() {
            let label_for = |t: &Transition| {
                if graph.is_marked(id) {
                    if let Some(over) = override_label {
                        return over;
                    }
                }
                t.label
            };
            for t in graph.state(id).edges() {
                transitions.push((id.as_u32(), label_for(t).as_u32(), t.target.as_u32()));
            }
        }

        let header = Header {
            magic: MAGIC,
            version: VERSION,
            n_states: graph.num_states() as u32,
            n_transitions: transitions.len() as u32,
            n_labels: graph.interner().len() as u32,
            initial_state: graph.initial_state().as_u32(),
            comment_len: graph.comment.len() as u32,
            label_blob_size: label_blob.len() as u32,
            n_marked: marked.len() as u32,
        };

        let mut out = Vec::new();
        out.extend_from_slice(&header.to_bytes());
        out.extend_from_slice(graph.comment.as_bytes());
        for off in &label_offsets {
            out.extend_from_slice(&off.to_le_bytes());
        }
        out.extend_from_slice(&label_blob);
        for m in &marked {
            out.extend_from_slice(&m.to_le_bytes());
        }
        for (src, label, dst) in &transitions {
            out.extend_from_slice(&src.to_le_bytes());
            out.extend_from_slice(&label.to_le_bytes());
            out.extend_from_slice(&dst.to_le_bytes());
        }

        fs::write(path, out)?;
        Ok(())
    }
}

#[cfg(test)]
mod bcg_tests;
