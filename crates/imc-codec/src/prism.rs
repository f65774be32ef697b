//! PRISM triples reader: a `.trans`/`.labels` pair plus an optional rates
//! module (`.prism`/`.sm`/`.nm`/`.pm`) that names certain rates as
//! interactive actions.
//!
//! ```text
//! const double R_ACT = 3.0; // Action "act"
//! ```
//! ```text
//! <nStates> <nTransitions>
//! <src> <dst> <rate>
//! ...
//! ```
//! ```text
//! 0="init" 1="reach"
//! 0:0
//! 3:1
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use imc_core::{Graph, GraphReader, Label, Transition};

use crate::error::CodecError;

const MODULE_EXTENSIONS: &[&str] = &["prism", "sm", "nm", "pm"];

pub struct PrismReader;

impl GraphReader for PrismReader {
    fn read(&self, path: &Path, cycle_search: bool) -> Result<Graph, Box<dyn std::error::Error>> {
        let base = strip_known_extension(path);
        let rate_names = read_rate_names(&base)?;
        let (n_states, triples) = read_trans(&base)?;
        let (label_names, initial_states) = read_labels(&base)?;

        let mut graph = Graph::new();
        graph.cycle_search = cycle_search;
        let mut ids = vec![graph.initial_state()];
        for _ in 1..n_states.max(1) {
            ids.push(graph.new_state());
        }

        if let Some(&first) = initial_states.first() {
            graph.set_initial_state(ids[first]);
        }
        for &s in initial_states.iter().skip(1) {
            tracing::debug!(state = s, "ignoring additional PRISM initial state");
        }
        let _ = label_names;

        for (src, dst, rate) in triples {
            let (label_id, is_action) = match rate_names.get(&rate.to_bits()) {
                Some(name) => (graph.get_or_intern(name, true)?, true),
                None => (
                    graph.intern_label(Label::Markov { rate, prefix: None }),
                    false,
                ),
            };
            let source = ids[src];
            let target = ids[dst];
            if is_action {
                graph.set_mark(source, true);
            }
            if graph.cycle_search
                && graph.resolve_label(label_id).is_interactive()
                && graph.reachable(target, source, true)
            {
                tracing::debug!(src, dst, "dropped edge that would close an interactive cycle");
                continue;
            }
            graph.add_edge(source, Transition::new(target, label_id));
        }

        Ok(graph)
    }
}

fn strip_known_extension(path: &Path) -> PathBuf {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext == "trans" || ext == "labels" || MODULE_EXTENSIONS.contains(&ext) => {
            path.with_extension("")
        }
        _ => path.to_path_buf(),
    }
}

/// `rate.to_bits() -> action name`. Earlier definitions win on collision
/// (matches the source tool's first-writer-wins rule).
fn read_rate_names(base: &Path) -> Result<HashMap<u64, String>, CodecError> {
    let mut map = HashMap::new();
    for ext in MODULE_EXTENSIONS {
        let p = base.with_extension(ext);
        let Ok(text) = fs::read_to_string(&p) else {
            continue;
        };
        for (lineno, line) in text.lines().enumerate() {
            let Some((rate, name)) = parse_rate_decl(line) else {
                continue;
            };
            map.entry(rate.to_bits()).or_insert(name);
            let _ = lineno;
        }
        break;
    }
    Ok(map)
}

fn parse_rate_decl(line: &str) -> Option<(f64, String)> {
    let eq = line.find('=')?;
    let semi = line[eq..].find(';')? + eq;
    let rate: f64 = line[eq + 1..semi].trim().parse().ok()?;

    let quote_start = line.find("Action \"")? + "Action \"".len();
    let rest = &line[quote_start..];
    let quote_end = rest.find('"')?;
    Some((rate, rest[..quote_end].to_owned()))
}

fn read_trans(base: &Path) -> Result<(usize, Vec<(usize, usize, f64)>), CodecError> {
    let p = base.with_extension("trans");
    let path_str = p.display().to_string();
    let text = fs::read_to_string(&p)?;
    let mut lines = text.lines().enumerate();

    let (_, header) = lines.next().ok_or_else(|| CodecError::UnexpectedEof(path_str.clone()))?;
    let mut parts = header.split_whitespace();
    let n_states: usize = parts
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| CodecError::Parse {
            path: path_str.clone(),
            line: 1,
            message: "missing state count".into(),
        })?;
    let n_transitions: usize = parts
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| CodecError::Parse {
            path: path_str.clone(),
            line: 1,
            message: "missing transition count".into(),
        })?;

    let mut triples = Vec::with_capacity(n_transitions);
    for (idx, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let mut parts = line.split_whitespace();
        let err = || CodecError::Parse {
            path: path_str.clone(),
            line: idx + 1,
            message: format!("malformed transition line {line:?}"),
        };
        let src: usize = parts.next().and_then(|s| s.parse().ok()).ok_or_else(err)?;
        let dst: usize = parts.next().and_then(|s| s.parse().ok()).ok_or_else(err)?;
        let rate: f64 = parts.next().and_then(|s| s.parse().ok()).ok_or_else(err)?;
        triples.push((src, dst, rate));
    }

    Ok((n_states, triples))
}

fn read_labels(base: &Path) -> Result<(HashMap<usize, String>, Vec<usize>), CodecError> {
    let p = base.with_extension("labels");
    let path_str = p.display().to_string();
    let text = fs::read_to_string(&p)?;
    let mut lines = text.lines();

    let mut names = HashMap::new();
    let mut init_id = None;
    if let Some(decl_line) = lines.next() {
        for entry in decl_line.split_whitespace() {
            let Some((id_text, rest)) = entry.split_once('=') else {
                continue;
            };
            let id: usize = id_text.parse().map_err(|_| CodecError::Parse {
                path: path_str.clone(),
                line: 1,
                message: format!("bad label id in {entry:?}"),
            })?;
            let name = rest.trim_matches('"').to_owned();
            if name == "init" {
                init_id = Some(id);
            }
            names.insert(id, name);
        }
    }

    let mut initial_states = Vec::new();
    for (idx, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (state_text, id_text) = line.split_once(':').ok_or_else(|| CodecError::Parse {
            path: path_str.clone(),
            line: idx + 2,
            message: format!("malformed label assignment {line:?}"),
        })?;
        let state: usize = state_text.parse().map_err(|_| CodecError::Parse {
            path: path_str.clone(),
            line: idx + 2,
            message: format!("bad state index {state_text:?}"),
        })?;
        let id: usize = id_text.trim().parse().map_err(|_| CodecError::Parse {
            path: path_str.clone(),
            line: idx + 2,
            message: format!("bad label id {id_text:?}"),
        })?;
        if Some(id) == init_id {
            initial_states.push(state);
        }
    }

    Ok((names, initial_states))
}
