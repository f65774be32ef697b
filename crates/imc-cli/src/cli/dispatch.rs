//! Dispatch logic: extract a typed `RunOptions` from `ArgMatches`.
//!
//! `-o format:filename,format:filename` is split into a `Vec<(String,
//! PathBuf)>`; `-i` accepts the same optional `format:` prefix, falling
//! back to extension-based inference.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;

/// A single `format:filename` output target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub format: String,
    pub path: PathBuf,
}

pub struct RunOptions {
    pub input_format: Option<String>,
    pub input_path: PathBuf,
    pub outputs: Vec<OutputTarget>,
    pub action: Option<String>,
    pub delete_unreachable: bool,
    pub no_cycle_search: bool,
    pub no_labels: bool,
    pub no_uniformize: bool,
    pub search_absorbing: bool,
    pub color: ColorChoice,
}

impl RunOptions {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let raw_input = m
            .get_one::<String>("input")
            .cloned()
            .expect("input is required");
        let (input_format, input_path) = split_format_prefix(&raw_input);

        let outputs = m
            .get_one::<String>("output")
            .map(|s| parse_outputs(s))
            .unwrap_or_default();

        Self {
            input_format,
            input_path,
            outputs,
            action: m.get_one::<String>("action").cloned(),
            delete_unreachable: m.get_flag("delete_unreachable"),
            no_cycle_search: m.get_flag("no_cycle_search"),
            no_labels: m.get_flag("no_labels"),
            no_uniformize: m.get_flag("no_uniformize"),
            search_absorbing: m.get_flag("search_absorbing"),
            color: if m.get_flag("no_color") {
                ColorChoice::Never
            } else {
                ColorChoice::Auto
            },
        }
    }
}

/// Infer a format name from a file extension, defaulting to `bcg`.
pub fn infer_format(path: &std::path::Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_else(|| "bcg".to_string())
}

/// Split an optional `format:` prefix off an input spec, as in
/// `prism:model.trans`. Bare paths fall back to extension inference.
fn split_format_prefix(spec: &str) -> (Option<String>, PathBuf) {
    match spec.split_once(':') {
        Some((format, rest)) if is_known_prefix(format) => {
            (Some(format.to_string()), PathBuf::from(rest))
        }
        _ => (None, PathBuf::from(spec)),
    }
}

fn is_known_prefix(candidate: &str) -> bool {
    matches!(
        candidate,
        "bcg" | "prism" | "ctmdp" | "ctmdpi" | "etmcc" | "lab" | "marked"
    )
}

fn parse_outputs(spec: &str) -> Vec<OutputTarget> {
    spec.split(',')
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once(':') {
            Some((format, path)) => OutputTarget {
                format: format.to_string(),
                path: PathBuf::from(path),
            },
            None => {
                let path = PathBuf::from(entry);
                let format = infer_format(&path);
                OutputTarget { format, path }
            }
        })
        .collect()
}
