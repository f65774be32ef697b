//! Argument builders for the `imc2ctmdp` command.
//!
//! Each function returns a `clap::Arg`; `commands::build_cli` composes them
//! into the single top-level command.

use clap::{Arg, ArgAction};

/// Input file (-i/--input).
pub fn input_arg() -> Arg {
    Arg::new("input")
        .short('i')
        .long("input")
        .value_name("FILE")
        .required(true)
        .help("Input file (format inferred from extension, or format:file)")
}

/// Output files (-o/--output), comma-separated `format:filename` entries.
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILES")
        .help("Comma-separated format:filename pairs, e.g. ctmdp:out.ctmdp,lab:out.lab")
}

/// Synthetic action name used for promoted/synthetic interactive states
/// (-a/--action).
pub fn action_arg() -> Arg {
    Arg::new("action")
        .short('a')
        .long("action")
        .value_name("STR")
        .help("Action name for synthetic interactive states")
}

/// Disable ANSI color in CLI output (-c/--no-color).
pub fn no_color_arg() -> Arg {
    Arg::new("no_color")
        .short('c')
        .long("no-color")
        .action(ArgAction::SetTrue)
        .help("Disable colored output")
}

/// Delete unreachable states before transforming (-d/--delete-unreachable).
pub fn delete_unreachable_arg() -> Arg {
    Arg::new("delete_unreachable")
        .short('d')
        .long("delete-unreachable")
        .action(ArgAction::SetTrue)
        .help("Delete states unreachable from the initial state")
}

/// Skip the interactive cycle search (-k/--no-cycle-search).
pub fn no_cycle_search_arg() -> Arg {
    Arg::new("no_cycle_search")
        .short('k')
        .long("no-cycle-search")
        .action(ArgAction::SetTrue)
        .help("Skip the interactive cycle search (caller guarantees acyclicity)")
}

/// Do not compute composite labels during closure (-l/--no-labels).
pub fn no_labels_arg() -> Arg {
    Arg::new("no_labels")
        .short('l')
        .long("no-labels")
        .action(ArgAction::SetTrue)
        .help("Replace composed labels with a placeholder instead of computing them")
}

/// Skip uniformization (-n/--no-uniformize).
pub fn no_uniformize_arg() -> Arg {
    Arg::new("no_uniformize")
        .short('n')
        .long("no-uniformize")
        .action(ArgAction::SetTrue)
        .help("Skip uniformizing Markov outgoing rates")
}

/// Search for absorbing states when writing `.lab` (-s/--search-absorbing).
pub fn search_absorbing_arg() -> Arg {
    Arg::new("search_absorbing")
        .short('s')
        .long("search-absorbing")
        .action(ArgAction::SetTrue)
        .help("Detect and label absorbing states in .lab output")
}
