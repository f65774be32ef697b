mod cli;
mod error;

use std::process::ExitCode;

use cli::{RunOptions, build_cli, infer_format};
use error::CliError;
use imc_core::{CodecRegistry, Colors, Graph};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = build_cli().get_matches();
    let opts = RunOptions::from_matches(&matches);
    let colors = Colors::new(opts.color.should_colorize());

    match run(opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}error:{} {err}", colors.red, colors.reset);
            ExitCode::FAILURE
        }
    }
}

fn run(opts: RunOptions) -> Result<(), CliError> {
    let colors = Colors::new(opts.color.should_colorize());

    let mut registry = CodecRegistry::new();
    imc_codec::register_default_codecs(&mut registry);

    let cycle_search = !opts.no_cycle_search;
    let input_format = opts
        .input_format
        .clone()
        .unwrap_or_else(|| infer_format(&opts.input_path));

    let mut graph = Graph::read(&registry, &input_format, &opts.input_path, cycle_search)
        .map_err(|source| CliError::Read {
            path: opts.input_path.clone(),
            source,
        })?;

    if let Some(action) = &opts.action {
        graph.the_action = action.clone();
    }
    graph.search_for_absorbing_states = opts.search_absorbing;

    if opts.delete_unreachable {
        let removed = graph.delete_unreachable();
        if removed > 0 {
            println!(
                "{}debug:{} deleted {removed} unreachable state(s)",
                colors.green, colors.reset
            );
        }
    }

    if !opts.no_uniformize {
        let before = graph.check_uniformity(false);
        graph.uniformize();
        if !before.uniform {
            println!(
                "{}debug:{} uniformized Markov rates (was [{:.10}, {:.10}])",
                colors.green, colors.reset, before.min_outgoing_rate, before.max_outgoing_rate
            );
        }
    }

    let stats = graph.transform_imc_to_ctmdp(!opts.no_labels)?;
    println!(
        "{}debug:{} converted {} hybrid state(s), minted {} synthetic interactive state(s), \
         pruned {} orphan(s), promoted initial state: {}",
        colors.green,
        colors.reset,
        stats.hybrid_states_converted,
        stats.synthetic_interactive_states,
        stats.orphan_interactive_states_pruned,
        stats.initial_state_promoted,
    );

    graph.prepare_for_export();
    if graph.has_internal_nondeterminism() {
        println!(
            "{}warning:{} graph has internal nondeterminism (duplicate action at a state)",
            colors.red, colors.reset
        );
    }

    for target in &opts.outputs {
        graph
            .write(&registry, &target.format, &target.path)
            .map_err(|source| CliError::Write {
                path: target.path.clone(),
                source,
            })?;
    }

    Ok(())
}
