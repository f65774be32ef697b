//! Command assembly for the CLI.
//!
//! Unlike a multi-subcommand tool, `imc2ctmdp` is a single invocation with
//! flags: there is exactly one command here, built from the shared arg
//! builders in `args.rs`.

use clap::Command;

use super::args::*;

/// Build the `imc2ctmdp` command.
pub fn build_cli() -> Command {
    Command::new("imc2ctmdp")
        .about("Transform an interactive Markov chain into a continuous-time Markov decision process")
        .after_help(
            r#"EXAMPLES:
  imc2ctmdp -i model.bcg -o ctmdp:model.ctmdp
  imc2ctmdp -i prism:model.trans -o ctmdpi:model.ctmdpi,lab:model.lab -s
  imc2ctmdp -i model.bcg -d -n -o bcg:reduced.bcg"#,
        )
        .arg(input_arg())
        .arg(output_arg())
        .arg(action_arg())
        .arg(no_color_arg())
        .arg(delete_unreachable_arg())
        .arg(no_cycle_search_arg())
        .arg(no_labels_arg())
        .arg(no_uniformize_arg())
        .arg(search_absorbing_arg())
}
