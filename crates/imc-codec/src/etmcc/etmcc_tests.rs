use super::*;
use imc_core::{Graph, Label, Transition};
use tempfile::NamedTempFile;

#[test]
fn writes_rate_and_discrete_lines() {
    let mut g = Graph::new();
    let s0 = g.initial_state();
    let s1 = g.new_state();
    let a = g.intern_label(Label::Interactive("a".into()));
    let r = g.intern_label(Label::Markov {
        rate: 1.5,
        prefix: None,
    });
    g.add_edge(s0, Transition::new(s1, a));
    g.add_edge(s1, Transition::new(s1, r));

    let file = NamedTempFile::new().unwrap();
    EtmccWriter.write(&g, file.path()).unwrap();
    let text = std::fs::read_to_string(file.path()).unwrap();
    assert!(text.contains("STATES 2"));
    assert!(text.contains("TRANSITIONS 2"));
    assert!(text.contains("d 1 2 0.0000000000 I"));
    assert!(text.contains("r 2 2 1.5000000000 M"));
}
