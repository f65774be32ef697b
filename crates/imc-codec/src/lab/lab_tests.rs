use super::*;
use imc_core::{Graph, Label, Transition};
use tempfile::NamedTempFile;

#[test]
fn marks_absorbing_states_when_enabled() {
    let mut g = Graph::new();
    g.search_for_absorbing_states = true;
    let s0 = g.initial_state();
    let s1 = g.new_state();
    g.set_mark(s0, true);
    g.set_mark(s1, true);
    let a = g.intern_label(Label::Interactive("a".into()));
    g.add_edge(s0, Transition::new(s1, a));
    g.add_edge(s1, Transition::new(s0, a));

    let file = NamedTempFile::new().unwrap();
    LabWriter.write(&g, file.path()).unwrap();
    let text = std::fs::read_to_string(file.path()).unwrap();
    assert!(text.contains("absorbing"));
    assert!(text.contains("1 reach absorbing"));
    assert!(text.contains("2 reach absorbing"));
}

#[test]
fn skips_absorbing_detection_when_disabled() {
    let mut g = Graph::new();
    let s0 = g.initial_state();
    let s1 = g.new_state();
    g.set_mark(s0, true);
    g.set_mark(s1, true);
    let a = g.intern_label(Label::Interactive("a".into()));
    g.add_edge(s0, Transition::new(s1, a));
    g.add_edge(s1, Transition::new(s0, a));

    let file = NamedTempFile::new().unwrap();
    LabWriter.write(&g, file.path()).unwrap();
    let text = std::fs::read_to_string(file.path()).unwrap();
    assert!(!text.contains("absorbing"));
}

#[test]
fn unmarked_states_are_omitted() {
    let mut g = Graph::new();
    let s0 = g.initial_state();
    let s1 = g.new_state();
    let a = g.intern_label(Label::Interactive("a".into()));
    g.add_edge(s0, Transition::new(s1, a));

    let file = NamedTempFile::new().unwrap();
    LabWriter.write(&g, file.path()).unwrap();
    let text = std::fs::read_to_string(file.path()).unwrap();
    assert!(!text.contains("reach"));
    assert_eq!(text.lines().filter(|l| !l.starts_with('#')).count(), 0);
}

#[test]
fn only_marked_states_get_reach() {
    let mut g = Graph::new();
    let s0 = g.initial_state();
    let s1 = g.new_state();
    g.set_mark(s0, true);
    let a = g.intern_label(Label::Interactive("a".into()));
    g.add_edge(s0, Transition::new(s1, a));

    let file = NamedTempFile::new().unwrap();
    LabWriter.write(&g, file.path()).unwrap();
    let text = std::fs::read_to_string(file.path()).unwrap();
    assert!(text.contains("1 reach"));
    assert!(!text.contains("2 reach"));
}
