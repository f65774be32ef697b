use super::*;
use imc_core::Graph;
use tempfile::NamedTempFile;

#[test]
fn lists_only_marked_states() {
    let mut g = Graph::new();
    let s0 = g.initial_state();
    let s1 = g.new_state();
    g.set_mark(s1, true);
    g.number_states();

    let file = NamedTempFile::new().unwrap();
    MarkedWriter.write(&g, file.path()).unwrap();
    let text = std::fs::read_to_string(file.path()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    let expected = g.state(s1).number.unwrap().to_string();
    assert_eq!(lines, vec![expected.as_str()]);
    let _ = s0;
}
