use super::*;
use imc_core::{Graph, Label, Transition};
use tempfile::NamedTempFile;

#[test]
fn round_trips_a_small_graph() {
    let mut g = Graph::new();
    let s0 = g.initial_state();
    let s1 = g.new_state();
    let a = g.intern_label(Label::Interactive("a".into()));
    let r = g.intern_label(Label::Markov {
        rate: 2.0,
        prefix: None,
    });
    g.add_edge(s0, Transition::new(s1, a));
    g.add_edge(s1, Transition::new(s1, r));
    g.comment = "hello".into();
    g.set_mark(s0, true);

    let file = NamedTempFile::new().unwrap();
    BcgWriter.write(&g, file.path()).unwrap();
    let read_back = BcgReader.read(file.path(), true).unwrap();

    assert_eq!(read_back.num_states(), 2);
    assert_eq!(read_back.comment, "hello");
    assert!(read_back.is_marked(read_back.initial_state()));
    assert_eq!(read_back.state(read_back.initial_state()).edges().len(), 1);
}

#[test]
fn rejects_bad_magic() {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), b"NOPE0000000000000000000000000000000").unwrap();
    assert!(BcgReader.read(file.path(), true).is_err());
}
