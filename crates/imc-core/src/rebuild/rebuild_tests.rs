use super::*;
use crate::graph::Graph;
use crate::label::Label;
use crate::state::Transition;

#[test]
fn chain_collapse_produces_strict_alternation() {
    let mut g = Graph::new();
    let s0 = g.initial_state();
    let s1 = g.new_state();
    let s2 = g.new_state();
    let a = g.intern_label(Label::Interactive("a".into()));
    let tau = g.intern_label(Label::tau());
    let r = g.intern_label(Label::Markov {
        rate: 3.0,
        prefix: None,
    });
    g.add_edge(s0, Transition::new(s1, a));
    g.add_edge(s1, Transition::new(s2, tau));
    g.add_edge(s2, Transition::new(s2, r));

    g.transform_imc_to_ctmdp(true).unwrap();

    assert_eq!(g.state(g.initial_state()).kind, StateKind::Interactive);
    for id in g.state_ids() {
        let kind = g.state(id).kind;
        for t in g.state(id).edges() {
            let tk = g.state(t.target).kind;
            match kind {
                StateKind::Interactive => assert!(matches!(tk, StateKind::Markov | StateKind::NotDec)),
                StateKind::Markov => assert!(matches!(tk, StateKind::Interactive | StateKind::NotDec)),
                _ => {}
            }
        }
    }
}

#[test]
fn hybrid_states_disappear_after_transform() {
    let mut g = Graph::new();
    let h = g.initial_state();
    let x = g.new_state();
    let y = g.new_state();
    let a = g.intern_label(Label::Interactive("a".into()));
    let r = g.intern_label(Label::Markov {
        rate: 1.0,
        prefix: None,
    });
    g.add_edge(h, Transition::new(x, a));
    g.add_edge(h, Transition::new(y, r));
    g.add_edge(x, Transition::new(y, r));

    g.transform_imc_to_ctmdp(true).unwrap();

    for id in g.state_ids() {
        assert_ne!(g.state(id).kind, StateKind::Hybrid);
    }
}

#[test]
fn markov_initial_state_gets_promoted() {
    let mut g = Graph::new();
    let s0 = g.initial_state();
    let r = g.intern_label(Label::Markov {
        rate: 1.0,
        prefix: None,
    });
    g.add_edge(s0, Transition::new(s0, r));

    let stats = g.transform_imc_to_ctmdp(true).unwrap();

    assert!(stats.initial_state_promoted);
    assert_eq!(g.state(g.initial_state()).kind, StateKind::Interactive);
}

#[test]
fn refuses_to_transform_with_undetected_cycle() {
    let mut g = Graph::new();
    g.cycle_search = false;
    let s0 = g.initial_state();
    let s1 = g.new_state();
    let a = g.intern_label(Label::Interactive("a".into()));
    let b = g.intern_label(Label::Interactive("b".into()));
    g.add_edge(s0, Transition::new(s1, a));
    g.add_edge(s1, Transition::new(s0, b));

    assert!(g.transform_imc_to_ctmdp(true).is_err());
}
