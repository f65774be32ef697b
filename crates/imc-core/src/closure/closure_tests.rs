use super::*;
use crate::graph::Graph;
use crate::label::Label;
use crate::state::Transition;

#[test]
fn interactive_chain_collapses_to_markov_successor() {
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

    g.markov_succs(s0, true);

    let edges = g.state(s0).edges();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].target, s2);
    assert_eq!(g.resolve_label(edges[0].label), &Label::Interactive("a".into()));
}

#[test]
fn tau_outer_is_overridden_by_inner_label() {
    let mut g = Graph::new();
    let s0 = g.initial_state();
    let s1 = g.new_state();
    let s2 = g.new_state();
    let tau = g.intern_label(Label::tau());
    let b = g.intern_label(Label::Interactive("b".into()));
    g.add_edge(s0, Transition::new(s1, tau));
    g.add_edge(s1, Transition::new(s2, b));

    g.markov_succs(s0, true);

    let edges = g.state(s0).edges();
    assert_eq!(edges.len(), 1);
    assert_eq!(g.resolve_label(edges[0].label), &Label::Interactive("b".into()));
}

#[test]
fn composes_two_non_tau_labels_with_pipe() {
    let mut g = Graph::new();
    let s0 = g.initial_state();
    let s1 = g.new_state();
    let s2 = g.new_state();
    let a = g.intern_label(Label::Interactive("a".into()));
    let b = g.intern_label(Label::Interactive("b".into()));
    g.add_edge(s0, Transition::new(s1, a));
    g.add_edge(s1, Transition::new(s2, b));

    g.markov_succs(s0, true);

    let edges = g.state(s0).edges();
    assert_eq!(edges.len(), 1);
    assert_eq!(
        g.resolve_label(edges[0].label),
        &Label::Interactive("a|b".into())
    );
}

#[test]
fn hybrid_markov_edges_are_dropped() {
    let mut g = Graph::new();
    let h = g.initial_state();
    let x = g.new_state();
    let y = g.new_state();
    let a = g.intern_label(Label::Interactive("a".into()));
    let r1 = g.intern_label(Label::Markov {
        rate: 1.0,
        prefix: None,
    });
    g.add_edge(h, Transition::new(x, a));
    g.add_edge(h, Transition::new(y, r1));
    g.add_edge(x, Transition::new(y, r1));

    g.markov_succs(h, true);

    let edges = g.state(h).edges();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].target, y);
}

#[test]
fn mark_propagates_through_closure() {
    let mut g = Graph::new();
    let s0 = g.initial_state();
    let s1 = g.new_state();
    let a = g.intern_label(Label::Interactive("a".into()));
    g.add_edge(s0, Transition::new(s1, a));
    g.set_mark(s1, true);

    g.markov_succs(s0, true);

    assert!(g.is_marked(s0));
}

#[test]
fn iterative_closure_matches_recursive_result() {
    let build = || {
        let mut g = Graph::new();
        let s0 = g.initial_state();
        let s1 = g.new_state();
        let s2 = g.new_state();
        let a = g.intern_label(Label::Interactive("a".into()));
        let b = g.intern_label(Label::Interactive("b".into()));
        g.add_edge(s0, Transition::new(s1, a));
        g.add_edge(s1, Transition::new(s2, b));
        (g, s0)
    };

    let (mut recursive, s0) = build();
    recursive.markov_succs(s0, true);

    let (mut iterative, s0) = build();
    iterative.markov_succs_iterative(s0, true);

    assert_eq!(recursive.state(s0).edges(), iterative.state(s0).edges());
}
