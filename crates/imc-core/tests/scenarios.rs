//! End-to-end transformation scenarios exercised against the public
//! `Graph` API only.

use imc_core::{Graph, Label, StateKind, Transition};

#[test]
fn chain_collapse() {
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
    let edges = g.state(g.initial_state()).edges();
    assert_eq!(edges.len(), 1);
    let synthetic = edges[0].target;
    assert_eq!(g.state(synthetic).kind, StateKind::Interactive);
    assert_eq!(g.state(synthetic).edges().len(), 1);
    let markov = g.state(synthetic).edges()[0].target;
    assert_eq!(g.state(markov).kind, StateKind::Markov);
    assert_eq!(g.markov_row_sum(markov), 3.0);
}

#[test]
fn mark_propagation_through_an_action_edge() {
    let mut g = Graph::new();
    let p = g.initial_state();
    let q = g.new_state();
    g.the_action = "act".into();
    let act = g.intern_label(Label::Interactive("act".into()));
    let r = g.intern_label(Label::Markov {
        rate: 2.0,
        prefix: None,
    });
    g.add_edge(p, Transition::new(q, act));
    g.add_edge(q, Transition::new(q, r));
    g.set_mark(p, true);

    g.transform_imc_to_ctmdp(true).unwrap();

    assert!(g.is_marked(g.initial_state()));
}

#[test]
fn hybrid_cleanup_drops_markov_edges_from_hybrid_states() {
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
fn uniformization_equalizes_markov_row_sums() {
    let mut g = Graph::new();
    let m1 = g.initial_state();
    let m2 = g.new_state();
    let r2 = g.intern_label(Label::Markov {
        rate: 2.0,
        prefix: None,
    });
    let r5 = g.intern_label(Label::Markov {
        rate: 5.0,
        prefix: None,
    });
    g.add_edge(m1, Transition::new(m1, r2));
    g.add_edge(m2, Transition::new(m2, r5));

    g.uniformize();

    assert_eq!(g.markov_row_sum(m1), 5.0);
    assert_eq!(g.markov_row_sum(m2), 5.0);
    assert!(g.check_uniformity(false).uniform);
}

#[test]
fn cycle_rejection_refuses_a_closing_interactive_edge() {
    let mut g = Graph::new();
    let s0 = g.initial_state();
    let s1 = g.new_state();
    let a = g.intern_label(Label::Interactive("a".into()));
    g.add_edge(s0, Transition::new(s1, a));

    // A codec would check `reachable` before adding the back edge; here we
    // verify the primitive it relies on.
    assert!(!g.reachable(s1, s0, true));
    let b = g.intern_label(Label::Interactive("b".into()));
    g.add_edge(s1, Transition::new(s0, b));
    assert!(g.reachable(s1, s0, true));
    assert!(g.check_interactive_cycle(false));
}

#[test]
fn strict_alternation_holds_for_a_larger_graph() {
    let mut g = Graph::new();
    let s0 = g.initial_state();
    let s1 = g.new_state();
    let s2 = g.new_state();
    let s3 = g.new_state();
    let a = g.intern_label(Label::Interactive("a".into()));
    let b = g.intern_label(Label::Interactive("b".into()));
    let r1 = g.intern_label(Label::Markov {
        rate: 1.0,
        prefix: None,
    });
    let r2 = g.intern_label(Label::Markov {
        rate: 2.0,
        prefix: None,
    });
    g.add_edge(s0, Transition::new(s1, a));
    g.add_edge(s0, Transition::new(s2, b));
    g.add_edge(s1, Transition::new(s1, r1));
    g.add_edge(s2, Transition::new(s3, r2));
    g.add_edge(s3, Transition::new(s3, r2));

    g.transform_imc_to_ctmdp(true).unwrap();
    g.prepare_for_export();

    for id in g.state_ids() {
        let kind = g.state(id).kind;
        for t in g.state(id).edges() {
            let target_kind = g.state(t.target).kind;
            match kind {
                StateKind::Interactive => {
                    assert!(matches!(target_kind, StateKind::Markov | StateKind::NotDec))
                }
                StateKind::Markov => {
                    assert!(matches!(target_kind, StateKind::Interactive | StateKind::NotDec))
                }
                _ => {}
            }
        }
    }
}
