use occupancy_core::DebounceGate;

const WINDOW_MS: u64 = 200;

#[test]
fn first_edge_is_always_accepted() {
    let mut gate = DebounceGate::new(WINDOW_MS);
    assert!(gate.accept(0));

    let mut late_gate = DebounceGate::new(WINDOW_MS);
    assert!(late_gate.accept(1_000_000));
}

#[test]
fn edges_inside_the_window_are_rejected() {
    let mut gate = DebounceGate::new(WINDOW_MS);

    assert!(gate.accept(1_000));
    assert!(!gate.accept(1_050));
    assert!(!gate.accept(1_150));
    assert!(!gate.accept(1_199));
}

#[test]
fn window_boundary_is_strict() {
    let mut gate = DebounceGate::new(WINDOW_MS);

    assert!(gate.accept(1_000));
    // Exactly the window apart is still bounce.
    assert!(!gate.accept(1_200));
    assert!(gate.accept(1_201));
}

#[test]
fn edges_outside_the_window_both_count() {
    let mut gate = DebounceGate::new(WINDOW_MS);

    let mut accepted = 0;
    for t in [1_000, 1_150, 1_300] {
        if gate.accept(t) {
            accepted += 1;
        }
    }
    // 1_150 bounces; 1_300 is 300 ms after the accepted edge at 1_000.
    assert_eq!(accepted, 2);
}

#[test]
fn rejected_edges_do_not_restart_the_window() {
    let mut gate = DebounceGate::new(WINDOW_MS);

    assert!(gate.accept(1_000));
    // A burst of bounces must not push the window forward.
    assert!(!gate.accept(1_100));
    assert!(!gate.accept(1_190));
    assert!(gate.accept(1_201));
}

#[test]
fn accepted_edges_restart_the_window() {
    let mut gate = DebounceGate::new(WINDOW_MS);

    assert!(gate.accept(1_000));
    assert!(gate.accept(1_250));
    // 400 ms after the first edge but only 150 ms after the second.
    assert!(!gate.accept(1_400));
    assert!(gate.accept(1_460));
}

#[test]
fn gates_are_independent_per_button() {
    let mut entry_gate = DebounceGate::new(WINDOW_MS);
    let mut exit_gate = DebounceGate::new(WINDOW_MS);

    assert!(entry_gate.accept(1_000));
    // A fresh gate on another button is unaffected by the first one.
    assert!(exit_gate.accept(1_010));
    assert!(!entry_gate.accept(1_020));
    assert!(!exit_gate.accept(1_030));
}
