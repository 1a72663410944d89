//! Integration tests for rule evaluation
//!
//! End-to-end compile-then-interpret scenarios, boundary laws, and the
//! missing-signal policy.

use klaxon::foundation::Snapshot;
use klaxon::lang::compile;

fn snapshot() -> Snapshot {
    [("a", 1.0), ("b", 2.0), ("c", 3.0)].into_iter().collect()
}

// =============================================================================
// Concrete Scenarios
// =============================================================================

#[test]
fn all_clauses_hold() {
    let rule = compile("a > 0 && b > 1 && c < 5").unwrap();
    assert!(rule.interpret(&snapshot()));
}

#[test]
fn first_clause_fails() {
    // 1 > 1 is false; strict comparison.
    let rule = compile("a > 1 && b > 10 && c < 5").unwrap();
    assert!(!rule.interpret(&snapshot()));
}

#[test]
fn middle_clause_fails() {
    // 2 > 10 is false.
    let rule = compile("a < 2 && b > 10 && c < 5").unwrap();
    assert!(!rule.interpret(&snapshot()));
}

#[test]
fn loose_bounds_all_hold() {
    // 1 < 5, 2 > 1, and 3 < 10 all hold, so the conjunction is true.
    let rule = compile("a < 5 && b > 1 && c < 10").unwrap();
    assert!(rule.interpret(&snapshot()));
}

#[test]
fn missing_signal_yields_false() {
    let rule = compile("d > 0").unwrap();
    assert!(!rule.interpret(&snapshot()));
}

// =============================================================================
// Boundary Laws
// =============================================================================

#[test]
fn greater_than_boundary() {
    let rule = compile("k > 10").unwrap();
    let above: Snapshot = [("k", 10.001)].into_iter().collect();
    let at: Snapshot = [("k", 10.0)].into_iter().collect();
    let below: Snapshot = [("k", 9.999)].into_iter().collect();
    assert!(rule.interpret(&above));
    assert!(!rule.interpret(&at));
    assert!(!rule.interpret(&below));
    assert!(!rule.interpret(&Snapshot::new()));
}

#[test]
fn less_than_boundary() {
    let rule = compile("k < 10").unwrap();
    let above: Snapshot = [("k", 10.001)].into_iter().collect();
    let at: Snapshot = [("k", 10.0)].into_iter().collect();
    let below: Snapshot = [("k", 9.999)].into_iter().collect();
    assert!(!rule.interpret(&above));
    assert!(!rule.interpret(&at));
    assert!(rule.interpret(&below));
    assert!(!rule.interpret(&Snapshot::new()));
}

// =============================================================================
// Conjunction Laws
// =============================================================================

#[test]
fn forcing_any_position_false_fails_the_whole_rule() {
    let keys = ["a", "b", "c", "d"];
    for falsified in 0..keys.len() {
        let text = keys
            .iter()
            .map(|k| format!("{k} > 0"))
            .collect::<Vec<_>>()
            .join(" && ");
        let rule = compile(&text).unwrap();
        let snapshot: Snapshot = keys
            .iter()
            .enumerate()
            .map(|(i, k)| (*k, if i == falsified { -1.0 } else { 1.0 }))
            .collect();
        assert!(
            !rule.interpret(&snapshot),
            "falsifying position {falsified} must fail the conjunction"
        );
    }
}

#[test]
fn one_missing_signal_among_several_clauses() {
    // The absent signal resolves to "not satisfied" without disturbing
    // evaluation; present clauses evaluate normally on another snapshot.
    let rule = compile("a > 0 && ghost > 0 && c < 5").unwrap();
    assert!(!rule.interpret(&snapshot()));

    let with_ghost: Snapshot = [("a", 1.0), ("ghost", 1.0), ("c", 3.0)]
        .into_iter()
        .collect();
    assert!(rule.interpret(&with_ghost));
}

// =============================================================================
// Reuse and Determinism
// =============================================================================

#[test]
fn rule_reused_across_evaluation_cycles() {
    let rule = compile("cpu > 90").unwrap();
    let calm: Snapshot = [("cpu", 40.0)].into_iter().collect();
    let hot: Snapshot = [("cpu", 97.0)].into_iter().collect();
    assert!(!rule.interpret(&calm));
    assert!(rule.interpret(&hot));
    assert!(!rule.interpret(&calm));
}

#[test]
fn concurrent_evaluation_needs_no_synchronization() {
    let rule = std::sync::Arc::new(compile("a > 0 && c < 5").unwrap());
    let stats = std::sync::Arc::new(snapshot());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let rule = std::sync::Arc::clone(&rule);
            let stats = std::sync::Arc::clone(&stats);
            std::thread::spawn(move || rule.interpret(&stats))
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
