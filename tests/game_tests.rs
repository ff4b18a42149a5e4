//! Game session tests.
//!
//! These tests exercise `GameState` end to end: dealing from a resolved
//! pool, toggling, resetting and the snapshot handed to the presentation
//! layer.

use buzzword_bingo::card::{ToggleOutcome, FREE_INDEX};
use buzzword_bingo::core::{BingoError, EngineConfig, GameRng};
use buzzword_bingo::game::{GameSnapshot, GameState};
use buzzword_bingo::terms::{TermPool, BUILTIN_TERMS};
use rustc_hash::FxHashSet;

fn seeded(seed: u64) -> EngineConfig {
    EngineConfig::new().with_seed(seed)
}

// =============================================================================
// Initialize
// =============================================================================

/// A new card has 25 distinct cells drawn from the pool plus the free cell.
#[test]
fn test_initialize_card_shape() {
    let pool = TermPool::builtin();
    let state = GameState::new(&pool, seeded(1)).unwrap();
    let cells = state.cells();

    assert_eq!(cells.len(), 25);
    assert_eq!(cells[FREE_INDEX].label, "FREE");
    assert!(cells[FREE_INDEX].selected);

    let labels: FxHashSet<&str> = cells
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != FREE_INDEX)
        .map(|(_, cell)| cell.label.as_str())
        .collect();
    assert_eq!(labels.len(), 24);
    assert!(labels.iter().all(|label| BUILTIN_TERMS.contains(label)));

    for (i, cell) in cells.iter().enumerate() {
        assert_eq!(cell.selected, i == FREE_INDEX);
    }
    assert_eq!(state.completed_lines(), 0);
}

/// Insufficient pools fail with the sizes in the error.
#[test]
fn test_initialize_insufficient_pool() {
    let pool: TermPool = (0..24).map(|_| "same").collect();
    let err = GameState::new(&pool, seeded(1)).unwrap_err();

    assert!(matches!(
        err,
        BingoError::InsufficientTerms {
            available: 24,
            required: 25
        }
    ));
}

/// Explicit RNG injection is reproducible.
#[test]
fn test_with_rng_is_reproducible() {
    let pool = TermPool::builtin();
    let a = GameState::with_rng(&pool, EngineConfig::new(), GameRng::new(99)).unwrap();
    let b = GameState::with_rng(&pool, EngineConfig::new(), GameRng::new(99)).unwrap();
    let c = GameState::with_rng(&pool, EngineConfig::new(), GameRng::new(100)).unwrap();

    assert_eq!(a.card(), b.card());
    assert_ne!(a.card(), c.card());
}

// =============================================================================
// Toggle
// =============================================================================

/// Selecting every non-free cell completes all 12 lines, and play continues.
#[test]
fn test_toggle_everything() {
    let mut state = GameState::new(&TermPool::builtin(), seeded(2)).unwrap();

    for i in (0..25).filter(|&i| i != FREE_INDEX) {
        assert_eq!(state.toggle(i).unwrap(), ToggleOutcome::Marked);
    }
    assert_eq!(state.completed_lines(), 12);
    assert_eq!(state.completed().len(), 12);

    // No terminal state
    assert_eq!(state.toggle(0).unwrap(), ToggleOutcome::Unmarked);
    assert_eq!(state.completed_lines(), 9);
}

/// Toggle on, toggle off: the count returns to where it was.
#[test]
fn test_toggle_round_trip() {
    let mut state = GameState::new(&TermPool::builtin(), seeded(3)).unwrap();
    for i in [1, 2, 3, 4] {
        state.toggle(i).unwrap();
    }
    let before = state.completed_lines();

    state.toggle(0).unwrap();
    assert_eq!(state.completed_lines(), 1);
    state.toggle(0).unwrap();
    assert_eq!(state.completed_lines(), before);
}

/// Out-of-range indices are errors, not silently ignored.
#[test]
fn test_toggle_out_of_range() {
    let mut state = GameState::new(&TermPool::builtin(), seeded(4)).unwrap();
    let err = state.toggle(25).unwrap_err();
    assert!(matches!(err, BingoError::IndexOutOfRange { index: 25, len: 25 }));
}

// =============================================================================
// Reset
// =============================================================================

/// Reset always lands on a fresh card with no lines.
#[test]
fn test_reset_clears_lines() {
    let pool = TermPool::builtin();
    let mut state = GameState::new(&pool, seeded(5)).unwrap();

    for round in 0..10 {
        for i in 0..5 {
            state.toggle(i * 5 + round % 5).unwrap();
        }
        assert!(state.has_bingo());

        state.reset(&pool).unwrap();
        assert_eq!(state.completed_lines(), 0);
        assert_eq!(state.card().selected_count(), 1);
    }
}

/// Reset with a different pool deals from that pool.
#[test]
fn test_reset_with_new_pool() {
    let mut state = GameState::new(&TermPool::builtin(), seeded(6)).unwrap();
    let numbered: Vec<String> = (0..25).map(|i| format!("n{i}")).collect();
    let pool = TermPool::new(numbered.clone());

    state.reset(&pool).unwrap();

    for (i, cell) in state.cells().iter().enumerate() {
        if i != FREE_INDEX {
            assert!(numbered.contains(&cell.label));
        }
    }
}

// =============================================================================
// Duplicate Handling
// =============================================================================

/// With dedup on, a pool of repeated phrases cannot fill a card.
#[test]
fn test_dedup_shrinks_pool() {
    let mut terms: Vec<String> = (0..20).map(|i| format!("t{i}")).collect();
    terms.extend((0..10).map(|i| format!("t{i}")));
    let pool = TermPool::new(terms);

    assert!(GameState::new(&pool, seeded(7)).is_ok());

    let err = GameState::new(&pool, seeded(7).with_dedup_terms(true)).unwrap_err();
    assert!(matches!(
        err,
        BingoError::InsufficientTerms {
            available: 20,
            required: 25
        }
    ));
}

/// With dedup on, managed terms repeating built-ins never appear twice.
#[test]
fn test_dedup_card_labels_distinct() {
    let pool = TermPool::merged(BUILTIN_TERMS.iter().take(20));
    let config = EngineConfig::new().with_dedup_terms(true);

    for seed in 0..50 {
        let state = GameState::new(&pool, config.clone().with_seed(seed)).unwrap();
        let labels: FxHashSet<&str> = state.cells().iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels.len(), 25, "seed {seed}");
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// Snapshot reflects the state and survives JSON.
#[test]
fn test_snapshot_json() {
    let mut state = GameState::new(&TermPool::builtin(), seeded(8)).unwrap();
    for i in [0, 5, 10, 15, 20] {
        state.toggle(i).unwrap();
    }

    let snapshot = state.snapshot();
    assert_eq!(snapshot.completed_lines, 1);
    assert_eq!(snapshot.cells.len(), 25);

    let json = serde_json::to_string(&snapshot).unwrap();
    let back: GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);
}
