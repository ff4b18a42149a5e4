//! Random selection of card terms.
//!
//! `shuffle` is a Fisher-Yates permutation driven by an injected
//! `RandomSource`; `sample_card_terms` takes the first
//! [`CARD_TERM_COUNT`] entries of a shuffled pool.

use crate::core::{BingoError, RandomSource, Result};

/// Number of terms drawn for one card, including the slot the free cell
/// later overwrites.
pub const CARD_TERM_COUNT: usize = 25;

/// Return a uniformly random permutation of `items`.
///
/// The input is left untouched. Iterates `i` from `len - 1` down to `1`,
/// drawing `j` from `0..=i` and swapping.
pub fn shuffle<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: RandomSource + ?Sized,
{
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.index_inclusive(i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Draw the 25 terms for a new card.
///
/// Fails with [`BingoError::InsufficientTerms`] when the pool is shorter
/// than [`CARD_TERM_COUNT`].
pub fn sample_card_terms<S, R>(pool: &[S], rng: &mut R) -> Result<Vec<String>>
where
    S: AsRef<str>,
    R: RandomSource + ?Sized,
{
    if pool.len() < CARD_TERM_COUNT {
        log::warn!(
            "Term pool too small for a card, have {} but need {}",
            pool.len(),
            CARD_TERM_COUNT
        );
        return Err(BingoError::InsufficientTerms {
            available: pool.len(),
            required: CARD_TERM_COUNT,
        });
    }

    let borrowed: Vec<&str> = pool.iter().map(AsRef::as_ref).collect();
    let mut picked = shuffle(&borrowed, rng);
    picked.truncate(CARD_TERM_COUNT);
    Ok(picked.into_iter().map(str::to_owned).collect())
}
