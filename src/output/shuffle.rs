//! Display shuffling
//!
//! Matches are shown in random order so the list does not always lead with
//! the same words. Shuffling works on a copy and never feeds back into
//! filtering or ranking.

use crate::core::Word;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Build the RNG used for display shuffling
///
/// A seed makes the display order reproducible.
#[must_use]
pub fn display_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// Return a shuffled copy of the words
#[must_use]
pub fn shuffled<R: Rng + ?Sized>(words: &[Word], rng: &mut R) -> Vec<Word> {
    let mut shown = words.to_vec();
    shown.shuffle(rng);
    shown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    const SAMPLE: &[&str] = &["spice", "slice", "space", "stage", "stale", "crane", "slate"];

    #[test]
    fn same_seed_same_order() {
        let words = words_from_slice(SAMPLE);
        let first = shuffled(&words, &mut display_rng(Some(7)));
        let second = shuffled(&words, &mut display_rng(Some(7)));
        assert_eq!(first, second);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let words = words_from_slice(SAMPLE);
        let shown = shuffled(&words, &mut display_rng(Some(42)));

        let mut original: Vec<&str> = words.iter().map(Word::text).collect();
        let mut permuted: Vec<&str> = shown.iter().map(Word::text).collect();
        original.sort_unstable();
        permuted.sort_unstable();
        assert_eq!(original, permuted);
    }

    #[test]
    fn source_is_untouched() {
        let words = words_from_slice(SAMPLE);
        let _ = shuffled(&words, &mut display_rng(None));
        assert_eq!(words, words_from_slice(SAMPLE));
    }

    #[test]
    fn empty_input() {
        assert!(shuffled(&[], &mut display_rng(Some(1))).is_empty());
    }
}
