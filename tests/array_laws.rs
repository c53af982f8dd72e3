//! Property-based tests for the sequence helpers.
//!
//! These tests verify the length and content laws of the immutable updaters,
//! the involution law of `reverse_array`, and the bounds of `make_trunc`.

use fnkit::array::updater::{add, delete, replace};
use fnkit::array::{get_first_n, make_trunc_with, reverse_array};
use fnkit::diagnostic::SilentSink;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Generates a small `Vec<i32>` for faster tests.
fn small_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..30)
}

proptest! {
    // =========================================================================
    // Updater Laws
    // =========================================================================

    /// add(i, xs) = S[..i] + xs + S[i..]
    #[test]
    fn prop_add_splices_in(
        sequence in small_vec(),
        adders in prop::collection::vec(any::<i32>(), 0..5),
        raw_index in 0usize..40
    ) {
        let updated = add(&sequence, raw_index, adders.clone());
        let index = raw_index.min(sequence.len());

        prop_assert_eq!(updated.len(), sequence.len() + adders.len());
        prop_assert_eq!(&updated[..index], &sequence[..index]);
        prop_assert_eq!(&updated[index..index + adders.len()], adders.as_slice());
        prop_assert_eq!(&updated[index + adders.len()..], &sequence[index..]);
    }

    /// delete(i) removes exactly the element at i when i is in range.
    #[test]
    fn prop_delete_in_range(sequence in prop::collection::vec(any::<i32>(), 1..30), seed: usize) {
        let index = seed % sequence.len();
        let updated = delete(&sequence, index);

        let mut expected = sequence.clone();
        expected.remove(index);
        prop_assert_eq!(updated, expected);
    }

    /// delete out of range is a copy.
    #[test]
    fn prop_delete_out_of_range_is_copy(sequence in small_vec(), offset in 0usize..10) {
        prop_assert_eq!(delete(&sequence, sequence.len() + offset), sequence);
    }

    /// Delete-Add Law: deleting what was just added at i restores the sequence.
    #[test]
    fn prop_delete_after_add(sequence in small_vec(), value: i32, seed: usize) {
        let index = seed % (sequence.len() + 1);
        prop_assert_eq!(delete(&add(&sequence, index, [value]), index), sequence);
    }

    /// Replace keeps the length and changes only the target index.
    #[test]
    fn prop_replace_in_range(sequence in prop::collection::vec(any::<i32>(), 1..30), value: i32, seed: usize) {
        let index = seed % sequence.len();
        let updated = replace(&sequence, index, value);

        prop_assert_eq!(updated.len(), sequence.len());
        prop_assert_eq!(updated[index], value);
        for (position, (before, after)) in sequence.iter().zip(&updated).enumerate() {
            if position != index {
                prop_assert_eq!(before, after);
            }
        }
    }

    // =========================================================================
    // Slicing Laws
    // =========================================================================

    /// Involution Law: reverse(reverse(S)) == S
    #[test]
    fn prop_reverse_is_involution(sequence in small_vec()) {
        prop_assert_eq!(reverse_array(&reverse_array(&sequence)), sequence);
    }

    #[test]
    fn prop_get_first_n_is_prefix(sequence in small_vec(), count in 0usize..40) {
        let prefix = get_first_n(Some(sequence.as_slice()), count);
        prop_assert_eq!(prefix.len(), count.min(sequence.len()));
        prop_assert!(sequence.starts_with(&prefix));
    }

    // =========================================================================
    // Truncation Laws
    // =========================================================================

    /// The result is a prefix, never longer than max or the whole-block length.
    #[test]
    fn prop_trunc_bounds(sequence in small_vec(), trunc in 1usize..8, max in 0usize..40) {
        let truncated = make_trunc_with(trunc, max, SilentSink)(sequence.as_slice());

        prop_assert!(sequence.starts_with(&truncated));
        prop_assert!(truncated.len() <= max);
        prop_assert_eq!(truncated.len(), max.min(sequence.len() / trunc * trunc));
    }

    /// When max is a multiple of trunc, the result is whole blocks.
    #[test]
    fn prop_trunc_even_max_gives_whole_blocks(sequence in small_vec(), trunc in 1usize..8, blocks in 0usize..6) {
        let truncated = make_trunc_with(trunc, trunc * blocks, SilentSink)(sequence.as_slice());
        prop_assert_eq!(truncated.len() % trunc, 0);
    }
}
