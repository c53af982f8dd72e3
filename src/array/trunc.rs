//! Block truncation.

use crate::diagnostic::{Diagnostic, DiagnosticSink, TracingSink};

/// Upper bound used by [`make_trunc`] when the caller has no better choice.
pub const DEFAULT_TRUNC_MAX: usize = 36;

/// Creates a function that truncates a sequence to whole blocks of `trunc`
/// elements, keeping at most `max` of them.
///
/// Warnings go to [`TracingSink`]. See [`make_trunc_with`] for the exact
/// semantics and for injecting another sink.
///
/// # Examples
///
/// ```
/// use fnkit::array::make_trunc;
///
/// let truncate = make_trunc(3, 9);
/// assert_eq!(truncate(&[1, 2, 3, 4, 5, 6, 7, 8]), vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn make_trunc<T: Clone>(trunc: usize, max: usize) -> impl Fn(&[T]) -> Vec<T> {
    make_trunc_with(trunc, max, TracingSink)
}

/// Creates a block-truncating function that reports to `sink`.
///
/// The returned function:
///
/// 1. emits [`Diagnostic::UnevenTruncation`] when `max` is not a multiple of
///    `trunc` (a `trunc` of zero always counts as uneven), then carries on;
/// 2. keeps the first `max` elements;
/// 3. of those, keeps the first `floor(len / trunc) * trunc`, where `len` is
///    the length of the **input**, not of the `max`-capped prefix.
///
/// With `trunc == 0` the block count is undefined and the result is always
/// empty.
///
/// # Examples
///
/// ```
/// use fnkit::array::make_trunc_with;
/// use fnkit::diagnostic::SilentSink;
///
/// // 40 / 4 = 10 blocks of 4 from the input, but max caps it at 10 elements.
/// let truncate = make_trunc_with(4, 10, SilentSink);
/// let input: Vec<u32> = (0..40).collect();
/// assert_eq!(truncate(input.as_slice()).len(), 10);
/// ```
pub fn make_trunc_with<T, S>(trunc: usize, max: usize, sink: S) -> impl Fn(&[T]) -> Vec<T>
where
    T: Clone,
    S: DiagnosticSink,
{
    move |items: &[T]| {
        if trunc == 0 || !max.is_multiple_of(trunc) {
            sink.emit(&Diagnostic::UnevenTruncation { trunc, max });
        }
        let whole_blocks = items
            .len()
            .checked_div(trunc)
            .map_or(0, |blocks| blocks * trunc);
        items.iter().take(max.min(whole_blocks)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::SilentSink;
    use rstest::rstest;
    use std::cell::RefCell;

    #[rstest]
    #[case(3, 9, 8, 6)]
    #[case(3, 9, 20, 9)]
    #[case(4, 36, 7, 4)]
    #[case(5, 5, 4, 0)]
    #[case(1, 3, 10, 3)]
    #[case(2, 36, 0, 0)]
    fn keeps_whole_blocks(
        #[case] trunc: usize,
        #[case] max: usize,
        #[case] input_len: usize,
        #[case] expected_len: usize,
    ) {
        let input: Vec<usize> = (0..input_len).collect();
        let truncated = make_trunc_with(trunc, max, SilentSink)(input.as_slice());
        assert_eq!(truncated, (0..expected_len).collect::<Vec<_>>());
    }

    #[rstest]
    fn block_count_uses_input_length() {
        // max 10 with blocks of 4: the cap leaves 10 elements, which are kept
        // because the block count comes from the 12-element input.
        let input: Vec<u8> = (0..12).collect();
        let truncated = make_trunc_with(4, 10, SilentSink)(input.as_slice());
        assert_eq!(truncated.len(), 10);
    }

    #[rstest]
    fn zero_trunc_is_always_empty() {
        let seen = RefCell::new(Vec::new());
        {
            let truncate = make_trunc_with(0, 36, |diagnostic: &Diagnostic| {
                seen.borrow_mut().push(diagnostic.clone());
            });
            assert!(truncate(&[1, 2, 3]).is_empty());
        }
        assert_eq!(
            seen.into_inner(),
            vec![Diagnostic::UnevenTruncation { trunc: 0, max: 36 }]
        );
    }

    #[rstest]
    #[case(3, 9, 0)]
    #[case(4, 10, 1)]
    #[case(6, DEFAULT_TRUNC_MAX, 0)]
    #[case(7, DEFAULT_TRUNC_MAX, 1)]
    fn warns_once_per_call_when_uneven(
        #[case] trunc: usize,
        #[case] max: usize,
        #[case] expected_warnings: usize,
    ) {
        let warnings = RefCell::new(0);
        {
            let truncate = make_trunc_with(trunc, max, |_: &Diagnostic| {
                *warnings.borrow_mut() += 1;
            });
            let _ = truncate(&[1, 2, 3]);
        }
        assert_eq!(warnings.into_inner(), expected_warnings);
    }

    #[rstest]
    fn default_sink_still_truncates() {
        let truncate = make_trunc(4, 10);
        assert_eq!(
            truncate(&["a", "b", "c", "d", "e"]),
            vec!["a", "b", "c", "d"]
        );
    }
}
