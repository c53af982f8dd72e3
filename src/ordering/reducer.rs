use crate::error::InvalidArgumentError;

/// Separator used by [`make_join_string_reducer`] when the caller has no better choice.
pub const DEFAULT_CONNECT_SIGN: &str = ",";

/// Builds a fold step that joins transformed elements with `connect_sign`.
///
/// The step appends `transformer(current)` to the accumulator, followed by
/// `connect_sign` unless `current` is the last element of the sequence.
/// Drive it with [`reduce_indexed`](crate::array::reduce_indexed).
///
/// # Errors
///
/// Returns [`InvalidArgumentError::NotCallable`] when `transformer` is `None`.
///
/// # Examples
///
/// ```
/// use fnkit::array::reduce_indexed;
/// use fnkit::ordering::make_join_string_reducer;
///
/// let join = make_join_string_reducer(Some(|value: &i32| value.to_string()), "-").unwrap();
/// assert_eq!(reduce_indexed(&[1, 2, 3], String::new(), &join), "1-2-3");
/// ```
pub fn make_join_string_reducer<T, F, S>(
    transformer: Option<F>,
    connect_sign: &str,
) -> Result<impl Fn(String, &T, usize, &[T]) -> String, InvalidArgumentError>
where
    F: Fn(&T) -> S,
    S: AsRef<str>,
{
    let transformer = transformer.ok_or(InvalidArgumentError::NotCallable {
        function: "make_join_string_reducer",
        parameter: "transformer",
    })?;
    let connect_sign = connect_sign.to_owned();

    Ok(
        move |mut accumulator: String, current: &T, index: usize, sequence: &[T]| {
            accumulator.push_str(transformer(current).as_ref());
            if index + 1 != sequence.len() {
                accumulator.push_str(&connect_sign);
            }
            accumulator
        },
    )
}
