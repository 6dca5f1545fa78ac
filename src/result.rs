//! Helpers for building `Result` values.
//!
//! These are the plain, non-effectful conversions the derived constructors
//! in [`crate::effect::from_result`] are built from.

/// `Ok(value)` when `predicate` holds, otherwise `Err(on_false(value))`.
///
/// ```
/// use undertow::result::from_predicate;
///
/// assert_eq!(from_predicate(7, |n| *n > 5, |n| format!("{n} too small")), Ok(7));
/// assert_eq!(
///     from_predicate(3, |n| *n > 5, |n| format!("{n} too small")),
///     Err("3 too small".to_string())
/// );
/// ```
pub fn from_predicate<A, E>(
    value: A,
    predicate: impl FnOnce(&A) -> bool,
    on_false: impl FnOnce(A) -> E,
) -> Result<A, E> {
    from_refinement(
        value,
        |value| if predicate(&value) { Ok(value) } else { Err(value) },
        on_false,
    )
}

/// Narrow `value` with `refinement`, or fail with `on_false`.
///
/// A refinement returns the narrowed value in `Ok`, or hands the original
/// value back in `Err` so `on_false` can describe it.
///
/// ```
/// use undertow::result::from_refinement;
///
/// let non_negative = |n: i64| u64::try_from(n).map_err(|_| n);
/// assert_eq!(from_refinement(5, non_negative, |n| n), Ok(5u64));
/// assert_eq!(from_refinement(-5, non_negative, |n| n), Err(-5));
/// ```
pub fn from_refinement<A, B, E>(
    value: A,
    refinement: impl FnOnce(A) -> Result<B, A>,
    on_false: impl FnOnce(A) -> E,
) -> Result<B, E> {
    refinement(value).map_err(on_false)
}

/// `Ok` for `Some`, `Err(on_none())` for `None`.
pub fn from_option<A, E>(option: Option<A>, on_none: impl FnOnce() -> E) -> Result<A, E> {
    option.ok_or_else(on_none)
}
