//! Comparator and reducer factories.
//!
//! Both factories take their function argument as an [`Option`]: `None`
//! stands for "no callable supplied" and is rejected up front with
//! [`InvalidArgumentError`](crate::error::InvalidArgumentError), before the
//! returned function is ever used.
//!
//! - [`make_comparator`]: partition-style ordering from a predicate
//! - [`make_join_string_reducer`]: separator-joining fold step

mod comparator;
mod reducer;

pub use comparator::make_comparator;
pub use reducer::{DEFAULT_CONNECT_SIGN, make_join_string_reducer};
