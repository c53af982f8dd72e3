//! # fnkit
//!
//! Functional helpers for immutable record and sequence manipulation.
//!
//! ## Overview
//!
//! Every helper is a small pure function (or a factory returning one) that
//! never mutates its input and always hands back a fresh container:
//!
//! - **Records**: key injection over lists and single objects, payload
//!   composers, property filters (JSON values via `serde_json`)
//! - **Arrays**: immutable replace/add/delete, block truncation, slicing helpers
//! - **Ordering**: comparator and join-string reducer factories
//! - **Text**: ellipsis truncation
//! - **Functions**: right-bound application, `compose!` and `pipe!`
//!
//! ## Feature Flags
//!
//! - `record` (default): JSON record helpers
//! - `serde`: `Serialize`/`Deserialize` for [`diagnostic::Diagnostic`]
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fnkit::prelude::*;
//!
//! let updated = array::updater::add(&[1, 2, 5], 2, [3, 4]);
//! assert_eq!(updated, vec![1, 2, 3, 4, 5]);
//!
//! let mut values = vec![4, 1, 3, 2];
//! values.sort_by(make_comparator(Some(|value: &i32| value % 2 == 0), false).unwrap());
//! assert_eq!(values, vec![1, 3, 4, 2]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the factories and helpers of every enabled module.
///
/// # Usage
///
/// ```rust
/// use fnkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::array::{
        self, get_first_n, make_trunc, make_trunc_with, reduce_indexed, reverse_array,
    };
    pub use crate::diagnostic::{Diagnostic, DiagnosticSink, SilentSink, TracingSink};
    pub use crate::error::InvalidArgumentError;
    pub use crate::function::bind_right;
    pub use crate::ordering::{make_comparator, make_join_string_reducer};
    pub use crate::text::trunc_str;

    #[cfg(feature = "record")]
    pub use crate::record::*;
}

pub mod array;
pub mod diagnostic;
pub mod error;
pub mod function;
pub mod ordering;
pub mod text;

#[cfg(feature = "record")]
pub mod record;
