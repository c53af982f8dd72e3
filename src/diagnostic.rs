//! Non-fatal diagnostics.
//!
//! Some helpers notice a suspicious configuration but still produce a
//! result. Instead of printing to a global console they hand a structured
//! [`Diagnostic`] to a [`DiagnosticSink`] chosen by the caller.
//!
//! - [`TracingSink`]: forwards to `tracing::warn!`
//! - [`SilentSink`]: drops everything
//! - any `Fn(&Diagnostic)` closure
//!
//! # Examples
//!
//! ```rust
//! use std::cell::RefCell;
//! use fnkit::array::make_trunc_with;
//! use fnkit::diagnostic::Diagnostic;
//!
//! let seen = RefCell::new(Vec::new());
//! {
//!     let truncate = make_trunc_with(4, 10, |diagnostic: &Diagnostic| {
//!         seen.borrow_mut().push(diagnostic.clone());
//!     });
//!     assert_eq!(truncate(&[1, 2, 3, 4, 5]), vec![1, 2, 3, 4]);
//! }
//! assert_eq!(
//!     seen.into_inner(),
//!     vec![Diagnostic::UnevenTruncation { trunc: 4, max: 10 }]
//! );
//! ```

use std::fmt;

/// A non-fatal condition reported by a helper.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Diagnostic {
    /// `max` is not a multiple of the truncation block size `trunc`.
    UnevenTruncation {
        /// Block size.
        trunc: usize,
        /// Upper bound on the number of kept elements.
        max: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnevenTruncation { trunc, max } => write!(
                formatter,
                "cannot truncate evenly: max {max} is not a multiple of {trunc}"
            ),
        }
    }
}

/// Receiver of [`Diagnostic`]s.
pub trait DiagnosticSink {
    /// Reports a diagnostic. Must not fail.
    fn emit(&self, diagnostic: &Diagnostic);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&Diagnostic),
{
    fn emit(&self, diagnostic: &Diagnostic) {
        self(diagnostic);
    }
}

/// Forwards diagnostics to the `tracing` warn level.
///
/// No subscriber is installed by this crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::UnevenTruncation { trunc, max } => {
                tracing::warn!(trunc, max, "{diagnostic}");
            }
        }
    }
}

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SilentSink;

impl DiagnosticSink for SilentSink {
    fn emit(&self, _diagnostic: &Diagnostic) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn uneven_truncation_display() {
        let diagnostic = Diagnostic::UnevenTruncation { trunc: 4, max: 10 };
        assert_eq!(
            diagnostic.to_string(),
            "cannot truncate evenly: max 10 is not a multiple of 4"
        );
    }

    #[rstest]
    fn closure_is_a_sink() {
        let count = Cell::new(0);
        let sink = |_: &Diagnostic| count.set(count.get() + 1);
        sink.emit(&Diagnostic::UnevenTruncation { trunc: 3, max: 4 });
        sink.emit(&Diagnostic::UnevenTruncation { trunc: 3, max: 5 });
        assert_eq!(count.get(), 2);
    }

    #[rstest]
    fn builtin_sinks_accept_diagnostics() {
        let diagnostic = Diagnostic::UnevenTruncation { trunc: 0, max: 36 };
        TracingSink.emit(&diagnostic);
        SilentSink.emit(&diagnostic);
    }
}
