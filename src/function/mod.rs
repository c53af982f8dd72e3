//! Function application utilities.
//!
//! # Overview
//!
//! - [`bind_right`]: fixes a receiver and trailing arguments, then applies
//!   all arguments in reverse order
//! - [`compose!`](crate::compose): right-to-left composition
//! - [`pipe!`](crate::pipe): left-to-right application
//!
//! # Laws
//!
//! - **Identity**: `compose!(f)` is `f`
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Pipe/compose duality**: `pipe!(x, g, f) == compose!(f, g)(x)`

mod bind;
mod compose_macro;
mod pipe_macro;

pub use bind::bind_right;
