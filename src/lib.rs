//! # calculus-methods
//! The numerical engine behind a set of calculus and machine-learning
//! teaching dashboards: a registry of functions with their derivatives,
//! fixed-length gradient descent (a linear-regression fit and a descent on a
//! hill-shaped surface) and Riemann-sum integration.
//!
//! Descent is written once, as a `StreamingIterator` over an [`objective::Objective`]
//! (see [`derivative_descent`]), and instantiated by [`linear_fit`] and
//! [`surface`]. Every entry point recomputes from scratch and returns plain
//! numbers; nothing is cached between calls.
//!
//! ```
//! use calculus_methods::riemann::riemann_sum;
//!
//! let sum = riemann_sum("x²", 0., 2., 4, "left").unwrap();
//! assert!((sum.area - 1.75).abs() < 1e-12);
//! ```
#[cfg(test)]
extern crate quickcheck;

use streaming_iterator::*;

pub mod config;
pub mod dataset;
pub mod derivative_descent;
pub mod error;
pub mod functions;
pub mod linear_fit;
pub mod objective;
pub mod riemann;
pub mod surface;
pub mod utils;

pub use error::{EngineError, Result};

/// Pass the values from the streaming iterator through, running a
/// function on each for side effects.
pub struct Tee<I, F> {
    pub it: I,
    pub f: F,
}

pub fn tee<I, F, T>(it: I, f: F) -> Tee<I, F>
where
    I: Sized + StreamingIterator<Item = T>,
    F: FnMut(&T),
{
    Tee { it, f }
}

impl<I, F> StreamingIterator for Tee<I, F>
where
    I: StreamingIterator,
    F: FnMut(&I::Item),
{
    type Item = I::Item;

    #[inline]
    fn advance(&mut self) {
        // The side effect happens exactly once for each new value
        // generated.
        self.it.advance();
        if let Some(x) = self.it.get() {
            (self.f)(x);
        }
    }

    #[inline]
    fn get(&self) -> Option<&I::Item> {
        self.it.get()
    }
}

/// The final item of a streaming iterator, or `None` if it yields nothing.
pub fn last<I, T>(it: I) -> Option<T>
where
    I: StreamingIterator<Item = T>,
    T: Sized + Clone,
{
    it.fold(None, |_acc, i| Some((*i).clone()))
}
