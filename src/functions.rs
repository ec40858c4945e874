//! Registry of closed-form functions and their derivatives.
//!
//! The registry is a closed enum: every id a dashboard can send maps to a
//! `FunctionId` variant, and each variant knows its value, derivative and
//! display labels. Evaluation outside a function's domain (`ln(0)`, `tan`
//! at an asymptote) is not caught and yields non-finite numbers.

use crate::error::{EngineError, Result};
use crate::utils::{linspace, S, V};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionId {
    Square,
    Cube,
    Sine,
    Exp,
    Ln,
    Cosine,
    Tangent,
}

impl FunctionId {
    /// Everything the derivative explorer offers.
    pub const ALL: [FunctionId; 7] = [
        FunctionId::Square,
        FunctionId::Cube,
        FunctionId::Sine,
        FunctionId::Exp,
        FunctionId::Ln,
        FunctionId::Cosine,
        FunctionId::Tangent,
    ];

    /// The smaller catalog offered by the integrator.
    pub const INTEGRABLE: [FunctionId; 4] = [
        FunctionId::Square,
        FunctionId::Cube,
        FunctionId::Sine,
        FunctionId::Exp,
    ];

    pub const DEFAULT: FunctionId = FunctionId::Square;

    pub fn id(self) -> &'static str {
        match self {
            FunctionId::Square => "x²",
            FunctionId::Cube => "x³",
            FunctionId::Sine => "sin(x)",
            FunctionId::Exp => "e^x",
            FunctionId::Ln => "ln(x)",
            FunctionId::Cosine => "cos(x)",
            FunctionId::Tangent => "tan(x)",
        }
    }

    pub fn is_integrable(self) -> bool {
        FunctionId::INTEGRABLE.contains(&self)
    }

    /// Resolve `id`, substituting `x²` for anything unrecognized.
    ///
    /// This is the dashboards' historical behavior. Prefer `FromStr` or
    /// [`lookup_function`], which report unknown ids.
    pub fn from_id_or_default(id: &str) -> FunctionId {
        id.parse().unwrap_or_else(|_| {
            log::warn!(
                "unknown function id `{}`, falling back to `{}`",
                id,
                FunctionId::DEFAULT.id()
            );
            FunctionId::DEFAULT
        })
    }

    pub fn entry(self) -> FunctionEntry {
        FunctionEntry { id: self }
    }
}

impl FromStr for FunctionId {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        FunctionId::ALL
            .iter()
            .copied()
            .find(|f| f.id() == s)
            .ok_or_else(|| EngineError::UnknownFunction(s.to_string()))
    }
}

impl fmt::Display for FunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.id())
    }
}

/// Value, derivative and labels of one registry function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionEntry {
    pub id: FunctionId,
}

impl FunctionEntry {
    pub fn evaluate(&self, x: S) -> S {
        match self.id {
            FunctionId::Square => x.powi(2),
            FunctionId::Cube => x.powi(3),
            FunctionId::Sine => x.sin(),
            FunctionId::Exp => x.exp(),
            // The explorer plots ln over negative x too, so it takes |x|.
            FunctionId::Ln => x.abs().ln(),
            FunctionId::Cosine => x.cos(),
            FunctionId::Tangent => x.tan(),
        }
    }

    pub fn derivative(&self, x: S) -> S {
        match self.id {
            FunctionId::Square => 2. * x,
            FunctionId::Cube => 3. * x.powi(2),
            FunctionId::Sine => x.cos(),
            FunctionId::Exp => x.exp(),
            FunctionId::Ln => 1. / x,
            FunctionId::Cosine => -x.sin(),
            FunctionId::Tangent => 1. / x.cos().powi(2),
        }
    }

    pub fn label(&self) -> &'static str {
        match self.id {
            FunctionId::Square => "f(x) = x²",
            FunctionId::Cube => "f(x) = x³",
            FunctionId::Sine => "f(x) = sin(x)",
            FunctionId::Exp => "f(x) = e^x",
            FunctionId::Ln => "f(x) = ln(x)",
            FunctionId::Cosine => "f(x) = cos(x)",
            FunctionId::Tangent => "f(x) = tan(x)",
        }
    }

    pub fn derivative_label(&self) -> &'static str {
        match self.id {
            FunctionId::Square => "f'(x) = 2x",
            FunctionId::Cube => "f'(x) = 3x²",
            FunctionId::Sine => "f'(x) = cos(x)",
            FunctionId::Exp => "f'(x) = e^x",
            FunctionId::Ln => "f'(x) = 1/x",
            FunctionId::Cosine => "f'(x) = -sin(x)",
            FunctionId::Tangent => "f'(x) = sec²(x)",
        }
    }

    pub fn evaluate_all(&self, xs: &V) -> V {
        xs.mapv(|x| self.evaluate(x))
    }

    pub fn derivative_all(&self, xs: &V) -> V {
        xs.mapv(|x| self.derivative(x))
    }

    /// The tangent line at `x_point`, evaluated at every `xs`.
    pub fn tangent_line(&self, x_point: S, xs: &V) -> V {
        let y0 = self.evaluate(x_point);
        let slope = self.derivative(x_point);
        xs.mapv(|x| y0 + slope * (x - x_point))
    }

    /// Sample `f` and `f'` on `count` evenly spaced points over `[lo, hi]`.
    pub fn sample_curve(&self, lo: S, hi: S, count: usize) -> Curve {
        let x = linspace(lo, hi, count);
        let y = self.evaluate_all(&x);
        let dy = self.derivative_all(&x);
        Curve { x, y, dy }
    }
}

/// A function and its derivative sampled on a common grid.
#[derive(Debug, Clone)]
pub struct Curve {
    pub x: V,
    pub y: V,
    pub dy: V,
}

/// Look up a registry entry by its display id, e.g. `"sin(x)"`.
pub fn lookup_function(id: &str) -> Result<FunctionEntry> {
    Ok(id.parse::<FunctionId>()?.entry())
}
