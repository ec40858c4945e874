//! Riemann-sum approximation of definite integrals.
//!
//! `[a, b]` is cut into `n` sub-intervals of width `dx = (b - a) / n` and each
//! contributes a rectangle whose height is `f` at its left edge, right edge
//! or midpoint.

use crate::error::{check_interval, EngineError, Result};
use crate::functions::FunctionId;
use crate::utils::{linspace, S, V};
use ndarray::s;
use std::fmt;
use std::str::FromStr;

/// Interval the integration dashboard always uses.
pub const DEFAULT_INTERVAL: (S, S) = (0., 2.);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiemannMethod {
    Left,
    Right,
    Midpoint,
}

impl RiemannMethod {
    pub fn name(self) -> &'static str {
        match self {
            RiemannMethod::Left => "left",
            RiemannMethod::Right => "right",
            RiemannMethod::Midpoint => "midpoint",
        }
    }

    /// Parse `name`, treating anything that is not exactly `left` or
    /// `right` as `midpoint`.
    ///
    /// This is how the dashboard has always read its method selector.
    /// `FromStr` is the strict alternative.
    pub fn from_name_or_midpoint(name: &str) -> RiemannMethod {
        name.parse().unwrap_or_else(|_| {
            log::warn!("unknown partition method `{}`, using midpoint", name);
            RiemannMethod::Midpoint
        })
    }
}

impl FromStr for RiemannMethod {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "left" => Ok(RiemannMethod::Left),
            "right" => Ok(RiemannMethod::Right),
            "midpoint" => Ok(RiemannMethod::Midpoint),
            other => Err(EngineError::UnknownMethod(other.to_string())),
        }
    }
}

impl fmt::Display for RiemannMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiemannSum {
    pub method: RiemannMethod,
    /// The `n + 1` partition boundaries, from `a` to `b`.
    pub boundaries: V,
    pub dx: S,
    /// One sample point per sub-interval.
    pub samples: V,
    /// `f` at each sample point.
    pub heights: V,
    pub area: S,
}

impl RiemannSum {
    pub fn partitions(&self) -> usize {
        self.samples.len()
    }

    /// `(left edge, right edge, height)` of every rectangle.
    pub fn rectangles(&self) -> impl Iterator<Item = (S, S, S)> + '_ {
        let dx = self.dx;
        self.boundaries
            .iter()
            .zip(self.heights.iter())
            .map(move |(&x, &h)| (x, x + dx, h))
    }
}

/// Approximate `∫ₐᵇ f(x) dx` with `n` rectangles.
pub fn integrate<F>(f: F, a: S, b: S, n: usize, method: RiemannMethod) -> Result<RiemannSum>
where
    F: Fn(S) -> S,
{
    check_interval(a, b)?;
    if n == 0 {
        return Err(EngineError::EmptyPartition);
    }

    let boundaries = linspace(a, b, n + 1);
    let dx = (b - a) / n as S;
    let left = boundaries.slice(s![..n]);
    let right = boundaries.slice(s![1..]);
    let samples = match method {
        RiemannMethod::Left => left.to_owned(),
        RiemannMethod::Right => right.to_owned(),
        RiemannMethod::Midpoint => (&left + &right) / 2.,
    };
    let heights = samples.mapv(|x| f(x));
    let area = heights.mapv(|h| h * dx).sum();

    Ok(RiemannSum {
        method,
        boundaries,
        dx,
        samples,
        heights,
        area,
    })
}

/// Riemann sum of an integration-catalog function, selected by id.
pub fn riemann_sum(function_id: &str, a: S, b: S, n: usize, method: &str) -> Result<RiemannSum> {
    let id: FunctionId = function_id.parse()?;
    if !id.is_integrable() {
        return Err(EngineError::NotIntegrable(function_id.to_string()));
    }
    let method: RiemannMethod = method.parse()?;
    log::debug!(
        "riemann_sum: {} over [{}, {}], n={}, {}",
        id,
        a,
        b,
        n,
        method
    );
    let f = id.entry();
    integrate(|x| f.evaluate(x), a, b, n, method)
}
