//! Gradient descent on the hill `f(x, y) = x²/2 + y² + sin(x)·cos(y)`.

use crate::derivative_descent::run;
use crate::error::{check_learning_rate, Result};
use crate::objective::HillSurface;
use crate::utils::{arange, S, V};
use ndarray::{arr1, Array2};

/// Step count the surface dashboard uses.
pub const DEFAULT_SURFACE_STEPS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePoint {
    pub x: S,
    pub y: S,
    /// Height of the surface at `(x, y)`. The start point is reported
    /// without one; every point reached by a step has it.
    pub z: Option<S>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SurfacePath {
    pub points: Vec<SurfacePoint>,
}

impl SurfacePath {
    pub fn start(&self) -> Option<&SurfacePoint> {
        self.points.first()
    }

    pub fn end(&self) -> Option<&SurfacePoint> {
        self.points.last()
    }

    /// Heights of the points reached by steps, in order.
    pub fn heights(&self) -> Vec<S> {
        self.points.iter().filter_map(|p| p.z).collect()
    }
}

/// Descend from `(x_0, y_0)` for `n_steps` steps of size `learning_rate`.
pub fn descend_surface(x_0: S, y_0: S, learning_rate: S, n_steps: usize) -> Result<SurfacePath> {
    check_learning_rate(learning_rate)?;
    log::debug!(
        "descend_surface: start=({}, {}), learning_rate={}, n_steps={}",
        x_0,
        y_0,
        learning_rate,
        n_steps
    );

    let descent = run(HillSurface, arr1(&[x_0, y_0]), learning_rate, n_steps);
    let points = descent
        .trajectory
        .iter()
        .enumerate()
        .map(|(t, p)| SurfacePoint {
            x: p[0],
            y: p[1],
            z: if t == 0 {
                None
            } else {
                Some(HillSurface::height(p[0], p[1]))
            },
        })
        .collect();
    Ok(SurfacePath { points })
}

/// Heights of the surface on a regular grid.
///
/// `z[[i, j]]` is the height at `(xs[j], ys[i])`, so rows follow `y`.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceGrid {
    pub xs: V,
    pub ys: V,
    pub z: Array2<S>,
}

impl HillSurface {
    /// Sample the surface over `[x_lo, x_hi) × [y_lo, y_hi)` every `step`.
    pub fn grid(x_range: (S, S), y_range: (S, S), step: S) -> SurfaceGrid {
        let xs = arange(x_range.0, x_range.1, step);
        let ys = arange(y_range.0, y_range.1, step);
        let z = Array2::from_shape_fn((ys.len(), xs.len()), |(i, j)| {
            HillSurface::height(xs[j], ys[i])
        });
        SurfaceGrid { xs, ys, z }
    }

    /// The grid the dashboard draws under the descent path.
    pub fn default_grid() -> SurfaceGrid {
        HillSurface::grid((-5., 5.), (-5., 5.), 0.1)
    }
}
