//! Differentiable objectives for the descent runs.
//!
//! Gradients are written out by hand, one named function per formula.

use crate::dataset::Dataset;
use crate::functions::FunctionEntry;
use crate::utils::{S, V};
use ndarray::arr1;

/// A scalar function of a point together with its analytic gradient.
pub trait Objective {
    /// Number of coordinates of a point.
    fn dimension(&self) -> usize;
    fn value(&self, point: &V) -> S;
    fn gradient(&self, point: &V) -> V;
}

/// Mean squared error of the line `θ₀ + θ₁·x` over a dataset. Points are
/// `[θ₀, θ₁]`.
#[derive(Debug, Clone, Copy)]
pub struct MeanSquaredError<'a> {
    pub data: &'a Dataset,
}

impl<'a> MeanSquaredError<'a> {
    pub fn new(data: &'a Dataset) -> Self {
        MeanSquaredError { data }
    }

    pub fn predictions(&self, theta_0: S, theta_1: S) -> V {
        self.data.x.mapv(|x| theta_0 + theta_1 * x)
    }
}

/// `mean((ŷ - y)²)`
pub fn mse(predictions: &V, y: &V) -> S {
    let m = y.len() as S;
    (predictions - y).mapv(|e| e * e).sum() / m
}

/// `(-(2/m)·Σ(y - ŷ), -(2/m)·Σ x·(y - ŷ))`
pub fn mse_gradient(x: &V, y: &V, predictions: &V) -> (S, S) {
    let m = y.len() as S;
    let residual = y - predictions;
    let g_0 = -(2. / m) * residual.sum();
    let g_1 = -(2. / m) * (x * &residual).sum();
    (g_0, g_1)
}

impl<'a> Objective for MeanSquaredError<'a> {
    fn dimension(&self) -> usize {
        2
    }

    fn value(&self, point: &V) -> S {
        mse(&self.predictions(point[0], point[1]), &self.data.y)
    }

    fn gradient(&self, point: &V) -> V {
        let predictions = self.predictions(point[0], point[1]);
        let (g_0, g_1) = mse_gradient(&self.data.x, &self.data.y, &predictions);
        arr1(&[g_0, g_1])
    }
}

/// The hill `f(x, y) = x²/2 + y² + sin(x)·cos(y)`. Points are `[x, y]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HillSurface;

impl HillSurface {
    pub fn height(x: S, y: S) -> S {
        x.powi(2) / 2. + y.powi(2) + x.sin() * y.cos()
    }

    /// `(x + cos(y)·cos(x), 2y - sin(y)·sin(x))`
    pub fn slope(x: S, y: S) -> (S, S) {
        (x + y.cos() * x.cos(), 2. * y - y.sin() * x.sin())
    }
}

impl Objective for HillSurface {
    fn dimension(&self) -> usize {
        2
    }

    fn value(&self, point: &V) -> S {
        HillSurface::height(point[0], point[1])
    }

    fn gradient(&self, point: &V) -> V {
        let (d_x, d_y) = HillSurface::slope(point[0], point[1]);
        arr1(&[d_x, d_y])
    }
}

/// A one-dimensional registry function, descended along its derivative.
#[derive(Debug, Clone, Copy)]
pub struct RegistryObjective {
    pub function: FunctionEntry,
}

impl RegistryObjective {
    pub fn new(function: FunctionEntry) -> Self {
        RegistryObjective { function }
    }
}

impl Objective for RegistryObjective {
    fn dimension(&self) -> usize {
        1
    }

    fn value(&self, point: &V) -> S {
        self.function.evaluate(point[0])
    }

    fn gradient(&self, point: &V) -> V {
        arr1(&[self.function.derivative(point[0])])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::FunctionId;

    fn numeric_gradient<O: Objective>(o: &O, point: &V) -> V {
        let h = 1e-6;
        V::from_shape_fn(o.dimension(), |i| {
            let mut up = point.clone();
            let mut down = point.clone();
            up[i] += h;
            down[i] -= h;
            (o.value(&up) - o.value(&down)) / (2. * h)
        })
    }

    fn assert_close(a: &V, b: &V, tol: S) {
        for (u, v) in a.iter().zip(b.iter()) {
            assert!((u - v).abs() < tol, "{} vs {}", a, b);
        }
    }

    #[test]
    fn hill_gradient_matches_finite_differences() {
        for &(x, y) in &[(0., 0.), (2., 2.), (-3.1, 0.7), (4.5, -4.5)] {
            let p = arr1(&[x, y]);
            assert_close(
                &HillSurface.gradient(&p),
                &numeric_gradient(&HillSurface, &p),
                1e-5,
            );
        }
    }

    #[test]
    fn hill_gradient_sign_convention() {
        // At the origin only the cos(y)·cos(x) term survives.
        assert_eq!(HillSurface::slope(0., 0.), (1., 0.));
        assert_eq!(HillSurface::height(0., 0.), 0.);
    }

    #[test]
    fn mse_gradient_matches_finite_differences() {
        let data = Dataset::from_points(arr1(&[0., 1., 2., 3.]), arr1(&[1., 2.5, 5.2, 6.9]))
            .unwrap();
        let o = MeanSquaredError::new(&data);
        for &(b, w) in &[(0., 0.), (1., 2.), (-0.5, 3.)] {
            let p = arr1(&[b, w]);
            assert_close(&o.gradient(&p), &numeric_gradient(&o, &p), 1e-5);
        }
    }

    #[test]
    fn mse_of_exact_fit_is_zero() {
        let data = Dataset::from_points(arr1(&[0., 1., 2.]), arr1(&[1., 3., 5.])).unwrap();
        let o = MeanSquaredError::new(&data);
        let p = arr1(&[1., 2.]);
        assert_eq!(o.value(&p), 0.);
        assert_eq!(o.gradient(&p), arr1(&[0., 0.]));
    }

    #[test]
    fn mse_sample_calculation() {
        // Predictions [2, 3] against actuals [1, 4]: ((1)² + (-1)²) / 2.
        assert_eq!(mse(&arr1(&[2., 3.]), &arr1(&[1., 4.])), 1.);
    }

    #[test]
    fn registry_objective_uses_the_registry_derivative() {
        let o = RegistryObjective::new(FunctionId::Cube.entry());
        assert_eq!(o.dimension(), 1);
        assert_eq!(o.value(&arr1(&[2.])), 8.);
        assert_eq!(o.gradient(&arr1(&[2.])), arr1(&[12.]));
    }
}
