//! Batch gradient descent on the mean squared error of a line.
//!
//! `fit_linear` starts from `θ₀ = θ₁ = 0` on every call and takes exactly
//! `n_steps` full-batch steps. `loss_history[t]` is the error of the
//! predictions made *before* the update at step `t`, so the loss lags the
//! parameters by one step and `loss_history[0]` is always `mean(y²)`.
//! A learning rate that is too large diverges to huge or non-finite values;
//! that is returned as is.

use crate::dataset::Dataset;
use crate::derivative_descent::run;
use crate::error::{check_learning_rate, Result};
use crate::objective::MeanSquaredError;
use crate::utils::{S, V};
use ndarray::arr1;
use rayon::prelude::*;

/// Learning rates compared by the "learning rate impact" panel.
pub const IMPACT_RATES: [S; 3] = [0.01, 0.1, 0.5];

#[derive(Debug, Clone, PartialEq)]
pub struct LinearFit {
    pub intercept: S,
    pub slope: S,
    /// `(θ₀, θ₁)` after each step, starting with `(0, 0)`.
    pub trajectory: Vec<(S, S)>,
    pub loss_history: Vec<S>,
}

impl LinearFit {
    /// The fitted line at every `x`.
    pub fn predict(&self, x: &V) -> V {
        x.mapv(|xi| self.intercept + self.slope * xi)
    }

    pub fn final_loss(&self) -> Option<S> {
        self.loss_history.last().copied()
    }
}

pub fn fit_linear(data: &Dataset, learning_rate: S, n_steps: usize) -> Result<LinearFit> {
    check_learning_rate(learning_rate)?;
    log::debug!(
        "fit_linear: learning_rate={}, n_steps={}, m={}",
        learning_rate,
        n_steps,
        data.len()
    );

    let descent = run(
        MeanSquaredError::new(data),
        arr1(&[0., 0.]),
        learning_rate,
        n_steps,
    );
    let trajectory: Vec<(S, S)> = descent.trajectory.iter().map(|p| (p[0], p[1])).collect();
    let (intercept, slope) = trajectory[trajectory.len() - 1];
    if !(intercept.is_finite() && slope.is_finite()) {
        log::warn!(
            "fit_linear diverged with learning_rate={} after {} steps",
            learning_rate,
            n_steps
        );
    }

    Ok(LinearFit {
        intercept,
        slope,
        trajectory,
        loss_history: descent.costs,
    })
}

/// Loss histories for several learning rates over the same data.
///
/// Every run is independent, so they are computed in parallel; the output
/// keeps the order of `rates`.
pub fn compare_learning_rates(
    data: &Dataset,
    rates: &[S],
    n_steps: usize,
) -> Result<Vec<(S, Vec<S>)>> {
    rates
        .par_iter()
        .map(|&rate| fit_linear(data, rate, n_steps).map(|fit| (rate, fit.loss_history)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DatasetConfig;
    use crate::error::EngineError;
    use crate::objective::{mse, Objective};
    use quickcheck::{quickcheck, TestResult};

    fn data() -> Dataset {
        Dataset::generate(&DatasetConfig::default()).unwrap()
    }

    #[test]
    fn zero_learning_rate_stays_at_origin() {
        let d = data();
        let mean_y2 = d.y.mapv(|y| y * y).sum() / d.len() as S;
        let fit = fit_linear(&d, 0., 25).unwrap();
        assert!(fit.trajectory.iter().all(|&(a, b)| a == 0. && b == 0.));
        assert_eq!(fit.loss_history.len(), 25);
        for loss in fit.loss_history.iter() {
            assert!((loss - mean_y2).abs() < 1e-9 * mean_y2);
        }
    }

    #[test]
    fn first_loss_is_taken_before_the_first_update() {
        let d = data();
        let fit = fit_linear(&d, 0.01, 10).unwrap();
        let at_origin = mse(&V::zeros(d.len()), &d.y);
        assert_eq!(fit.loss_history[0], at_origin);
        assert_ne!(fit.trajectory[1], (0., 0.));
    }

    #[test]
    fn loss_at_step_t_is_the_error_of_trajectory_t() {
        let d = data();
        let fit = fit_linear(&d, 0.02, 30).unwrap();
        let o = MeanSquaredError::new(&d);
        for (t, loss) in fit.loss_history.iter().enumerate() {
            let (a, b) = fit.trajectory[t];
            assert_eq!(*loss, o.value(&arr1(&[a, b])));
        }
    }

    #[test]
    fn small_rate_converges_monotonically_to_least_squares() {
        let d = data();
        let fit = fit_linear(&d, 0.01, 20_000).unwrap();
        for w in fit.loss_history.windows(2) {
            assert!(w[1] <= w[0] + 1e-12, "loss increased: {} -> {}", w[0], w[1]);
        }
        let (b, w) = d.least_squares();
        assert!((fit.intercept - b).abs() < 1e-6, "{} vs {}", fit.intercept, b);
        assert!((fit.slope - w).abs() < 1e-6, "{} vs {}", fit.slope, w);
    }

    #[test]
    fn large_rate_diverges_without_error() {
        let d = data();
        let fit = fit_linear(&d, 0.5, 100).unwrap();
        let first = fit.loss_history[0];
        let last = fit.final_loss().unwrap();
        assert!(!last.is_finite() || last > first);
    }

    #[test]
    fn negative_rate_is_rejected() {
        assert!(matches!(
            fit_linear(&data(), -0.1, 10),
            Err(EngineError::InvalidLearningRate(_))
        ));
    }

    #[test]
    fn deterministic() {
        let d = data();
        assert_eq!(fit_linear(&d, 0.01, 40).unwrap(), fit_linear(&d, 0.01, 40).unwrap());
    }

    #[test]
    fn predict_uses_final_parameters() {
        let fit = LinearFit {
            intercept: 1.,
            slope: 2.,
            trajectory: vec![(0., 0.), (1., 2.)],
            loss_history: vec![3.],
        };
        assert_eq!(fit.predict(&arr1(&[0., 1., 2.])), arr1(&[1., 3., 5.]));
    }

    #[test]
    fn impact_runs_keep_rate_order() {
        let d = data();
        let runs = compare_learning_rates(&d, &IMPACT_RATES, 50).unwrap();
        assert_eq!(runs.len(), 3);
        for ((rate, history), expected) in runs.iter().zip(IMPACT_RATES.iter()) {
            assert_eq!(rate, expected);
            assert_eq!(history.len(), 50);
            assert_eq!(history, &fit_linear(&d, *rate, 50).unwrap().loss_history);
        }
    }

    #[test]
    fn impact_fails_on_any_bad_rate() {
        assert!(compare_learning_rates(&data(), &[0.01, f64::NAN], 5).is_err());
    }

    fn shape_holds(rate: u8, n_steps: u8) -> TestResult {
        let d = data();
        let fit = fit_linear(&d, rate as S / 10_000., n_steps as usize).unwrap();
        TestResult::from_bool(
            fit.trajectory.len() == n_steps as usize + 1
                && fit.loss_history.len() == n_steps as usize,
        )
    }

    quickcheck! {
        /// One more point than losses, for any rate and step count.
        fn prop_shape(rate: u8, n_steps: u8) -> TestResult {
            shape_holds(rate, n_steps)
        }
    }
}
