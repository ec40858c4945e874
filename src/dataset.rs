//! Synthetic regression data for the linear fit.
//!
//! The data is generated once from `y = slope * x + intercept + noise` on an
//! evenly spaced `x` grid, with Gaussian noise drawn from a seeded `Pcg64`.
//! A `Dataset` is never mutated after construction.

use crate::error::{EngineError, Result};
use crate::utils::{linspace, S, V};
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use rand_pcg::Pcg64;

/// Generation parameters. The defaults are the ones the regression
/// dashboard has always used.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetConfig {
    pub size: usize,
    pub x_min: S,
    pub x_max: S,
    pub slope: S,
    pub intercept: S,
    pub noise_std: S,
    pub seed: u64,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        DatasetConfig {
            size: 100,
            x_min: 0.,
            x_max: 10.,
            slope: 2.,
            intercept: 1.,
            noise_std: 1.,
            seed: 42,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub x: V,
    pub y: V,
}

impl Dataset {
    pub fn generate(config: &DatasetConfig) -> Result<Dataset> {
        if config.size == 0 {
            return Err(EngineError::InvalidDataset(
                "size must be at least 1".to_string(),
            ));
        }
        if !(config.x_min.is_finite() && config.x_max.is_finite() && config.x_min < config.x_max)
        {
            return Err(EngineError::InvalidDataset(format!(
                "x range [{}, {}] is empty",
                config.x_min, config.x_max
            )));
        }
        let noise = Normal::new(0., config.noise_std)
            .map_err(|e| EngineError::InvalidDataset(format!("noise: {}", e)))?;
        let mut oracle = Pcg64::seed_from_u64(config.seed);

        let x = linspace(config.x_min, config.x_max, config.size);
        let y = x.mapv(|xi| config.slope * xi + config.intercept + noise.sample(&mut oracle));
        log::debug!(
            "generated dataset: {} points, seed {}",
            config.size,
            config.seed
        );
        Ok(Dataset { x, y })
    }

    /// Build a dataset from given observations.
    pub fn from_points(x: V, y: V) -> Result<Dataset> {
        if x.is_empty() || x.len() != y.len() {
            return Err(EngineError::InvalidDataset(format!(
                "need equally many x and y values, got {} and {}",
                x.len(),
                y.len()
            )));
        }
        Ok(Dataset { x, y })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Closed-form ordinary least squares `(intercept, slope)`.
    ///
    /// Returns non-finite values when every `x` is identical.
    pub fn least_squares(&self) -> (S, S) {
        let m = self.len() as S;
        let x_mean = self.x.sum() / m;
        let y_mean = self.y.sum() / m;
        let dx = self.x.mapv(|xi| xi - x_mean);
        let dy = self.y.mapv(|yi| yi - y_mean);
        let slope = dx.dot(&dy) / dx.dot(&dx);
        (y_mean - slope * x_mean, slope)
    }
}
