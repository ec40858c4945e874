//! Plain gradient descent as a StreamingIterator.
//!
//! Every optimizer in this crate is this one loop with a different
//! `Objective`: each `advance` records the objective at the current point
//! and then moves the point by `-step_size * gradient`. There is no
//! convergence test; callers decide how many steps to take.

use crate::objective::Objective;
use crate::tee;
use crate::utils::{S, V};
use streaming_iterator::*;

#[derive(Debug, Clone)]
pub struct GradientDescent<O>
where
    O: Objective,
{
    pub objective: O,
    pub step_size: S,
    /// Current point.
    pub x: V,
    /// Objective value at the point the last step started from; NaN
    /// before the first step.
    pub prior_cost: S,
    pub steps_taken: usize,
}

impl<O> GradientDescent<O>
where
    O: Objective,
{
    pub fn new(objective: O, step_size: S, x_0: V) -> GradientDescent<O> {
        assert_eq!(
            x_0.len(),
            objective.dimension(),
            "start point does not match the objective's dimension"
        );
        GradientDescent {
            objective,
            step_size,
            x: x_0,
            prior_cost: f64::NAN,
            steps_taken: 0,
        }
    }

    pub fn value(&self) -> S {
        self.objective.value(&self.x)
    }
}

impl<O> StreamingIterator for GradientDescent<O>
where
    O: Objective,
{
    type Item = GradientDescent<O>;

    fn advance(&mut self) {
        self.prior_cost = self.objective.value(&self.x);
        let gradient = self.objective.gradient(&self.x);
        self.x.scaled_add(-self.step_size, &gradient);
        self.steps_taken += 1;
    }

    fn get(&self) -> Option<&Self::Item> {
        Some(self)
    }
}

/// Points visited by a fixed-length descent and the cost recorded before
/// each step.
#[derive(Debug, Clone, PartialEq)]
pub struct DescentRun {
    /// `n_steps + 1` points, starting with `x_0`.
    pub trajectory: Vec<V>,
    /// `n_steps` costs; `costs[t]` is the objective at `trajectory[t]`.
    pub costs: Vec<S>,
}

impl DescentRun {
    /// `None` only for a hand-built run with an empty trajectory.
    pub fn last_point(&self) -> Option<&V> {
        self.trajectory.last()
    }
}

/// Take exactly `n_steps` descent steps from `x_0`.
pub fn run<O>(objective: O, x_0: V, step_size: S, n_steps: usize) -> DescentRun
where
    O: Objective,
{
    let mut trajectory = Vec::with_capacity(n_steps + 1);
    trajectory.push(x_0.clone());
    let mut costs = Vec::with_capacity(n_steps);
    {
        let descent = GradientDescent::new(objective, step_size, x_0).take(n_steps);
        let mut recorded = tee(descent, |state: &GradientDescent<O>| {
            trajectory.push(state.x.clone());
            costs.push(state.prior_cost);
        });
        while let Some(_) = recorded.next() {}
    }
    DescentRun { trajectory, costs }
}
