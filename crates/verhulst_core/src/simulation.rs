//! Simulation runner and result assembly.
//!
//! One `simulate` call validates the parameters, builds the time grid
//! once, sweeps each integration method over that shared grid, and
//! packages the three series into a `SimulationResult`. Non-finite
//! populations (Euler blow-ups at large steps, for instance) are part
//! of the output, not an error: the comparison exists to show them.

use crate::model::Logistic;
use crate::solvers::Method;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Relative tolerance when counting grid steps: the span/step quotient
/// is snapped to the nearest integer within this bound, so a final
/// point that exact arithmetic would include is not lost to the
/// division's rounding. Relative, because the quotient's rounding
/// error grows with the step count.
const GRID_EPSILON: f64 = 1e-9;

/// Upper bound on samples per series. Configurations whose grid would
/// exceed this are rejected up front like any other bad parameter.
pub const MAX_SAMPLES: usize = 10_000_000;

/// A rejected configuration. Surfaced before any stepping happens;
/// a failed call never yields a partial series.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("delta_t must be positive, got {0}")]
    NonPositiveStep(f64),
    #[error("t_end ({t_end}) must not precede t_start ({t_start})")]
    InvertedTimeRange { t_start: f64, t_end: f64 },
    #[error("carrying capacity K must be nonzero")]
    ZeroCarryingCapacity,
    #[error("grid of {0} samples exceeds the limit of {max}", max = MAX_SAMPLES)]
    GridTooLarge(usize),
}

/// Input for one simulation run. Field names follow the caller's wire
/// vocabulary. Immutable for the duration of the run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimulationParameters {
    #[serde(rename = "P0_initial")]
    pub p0_initial: f64,
    pub t_start: f64,
    pub t_end: f64,
    pub delta_t: f64,
    pub r_growth: f64,
    #[serde(rename = "K_carrying_capacity")]
    pub k_carrying_capacity: f64,
}

impl SimulationParameters {
    /// Checks the preconditions the model and the grid rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.delta_t > 0.0) {
            return Err(ConfigError::NonPositiveStep(self.delta_t));
        }
        if self.t_end < self.t_start {
            return Err(ConfigError::InvertedTimeRange {
                t_start: self.t_start,
                t_end: self.t_end,
            });
        }
        if self.k_carrying_capacity == 0.0 {
            return Err(ConfigError::ZeroCarryingCapacity);
        }
        let samples = self.sample_count();
        if samples > MAX_SAMPLES {
            return Err(ConfigError::GridTooLarge(samples));
        }
        Ok(())
    }

    /// Number of grid samples: floor((t_end - t_start) / delta_t) + 1,
    /// with the quotient snapped to the nearest integer when it is
    /// within GRID_EPSILON relative of one.
    fn sample_count(&self) -> usize {
        let raw = (self.t_end - self.t_start) / self.delta_t;
        let nearest = raw.round();
        let steps = if (raw - nearest).abs() <= GRID_EPSILON * nearest.max(1.0) {
            nearest
        } else {
            raw.floor()
        };
        (steps as usize).saturating_add(1)
    }

    /// Builds the time grid by integer indexing, t_i = t_start + i * delta_t.
    /// Repeated accumulation would drift the stamps and can change the
    /// sample count; indexing keeps both deterministic.
    fn time_grid(&self) -> Vec<f64> {
        (0..self.sample_count())
            .map(|i| self.t_start + i as f64 * self.delta_t)
            .collect()
    }
}

/// One method's output: times and populations of equal length, with
/// populations[i] holding the state at times[i].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub times: Vec<f64>,
    pub populations: Vec<f64>,
}

/// The engine's sole output: one series per method, keyed by the
/// method identifiers the caller consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub euler_method: TimeSeries,
    pub runge_kutta_2: TimeSeries,
    pub runge_kutta_4: TimeSeries,
}

impl SimulationResult {
    /// Looks up a series by method identifier.
    pub fn series(&self, method: Method) -> &TimeSeries {
        match method {
            Method::Euler => &self.euler_method,
            Method::Rk2 => &self.runge_kutta_2,
            Method::Rk4 => &self.runge_kutta_4,
        }
    }
}

/// Sweeps one method across the shared grid. The first sample is
/// (t_start, P0); each further sample comes from one application of
/// the method's step. Time stamps are read from the grid, so the step
/// function's returned time is discarded.
fn run_method(method: Method, model: &Logistic<f64>, p0: f64, grid: &[f64], dt: f64) -> TimeSeries {
    let mut populations = Vec::with_capacity(grid.len());
    let mut p = p0;
    populations.push(p);

    for i in 0..grid.len().saturating_sub(1) {
        let (_, next) = method.step_with(model, grid[i], p, dt);
        p = next;
        populations.push(p);
    }

    TimeSeries {
        times: grid.to_vec(),
        populations,
    }
}

/// Runs all three methods over one shared time grid and assembles the
/// comparison result. This is the engine's only public operation; the
/// three sweeps are independent and their assembly is keyed, so the
/// result shape never depends on execution order.
pub fn simulate(params: &SimulationParameters) -> Result<SimulationResult, ConfigError> {
    params.validate()?;

    let model = Logistic::new(params.r_growth, params.k_carrying_capacity);
    let grid = params.time_grid();
    let run = |method| run_method(method, &model, params.p0_initial, &grid, params.delta_t);

    Ok(SimulationResult {
        euler_method: run(Method::Euler),
        runge_kutta_2: run(Method::Rk2),
        runge_kutta_4: run(Method::Rk4),
    })
}
