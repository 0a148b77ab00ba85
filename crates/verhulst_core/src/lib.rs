//! The `verhulst_core` crate is the simulation engine behind the
//! population growth comparison UI. It integrates the logistic model
//! dP/dt = rP(1 - P/K) with three explicit single-step methods over
//! one shared time grid, so the methods' accuracy can be compared
//! sample for sample.
//!
//! Key components:
//! - **Traits**: `Scalar` (numeric type abstraction), `GrowthModel`
//!   (the ODE right-hand side), `Steppable` (single-step integrators).
//! - **Model**: the logistic equation and its closed-form solution.
//! - **Solvers**: the three fixed schemes (Euler, RK2 midpoint, RK4)
//!   and the `Method` identifier that dispatches them.
//! - **Simulation**: parameter validation, grid construction, the
//!   per-method runner, and `simulate`, the engine's one entry point.

pub mod model;
pub mod simulation;
pub mod solvers;
pub mod traits;
