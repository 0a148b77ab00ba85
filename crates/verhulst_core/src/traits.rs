use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// A trait for types that can be used as scalars in the growth models.
/// Must support basic arithmetic, debug printing, and conversion from f64.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// A population growth model: the right-hand side of dP/dt = f(t, P).
pub trait GrowthModel<T: Scalar> {
    /// Evaluates the instantaneous growth rate.
    /// t: current time
    /// p: current population
    fn rate(&self, t: T, p: T) -> T;
}

/// A trait for single-step integrators that advance a population forward.
pub trait Steppable<T: Scalar> {
    /// Performs one step of size dt from (t, p), returning (t + dt, p_next).
    /// Pure and stateless; no bounds are imposed on p, so non-finite
    /// values flow through untouched.
    fn step(&self, model: &impl GrowthModel<T>, t: T, p: T, dt: T) -> (T, T);
}
