use crate::traits::{GrowthModel, Scalar, Steppable};

/// Forward Euler.
/// First-order accurate; local truncation error O(h^2). Diverges or
/// oscillates when dt is large relative to 1/r, and that behavior is
/// reproduced faithfully rather than damped.
pub struct Euler;

impl<T: Scalar> Steppable<T> for Euler {
    fn step(&self, model: &impl GrowthModel<T>, t: T, p: T, dt: T) -> (T, T) {
        // p_next = p + dt * f(t, p)
        let k1 = model.rate(t, p);
        (t + dt, p + dt * k1)
    }
}

/// 2nd-order Runge-Kutta, midpoint variant.
/// k1 = f(t, p), k2 = f(t + dt/2, p + dt*k1/2), p_next = p + dt*k2.
/// Local truncation error O(h^3). The trapezoidal (Heun) variant is
/// not numerically interchangeable with this one; test fixtures assume
/// the midpoint weights.
pub struct Rk2;

impl<T: Scalar> Steppable<T> for Rk2 {
    fn step(&self, model: &impl GrowthModel<T>, t: T, p: T, dt: T) -> (T, T) {
        let half = T::from_f64(0.5).unwrap();

        let k1 = model.rate(t, p);
        let k2 = model.rate(t + dt * half, p + dt * k1 * half);

        (t + dt, p + dt * k2)
    }
}

/// Classic Runge-Kutta 4th order.
/// Local truncation error O(h^5).
pub struct Rk4;

impl<T: Scalar> Steppable<T> for Rk4 {
    fn step(&self, model: &impl GrowthModel<T>, t: T, p: T, dt: T) -> (T, T) {
        let half = T::from_f64(0.5).unwrap();
        let sixth = T::from_f64(1.0 / 6.0).unwrap();
        let two = T::from_f64(2.0).unwrap();

        // k1 = f(t, p)
        let k1 = model.rate(t, p);

        // k2 = f(t + dt/2, p + dt*k1/2)
        let k2 = model.rate(t + dt * half, p + dt * k1 * half);

        // k3 = f(t + dt/2, p + dt*k2/2)
        let k3 = model.rate(t + dt * half, p + dt * k2 * half);

        // k4 = f(t + dt, p + dt*k3)
        let k4 = model.rate(t + dt, p + dt * k3);

        // p_next = p + dt/6 * (k1 + 2k2 + 2k3 + k4)
        (t + dt, p + dt * sixth * (k1 + two * k2 + two * k3 + k4))
    }
}

/// Identifier for the closed set of integration schemes. There are
/// exactly three; dispatch is by enum rather than open-ended plugins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Euler,
    Rk2,
    Rk4,
}

impl Method {
    /// Fixed comparison order: Euler, RK2, RK4.
    pub const ALL: [Method; 3] = [Method::Euler, Method::Rk2, Method::Rk4];

    /// Identifier used as the key in simulation results.
    pub fn wire_name(self) -> &'static str {
        match self {
            Method::Euler => "euler_method",
            Method::Rk2 => "runge_kutta_2",
            Method::Rk4 => "runge_kutta_4",
        }
    }

    /// Performs one step with this method's scheme.
    pub fn step_with<T: Scalar>(
        self,
        model: &impl GrowthModel<T>,
        t: T,
        p: T,
        dt: T,
    ) -> (T, T) {
        match self {
            Method::Euler => Euler.step(model, t, p, dt),
            Method::Rk2 => Rk2.step(model, t, p, dt),
            Method::Rk4 => Rk4.step(model, t, p, dt),
        }
    }
}
