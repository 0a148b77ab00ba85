use crate::traits::{GrowthModel, Scalar};

/// Logistic (Verhulst) growth model: dP/dt = r * P * (1 - P / K).
///
/// `k` must be nonzero; callers guard that before constructing a run
/// (see `SimulationParameters::validate`). The model itself carries no
/// state and may be shared across any number of integrators.
#[derive(Debug, Clone, Copy)]
pub struct Logistic<T: Scalar> {
    pub r: T,
    pub k: T,
}

impl<T: Scalar> Logistic<T> {
    pub fn new(r: T, k: T) -> Self {
        Self { r, k }
    }

    /// Closed-form solution P(t) = K / (1 + ((K - P0) / P0) * e^(-r t)),
    /// with t measured from the moment the population equals p0.
    /// Requires p0 != 0.
    pub fn exact(&self, p0: T, t: T) -> T {
        let a = (self.k - p0) / p0;
        self.k / (T::one() + a * (-self.r * t).exp())
    }
}

impl<T: Scalar> GrowthModel<T> for Logistic<T> {
    fn rate(&self, _t: T, p: T) -> T {
        self.r * p * (T::one() - p / self.k)
    }
}
