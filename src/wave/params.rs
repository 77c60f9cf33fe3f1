use crate::animation::sampling::linspace;
use crate::config::{
    DEFAULT_A1, DEFAULT_A2, DEFAULT_G1, DEFAULT_G2, DEFAULT_W1, DEFAULT_W2, T_SAMPLE_COUNT,
    T_SAMPLE_END, T_SAMPLE_START,
};
use crate::wave::evaluator::WaveTerm;

/// Positional view of a parameter set: `(a1, a2, t_samples, w1, w2, g1, g2)`
pub type ParamTuple<'a> = (f64, f64, &'a [f64], f64, f64, f64, f64);

/// Coefficients for the two-term wave superposition.
///
/// Immutable once built. `t_samples` is carried along with the coefficients
/// but takes no part in the displacement formula.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveParams {
    a1: f64,
    a2: f64,
    t_samples: Vec<f64>,
    w1: f64,
    w2: f64,
    g1: f64,
    g2: f64,
}

impl WaveParams {
    /// Build a parameter set with explicit coefficients and default time samples
    pub fn new(a1: f64, a2: f64, w1: f64, w2: f64, g1: f64, g2: f64) -> Self {
        Self {
            a1,
            a2,
            t_samples: linspace(T_SAMPLE_START, T_SAMPLE_END, T_SAMPLE_COUNT),
            w1,
            w2,
            g1,
            g2,
        }
    }

    pub fn a1(&self) -> f64 {
        self.a1
    }

    pub fn a2(&self) -> f64 {
        self.a2
    }

    pub fn t_samples(&self) -> &[f64] {
        &self.t_samples
    }

    pub fn w1(&self) -> f64 {
        self.w1
    }

    pub fn w2(&self) -> f64 {
        self.w2
    }

    pub fn g1(&self) -> f64 {
        self.g1
    }

    pub fn g2(&self) -> f64 {
        self.g2
    }

    /// All fields in kernel argument order
    pub fn to_tuple(&self) -> ParamTuple<'_> {
        (
            self.a1,
            self.a2,
            &self.t_samples,
            self.w1,
            self.w2,
            self.g1,
            self.g2,
        )
    }

    /// The two sine components as independent terms
    pub fn terms(&self) -> [WaveTerm; 2] {
        [
            WaveTerm::new(self.a1, self.w1, self.g1),
            WaveTerm::new(self.a2, self.w2, self.g2),
        ]
    }
}

impl Default for WaveParams {
    fn default() -> Self {
        Self::new(
            DEFAULT_A1, DEFAULT_A2, DEFAULT_W1, DEFAULT_W2, DEFAULT_G1, DEFAULT_G2,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = WaveParams::default();
        assert_eq!(params.a1(), -0.41);
        assert_eq!(params.a2(), -0.3);
        assert_eq!(params.w1(), 1.0);
        assert_eq!(params.w2(), 2.0);
        assert_eq!(params.g1(), 1.0);
        assert_eq!(params.g2(), 9.92);
    }

    #[test]
    fn test_default_time_samples() {
        let params = WaveParams::default();
        let samples = params.t_samples();
        assert_eq!(samples.len(), 100);
        assert_eq!(samples[0], -1.0);
        assert_eq!(samples[99], 1.0);
    }

    #[test]
    fn test_tuple_order() {
        let params = WaveParams::new(1.5, 2.5, 3.5, 4.5, 5.5, 6.5);
        let (a1, a2, t, w1, w2, g1, g2) = params.to_tuple();
        assert_eq!((a1, a2, w1, w2, g1, g2), (1.5, 2.5, 3.5, 4.5, 5.5, 6.5));
        assert_eq!(t, params.t_samples());
    }

    #[test]
    fn test_accepts_unusual_values() {
        // Zero and negative frequencies are not rejected
        let params = WaveParams::new(0.0, -1.0, 0.0, -2.0, -9.0, 0.0);
        assert_eq!(params.w1(), 0.0);
        assert_eq!(params.w2(), -2.0);
        assert_eq!(params.g1(), -9.0);
    }

    #[test]
    fn test_terms_follow_fields() {
        let params = WaveParams::default();
        let [first, second] = params.terms();
        assert_eq!(first, WaveTerm::new(-0.41, 1.0, 1.0));
        assert_eq!(second, WaveTerm::new(-0.3, 2.0, 9.92));
    }
}
