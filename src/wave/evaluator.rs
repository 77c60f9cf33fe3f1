use crate::wave::params::WaveParams;

/// One sine component: `amplitude * sin(x * frequency + t * phase_rate)`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveTerm {
    pub amplitude: f64,
    pub frequency: f64,
    pub phase_rate: f64,
}

impl WaveTerm {
    pub fn new(amplitude: f64, frequency: f64, phase_rate: f64) -> Self {
        Self {
            amplitude,
            frequency,
            phase_rate,
        }
    }

    /// Contribution of this term at position `x` and time `t`
    pub fn eval(&self, x: f64, t: f64) -> f64 {
        self.amplitude * (x * self.frequency + t * self.phase_rate).sin()
    }
}

/// Displacement of the two-term wave at a single position.
pub fn displacement_at(x: f64, t: f64, params: &WaveParams) -> f64 {
    let (a1, a2, _, w1, w2, g1, g2) = params.to_tuple();
    a1 * (x * w1 + t * g1).sin() + a2 * (x * w2 + t * g2).sin()
}

/// Evaluate the wave over every position in `x` at time `t`.
pub fn wave(x: &[f64], t: f64, params: &WaveParams) -> Vec<f64> {
    let mut out = vec![0.0; x.len()];
    wave_into(x, t, params, &mut out);
    out
}

/// Like [`wave`], but writes into a caller-owned buffer.
///
/// # Panics
/// If `out` and `x` differ in length.
pub fn wave_into(x: &[f64], t: f64, params: &WaveParams, out: &mut [f64]) {
    assert_eq!(x.len(), out.len(), "Displacement buffer size mismatch");

    for (y, &xi) in out.iter_mut().zip(x) {
        *y = displacement_at(xi, t, params);
    }
}

/// Sum an arbitrary number of sine terms at each position.
pub fn superpose(x: &[f64], t: f64, terms: &[WaveTerm]) -> Vec<f64> {
    x.iter()
        .map(|&xi| terms.iter().map(|term| term.eval(xi, t)).sum())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::sampling::linspace;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::{FRAC_PI_2, PI};

    fn random_params(rng: &mut StdRng) -> WaveParams {
        WaveParams::new(
            rng.gen_range(-5.0..5.0),
            rng.gen_range(-5.0..5.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
        )
    }

    #[test]
    fn test_origin_is_zero() {
        let out = wave(&[0.0], 0.0, &WaveParams::default());
        assert_eq!(out, vec![0.0]);
    }

    #[test]
    fn test_quarter_period() {
        let out = wave(&[FRAC_PI_2], 0.0, &WaveParams::default());
        assert_eq!(out.len(), 1);
        assert!((out[0] - (-0.41)).abs() < 1e-12, "got {}", out[0]);
    }

    #[test]
    fn test_deterministic() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let params = random_params(&mut rng);
            let x: Vec<f64> = (0..64).map(|_| rng.gen_range(-50.0..50.0)).collect();
            let t = rng.gen_range(-10.0..10.0);
            assert_eq!(wave(&x, t, &params), wave(&x, t, &params));
        }
    }

    #[test]
    fn test_zero_amplitudes_flat() {
        let mut rng = StdRng::seed_from_u64(11);
        let params = WaveParams::new(0.0, 0.0, 1.0, 2.0, 1.0, 9.92);
        for _ in 0..20 {
            let x: Vec<f64> = (0..32).map(|_| rng.gen_range(-100.0..100.0)).collect();
            let t = rng.gen_range(-100.0..100.0);
            assert!(wave(&x, t, &params).iter().all(|&y| y == 0.0));
        }
    }

    #[test]
    fn test_shape_preserved() {
        let params = WaveParams::default();
        for n in [0, 1, 2, 17, 1000] {
            let x = linspace(-10.0, 10.0, n);
            assert_eq!(wave(&x, 0.3, &params).len(), n);
        }
    }

    #[test]
    fn test_first_term_periodic_in_time() {
        let params = WaveParams::default();
        let [first, _] = params.terms();
        let period = 2.0 * PI / params.g1();
        for &x in &linspace(-10.0, 10.0, 50) {
            for &t in &[0.0, 0.7, 2.5] {
                let now = first.eval(x, t);
                let later = first.eval(x, t + period);
                assert!((now - later).abs() < 1e-9, "x={} t={}", x, t);
            }
        }
    }

    #[test]
    fn test_matches_defining_formula() {
        let params = WaveParams::default();
        let x = linspace(-10.0, 10.0, 1000);
        let t = 1.234;
        let out = wave(&x, t, &params);
        for (&xi, &yi) in x.iter().zip(&out) {
            let expected = -0.41 * (xi * 1.0 + t * 1.0).sin() + -0.3 * (xi * 2.0 + t * 9.92).sin();
            assert!((yi - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_superpose_matches_two_term_wave() {
        let mut rng = StdRng::seed_from_u64(3);
        let params = random_params(&mut rng);
        let x = linspace(-10.0, 10.0, 200);
        let direct = wave(&x, 0.9, &params);
        let general = superpose(&x, 0.9, &params.terms());
        for (a, b) in direct.iter().zip(&general) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_superpose_no_terms() {
        let out = superpose(&[1.0, 2.0, 3.0], 0.5, &[]);
        assert_eq!(out, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    #[should_panic(expected = "Displacement buffer size mismatch")]
    fn test_wave_into_length_mismatch() {
        let mut out = vec![0.0; 3];
        wave_into(&[0.0, 1.0], 0.0, &WaveParams::default(), &mut out);
    }
}
