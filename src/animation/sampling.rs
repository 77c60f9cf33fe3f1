//! Evenly spaced sample sequences.

/// `n` evenly spaced values over `[start, stop]`, both ends included.
///
/// The last element is exactly `stop` so grids built from the same range
/// always share their endpoints.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            values[n - 1] = stop;
            values
        }
    }
}

/// Values `start, start + step, ...` strictly below `stop`.
///
/// The count is `ceil((stop - start) / step)`, so a range that ends just
/// short of a multiple of `step` still includes the final partial step.
/// A zero or wrong-signed step yields an empty sequence.
pub fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if step == 0.0 || !step.is_finite() {
        return Vec::new();
    }
    let span = (stop - start) / step;
    if !(span > 0.0) {
        return Vec::new();
    }
    let count = span.ceil() as usize;
    (0..count).map(|i| start + i as f64 * step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let grid = linspace(-10.0, 10.0, 1000);
        assert_eq!(grid.len(), 1000);
        assert_eq!(grid[0], -10.0);
        assert_eq!(grid[999], 10.0);
    }

    #[test]
    fn test_linspace_even_spacing() {
        let values = linspace(0.0, 1.0, 5);
        assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
    }

    #[test]
    fn test_arange_integer_ticks() {
        let ticks = arange(-10.0, 11.0, 1.0);
        assert_eq!(ticks.len(), 21);
        assert_eq!(ticks[0], -10.0);
        assert_eq!(ticks[20], 10.0);
    }

    #[test]
    fn test_arange_excludes_stop() {
        let ticks = arange(-6.78, 6.78, 0.5);
        assert_eq!(ticks.len(), 28);
        assert!((ticks[27] - 6.72).abs() < 1e-9);
        assert!(ticks.iter().all(|&t| t < 6.78));
    }

    #[test]
    fn test_arange_bad_step() {
        assert!(arange(0.0, 1.0, 0.0).is_empty());
        assert!(arange(0.0, 1.0, -0.5).is_empty());
        assert!(arange(1.0, 1.0, 0.5).is_empty());
    }
}
