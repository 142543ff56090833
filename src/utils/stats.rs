// File: stats.rs
// Description: Kolmogorov-Smirnov goodness-of-fit helper used to verify the
// distribution of sampled pulling directions.

/// One-sample Kolmogorov-Smirnov statistic of `samples` against the
/// distribution whose CDF is `cdf`.
pub fn ks_statistic<F: Fn(f64) -> f64>(samples: &[f64], cdf: F) -> f64 {
    assert!(!samples.is_empty());
    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let n = sorted.len() as f64;
    let mut d: f64 = 0.0;
    for (i, x) in sorted.iter().enumerate() {
        let f = cdf(*x).clamp(0.0, 1.0);
        let below = (i as f64 / n - f).abs();
        let above = ((i as f64 + 1.0) / n - f).abs();
        d = d.max(below).max(above);
    }
    d
}

/// Asymptotic KS critical value at alpha = 0.001. A broken sampler lands an
/// order of magnitude above this line; a correct one with a fixed seed has a
/// 0.1% chance of crossing it.
pub fn ks_critical(n: usize) -> f64 {
    1.949 / (n as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_grid_has_small_statistic() {
        // Evenly spaced points are as uniform as a sample gets
        let n = 1000;
        let samples: Vec<f64> = (0..n).map(|i| (i as f64 + 0.5) / n as f64).collect();
        let d = ks_statistic(&samples, |x| x);
        assert!(d < ks_critical(n));
    }

    #[test]
    fn test_skewed_sample_is_rejected() {
        // Squaring uniform points piles them near zero
        let n = 1000;
        let samples: Vec<f64> = (0..n)
            .map(|i| {
                let u = (i as f64 + 0.5) / n as f64;
                u * u
            })
            .collect();
        let d = ks_statistic(&samples, |x| x);
        assert!(d > ks_critical(n));
    }

    #[test]
    fn test_critical_value_scale() {
        assert!((ks_critical(100) - 0.1949).abs() < 1e-6);
    }
}
