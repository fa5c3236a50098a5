/// One-dimensional cubic bezier easing curve over `t` in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub points: [f32; 4],
}

impl CubicBezier {
    pub fn new(points: [f32; 4]) -> Self {
        Self { points }
    }

    pub fn sample(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;
        let [p0, p1, p2, p3] = self.points;
        u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
    }

    /// Evenly spaced `(t, value)` keys, both ends included
    pub fn keys(&self, count: usize) -> Vec<(f32, f32)> {
        let count = count.max(2);
        (0..count)
            .map(|i| {
                let t = i as f32 / (count - 1) as f32;
                (t, self.sample(t))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BEAM_SIZE_CURVE;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 1.0)]
    #[case(1.0, 0.0)]
    #[case(0.5, 0.7625)] // (1 + 3*0.95 + 3*0.75 + 0) / 8
    #[case(-3.0, 1.0)]
    #[case(7.0, 0.0)]
    fn test_shrink_curve_samples(#[case] t: f32, #[case] expected: f32) {
        let curve = CubicBezier::new(BEAM_SIZE_CURVE);

        assert!((curve.sample(t) - expected).abs() < 1e-5, "got {}", curve.sample(t));
    }

    #[test]
    fn test_shrink_curve_never_grows() {
        let keys = CubicBezier::new(BEAM_SIZE_CURVE).keys(16);

        assert_eq!(keys.len(), 16);
        assert!(keys.windows(2).all(|pair| pair[1].1 <= pair[0].1));
    }

    #[test]
    fn test_keys_always_include_both_ends() {
        let keys = CubicBezier::new([0.0, 0.0, 1.0, 1.0]).keys(1);

        assert_eq!(keys, vec![(0.0, 0.0), (1.0, 1.0)]);
    }
}
