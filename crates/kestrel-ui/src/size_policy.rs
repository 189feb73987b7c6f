// ── UnifiedSize ───────────────────────────────────────────────────────────

/// A size request made of a fixed part and a proportional weight.
///
/// Negative components are treated as zero when sizes are resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UnifiedSize {
    pub absolute: f32,
    pub relative: f32,
}

impl UnifiedSize {
    #[inline]
    pub const fn new(absolute: f32, relative: f32) -> Self {
        Self { absolute, relative }
    }

    /// Fixed size, no share of the leftover space.
    #[inline]
    pub const fn absolute(value: f32) -> Self {
        Self::new(value, 0.0)
    }

    /// Pure weight, no fixed part.
    #[inline]
    pub const fn relative(weight: f32) -> Self {
        Self::new(0.0, weight)
    }
}

// ── SizePolicyModel ───────────────────────────────────────────────────────

/// Ordered list of size requests for the children of one container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SizePolicyModel {
    policies: Vec<UnifiedSize>,
}

impl SizePolicyModel {
    pub fn new(policies: Vec<UnifiedSize>) -> Self {
        Self { policies }
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &UnifiedSize> {
        self.policies.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// Resolves every request against `available` space.
    ///
    /// Absolute parts are granted first and the remainder is shared in
    /// proportion to the weights. When the absolute parts alone exceed
    /// `available`, the layout is computed against a larger virtual space
    /// (the absolute sum, doubled if any item has a weight) and scaled back
    /// down, so the result always fits in `available`.
    pub fn sizes(&self, available: f32) -> Vec<f32> {
        let absolute_requested: f32 = self.iter().map(|s| non_negative(s.absolute)).sum();
        let relative_requested: f32 = self.iter().map(|s| non_negative(s.relative)).sum();

        let total = if available < absolute_requested {
            if relative_requested > 0.0 { absolute_requested * 2.0 } else { absolute_requested }
        } else {
            available
        };

        // Nothing requested and nothing available.
        if total == 0.0 {
            return vec![0.0; self.len()];
        }

        let relative_unit = if relative_requested != 0.0 {
            (total - absolute_requested) / relative_requested
        } else {
            0.0
        };
        let scale = available / total;

        self.iter()
            .map(|s| (non_negative(s.absolute) + non_negative(s.relative) * relative_unit) * scale)
            .collect()
    }
}

impl From<Vec<UnifiedSize>> for SizePolicyModel {
    fn from(policies: Vec<UnifiedSize>) -> Self {
        Self::new(policies)
    }
}

impl FromIterator<UnifiedSize> for SizePolicyModel {
    fn from_iter<I: IntoIterator<Item = UnifiedSize>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[inline]
fn non_negative(value: f32) -> f32 {
    value.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn model(sizes: &[(f32, f32)]) -> SizePolicyModel {
        sizes.iter().map(|&(a, r)| UnifiedSize::new(a, r)).collect()
    }

    fn assert_close(actual: &[f32], expected: &[f32]) {
        assert_eq!(actual.len(), expected.len());
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            assert!((a - e).abs() < EPS, "item {i}: {a} != {e} (got {actual:?})");
        }
    }

    // ── absolute only ─────────────────────────────────────────────────────

    #[test]
    fn absolute_requests_that_fit_are_granted_exactly() {
        let m = model(&[(10.0, 0.0), (20.0, 0.0), (30.0, 0.0)]);
        let sizes = m.sizes(100.0);
        // Leftover space is not handed out when nobody has a weight.
        assert_close(&sizes, &[10.0, 20.0, 30.0]);
        assert!((sizes.iter().sum::<f32>() - 60.0).abs() < EPS);
    }

    #[test]
    fn oversubscribed_absolute_requests_scale_down() {
        let m = model(&[(60.0, 0.0), (40.0, 0.0)]);
        let sizes = m.sizes(50.0);
        assert_close(&sizes, &[30.0, 20.0]);
        assert!((sizes.iter().sum::<f32>() - 50.0).abs() < EPS);
    }

    // ── relative only ─────────────────────────────────────────────────────

    #[test]
    fn relative_requests_share_space_by_weight() {
        let m = model(&[(0.0, 1.0), (0.0, 3.0)]);
        let sizes = m.sizes(200.0);
        assert_close(&sizes, &[50.0, 150.0]);
        assert!((sizes[0] / sizes[1] - 1.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn equal_weights_split_evenly() {
        let m = model(&[(0.0, 2.0), (0.0, 2.0), (0.0, 2.0)]);
        assert_close(&m.sizes(90.0), &[30.0, 30.0, 30.0]);
    }

    // ── mixed ─────────────────────────────────────────────────────────────

    #[test]
    fn leftover_after_absolute_goes_to_weights() {
        let m = model(&[(20.0, 0.0), (0.0, 1.0), (10.0, 1.0)]);
        // leftover = 100 - 30 = 70, unit = 35
        assert_close(&m.sizes(100.0), &[20.0, 35.0, 45.0]);
    }

    #[test]
    fn oversubscribed_with_weights_reserves_double_space() {
        let m = model(&[(40.0, 1.0), (60.0, 0.0)]);
        // abs = 100 > 50, total = 200, unit = 100, scale = 0.25
        let sizes = m.sizes(50.0);
        assert_close(&sizes, &[35.0, 15.0]);
        assert!((sizes.iter().sum::<f32>() - 50.0).abs() < EPS);
    }

    // ── edge cases ────────────────────────────────────────────────────────

    #[test]
    fn negative_components_count_as_zero() {
        let m = model(&[(-10.0, 1.0), (10.0, -5.0)]);
        assert_close(&m.sizes(30.0), &[20.0, 10.0]);
    }

    #[test]
    fn no_demand_resolves_to_zero() {
        let m = model(&[(0.0, 0.0), (0.0, 0.0)]);
        assert_close(&m.sizes(100.0), &[0.0, 0.0]);
    }

    #[test]
    fn zero_available_space_resolves_to_zero() {
        let m = model(&[(10.0, 1.0), (0.0, 1.0)]);
        assert_close(&m.sizes(0.0), &[0.0, 0.0]);
        assert_close(&model(&[(0.0, 0.0)]).sizes(0.0), &[0.0]);
    }

    #[test]
    fn empty_model_yields_no_sizes() {
        assert!(SizePolicyModel::default().sizes(100.0).is_empty());
    }

    #[test]
    fn identical_inputs_give_identical_outputs() {
        let m = model(&[(12.5, 0.3), (7.0, 1.7), (0.0, 2.0)]);
        assert_eq!(m.sizes(123.0), m.sizes(123.0));
    }
}
