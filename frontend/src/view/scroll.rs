/// Latest vertical scroll position of the window, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollOffset(f64);

impl ScrollOffset {
    /// Overwrites the stored offset. Non-finite samples are dropped so the
    /// value stays comparable.
    pub fn record(&mut self, y: f64) -> bool {
        if !y.is_finite() || y == self.0 {
            return false;
        }
        self.0 = y;
        true
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

/// CSS transform for the hero background layer. Easing is left to the
/// stylesheet's transition.
pub fn parallax_transform(offset: ScrollOffset, factor: f64) -> String {
    format!("translateY({}px)", offset.get() * factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(ScrollOffset::default().get(), 0.0);
        assert_eq!(parallax_transform(ScrollOffset::default(), 0.5), "translateY(0px)");
    }

    #[test]
    fn half_speed_parallax() {
        let mut offset = ScrollOffset::default();
        offset.record(800.0);
        assert_eq!(parallax_transform(offset, 0.5), "translateY(400px)");
        offset.record(125.0);
        assert_eq!(parallax_transform(offset, 0.5), "translateY(62.5px)");
    }

    #[test]
    fn non_finite_samples_are_ignored() {
        let mut offset = ScrollOffset::default();
        offset.record(300.0);
        assert!(!offset.record(f64::NAN));
        assert!(!offset.record(f64::INFINITY));
        assert_eq!(offset.get(), 300.0);
    }

    #[test]
    fn same_value_reports_no_change() {
        let mut offset = ScrollOffset::default();
        assert!(offset.record(10.0));
        assert!(!offset.record(10.0));
    }

    proptest! {
        #[test]
        fn last_sample_wins(samples in proptest::collection::vec(-100.0f64..20_000.0, 1..50)) {
            let mut offset = ScrollOffset::default();
            for y in &samples {
                offset.record(*y);
                prop_assert_eq!(offset.get(), *y);
            }
        }
    }
}
