/// Decides when the hero clip jumps back to the start. Rewinding a little
/// before the natural end hides the seam some browsers show with `loop`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoopPolicy {
    epsilon: f64,
}

impl LoopPolicy {
    pub fn new(epsilon: f64) -> Self {
        Self {
            epsilon: epsilon.max(0.0),
        }
    }

    /// Position to seek to for this `timeupdate` sample, if any.
    ///
    /// `duration` is NaN until metadata has loaded and infinite for live
    /// streams; neither is ever rewound.
    pub fn next_position(&self, current_time: f64, duration: f64) -> Option<f64> {
        if !duration.is_finite() || duration <= 0.0 || !current_time.is_finite() {
            return None;
        }
        if duration - current_time < self.epsilon {
            Some(0.0)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rewinds_inside_epsilon() {
        let policy = LoopPolicy::new(0.1);
        assert_eq!(policy.next_position(9.95, 10.0), Some(0.0));
        assert_eq!(policy.next_position(10.0, 10.0), Some(0.0));
        assert_eq!(policy.next_position(9.5, 10.0), None);
        assert_eq!(policy.next_position(0.0, 10.0), None);
    }

    #[test]
    fn unknown_duration_is_left_alone() {
        let policy = LoopPolicy::new(0.1);
        assert_eq!(policy.next_position(0.0, f64::NAN), None);
        assert_eq!(policy.next_position(3.0, f64::INFINITY), None);
        assert_eq!(policy.next_position(0.0, 0.0), None);
    }

    #[test]
    fn zero_epsilon_never_rewinds_early() {
        let policy = LoopPolicy::new(0.0);
        assert_eq!(policy.next_position(9.99, 10.0), None);
        assert_eq!(LoopPolicy::new(-3.0), policy);
    }

    proptest! {
        #[test]
        fn rewind_iff_within_epsilon(duration in 0.5f64..600.0, frac in 0.0f64..1.0) {
            let policy = LoopPolicy::new(0.1);
            let current = duration * frac;
            let next = policy.next_position(current, duration);
            if duration - current < 0.1 {
                prop_assert_eq!(next, Some(0.0));
            } else {
                prop_assert_eq!(next, None);
            }
        }
    }
}
