use std::collections::HashSet;

/// Identifiers of elements that have scrolled into view at least once.
///
/// Entries are only ever added. Once `reveal_all` has been called (no
/// intersection support in the host) every identifier reads as revealed,
/// including ones that were never seen by an observer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealedSet {
    ids: HashSet<String>,
    everything: bool,
}

impl RevealedSet {
    /// Records `id` as revealed. Returns `false` when nothing changed.
    pub fn reveal(&mut self, id: &str) -> bool {
        if self.everything || self.ids.contains(id) {
            return false;
        }
        self.ids.insert(id.to_owned())
    }

    pub fn reveal_all(&mut self) -> bool {
        !std::mem::replace(&mut self.everything, true)
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.everything || self.ids.contains(id)
    }

    pub fn is_fail_open(&self) -> bool {
        self.everything
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        !self.everything && self.ids.is_empty()
    }
}

/// Whether an intersection sample counts as "seen". The observer only calls
/// back on threshold crossings, but the first sample after `observe` arrives
/// regardless, so the ratio is still checked. A small tolerance absorbs the
/// rounding browsers apply to the reported ratio.
pub fn crosses_threshold(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    const RATIO_TOLERANCE: f64 = 1e-3;
    is_intersecting && ratio + RATIO_TOLERANCE >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_empty() {
        let set = RevealedSet::default();
        assert!(set.is_empty());
        assert!(!set.is_revealed("about-content"));
    }

    #[test]
    fn reveal_is_recorded_once() {
        let mut set = RevealedSet::default();
        assert!(set.reveal("about-content"));
        assert!(!set.reveal("about-content"));
        assert!(set.is_revealed("about-content"));
        assert!(!set.is_revealed("mission-card-1"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn fail_open_reveals_unknown_ids() {
        let mut set = RevealedSet::default();
        assert!(set.reveal_all());
        assert!(!set.reveal_all());
        assert!(set.is_fail_open());
        assert!(set.is_revealed("product-4"));
        assert!(!set.reveal("product-4"));
        assert!(!set.is_empty());
    }

    #[test]
    fn threshold_crossing() {
        assert!(crosses_threshold(true, 0.1, 0.1));
        assert!(crosses_threshold(true, 0.0995, 0.1));
        assert!(crosses_threshold(true, 0.8, 0.1));
        assert!(!crosses_threshold(true, 0.05, 0.1));
        assert!(!crosses_threshold(false, 0.5, 0.1));
        assert!(crosses_threshold(true, 0.0, 0.0));
    }

    proptest! {
        #[test]
        fn revealed_ids_never_revert(ops in proptest::collection::vec((0usize..8, any::<bool>()), 0..64)) {
            let ids = ["a", "b", "c", "d", "e", "f", "g", "h"];
            let mut set = RevealedSet::default();
            let mut seen: Vec<&str> = Vec::new();
            for (idx, visible) in ops {
                // A not-visible sample is simply never recorded.
                if visible {
                    set.reveal(ids[idx]);
                    seen.push(ids[idx]);
                }
                for id in &seen {
                    prop_assert!(set.is_revealed(id));
                }
            }
        }
    }
}
