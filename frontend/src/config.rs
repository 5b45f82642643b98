use yew::virtual_dom::AttrValue;

/// Fraction of an element's area that must be visible before it reveals.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
/// Seconds before the end of the clip at which the hero video rewinds.
pub const DEFAULT_LOOP_EPSILON: f64 = 0.1;
pub const DEFAULT_PARALLAX_FACTOR: f64 = 0.5;
pub const DEFAULT_VIDEO_SRC: &str = "agua-mexendo.mp4";
pub const DEFAULT_REVEAL_SELECTOR: &str = "[data-animate]";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollMode {
    Smooth,
    Instant,
}

/// Tunables for a single page view, handed down through a yew context so
/// each mounted view can carry its own values.
///
/// Fields are only set through the `with_*` builders, which keep the
/// numeric values in range.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewConfig {
    reveal_threshold: f64,
    reveal_selector: AttrValue,
    loop_epsilon: f64,
    parallax_factor: f64,
    video_src: AttrValue,
    scroll_mode: ScrollMode,
    log_level: log::Level,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reveal_selector: AttrValue::from(DEFAULT_REVEAL_SELECTOR),
            loop_epsilon: DEFAULT_LOOP_EPSILON,
            parallax_factor: DEFAULT_PARALLAX_FACTOR,
            video_src: AttrValue::from(DEFAULT_VIDEO_SRC),
            scroll_mode: ScrollMode::Smooth,
            log_level: default_log_level(),
        }
    }
}

impl ViewConfig {
    pub fn with_reveal_threshold(mut self, threshold: f64) -> Self {
        self.reveal_threshold = if threshold.is_finite() {
            threshold.clamp(0.0, 1.0)
        } else {
            DEFAULT_REVEAL_THRESHOLD
        };
        self
    }

    pub fn with_loop_epsilon(mut self, epsilon: f64) -> Self {
        self.loop_epsilon = if epsilon.is_finite() {
            epsilon.max(0.0)
        } else {
            DEFAULT_LOOP_EPSILON
        };
        self
    }

    pub fn with_parallax_factor(mut self, factor: f64) -> Self {
        if factor.is_finite() {
            self.parallax_factor = factor;
        }
        self
    }

    pub fn with_video_src(mut self, src: impl Into<AttrValue>) -> Self {
        self.video_src = src.into();
        self
    }

    pub fn with_scroll_mode(mut self, mode: ScrollMode) -> Self {
        self.scroll_mode = mode;
        self
    }

    pub fn with_log_level(mut self, level: log::Level) -> Self {
        self.log_level = level;
        self
    }

    pub fn reveal_threshold(&self) -> f64 {
        self.reveal_threshold
    }

    pub fn reveal_selector(&self) -> &str {
        self.reveal_selector.as_str()
    }

    pub fn loop_epsilon(&self) -> f64 {
        self.loop_epsilon
    }

    pub fn parallax_factor(&self) -> f64 {
        self.parallax_factor
    }

    pub fn video_src(&self) -> AttrValue {
        self.video_src.clone()
    }

    pub fn scroll_mode(&self) -> ScrollMode {
        self.scroll_mode
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level
    }
}

fn default_log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_page() {
        let config = ViewConfig::default();
        assert_eq!(config.reveal_threshold(), 0.1);
        assert_eq!(config.loop_epsilon(), 0.1);
        assert_eq!(config.parallax_factor(), 0.5);
        assert_eq!(config.video_src().as_str(), "agua-mexendo.mp4");
        assert_eq!(config.reveal_selector(), "[data-animate]");
        assert_eq!(config.scroll_mode(), ScrollMode::Smooth);
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(ViewConfig::default().with_reveal_threshold(1.7).reveal_threshold(), 1.0);
        assert_eq!(ViewConfig::default().with_reveal_threshold(-0.2).reveal_threshold(), 0.0);
        assert_eq!(ViewConfig::default().with_reveal_threshold(0.25).reveal_threshold(), 0.25);
        assert_eq!(
            ViewConfig::default().with_reveal_threshold(f64::NAN).reveal_threshold(),
            DEFAULT_REVEAL_THRESHOLD
        );
    }

    #[test]
    fn negative_epsilon_floors_at_zero() {
        assert_eq!(ViewConfig::default().with_loop_epsilon(-1.0).loop_epsilon(), 0.0);
        assert_eq!(
            ViewConfig::default().with_loop_epsilon(f64::INFINITY).loop_epsilon(),
            DEFAULT_LOOP_EPSILON
        );
    }

    #[test]
    fn non_finite_parallax_factor_is_ignored() {
        let config = ViewConfig::default().with_parallax_factor(f64::NAN);
        assert_eq!(config.parallax_factor(), DEFAULT_PARALLAX_FACTOR);
        assert_eq!(ViewConfig::default().with_parallax_factor(0.3).parallax_factor(), 0.3);
    }

    #[test]
    fn video_scroll_and_log_overrides() {
        let config = ViewConfig::default()
            .with_video_src("/media/oceano.webm")
            .with_scroll_mode(ScrollMode::Instant)
            .with_log_level(log::Level::Warn);
        assert_eq!(config.video_src().as_str(), "/media/oceano.webm");
        assert_eq!(config.scroll_mode(), ScrollMode::Instant);
        assert_eq!(config.log_level(), log::Level::Warn);
        assert_eq!(config.reveal_threshold(), DEFAULT_REVEAL_THRESHOLD);
    }
}
