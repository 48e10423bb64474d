/// Scroll offset past which the scroll-to-top control shows.
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 300.0;
/// Scroll offset past which the navbar switches to its scrolled look.
pub const NAVBAR_THRESHOLD_PX: f64 = 50.0;
/// Circumference of the progress ring (radius 26).
pub const RING_CIRCUMFERENCE: f64 = 163.36;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    /// Percentage of the scrollable distance covered, 0 when nothing scrolls.
    pub fn progress(self) -> f64 {
        let max_scroll = self.scroll_height - self.client_height;
        if max_scroll <= 0.0 {
            return 0.0;
        }

        (self.scroll_top / max_scroll * 100.0).clamp(0.0, 100.0)
    }

    pub fn shows_scroll_top(self) -> bool {
        self.scroll_top > SCROLL_TOP_THRESHOLD_PX
    }

    pub fn navbar_scrolled(self) -> bool {
        self.scroll_top > NAVBAR_THRESHOLD_PX
    }
}

pub fn ring_dash_offset(progress: f64) -> f64 {
    RING_CIRCUMFERENCE * (1.0 - progress.clamp(0.0, 100.0) / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(scroll_top: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top,
            scroll_height: 5_000.0,
            client_height: 1_000.0,
        }
    }

    #[test]
    fn progress_spans_zero_to_hundred() {
        assert_eq!(at(0.0).progress(), 0.0);
        assert_eq!(at(2_000.0).progress(), 50.0);
        assert_eq!(at(4_000.0).progress(), 100.0);
    }

    #[test]
    fn progress_is_zero_when_content_fits() {
        let metrics = ScrollMetrics {
            scroll_top: 0.0,
            scroll_height: 800.0,
            client_height: 800.0,
        };
        assert_eq!(metrics.progress(), 0.0);
        assert!(metrics.progress().is_finite());
    }

    #[test]
    fn control_visibility_threshold() {
        assert!(!at(299.0).shows_scroll_top());
        assert!(!at(300.0).shows_scroll_top());
        assert!(at(301.0).shows_scroll_top());
    }

    #[test]
    fn navbar_threshold() {
        assert!(!at(50.0).navbar_scrolled());
        assert!(at(51.0).navbar_scrolled());
    }

    #[test]
    fn ring_offset_tracks_progress() {
        assert_eq!(ring_dash_offset(0.0), RING_CIRCUMFERENCE);
        assert_eq!(ring_dash_offset(100.0), 0.0);
        assert_eq!(ring_dash_offset(250.0), 0.0);
    }
}
