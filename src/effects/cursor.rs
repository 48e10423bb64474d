use std::collections::VecDeque;

pub const TRAIL_DELAY_MS: f64 = 100.0;
/// Elements that make the cursor markers grow while hovered.
pub const INTERACTIVE_SELECTOR: &str = "a, button, [data-cursor-hover]";

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorPosition {
    pub x: f64,
    pub y: f64,
}

impl CursorPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pointer samples replayed `delay_ms` late for the trailing marker.
#[derive(Debug, Clone)]
pub struct TrailBuffer {
    delay_ms: f64,
    samples: VecDeque<(f64, CursorPosition)>,
}

impl TrailBuffer {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms: delay_ms.max(0.0),
            samples: VecDeque::new(),
        }
    }

    pub fn record(&mut self, at_ms: f64, position: CursorPosition) {
        self.samples.push_back((at_ms, position));
    }

    /// Latest position recorded at least `delay_ms` before `now_ms`, or
    /// `None` when the trail has nothing new to show.
    pub fn due(&mut self, now_ms: f64) -> Option<CursorPosition> {
        let mut latest = None;
        while let Some(&(at_ms, position)) = self.samples.front() {
            if now_ms - at_ms < self.delay_ms {
                break;
            }
            latest = Some(position);
            self.samples.pop_front();
        }
        latest
    }

    #[cfg(test)]
    pub fn pending(&self) -> usize {
        self.samples.len()
    }
}

/// Marker class names for the hovered / idle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerClasses {
    pub primary: &'static [&'static str],
    pub trail: &'static [&'static str],
}

pub fn marker_classes(hovering: bool) -> MarkerClasses {
    if hovering {
        MarkerClasses {
            primary: &["is-hovering", "is-highlighted"],
            trail: &["is-hovering"],
        }
    } else {
        MarkerClasses {
            primary: &[],
            trail: &[],
        }
    }
}

pub fn marker_style(position: CursorPosition) -> String {
    format!("left: {:.1}px; top: {:.1}px;", position.x, position.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trail_waits_for_the_delay() {
        let mut trail = TrailBuffer::new(TRAIL_DELAY_MS);
        trail.record(0.0, CursorPosition::new(10.0, 20.0));

        assert_eq!(trail.due(50.0), None);
        assert_eq!(trail.due(100.0), Some(CursorPosition::new(10.0, 20.0)));
        assert_eq!(trail.pending(), 0);
        assert_eq!(trail.due(500.0), None);
    }

    #[test]
    fn trail_replays_in_order_and_keeps_the_newest_due_sample() {
        let mut trail = TrailBuffer::new(TRAIL_DELAY_MS);
        trail.record(0.0, CursorPosition::new(1.0, 1.0));
        trail.record(16.0, CursorPosition::new(2.0, 2.0));
        trail.record(32.0, CursorPosition::new(3.0, 3.0));

        assert_eq!(trail.due(120.0), Some(CursorPosition::new(2.0, 2.0)));
        assert_eq!(trail.pending(), 1);
        assert_eq!(trail.due(132.0), Some(CursorPosition::new(3.0, 3.0)));
    }

    #[test]
    fn zero_delay_follows_immediately() {
        let mut trail = TrailBuffer::new(0.0);
        trail.record(5.0, CursorPosition::new(4.0, 4.0));
        assert_eq!(trail.due(5.0), Some(CursorPosition::new(4.0, 4.0)));
    }

    #[test]
    fn hover_toggles_marker_classes() {
        assert!(marker_classes(false).primary.is_empty());
        assert!(marker_classes(true).primary.contains(&"is-hovering"));
        assert_eq!(marker_classes(true).trail, &["is-hovering"]);
    }

    #[test]
    fn style_positions_marker() {
        assert_eq!(
            marker_style(CursorPosition::new(12.0, 7.5)),
            "left: 12.0px; top: 7.5px;"
        );
    }
}
