pub const DEFAULT_COUNT_DURATION_MS: f64 = 2_000.0;

pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Eased count from 0 to `target`, started at most once.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    target: u32,
    duration_ms: f64,
    started_at: Option<f64>,
    value: u32,
}

impl CountUp {
    pub fn new(target: u32, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms: duration_ms.max(0.0),
            started_at: None,
            value: 0,
        }
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.value == self.target && self.is_started()
    }

    /// Records the start time. Later calls keep the first start.
    pub fn start(&mut self, now_ms: f64) {
        if self.started_at.is_none() {
            self.started_at = Some(now_ms);
        }
    }

    /// Updates the displayed value for `now_ms` and returns it.
    pub fn sample(&mut self, now_ms: f64) -> u32 {
        let Some(started_at) = self.started_at else {
            return self.value;
        };

        let elapsed = (now_ms - started_at).max(0.0);
        let next = if elapsed >= self.duration_ms {
            self.target
        } else {
            let eased = ease_out_cubic(elapsed / self.duration_ms);
            (f64::from(self.target) * eased).floor() as u32
        };

        self.value = self.value.max(next.min(self.target));
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_cubic_hits_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(-3.0), 0.0);
        assert_eq!(ease_out_cubic(7.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn does_not_move_before_start() {
        let mut counter = CountUp::new(42, DEFAULT_COUNT_DURATION_MS);
        assert_eq!(counter.sample(10_000.0), 0);
        assert!(!counter.is_started());
    }

    #[test]
    fn non_decreasing_and_exact_at_duration() {
        for target in [0_u32, 1, 15, 42, 80, 1_000_000] {
            let mut counter = CountUp::new(target, DEFAULT_COUNT_DURATION_MS);
            counter.start(500.0);

            let mut previous = 0;
            let mut now = 500.0;
            while now < 500.0 + DEFAULT_COUNT_DURATION_MS {
                let value = counter.sample(now);
                assert!(value >= previous, "target={target} now={now}");
                assert!(value <= target);
                previous = value;
                now += 16.7;
            }

            assert_eq!(counter.sample(500.0 + DEFAULT_COUNT_DURATION_MS), target);
            assert_eq!(counter.sample(60_000.0), target);
            assert!(counter.is_finished());
        }
    }

    #[test]
    fn restart_keeps_first_start_time() {
        let mut counter = CountUp::new(100, 1_000.0);
        counter.start(0.0);
        counter.sample(500.0);
        counter.start(900.0);

        assert_eq!(counter.sample(1_000.0), 100);
    }

    #[test]
    fn halfway_value_uses_cubic_easing() {
        let mut counter = CountUp::new(80, 2_000.0);
        counter.start(0.0);

        assert_eq!(counter.sample(1_000.0), 70);
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let mut counter = CountUp::new(50, 0.0);
        counter.start(3.0);
        assert_eq!(counter.sample(3.0), 50);
    }
}
