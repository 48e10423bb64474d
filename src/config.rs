use crate::effects::code_typer::CODE_TYPE_INTERVAL_MS;
use crate::effects::counter::DEFAULT_COUNT_DURATION_MS;
use crate::effects::cursor::TRAIL_DELAY_MS;
use crate::effects::particles::PARTICLE_COUNT;
use crate::effects::typewriter::TypewriterTiming;

/// Margin applied to the viewport when deciding whether a section is visible.
pub const IN_VIEW_ROOT_MARGIN: &str = "-100px";
/// Counters start as soon as any part of them is on screen.
pub const COUNTER_ROOT_MARGIN: &str = "0px";
pub const FALLBACK_VIEWPORT: (f64, f64) = (1280.0, 720.0);

/// Knobs shared by every animated effect on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectSettings {
    pub particle_count: usize,
    pub trail_delay_ms: f64,
    pub typewriter: TypewriterTiming,
    pub counter_duration_ms: f64,
    pub code_interval_ms: u32,
    pub reduced_motion: bool,
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            trail_delay_ms: TRAIL_DELAY_MS,
            typewriter: TypewriterTiming::default(),
            counter_duration_ms: DEFAULT_COUNT_DURATION_MS,
            code_interval_ms: CODE_TYPE_INTERVAL_MS,
            reduced_motion: false,
        }
    }
}

impl EffectSettings {
    /// Settings for users who asked the OS for less motion: counters land on
    /// their target immediately.
    pub fn with_reduced_motion(self, reduced: bool) -> Self {
        if !reduced {
            return self;
        }

        Self {
            counter_duration_ms: 0.0,
            reduced_motion: true,
            ..self
        }
    }
}
