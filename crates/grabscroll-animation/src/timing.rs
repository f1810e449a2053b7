/// Timing of the slide that follows a release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationTiming {
    /// Total slide length in milliseconds.
    pub duration_ms: f64,
    /// Exponent of the ease-out curve, `>= 1`.
    pub easing_factor: f64,
    /// Upper bound for the release speed, in px/ms.
    pub max_speed: f64,
}

impl AnimationTiming {
    pub const DEFAULT_DURATION_MS: f64 = 1500.0;
    pub const DEFAULT_EASING_FACTOR: f64 = 4.0;
    pub const DEFAULT_MAX_SPEED: f64 = 10.0;

    pub const fn new(duration_ms: f64, easing_factor: f64, max_speed: f64) -> Self {
        Self {
            duration_ms,
            easing_factor,
            max_speed,
        }
    }
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_DURATION_MS,
            Self::DEFAULT_EASING_FACTOR,
            Self::DEFAULT_MAX_SPEED,
        )
    }
}
