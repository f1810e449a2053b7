//! Drag-to-scroll configuration.
//!
//! [`DragToScrollConfig`] is what users write: every field optional, nested
//! the same way as the resolved [`DragToScrollParameters`]. Resolving
//! validates every value, reports all violations together, and merges the
//! rest over the defaults.

use crate::error::{ConfigError, ConfigViolation};
use grabscroll_animation::AnimationTiming;
use grabscroll_foundation::Direction;

#[cfg(feature = "serde")]
use serde::Deserialize;

/// Slide behaviour after release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationParameters {
    pub timing: AnimationTiming,
    pub slide: bool,
}

impl Default for AnimationParameters {
    fn default() -> Self {
        Self {
            timing: AnimationTiming::default(),
            slide: true,
        }
    }
}

/// Fully resolved, immutable configuration of one controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragToScrollParameters {
    pub direction: Direction,
    pub animation: AnimationParameters,
    pub prevent_default: bool,
    pub stop_propagation: bool,
}

impl Default for DragToScrollParameters {
    fn default() -> Self {
        Self {
            direction: Direction::BOTH,
            animation: AnimationParameters::default(),
            prevent_default: true,
            stop_propagation: true,
        }
    }
}

impl DragToScrollParameters {
    /// Checks the numeric invariants the controller relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let timing = &self.animation.timing;
        let violations = timing_violations(
            Some(timing.duration_ms),
            Some(timing.easing_factor),
            Some(timing.max_speed),
        );
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(violations))
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct DirectionConfig {
    pub x: Option<bool>,
    pub y: Option<bool>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct TimingConfig {
    pub duration: Option<f64>,
    pub easing_factor: Option<f64>,
    pub max_speed: Option<f64>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct AnimationConfig {
    pub timing: Option<TimingConfig>,
    pub slide: Option<bool>,
}

/// User-facing partial configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct DragToScrollConfig {
    pub direction: Option<DirectionConfig>,
    pub animation: Option<AnimationConfig>,
    pub prevent_default: Option<bool>,
    pub stop_propagation: Option<bool>,
}

impl DragToScrollConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a camelCase JSON document such as
    /// `{"direction": {"x": true}, "animation": {"timing": {"easingFactor": 5}}}`.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    pub fn with_direction_x(mut self, enabled: bool) -> Self {
        self.direction.get_or_insert_with(Default::default).x = Some(enabled);
        self
    }

    pub fn with_direction_y(mut self, enabled: bool) -> Self {
        self.direction.get_or_insert_with(Default::default).y = Some(enabled);
        self
    }

    pub fn with_slide(mut self, slide: bool) -> Self {
        self.animation.get_or_insert_with(Default::default).slide = Some(slide);
        self
    }

    pub fn with_duration(mut self, duration_ms: f64) -> Self {
        self.timing_mut().duration = Some(duration_ms);
        self
    }

    pub fn with_easing_factor(mut self, easing_factor: f64) -> Self {
        self.timing_mut().easing_factor = Some(easing_factor);
        self
    }

    pub fn with_max_speed(mut self, max_speed: f64) -> Self {
        self.timing_mut().max_speed = Some(max_speed);
        self
    }

    pub fn with_prevent_default(mut self, prevent_default: bool) -> Self {
        self.prevent_default = Some(prevent_default);
        self
    }

    pub fn with_stop_propagation(mut self, stop_propagation: bool) -> Self {
        self.stop_propagation = Some(stop_propagation);
        self
    }

    fn timing_mut(&mut self) -> &mut TimingConfig {
        self.animation
            .get_or_insert_with(Default::default)
            .timing
            .get_or_insert_with(Default::default)
    }

    fn timing(&self) -> TimingConfig {
        self.animation
            .and_then(|animation| animation.timing)
            .unwrap_or_default()
    }

    /// Every rejected value, in declaration order.
    pub fn violations(&self) -> Vec<ConfigViolation> {
        let timing = self.timing();
        timing_violations(timing.duration, timing.easing_factor, timing.max_speed)
    }

    /// Validates and merges over [`DragToScrollParameters::default`].
    pub fn resolve(&self) -> Result<DragToScrollParameters, ConfigError> {
        let violations = self.violations();
        if !violations.is_empty() {
            return Err(ConfigError::Invalid(violations));
        }

        let defaults = DragToScrollParameters::default();
        let direction = self.direction.unwrap_or_default();
        let timing = self.timing();
        let default_timing = defaults.animation.timing;

        Ok(DragToScrollParameters {
            direction: Direction::from_partial(direction.x, direction.y),
            animation: AnimationParameters {
                timing: AnimationTiming {
                    duration_ms: timing.duration.unwrap_or(default_timing.duration_ms),
                    easing_factor: timing.easing_factor.unwrap_or(default_timing.easing_factor),
                    max_speed: timing.max_speed.unwrap_or(default_timing.max_speed),
                },
                slide: self
                    .animation
                    .and_then(|animation| animation.slide)
                    .unwrap_or(defaults.animation.slide),
            },
            prevent_default: self.prevent_default.unwrap_or(defaults.prevent_default),
            stop_propagation: self.stop_propagation.unwrap_or(defaults.stop_propagation),
        })
    }
}

fn timing_violations(
    duration: Option<f64>,
    easing_factor: Option<f64>,
    max_speed: Option<f64>,
) -> Vec<ConfigViolation> {
    let checks = [
        ("animation.timing.duration", duration, 0.0, "can't be less than 0"),
        ("animation.timing.easingFactor", easing_factor, 1.0, "can't be less than 1"),
        ("animation.timing.maxSpeed", max_speed, 0.0, "can't be less than 0"),
    ];

    checks
        .into_iter()
        .filter_map(|(property, value, minimum, behaviour)| {
            let value = value?;
            if !value.is_finite() {
                Some(ConfigViolation::not_finite(property, value))
            } else if value < minimum {
                Some(ConfigViolation::below(property, behaviour, value))
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
