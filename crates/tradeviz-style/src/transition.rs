//! Transition descriptors
//!
//! A transition is described as data (duration + easing identifier) and
//! handed to the rendering collaborator, which applies it to its own
//! animation primitive. Nothing in this module draws or animates.

use serde::Serialize;

/// Standard duration for line redraw transitions, in milliseconds
pub const DEFAULT_TRANSITION_MS: u32 = 150;

/// Easing curve identifier
///
/// The names follow the d3-ease convention used by the renderers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Easing {
    #[default]
    Linear,
    CubicOut,
    CubicInOut,
}

impl Easing {
    /// The renderer-facing identifier for this curve
    pub fn name(&self) -> &'static str {
        match self {
            Easing::Linear => "easeLinear",
            Easing::CubicOut => "easeCubicOut",
            Easing::CubicInOut => "easeCubicInOut",
        }
    }
}

/// How a visual property should animate: duration plus easing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TransitionSpec {
    pub duration_ms: u32,
    pub easing: Easing,
}

impl TransitionSpec {
    pub fn new(duration_ms: u32, easing: Easing) -> Self {
        Self { duration_ms, easing }
    }
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSITION_MS, Easing::Linear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_transition() {
        let spec = TransitionSpec::default();
        assert_eq!(spec.duration_ms, 150);
        assert_eq!(spec.easing.name(), "easeLinear");
    }

    #[test]
    fn test_easing_names() {
        assert_eq!(Easing::CubicOut.name(), "easeCubicOut");
        assert_eq!(Easing::CubicInOut.name(), "easeCubicInOut");
    }
}
