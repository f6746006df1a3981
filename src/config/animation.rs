//! Animation configuration
//!
//! Controls the expand/collapse transition and the frame rate used to play it.

use serde::Deserialize;
use std::time::Duration;

/// Expand/collapse animation settings
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationConfig {
    /// Animate transitions at all (false = snap to the new state)
    pub enabled: bool,
    /// Transition length in milliseconds
    pub duration_ms: u64,
    /// Redraw interval while an animation is running
    pub frame_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_ms: 300,
            frame_ms: 16,
        }
    }
}

/// Animation settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileAnimation {
    pub enabled: Option<bool>,
    pub duration_ms: Option<u64>,
    pub frame_ms: Option<u64>,
}

impl AnimationConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileAnimation>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            enabled: file.enabled.unwrap_or(defaults.enabled),
            duration_ms: file.duration_ms.unwrap_or(defaults.duration_ms),
            // A zero frame interval would spin the event loop
            frame_ms: file.frame_ms.unwrap_or(defaults.frame_ms).max(1),
        }
    }

    /// Effective transition duration (zero when disabled)
    pub fn duration(&self) -> Duration {
        if self.enabled {
            Duration::from_millis(self.duration_ms)
        } else {
            Duration::ZERO
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}
