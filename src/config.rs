//! Startup configuration for the animation engine.

/// Engine defaults consumed at startup.
///
/// Typically read from whatever configuration mechanism the embedding
/// application uses and handed to [`Snapshot::initial`](crate::Snapshot::initial)
/// to seed the first published snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeaconConfig {
    /// Default fade duration in seconds. 0 disables easing entirely.
    pub fade_duration: f32,

    /// Default blink frequency in Hz. 0 means no blink.
    pub blink_frequency: f32,

    /// Global brightness scalar in [0, 1], applied at render time.
    pub brightness: f32,
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Fade duration is negative.
    NegativeFadeDuration,

    /// Blink frequency is negative.
    NegativeBlinkFrequency,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::NegativeFadeDuration => {
                write!(f, "fade duration must not be negative")
            }
            ConfigError::NegativeBlinkFrequency => {
                write!(f, "blink frequency must not be negative")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

impl BeaconConfig {
    /// Creates a validated configuration.
    ///
    /// Brightness is clamped to [0, 1]. The blink frequency is capped at
    /// `fade_duration / 2` so a blink half-cycle is never shorter than one
    /// fade transition.
    ///
    /// # Errors
    /// * `NegativeFadeDuration` - `fade_duration` is below zero
    /// * `NegativeBlinkFrequency` - `blink_frequency` is below zero
    pub fn new(
        fade_duration: f32,
        blink_frequency: f32,
        brightness: f32,
    ) -> Result<Self, ConfigError> {
        if fade_duration < 0.0 {
            return Err(ConfigError::NegativeFadeDuration);
        }
        if blink_frequency < 0.0 {
            return Err(ConfigError::NegativeBlinkFrequency);
        }

        Ok(Self {
            fade_duration,
            blink_frequency: blink_frequency.min(fade_duration / 2.0),
            brightness: brightness.clamp(0.0, 1.0),
        })
    }
}

impl Default for BeaconConfig {
    /// One-second fades, no blink, full brightness.
    fn default() -> Self {
        Self {
            fade_duration: 1.0,
            blink_frequency: 0.0,
            brightness: 1.0,
        }
    }
}
