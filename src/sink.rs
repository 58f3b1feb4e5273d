//! Hardware sink: maps colors and brightness to PWM duty cycles.
//!
//! The LED channels are wired active-low: full duty turns a channel off and
//! zero duty drives it at full brightness. [`LedSink`] owns that mapping plus
//! the brightness scaling, so [`PwmOutput`] implementations only ever see
//! ready-to-write duty values.

use crate::colors;
use palette::Srgb;

/// Maximum PWM duty cycle value (16-bit resolution).
pub const DUTY_MAX: u16 = u16::MAX;

/// Trait for abstracting the three PWM-capable outputs driving the LED.
///
/// Implement this for your hardware (PWM peripheral, LEDC channel, shift
/// register, ...). Duty values are in `[0, DUTY_MAX]` with the active-low
/// inversion already applied. Handle any hardware errors internally - this
/// method cannot fail.
pub trait PwmOutput {
    /// Writes one duty value per channel.
    fn set_duty(&mut self, red: u16, green: u16, blue: u16);
}

/// The only component touching physical I/O.
pub struct LedSink<O: PwmOutput> {
    output: O,
}

impl<O: PwmOutput> LedSink<O> {
    /// Wraps a PWM output.
    pub fn new(output: O) -> Self {
        Self { output }
    }

    /// Renders one color at the given brightness.
    ///
    /// Channels are clamped to [0, 1] after brightness scaling. Unclamped
    /// color arithmetic upstream (say, adding two saturated colors) would
    /// otherwise fold back into the duty range and flip the LED the wrong
    /// way; clamping here keeps out-of-range inputs pinned to full-on or
    /// full-off instead.
    pub fn write(&mut self, color: Srgb, brightness: f32) {
        let effective = colors::scale(color, brightness);
        self.output.set_duty(
            Self::channel_duty(effective.red),
            Self::channel_duty(effective.green),
            Self::channel_duty(effective.blue),
        );
    }

    /// Consumes the sink, returning the wrapped output.
    pub fn into_output(self) -> O {
        self.output
    }

    fn channel_duty(value: f32) -> u16 {
        let value = value.clamp(0.0, 1.0);
        libm::roundf((1.0 - value) * DUTY_MAX as f32) as u16
    }
}
