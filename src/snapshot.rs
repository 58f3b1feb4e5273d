//! The atomically-published animation state.
//!
//! A [`Snapshot`] is everything a render tick needs to derive the output
//! color from elapsed time alone. Snapshots are plain `Copy` values; they are
//! never mutated in place. Every change - a producer retarget or a blink
//! phase flip - builds a fresh snapshot and replaces the old one through the
//! [`StateSlot`](crate::StateSlot), so the renderer can never observe a half
//! updated state.

use crate::colors;
use crate::config::BeaconConfig;
use crate::time::TimeInstant;
use palette::Srgb;

/// One fully-formed animation state, published as a unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I: TimeInstant> {
    /// Color the current fade started from.
    pub previous_color: Srgb,

    /// Color the current fade is heading toward.
    pub target_color: Srgb,

    /// Monotonic instant this snapshot became active. Fades and the blink
    /// square wave are both referenced to this instant.
    pub change_time: I,

    /// Blink frequency in Hz. 0 means no blink.
    pub blink_frequency: f32,

    /// Fade duration in seconds. 0 means the target is displayed outright.
    pub fade_duration: f32,

    /// Global brightness scalar, applied at render time only.
    pub brightness: f32,

    /// The last producer-set target. Blinking fades between this color and
    /// black; a blink edge restores it when the phase turns back on.
    pub base_color: Srgb,

    /// Current blink square-wave phase. Blinks start "on" (base color lit).
    pub blink_phase_on: bool,
}

impl<I: TimeInstant> Snapshot<I> {
    /// Creates the initial all-black snapshot from startup configuration.
    pub fn initial(config: &BeaconConfig, now: I) -> Self {
        Self {
            previous_color: colors::BLACK,
            target_color: colors::BLACK,
            change_time: now,
            blink_frequency: config.blink_frequency,
            fade_duration: config.fade_duration,
            brightness: config.brightness,
            base_color: colors::BLACK,
            blink_phase_on: true,
        }
    }

    /// Builds the successor snapshot for a producer retarget.
    ///
    /// The new fade starts from this snapshot's target color, so repeating a
    /// target yields `previous_color == target_color` and no visible fade.
    /// The fade duration is sticky: passing `None` keeps the current value.
    /// Blink phase resets to "on", restarting the square wave at the new
    /// change time.
    pub fn retargeted(
        &self,
        color: Srgb,
        blink_frequency: f32,
        fade_duration: Option<f32>,
        now: I,
    ) -> Self {
        Self {
            previous_color: self.target_color,
            target_color: color,
            change_time: now,
            blink_frequency,
            fade_duration: fade_duration.unwrap_or(self.fade_duration),
            brightness: self.brightness,
            base_color: color,
            blink_phase_on: true,
        }
    }

    /// Builds the successor snapshot for a blink edge.
    ///
    /// Flips the square-wave phase and restarts the fade timer, fading from
    /// the color that was on the LED at the edge toward black (phase off) or
    /// back toward the base color (phase on). Blinking is nothing more than
    /// this retrigger of the ordinary fade mechanism.
    pub fn blink_toggled(&self, displayed: Srgb, now: I) -> Self {
        let phase_on = !self.blink_phase_on;
        Self {
            previous_color: displayed,
            target_color: if phase_on {
                self.base_color
            } else {
                colors::BLACK
            },
            change_time: now,
            blink_phase_on: phase_on,
            ..*self
        }
    }

    /// Builds the successor snapshot for a brightness change.
    ///
    /// Leaves the in-flight fade untouched; brightness only matters at render
    /// time.
    pub fn with_brightness(&self, brightness: f32) -> Self {
        Self { brightness, ..*self }
    }

    /// Returns true if the blink square wave has flipped phase at `elapsed`
    /// seconds past this snapshot's change time.
    ///
    /// The wave starts "on" and runs at `blink_frequency` full cycles per
    /// second, so the first edge falls at `1 / (2 * blink_frequency)`. Phase
    /// is on while `floor(2 * elapsed * f) + 1` is odd; an edge is due once
    /// that parity flips. Because every edge publishes a snapshot with a
    /// fresh change time, `elapsed` restarts and the parity re-arms.
    pub fn blink_edge_due(&self, elapsed: f32) -> bool {
        if self.blink_frequency == 0.0 {
            return false;
        }
        let half_periods = libm::floorf(2.0 * elapsed * self.blink_frequency);
        (half_periods as i64 + 1) % 2 == 0
    }
}
