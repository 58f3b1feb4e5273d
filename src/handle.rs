//! Producer-side handle for publishing new animation targets.

use crate::slot::StateSlot;
use crate::time::{TimeInstant, TimeSource};
use palette::Srgb;

/// Publishes color targets into a shared [`StateSlot`].
///
/// This is the whole surface the status-deciding logic sees. Every method
/// returns immediately after the atomic publish; none of them block on the
/// render loop, and all of them may be called from a different thread of
/// control than the renderer, at any time, including mid-tick.
pub struct BeaconHandle<'s, I: TimeInstant, T: TimeSource<I>> {
    slot: &'s StateSlot<I>,
    time_source: &'s T,
}

impl<'s, I: TimeInstant, T: TimeSource<I>> BeaconHandle<'s, I, T> {
    /// Creates a handle over a shared slot.
    pub fn new(slot: &'s StateSlot<I>, time_source: &'s T) -> Self {
        Self { slot, time_source }
    }

    /// Publishes a new target color.
    ///
    /// The fade toward `color` starts from the previously-published target
    /// and runs for `fade_duration` seconds; `None` keeps the duration from
    /// the prior snapshot (fade duration is sticky across calls that omit
    /// it). A non-zero `blink_frequency` overlays a square-wave blink between
    /// `color` and black, starting in the lit phase.
    pub fn set_target(&self, color: Srgb, blink_frequency: f32, fade_duration: Option<f32>) {
        let now = self.time_source.now();
        self.slot
            .update(|snap| snap.retargeted(color, blink_frequency, fade_duration, now));
    }

    /// Publishes a steady (non-blinking) target with the sticky fade duration.
    pub fn set_color(&self, color: Srgb) {
        self.set_target(color, 0.0, None);
    }

    /// Publishes a new global brightness without disturbing the in-flight
    /// fade or blink.
    pub fn set_brightness(&self, brightness: f32) {
        self.slot.update(|snap| snap.with_brightness(brightness));
    }

    /// Signals the render loop to terminate after one final black frame.
    pub fn request_shutdown(&self) {
        self.slot.request_shutdown();
    }
}
