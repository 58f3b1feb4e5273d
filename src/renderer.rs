//! The render loop: derives the instantaneous output color every tick.
//!
//! Provides [`Renderer`] which turns the active [`Snapshot`](crate::Snapshot)
//! and the current monotonic time into hardware duty writes. The algorithm is
//! driven purely by elapsed wall time, never by tick count, so it is correct
//! at any polling rate: call [`Renderer::run`] on a dedicated thread, or call
//! [`Renderer::tick`] yourself from an async task at whatever frame rate the
//! platform allows.

use crate::colors;
use crate::sink::{LedSink, PwmOutput};
use crate::slot::StateSlot;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use palette::Srgb;

/// Continuously renders the active snapshot to an RGB LED.
///
/// The renderer owns the hardware sink and borrows the shared slot and time
/// source. It is the single consumer of the slot; the only writes it performs
/// itself are blink-edge retriggers, which go through the same atomic update
/// as an external retarget.
pub struct Renderer<'s, I: TimeInstant, O: PwmOutput, T: TimeSource<I>> {
    sink: LedSink<O>,
    slot: &'s StateSlot<I>,
    time_source: &'s T,
    last_displayed: Srgb,
}

impl<'s, I: TimeInstant, O: PwmOutput, T: TimeSource<I>> Renderer<'s, I, O, T> {
    /// Creates a renderer with the LED turned off.
    pub fn new(output: O, slot: &'s StateSlot<I>, time_source: &'s T) -> Self {
        let mut sink = LedSink::new(output);
        sink.write(colors::BLACK, 1.0);

        Self {
            sink,
            slot,
            time_source,
            last_displayed: colors::BLACK,
        }
    }

    /// Performs one render pass and returns the color that was written.
    ///
    /// Reads the slot exactly once into a local copy; a publish landing while
    /// this tick computes shows up on the next tick. When the blink square
    /// wave has flipped since the snapshot's change time, the fade is
    /// retriggered toward the opposite phase color before rendering, starting
    /// from the color the fade was showing at the edge - computed, not
    /// remembered, so the result is the same at any polling rate. The
    /// retrigger re-checks inside the slot's critical section, so a retarget
    /// racing this tick wins and the stale toggle is dropped.
    pub fn tick(&mut self) -> Srgb {
        let now = self.time_source.now();
        let mut snap = self.slot.load();
        let mut elapsed = now.duration_since(snap.change_time).as_secs_f32();

        if snap.blink_edge_due(elapsed) {
            let at_edge = compose(&snap, elapsed);
            snap = self.slot.update(|current| {
                let since_change = now.duration_since(current.change_time).as_secs_f32();
                if current.blink_edge_due(since_change) {
                    current.blink_toggled(at_edge, now)
                } else {
                    current
                }
            });
            elapsed = now.duration_since(snap.change_time).as_secs_f32();
        }

        let displayed = compose(&snap, elapsed);
        self.sink.write(displayed, snap.brightness);
        self.last_displayed = displayed;
        displayed
    }

    /// Runs until shutdown is requested, then writes one final black frame.
    ///
    /// No sleep is taken between ticks; the tick rate is bounded by
    /// scheduling fairness and the hardware write cost. Platforms that want a
    /// fixed frame rate should drive [`Renderer::tick`] themselves and call
    /// [`Renderer::finish`] on exit.
    pub fn run(&mut self) {
        while !self.slot.shutdown_requested() {
            self.tick();
        }
        self.finish();
    }

    /// Writes the guaranteed terminal black frame.
    ///
    /// The indicator must never be left lit in an indeterminate state, so
    /// whatever drives the tick loop calls this exactly once on exit.
    pub fn finish(&mut self) {
        self.sink.write(colors::BLACK, 1.0);
        self.last_displayed = colors::BLACK;
    }

    /// Returns the color most recently written to the hardware.
    pub fn last_displayed(&self) -> Srgb {
        self.last_displayed
    }
}

/// Derives the displayed color from a snapshot and the seconds elapsed since
/// its change time.
///
/// With no fade configured the target shows outright. Otherwise the fade
/// factor follows a raised cosine, `(1 - cos(u * pi)) / 2` for
/// `u = clamp(elapsed / fade_duration, 0, 1)`: zero at the start, one at the
/// end, zero slope at both, so transitions never visibly snap.
fn compose<I: TimeInstant>(snap: &crate::snapshot::Snapshot<I>, elapsed: f32) -> Srgb {
    if snap.fade_duration == 0.0 {
        return snap.target_color;
    }
    let progress = (elapsed / snap.fade_duration).clamp(0.0, 1.0);
    let fade_factor = (1.0 - libm::cosf(progress * core::f32::consts::PI)) / 2.0;
    colors::blend(snap.previous_color, snap.target_color, fade_factor)
}
