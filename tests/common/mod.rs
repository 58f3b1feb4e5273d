//! Shared test infrastructure for rgb-beacon integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use palette::Srgb;
use rgb_beacon::{PwmOutput, TimeDuration, TimeInstant, TimeSource};
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps microseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_micros(&self) -> u64 {
        self.0
    }

    fn from_micros(micros: u64) -> Self {
        TestDuration(micros)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.wrapping_sub(earlier.0))
    }
}

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of microseconds
    pub fn advance_micros(&self, micros: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + micros));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Wall-clock Time Types (for threaded tests)
// ============================================================================

/// `TimeInstant` over `std::time::Instant`, usable across threads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StdInstant(pub std::time::Instant);

impl TimeInstant for StdInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.duration_since(earlier.0).as_micros() as u64)
    }
}

/// Time source backed by the host monotonic clock
pub struct StdClock;

impl TimeSource<StdInstant> for StdClock {
    fn now(&self) -> StdInstant {
        StdInstant(std::time::Instant::now())
    }
}

// ============================================================================
// Mock PWM Outputs
// ============================================================================

/// PWM output that discards all writes
pub struct NullPwm;

impl PwmOutput for NullPwm {
    fn set_duty(&mut self, _red: u16, _green: u16, _blue: u16) {}
}

/// PWM output that records every duty write through a shared, cloneable log
///
/// The renderer takes ownership of the output, so tests keep a clone of the
/// log handle to inspect what actually reached the hardware boundary.
#[derive(Clone)]
pub struct SharedPwm {
    writes: Arc<Mutex<Vec<(u16, u16, u16)>>>,
}

impl SharedPwm {
    pub fn new() -> Self {
        Self {
            writes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// All duty writes so far, in order
    pub fn writes(&self) -> Vec<(u16, u16, u16)> {
        self.writes.lock().unwrap().clone()
    }

    /// The most recent duty write
    pub fn last_write(&self) -> Option<(u16, u16, u16)> {
        self.writes.lock().unwrap().last().copied()
    }
}

impl PwmOutput for SharedPwm {
    fn set_duty(&mut self, red: u16, green: u16, blue: u16) {
        self.writes.lock().unwrap().push((red, green, blue));
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two colors with floating-point tolerance
pub fn colors_equal(a: Srgb, b: Srgb) -> bool {
    const EPSILON: f32 = 0.001;
    (a.red - b.red).abs() < EPSILON
        && (a.green - b.green).abs() < EPSILON
        && (a.blue - b.blue).abs() < EPSILON
}

/// Compare two colors with custom epsilon
pub fn colors_equal_epsilon(a: Srgb, b: Srgb, epsilon: f32) -> bool {
    (a.red - b.red).abs() < epsilon
        && (a.green - b.green).abs() < epsilon
        && (a.blue - b.blue).abs() < epsilon
}

/// Duty triple for a fully dark active-low LED
pub const DUTY_OFF: (u16, u16, u16) = (
    rgb_beacon::DUTY_MAX,
    rgb_beacon::DUTY_MAX,
    rgb_beacon::DUTY_MAX,
);
