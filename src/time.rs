//! Time abstraction traits for platform-agnostic timing.
//!
//! The engine only ever computes time *differences*; absolute instant values
//! carry no meaning and may wrap. Implementations for wrapping hardware
//! counters should compute `duration_since` the same way the underlying
//! counter wraps.

/// Trait for abstracting monotonic time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Trait abstraction for duration types.
///
/// Microsecond resolution is expected; coarser sources will make fades and
/// blink edges visibly step.
pub trait TimeDuration: Copy + PartialEq {
    /// Converts duration to microseconds.
    fn as_micros(&self) -> u64;

    /// Creates duration from microseconds.
    fn from_micros(micros: u64) -> Self;

    /// Converts duration to fractional seconds for animation math.
    fn as_secs_f32(&self) -> f32 {
        self.as_micros() as f32 * 1e-6
    }
}
