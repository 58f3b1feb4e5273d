#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Snapshot`**: An immutable record of everything one render tick needs
//!   (previous/target color, change time, blink frequency, fade duration,
//!   brightness), always published as a unit
//! - **`StateSlot`**: The single shared slot the snapshot is atomically
//!   replaced in; also carries the shutdown flag
//! - **`BeaconHandle`**: Producer-side handle for `set_target` /
//!   `set_brightness`, safe to call concurrently with rendering
//! - **`Renderer`**: The consumer loop deriving the output color from elapsed
//!   time (raised-cosine fade, blink overlay) and writing it to the hardware
//! - **`LedSink` / `PwmOutput`**: Brightness scaling and active-low duty
//!   mapping over the trait your hardware implements
//! - **`TimeSource`**: Trait to implement for your monotonic clock
//! - **`BeaconConfig`**: Startup defaults for fade duration, blink frequency
//!   and brightness
//!
//! The library uses `Srgb<f32>` (0.0-1.0 range) for all color operations and
//! interpolation. Values are clamped once at the hardware sink, where they
//! become 16-bit active-low PWM duty cycles.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod time;
pub mod colors;
pub mod config;
pub mod snapshot;
pub mod slot;
pub mod sink;
pub mod handle;
pub mod renderer;

pub use config::{BeaconConfig, ConfigError};
pub use handle::BeaconHandle;
pub use renderer::Renderer;
pub use sink::{DUTY_MAX, LedSink, PwmOutput};
pub use slot::StateSlot;
pub use snapshot::Snapshot;
pub use time::{TimeDuration, TimeInstant, TimeSource};

pub const COLOR_OFF: Srgb = colors::BLACK;
