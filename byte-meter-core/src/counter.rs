//! Byte counting and human-readable size formatting.
//!
//! [`ByteCount`] wraps a running `u64` tally of bytes. Accumulation wraps
//! modulo 2^64 like the underlying integer. Formatting renders binary (IEC)
//! units with three decimals, and the rate helpers derive per-second byte
//! and bit rates from an elapsed-seconds divisor.

use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use crate::unit::Unit;

/// Bits per byte, for byte-rate to bit-rate conversion.
pub const BITS_PER_BYTE: u64 = 8;

/// A running count of bytes.
///
/// Plain value type: `Copy`, no interior mutability. Wrap it in a lock or
/// atomic if several threads need to bump the same counter. Overflow wraps
/// modulo 2^64 rather than erroring; [`ByteCount::MAX`] is the all-ones
/// sentinel.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ByteCount(u64);

impl ByteCount {
    /// The all-ones maximum, 2^64 - 1 bytes.
    pub const MAX: ByteCount = ByteCount(u64::MAX);

    /// A counter holding `bytes`.
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    /// Add `delta` bytes, wrapping modulo 2^64 on overflow.
    pub fn add(&mut self, delta: u64) {
        self.0 = self.0.wrapping_add(delta);
    }

    /// Replace the count with `bytes`.
    pub fn set(&mut self, bytes: u64) {
        self.0 = bytes;
    }

    /// Add another counter's value, wrapping like [`ByteCount::add`].
    pub fn increment_by(&mut self, other: ByteCount) {
        self.add(other.0);
    }

    /// Replace the count with another counter's value.
    pub fn assign(&mut self, other: ByteCount) {
        self.set(other.0);
    }

    /// The raw count.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// The count as a float, for rate arithmetic. Loses precision above 2^53.
    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }

    /// The count projected into `unit`.
    ///
    /// Examples:
    /// - `ByteCount::new(1536).in_unit(Unit::Kibibyte)` → `1.5`
    /// - `ByteCount::new(1 << 30).in_unit(Unit::Mebibyte)` → `1024.0`
    pub fn in_unit(&self, unit: Unit) -> f64 {
        self.0 as f64 / unit.scale() as f64
    }

    /// Bytes per second over `seconds`, formatted like `Display` with "/s"
    /// appended (e.g. `"512.000KiB/s"`).
    ///
    /// `seconds` is expected to be positive and is not validated here.
    /// A zero or negative divisor yields a float infinity or NaN, and the
    /// `u64` conversion clamps those to the ends of the range (NaN and
    /// negatives to 0, +inf to `u64::MAX`), so the output degrades to
    /// `"0B/s"` or `"16.000EiB/s"` instead of panicking.
    pub fn rate(&self, seconds: f64) -> String {
        format!("{}/s", ByteCount::new((self.as_f64() / seconds) as u64))
    }

    /// Bits per second over `seconds`, as a float.
    ///
    /// Counts above one pebibyte divide by `seconds` before multiplying by
    /// 8; counts at or below it multiply by 8 first. The ordering is part
    /// of the output contract at large scales.
    pub fn bits_per_second(&self, seconds: f64) -> f64 {
        let mut bits = self.as_f64();
        if self.0 > Unit::Pebibyte.scale() {
            bits /= seconds;
            bits *= BITS_PER_BYTE as f64;
        } else {
            bits *= BITS_PER_BYTE as f64;
            bits /= seconds;
        }
        bits
    }

    /// Bits per second over `seconds`, formatted like `Display` with the
    /// trailing "B" replaced by " bps".
    ///
    /// Examples:
    /// - 100 bytes over 1s → `"800 bps"`
    /// - 1 MiB over 1s → `"8.000Mi bps"`
    ///
    /// Same divisor caveat as [`ByteCount::rate`]: a non-positive
    /// `seconds` clamps instead of panicking.
    pub fn bit_rate(&self, seconds: f64) -> String {
        let mut formatted = ByteCount::new(self.bits_per_second(seconds) as u64).to_string();
        formatted.truncate(formatted.len() - 1); // every formatted count ends in 'B'
        formatted.push_str(" bps");
        formatted
    }
}

impl std::fmt::Display for ByteCount {
    /// Format with the largest binary unit the count reaches, to three
    /// decimals. Counts below 1 KiB print as a bare integer plus "B".
    ///
    /// Examples: `"0B"`, `"1023B"`, `"1.500KiB"`, `"16.000EiB"`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match Unit::for_value(self.0) {
            Unit::Byte => write!(f, "{}B", self.0),
            unit => write!(f, "{:.3}{}", self.in_unit(unit), unit.symbol()),
        }
    }
}

impl From<u64> for ByteCount {
    fn from(bytes: u64) -> Self {
        Self(bytes)
    }
}

impl From<ByteCount> for u64 {
    fn from(count: ByteCount) -> u64 {
        count.0
    }
}

/// `+=` for raw byte deltas, wrapping like [`ByteCount::add`].
impl AddAssign<u64> for ByteCount {
    fn add_assign(&mut self, delta: u64) {
        self.add(delta);
    }
}

/// `+=` for merging counters, wrapping like [`ByteCount::increment_by`].
impl AddAssign<ByteCount> for ByteCount {
    fn add_assign(&mut self, other: ByteCount) {
        self.increment_by(other);
    }
}

#[cfg(test)]
#[path = "tests/counter_tests.rs"]
mod tests;
