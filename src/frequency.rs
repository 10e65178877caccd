//! Translation between MIDI note numbers and frequencies, using the MIDI Tuning Standard:
//! twelve-tone equal temperament with `A4` (note 69) tuned to 440 Hz.

use crate::prelude::*;

/// The reference frequency of `A4`, in Hz.
pub const A4_FREQUENCY: f64 = 440.0;
/// The note number of `A4`.
pub const A4_KEY: u7 = u7::new(69);
/// The exact frequency of note 0 (`C-1`), in Hz.
pub const LOWEST_FREQUENCY: f64 = 8.175798915643707;
/// The exact frequency of note 127 (`G9`), in Hz.
pub const HIGHEST_FREQUENCY: f64 = 12543.853951415975;

/// Number of decimal places kept by `note_to_frequency`.
const FREQUENCY_SCALE: f64 = 1000.0;

#[cfg(feature = "std")]
mod math {
    #[inline]
    pub fn exp2(x: f64) -> f64 {
        x.exp2()
    }
    #[inline]
    pub fn log2(x: f64) -> f64 {
        x.log2()
    }
    #[inline]
    pub fn round(x: f64) -> f64 {
        x.round()
    }
    #[inline]
    pub fn trunc(x: f64) -> f64 {
        x.trunc()
    }
}

#[cfg(not(feature = "std"))]
mod math {
    pub use libm::{exp2, log2, round, trunc};
}

/// Get the exact frequency of a note number, in Hz.
#[inline]
pub fn key_frequency(key: u7) -> f64 {
    let semitones = i32::from(key) - i32::from(A4_KEY);
    A4_FREQUENCY * math::exp2(semitones as f64 / 12.0)
}

/// Get the note number closest to a frequency in Hz.
///
/// Fractional notes are rounded half away from zero, which for positive frequencies is the
/// same as rounding half up.
/// Returns `None` if the frequency is not a positive finite number, or if the closest note is
/// outside of `[0, 127]`.
pub fn frequency_to_key(frequency: f64) -> Option<u7> {
    if !(frequency > 0.0 && frequency.is_finite()) {
        return rejected!("frequency", frequency);
    }
    let note = math::round(i32::from(A4_KEY) as f64 + 12.0 * math::log2(frequency / A4_FREQUENCY));
    if note < 0.0 || note > u7::max_value().as_int() as f64 {
        return rejected!("frequency", frequency);
    }
    Some(u7::new(note as u8))
}

/// Translate a MIDI note number into its frequency in Hz.
///
/// The frequency is truncated to three decimal places, so note 60 (`C4`) yields `261.625`.
/// Use [`key_frequency`](fn.key_frequency.html) for the exact value.
///
/// Returns `None` if the note is outside of `[0, 127]`.
#[inline]
pub fn note_to_frequency(note: i32) -> Option<f64> {
    match u7::try_from_i32(note) {
        Some(key) => Some(math::trunc(key_frequency(key) * FREQUENCY_SCALE) / FREQUENCY_SCALE),
        None => rejected!("note", note),
    }
}

/// Translate a frequency in Hz into the closest MIDI note number.
///
/// See [`frequency_to_key`](fn.frequency_to_key.html) for the rounding rules and the cases in
/// which `None` is returned.
#[inline]
pub fn frequency_to_note(frequency: f64) -> Option<u8> {
    frequency_to_key(frequency).map(u7::as_int)
}
