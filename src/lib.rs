//! # Overview
//!
//! `midi_tools` is a small set of allocation-free helpers for MIDI data, translating between
//! MIDI note numbers, note names, frequencies and Control Change descriptions.
//!
//! Usage is as simple as:
//!
//! ```rust
//! use midi_tools::{note_to_name, name_to_note, note_to_frequency, cc_code_to_description};
//!
//! assert_eq!(note_to_name(70), Some("A#4"));
//! assert_eq!(name_to_note("A#4"), Some(70));
//! assert_eq!(note_to_frequency(60), Some(261.625));
//! assert_eq!(cc_code_to_description(1), Some("Modulation"));
//! ```
//!
//! Every function in this crate is a pure lookup over constant tables, so they can be called
//! from any thread, interrupt handler or audio callback.
//!
//! # About absent values
//!
//! Out-of-range input is an expected situation when handling MIDI, not an exceptional one.
//! For this reason the conversion functions return `Option`, and `None` is returned whenever the
//! input has no mapping:
//!
//! ```rust
//! use midi_tools::{note_to_name, frequency_to_note};
//!
//! assert_eq!(note_to_name(128), None);
//! assert_eq!(note_to_name(-1), None);
//! assert_eq!(frequency_to_note(0.0), None);
//! ```
//!
//! When a reason is needed, note names can be parsed through
//! [`NoteName::parse`](struct.NoteName.html#method.parse), which returns a
//! [`Result`](type.Result.html) instead.
//!
//! # Typed entry points
//!
//! The untyped functions take `i32` so that any integer coming from outside can be validated.
//! Code that already holds a 7-bit value can use the [`num::u7`](num/struct.u7.html) type and the
//! infallible variants [`key_name`](fn.key_name.html),
//! [`key_frequency`](fn.key_frequency.html) and
//! [`controller_description`](fn.controller_description.html):
//!
//! ```rust
//! use midi_tools::{key_name, controller_description, num::u7};
//!
//! let key = u7::new(79);
//! assert_eq!(key_name(key), "G5");
//! assert_eq!(controller_description(u7::new(24)), "Ctrl_24");
//! ```
//!
//! # About features
//!
//! - The `std` feature
//!
//!   Enabled by default. Uses the `std` floating point intrinsics and implements
//!   `std::error::Error` for [`Error`](struct.Error.html).
//!   Disabling this feature with `default-features = false` makes the crate `no_std`, with the
//!   math provided by `libm`.
//!
//! - The `strict` feature
//!
//!   By default note names are read the way people write them: `"c4"`, `"C+4"` and `"C 4"` are
//!   all understood as `C4`.
//!   By enabling the `strict` feature only the canonical spelling is accepted, and
//!   `ErrorKind::Malformed` errors are raised for everything else.
//!
//! - The `tracing` feature
//!
//!   Emits a `trace`-level event through the `tracing` crate every time a conversion rejects its
//!   input.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

macro_rules! bail {
    ($err:expr) => {{
        return Err($err.into());
    }};
}
macro_rules! ensure {
    ($cond:expr, $err:expr) => {{
        if !$cond {
            bail!($err)
        }
    }};
}
/// Evaluates to `None`, noting the rejected value if the `tracing` feature is enabled.
macro_rules! rejected {
    ($what:expr, $value:expr) => {{
        #[cfg(feature = "tracing")]
        tracing::trace!(value = ?$value, input = $what, "rejected out-of-domain input");
        #[cfg(not(feature = "tracing"))]
        let _ = &$value;
        None
    }};
}

/// All of the errors this crate produces.
#[macro_use]
mod error;

mod prelude {
    pub(crate) use crate::{
        error::{Error, ErrorKind, Result, StdResult},
        primitive::u7,
    };
    pub(crate) use core::{convert::TryFrom, fmt, str::FromStr};
}

mod controller;
mod frequency;
mod name;
mod primitive;

pub use crate::{
    controller::{
        cc_code_kind, cc_code_to_description, controller_description, description_to_cc_code,
        ControllerKind,
    },
    error::{Error, ErrorKind, Result},
    frequency::{
        frequency_to_key, frequency_to_note, key_frequency, note_to_frequency, A4_FREQUENCY,
        A4_KEY, HIGHEST_FREQUENCY, LOWEST_FREQUENCY,
    },
    name::{key_name, name_to_note, note_or_name, note_to_name, NoteName, NoteOrName, PitchClass},
};

/// Exotically-sized integers used by the MIDI standard.
pub mod num {
    pub use crate::primitive::u7;
}

#[cfg(test)]
mod test;
