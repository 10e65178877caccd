//! Translation between MIDI note numbers and NoteOctave names such as `"C4"` or `"G#7"`.
//!
//! Names are always spelled with sharps. Note `0` is `"C-1"` and note `127` is `"G9"`.

use crate::prelude::*;

/// One of the twelve semitones of an octave, spelled with sharps.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}
impl PitchClass {
    /// All pitch classes, indexed by their semitone offset from `C`.
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    const SPELLINGS: [&'static str; 12] = [
        "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
    ];

    /// Get the pitch class of a note number, or any semitone count from `C` (modulo 12).
    #[inline]
    pub fn from_index(semitones: u8) -> PitchClass {
        Self::ALL[(semitones % 12) as usize]
    }

    /// The semitone offset from `C`, in the range `[0, 11]`.
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// The canonical spelling, such as `"C"` or `"F#"`.
    #[inline]
    pub fn as_str(self) -> &'static str {
        Self::SPELLINGS[self.index() as usize]
    }

    /// Whether this pitch class is spelled with a sharp.
    #[inline]
    pub fn is_sharp(self) -> bool {
        self.as_str().len() == 2
    }

    /// Look up a spelling (a letter with an optional `#`), ignoring the case of the letter.
    fn from_spelling(spelling: &str) -> Option<PitchClass> {
        Self::SPELLINGS
            .iter()
            .position(|known| known.eq_ignore_ascii_case(spelling))
            .map(|idx| Self::ALL[idx])
    }
}
impl fmt::Display for PitchClass {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed NoteOctave name, guaranteed to name a note inside the MIDI range.
///
/// Converts to and from note numbers losslessly:
///
/// ```rust
/// use midi_tools::{NoteName, PitchClass, num::u7};
///
/// let name: NoteName = "G#7".parse().unwrap();
/// assert_eq!(name.pitch(), PitchClass::GSharp);
/// assert_eq!(name.octave(), 7);
/// assert_eq!(name.key(), 104);
/// assert_eq!(NoteName::from_key(u7::new(104)), name);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct NoteName {
    octave: i8,
    pitch: PitchClass,
}
impl NoteName {
    /// The lowest octave a MIDI note can be in.
    pub const MIN_OCTAVE: i8 = -1;
    /// The highest octave a MIDI note can be in.
    /// Only `C9` through `G9` exist in this octave.
    pub const MAX_OCTAVE: i8 = 9;

    /// Create a note name from its parts, if the resulting note exists in MIDI.
    #[inline]
    pub fn new(pitch: PitchClass, octave: i8) -> Option<NoteName> {
        if octave < Self::MIN_OCTAVE || octave > Self::MAX_OCTAVE {
            return None;
        }
        let key = (octave as i32 + 1) * 12 + pitch.index() as i32;
        u7::try_from_i32(key).map(|_| NoteName { octave, pitch })
    }

    /// Get the name of a note number.
    #[inline]
    pub fn from_key(key: u7) -> NoteName {
        let key = key.as_int();
        NoteName {
            octave: (key / 12) as i8 - 1,
            pitch: PitchClass::from_index(key),
        }
    }

    /// Get the note number this name refers to.
    #[inline]
    pub fn key(self) -> u7 {
        u7::new(((self.octave + 1) as u8) * 12 + self.pitch.index())
    }

    /// The pitch class, such as `C#`.
    #[inline]
    pub fn pitch(self) -> PitchClass {
        self.pitch
    }

    /// The octave, in the range `[-1, 9]`.
    #[inline]
    pub fn octave(self) -> i8 {
        self.octave
    }

    /// The canonical name, without any formatting or allocation.
    #[inline]
    pub fn as_str(self) -> &'static str {
        key_name(self.key())
    }

    /// Parse a NoteOctave name.
    ///
    /// A name is a pitch letter `A`-`G`, an optional `#` and a signed octave number.
    /// Flats are not understood.
    ///
    /// Unless the `strict` feature is enabled, the letter may be lowercase, the octave may carry
    /// an explicit `+` sign or leading zeros, and whitespace around the octave is ignored.
    pub fn parse(name: &str) -> Result<NoteName> {
        let letter = *name
            .as_bytes()
            .first()
            .ok_or(err_invalid!("empty note name"))?;
        ensure!(letter.is_ascii(), err_invalid!("unknown pitch letter"));
        if cfg!(feature = "strict") {
            ensure!(
                !letter.is_ascii_lowercase(),
                err_malformed!("lowercase pitch letter")
            );
        }
        let spelling_len = if name.as_bytes().get(1) == Some(&b'#') {
            2
        } else {
            1
        };
        let (spelling, octave) = name.split_at(spelling_len);
        let pitch =
            PitchClass::from_spelling(spelling).ok_or(err_invalid!("unknown pitch letter"))?;
        let octave = parse_octave(octave)?;
        ensure!(
            octave >= Self::MIN_OCTAVE as i32 && octave <= Self::MAX_OCTAVE as i32,
            err_invalid!("octave out of range")
        );
        Ok(NoteName::new(pitch, octave as i8).ok_or(err_invalid!("note above G9"))?)
    }
}
impl fmt::Display for NoteName {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.pitch, self.octave)
    }
}
impl FromStr for NoteName {
    type Err = Error;
    #[inline]
    fn from_str(name: &str) -> StdResult<NoteName, Error> {
        NoteName::parse(name)
    }
}
impl From<u7> for NoteName {
    #[inline]
    fn from(key: u7) -> NoteName {
        NoteName::from_key(key)
    }
}
impl From<NoteName> for u7 {
    #[inline]
    fn from(name: NoteName) -> u7 {
        name.key()
    }
}

/// Read the signed octave that follows the pitch spelling.
fn parse_octave(raw: &str) -> Result<i32> {
    let trimmed = raw.trim_matches(|c: char| c.is_ascii_whitespace());
    if cfg!(feature = "strict") {
        ensure!(
            trimmed.len() == raw.len(),
            err_malformed!("whitespace around octave")
        );
        ensure!(
            !trimmed.starts_with('+'),
            err_malformed!("explicit plus sign on octave")
        );
        let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);
        ensure!(
            !(digits.len() > 1 && digits.starts_with('0')) && trimmed != "-0",
            err_malformed!("leading zeros in octave")
        );
    }
    trimmed
        .parse::<i32>()
        .map_err(|_| err_invalid!("octave is not an integer").into())
}

/// Canonical names for every MIDI note number.
#[rustfmt::skip]
const KEY_NAMES: [&str; 128] = [
    "C-1", "C#-1", "D-1", "D#-1", "E-1", "F-1", "F#-1", "G-1", "G#-1", "A-1", "A#-1", "B-1",
    "C0", "C#0", "D0", "D#0", "E0", "F0", "F#0", "G0", "G#0", "A0", "A#0", "B0",
    "C1", "C#1", "D1", "D#1", "E1", "F1", "F#1", "G1", "G#1", "A1", "A#1", "B1",
    "C2", "C#2", "D2", "D#2", "E2", "F2", "F#2", "G2", "G#2", "A2", "A#2", "B2",
    "C3", "C#3", "D3", "D#3", "E3", "F3", "F#3", "G3", "G#3", "A3", "A#3", "B3",
    "C4", "C#4", "D4", "D#4", "E4", "F4", "F#4", "G4", "G#4", "A4", "A#4", "B4",
    "C5", "C#5", "D5", "D#5", "E5", "F5", "F#5", "G5", "G#5", "A5", "A#5", "B5",
    "C6", "C#6", "D6", "D#6", "E6", "F6", "F#6", "G6", "G#6", "A6", "A#6", "B6",
    "C7", "C#7", "D7", "D#7", "E7", "F7", "F#7", "G7", "G#7", "A7", "A#7", "B7",
    "C8", "C#8", "D8", "D#8", "E8", "F8", "F#8", "G8", "G#8", "A8", "A#8", "B8",
    "C9", "C#9", "D9", "D#9", "E9", "F9", "F#9", "G9",
];

/// Get the canonical name of a note number.
#[inline]
pub fn key_name(key: u7) -> &'static str {
    KEY_NAMES[key.as_int() as usize]
}

/// Translate a MIDI note number into its NoteOctave name.
///
/// Returns `None` if the note is outside of `[0, 127]`.
#[inline]
pub fn note_to_name(note: i32) -> Option<&'static str> {
    match u7::try_from_i32(note) {
        Some(key) => Some(key_name(key)),
        None => rejected!("note", note),
    }
}

/// Translate a NoteOctave name into its MIDI note number.
///
/// Returns `None` if the name cannot be parsed or refers to a note outside of `[0, 127]`.
/// See [`NoteName::parse`](struct.NoteName.html#method.parse) for the accepted syntax and for
/// the reason a name was refused.
#[inline]
pub fn name_to_note(name: &str) -> Option<u8> {
    match NoteName::parse(name) {
        Ok(parsed) => Some(parsed.key().as_int()),
        Err(_err) => rejected!("note name", name),
    }
}

/// Either a note number or a note name, for callers that handle both.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum NoteOrName<'a> {
    /// A MIDI note number, not yet validated.
    Note(i32),
    /// A NoteOctave name, not yet parsed.
    Name(&'a str),
}
impl From<i32> for NoteOrName<'_> {
    #[inline]
    fn from(note: i32) -> Self {
        NoteOrName::Note(note)
    }
}
impl From<u7> for NoteOrName<'_> {
    #[inline]
    fn from(key: u7) -> Self {
        NoteOrName::Note(key.into())
    }
}
impl<'a> From<&'a str> for NoteOrName<'a> {
    #[inline]
    fn from(name: &'a str) -> Self {
        NoteOrName::Name(name)
    }
}

/// Translate a note number into a name, or a name into a note number.
///
/// Numbers go through [`note_to_name`](fn.note_to_name.html) and names through
/// [`name_to_note`](fn.name_to_note.html), so `None` is returned in exactly the same cases.
///
/// ```rust
/// use midi_tools::{note_or_name, NoteOrName};
///
/// assert_eq!(note_or_name("G5"), Some(NoteOrName::Note(79)));
/// assert_eq!(note_or_name(79), Some(NoteOrName::Name("G5")));
/// assert_eq!(note_or_name(200), None);
/// ```
#[inline]
pub fn note_or_name<'a, V>(value: V) -> Option<NoteOrName<'static>>
where
    V: Into<NoteOrName<'a>>,
{
    match value.into() {
        NoteOrName::Note(note) => note_to_name(note).map(NoteOrName::Name),
        NoteOrName::Name(name) => name_to_note(name).map(|note| NoteOrName::Note(note.into())),
    }
}
