// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Absolute pitches: a pitch class together with an octave.
//!
//! A pitch is stored as a single semitone count where 0 is C0, so
//! `A4` is 57. The count is 64-bit while constructors and intervals take
//! `i32`, so no construction or single step can overflow.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::pitch_class::{PitchClass, Semitones, OCTAVE};
use crate::error::Error;

/// Frequency of A4 in standard concert tuning
pub const A4_FREQUENCY: f64 = 440.0;

/// MIDI code of C0
const MIDI_C0: i64 = 12;

/// Raw value of A4
const A4_VALUE: i64 = 57;

/// A note at a specific octave
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Pitch(i64);

impl Pitch {
    /// Create a pitch from a pitch class and an octave
    pub fn new(pitch_class: PitchClass, octave: Semitones) -> Self {
        Pitch(i64::from(pitch_class.value()) + i64::from(OCTAVE) * i64::from(octave))
    }

    /// Create a pitch from its raw semitone value (0 is C0)
    pub fn from_value(value: i64) -> Self {
        Pitch(value)
    }

    /// Create a pitch from a MIDI code. Codes outside 0-127 are accepted.
    pub fn from_midi(code: Semitones) -> Self {
        Pitch(i64::from(code) - MIDI_C0)
    }

    /// The raw semitone value
    pub fn value(self) -> i64 {
        self.0
    }

    /// The pitch class, ignoring octave
    pub fn pitch_class(self) -> PitchClass {
        PitchClass::new(self.0.rem_euclid(i64::from(OCTAVE)) as Semitones)
    }

    /// The octave, rounding toward negative infinity (value -1 is B-1)
    pub fn octave(self) -> i64 {
        self.0.div_euclid(i64::from(OCTAVE))
    }

    /// Shift by `interval` semitones
    pub fn transpose(self, interval: Semitones) -> Self {
        Pitch(self.0 + i64::from(interval))
    }

    /// Shift down by `interval` semitones
    pub fn subtract(self, interval: Semitones) -> Self {
        Pitch(self.0 - i64::from(interval))
    }

    /// Signed semitone difference `self - other`
    pub fn interval_from(self, other: Pitch) -> i64 {
        self.0 - other.0
    }

    /// `transpose` that returns `None` instead of leaving the 64-bit range
    pub fn checked_transpose(self, interval: Semitones) -> Option<Self> {
        self.0.checked_add(i64::from(interval)).map(Pitch)
    }

    /// `subtract` that returns `None` instead of leaving the 64-bit range
    pub fn checked_subtract(self, interval: Semitones) -> Option<Self> {
        self.0.checked_sub(i64::from(interval)).map(Pitch)
    }

    /// `interval_from` narrowed to an `i32` interval, `None` if it does not fit
    pub fn checked_interval_from(self, other: Pitch) -> Option<Semitones> {
        self.0
            .checked_sub(other.0)
            .and_then(|diff| Semitones::try_from(diff).ok())
    }

    /// MIDI code for this pitch. No range check is performed, so very
    /// low or high pitches give negative codes or codes above 127.
    pub fn midi(self) -> i64 {
        self.0 + MIDI_C0
    }

    /// Equal-tempered frequency in Hz with A4 at 440 Hz
    pub fn frequency(self) -> f64 {
        self.frequency_with(A4_FREQUENCY)
    }

    /// Equal-tempered frequency in Hz for a given A4 reference
    pub fn frequency_with(self, a4_hz: f64) -> f64 {
        a4_hz * 2f64.powf((self.0 as f64 - A4_VALUE as f64) / OCTAVE as f64)
    }

    /// Parse a pitch such as `"A4"`, `"C#-1"` or `"Eb"` (octave 0).
    ///
    /// Returns `None` when the text does not match.
    pub fn parse(text: &str) -> Option<Self> {
        let (pitch_class, rest) = PitchClass::parse_prefix(text)?;
        let octave = if rest.is_empty() {
            0
        } else {
            parse_octave(rest)?
        };

        Some(Pitch::new(pitch_class, octave))
    }
}

/// Parse `-?\d+` strictly; no leading `+` and no whitespace
fn parse_octave(text: &str) -> Option<Semitones> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

impl Add<Semitones> for Pitch {
    type Output = Pitch;

    fn add(self, interval: Semitones) -> Pitch {
        self.transpose(interval)
    }
}

impl Sub<Semitones> for Pitch {
    type Output = Pitch;

    fn sub(self, interval: Semitones) -> Pitch {
        self.subtract(interval)
    }
}

impl Sub for Pitch {
    type Output = i64;

    fn sub(self, other: Pitch) -> i64 {
        self.interval_from(other)
    }
}

impl From<Pitch> for i64 {
    fn from(pitch: Pitch) -> i64 {
        pitch.0
    }
}

impl From<Pitch> for String {
    fn from(pitch: Pitch) -> String {
        pitch.to_string()
    }
}

impl TryFrom<String> for Pitch {
    type Error = Error;

    fn try_from(text: String) -> Result<Self, Error> {
        text.parse()
    }
}

impl FromStr for Pitch {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Pitch::parse(s).ok_or_else(|| Error::parse("pitch", s))
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch_class(), self.octave())
    }
}
