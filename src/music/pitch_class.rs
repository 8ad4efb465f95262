// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch classes: the twelve note names without octave information.
//!
//! A pitch class is an element of Z/12Z with C = 0. Intervals are plain
//! semitone counts that can be added to or subtracted from a pitch class,
//! and subtracting two pitch classes yields the ascending distance
//! between them.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Semitone offset type
pub type Semitones = i32;

/// Number of semitones in an octave
pub const OCTAVE: Semitones = 12;

/// Display names, flats preferred for the black keys
const NAMES: [&str; 12] = [
    "C", "D\u{266D}", "D", "E\u{266D}", "E", "F", "G\u{266D}", "G", "A\u{266D}", "A", "B\u{266D}",
    "B",
];

const ASCII_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// A note without octave, stored reduced modulo 12
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct PitchClass(u8);

impl PitchClass {
    /// Create a pitch class from any integer; 0 is C and values wrap every octave
    pub const fn new(value: Semitones) -> Self {
        PitchClass(value.rem_euclid(OCTAVE) as u8)
    }

    /// The reduced value in `0..12`
    pub fn value(self) -> u8 {
        self.0
    }

    /// Raise by `interval` semitones (negative intervals lower)
    pub fn transpose(self, interval: Semitones) -> Self {
        PitchClass::new(self.0 as Semitones + interval.rem_euclid(OCTAVE))
    }

    /// Lower by `interval` semitones
    pub fn subtract(self, interval: Semitones) -> Self {
        PitchClass::new(self.0 as Semitones - interval.rem_euclid(OCTAVE))
    }

    /// Ascending distance from `other` up to `self`, always in `0..12`.
    ///
    /// This is not a signed difference: `C.distance_from(D)` is 10.
    pub fn distance_from(self, other: PitchClass) -> Semitones {
        (self.0 as Semitones - other.0 as Semitones).rem_euclid(OCTAVE)
    }

    /// Canonical name using the flat glyph, e.g. `"E♭"`
    pub fn name(self) -> &'static str {
        NAMES[self.0 as usize]
    }

    /// Canonical name using an ASCII `b` for flats, e.g. `"Eb"`
    pub fn ascii_name(self) -> &'static str {
        ASCII_NAMES[self.0 as usize]
    }

    /// Parse a pitch class such as `"C"`, `"f#"` or `"Bb"`.
    ///
    /// Returns `None` when the whole text is not a pitch class.
    pub fn parse(text: &str) -> Option<Self> {
        match Self::parse_prefix(text)? {
            (pc, "") => Some(pc),
            _ => None,
        }
    }

    /// Parse a leading pitch class and return it along with the unread rest.
    pub(crate) fn parse_prefix(text: &str) -> Option<(Self, &str)> {
        let mut chars = text.chars();
        let base = match chars.next()?.to_ascii_uppercase() {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return None,
        };

        let rest = chars.as_str();
        let mut modifier = rest.chars();
        let (shift, rest) = match modifier.next() {
            Some('#') => (1, modifier.as_str()),
            Some('b') | Some('\u{266D}') => (-1, modifier.as_str()),
            _ => (0, rest),
        };

        Some((PitchClass::new(base + shift), rest))
    }

    /// All twelve pitch classes in ascending semitone order from `start`
    pub fn iter_from(start: PitchClass) -> impl Iterator<Item = PitchClass> + Clone {
        (0..OCTAVE).map(move |offset| start + offset)
    }
}

impl Add<Semitones> for PitchClass {
    type Output = PitchClass;

    fn add(self, interval: Semitones) -> PitchClass {
        self.transpose(interval)
    }
}

impl Sub<Semitones> for PitchClass {
    type Output = PitchClass;

    fn sub(self, interval: Semitones) -> PitchClass {
        self.subtract(interval)
    }
}

impl Sub for PitchClass {
    type Output = Semitones;

    fn sub(self, other: PitchClass) -> Semitones {
        self.distance_from(other)
    }
}

impl PartialEq<Semitones> for PitchClass {
    fn eq(&self, other: &Semitones) -> bool {
        *self == PitchClass::new(*other)
    }
}

impl PartialEq<PitchClass> for Semitones {
    fn eq(&self, other: &PitchClass) -> bool {
        other == self
    }
}

impl From<PitchClass> for Semitones {
    fn from(pc: PitchClass) -> Semitones {
        pc.0 as Semitones
    }
}

impl From<PitchClass> for String {
    fn from(pc: PitchClass) -> String {
        pc.to_string()
    }
}

impl TryFrom<String> for PitchClass {
    type Error = Error;

    fn try_from(text: String) -> Result<Self, Error> {
        text.parse()
    }
}

impl FromStr for PitchClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        PitchClass::parse(s).ok_or_else(|| Error::parse("pitch class", s))
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
