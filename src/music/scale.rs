// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Major and minor scales.
//!
//! A scale is a root plus a mode. Its seven notes are generated on demand
//! by walking the mode's step pattern from the root. Scales can be written
//! in music notation (`"Ebmin"`, `"F#M"`) or in the numeric notation used
//! by DJ software such as Traktor (`"8m"`, `"1d"`), which walks the circle
//! of fifths.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::pitch::Pitch;
use super::pitch_class::{PitchClass, Semitones, OCTAVE};
use crate::error::Error;

/// Number of notes in a diatonic scale
pub const SCALE_LEN: usize = 7;

/// Semitones per step around the circle of fifths
const FIFTH: Semitones = 7;

/// Scale mode
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Major,
    Minor,
}

impl Mode {
    /// Both modes, minor first, in the order the scale universe is enumerated
    pub const ALL: [Mode; 2] = [Mode::Minor, Mode::Major];

    /// Semitone steps between consecutive degrees. The last step leads
    /// back to the root an octave up and is not used to build notes.
    pub fn steps(self) -> [Semitones; SCALE_LEN] {
        match self {
            Mode::Major => [2, 2, 1, 2, 2, 2, 1],
            Mode::Minor => [2, 1, 2, 2, 1, 3, 1],
        }
    }

    /// Short name used in music notation
    pub fn name(self) -> &'static str {
        match self {
            Mode::Major => "maj",
            Mode::Minor => "min",
        }
    }

    /// Parse a mode token: `M` or `maj` for major, `m` or `min` for minor
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "M" | "maj" => Some(Mode::Major),
            "m" | "min" => Some(Mode::Minor),
            _ => None,
        }
    }

    /// The other mode
    pub fn parallel(self) -> Self {
        match self {
            Mode::Major => Mode::Minor,
            Mode::Minor => Mode::Major,
        }
    }

    /// Root of scale number 1 in Traktor notation
    fn traktor_start(self) -> PitchClass {
        match self {
            Mode::Major => PitchClass::new(0),
            Mode::Minor => PitchClass::new(9),
        }
    }

    fn traktor_glyph(self) -> char {
        match self {
            Mode::Major => 'd',
            Mode::Minor => 'm',
        }
    }

    fn from_traktor_glyph(glyph: &str) -> Option<Self> {
        match glyph {
            "d" => Some(Mode::Major),
            "m" => Some(Mode::Minor),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A major or minor scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Scale {
    root: PitchClass,
    mode: Mode,
}

impl Scale {
    /// Create a new scale from root and mode
    pub fn new(root: PitchClass, mode: Mode) -> Self {
        Self { root, mode }
    }

    /// Major scale on `root`
    pub fn major(root: PitchClass) -> Self {
        Self::new(root, Mode::Major)
    }

    /// Minor scale on `root`
    pub fn minor(root: PitchClass) -> Self {
        Self::new(root, Mode::Minor)
    }

    /// Get the root note
    pub fn root(&self) -> PitchClass {
        self.root
    }

    /// Get the mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The seven notes in ascending degree order, starting at the root
    pub fn notes(&self) -> [PitchClass; SCALE_LEN] {
        let steps = self.mode.steps();
        let mut notes = [self.root; SCALE_LEN];
        for degree in 1..SCALE_LEN {
            notes[degree] = notes[degree - 1] + steps[degree - 1];
        }
        notes
    }

    /// The seven notes as absolute pitches, starting at the root in `octave`
    pub fn pitches(&self, octave: Semitones) -> [Pitch; SCALE_LEN] {
        let steps = self.mode.steps();
        let mut pitches = [Pitch::new(self.root, octave); SCALE_LEN];
        for degree in 1..SCALE_LEN {
            pitches[degree] = pitches[degree - 1] + steps[degree - 1];
        }
        pitches
    }

    /// Check if a note is in this scale
    pub fn contains(&self, note: PitchClass) -> bool {
        self.notes().contains(&note)
    }

    /// Get the scale degree (1-based) for a note, if it's in the scale
    pub fn degree_of(&self, note: PitchClass) -> Option<usize> {
        self.notes().iter().position(|&n| n == note).map(|i| i + 1)
    }

    /// Get the parallel scale (major <-> minor on the same root)
    pub fn parallel(&self) -> Scale {
        Scale::new(self.root, self.mode.parallel())
    }

    /// Get the relative scale (e.g., C major -> A minor)
    pub fn relative(&self) -> Scale {
        match self.mode {
            Mode::Major => Scale::minor(self.root - 3),
            Mode::Minor => Scale::major(self.root + 3),
        }
    }

    /// Parse music notation: a pitch class followed by `M`, `maj`, `m` or `min`
    pub fn parse(text: &str) -> Option<Self> {
        let (root, rest) = PitchClass::parse_prefix(text)?;
        let mode = Mode::parse(rest)?;
        Some(Scale::new(root, mode))
    }

    /// Parse Traktor notation: an index from 1 to 12 followed by `m`
    /// (minor) or `d` (major)
    pub fn parse_traktor(text: &str) -> Option<Self> {
        let split = text.find(|c: char| !c.is_ascii_digit())?;
        let (digits, glyph) = text.split_at(split);
        if digits.is_empty() || digits.len() > 2 {
            return None;
        }

        let index: Semitones = digits.parse().ok()?;
        if !(1..=OCTAVE).contains(&index) {
            return None;
        }

        let mode = Mode::from_traktor_glyph(glyph)?;
        Some(Scale::new(mode.traktor_start() + FIFTH * (index - 1), mode))
    }

    /// Render in Traktor notation, e.g. `"1m"` for A minor or `"2d"` for G major
    pub fn to_traktor(&self) -> String {
        let offset = self.root - self.mode.traktor_start();
        let index = (FIFTH * offset).rem_euclid(OCTAVE) + 1;
        format!("{}{}", index, self.mode.traktor_glyph())
    }
}

impl From<Scale> for String {
    fn from(scale: Scale) -> String {
        scale.to_string()
    }
}

impl TryFrom<String> for Scale {
    type Error = Error;

    fn try_from(text: String) -> Result<Self, Error> {
        text.parse()
    }
}

impl FromStr for Scale {
    type Err = Error;

    /// Accepts both music and Traktor notation
    fn from_str(s: &str) -> Result<Self, Error> {
        Scale::parse(s)
            .or_else(|| Scale::parse_traktor(s))
            .ok_or_else(|| Error::parse("scale", s))
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.mode)
    }
}
