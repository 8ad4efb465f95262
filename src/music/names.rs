// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Named constants for pitch classes and pitches.
//!
//! The tables are built once on first use and map canonical ASCII names
//! (`"Eb"`, `"A4"`) to values. Octaves 0 through 8 are covered.

use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

use super::pitch::Pitch;
use super::pitch_class::PitchClass;

/// Octaves with named pitches
pub const NAMED_OCTAVES: RangeInclusive<i32> = 0..=8;

static PITCH_CLASSES: LazyLock<HashMap<&'static str, PitchClass>> = LazyLock::new(|| {
    PitchClass::iter_from(PitchClass::new(0))
        .map(|pc| (pc.ascii_name(), pc))
        .collect()
});

static PITCHES: LazyLock<HashMap<String, Pitch>> = LazyLock::new(|| {
    NAMED_OCTAVES
        .flat_map(|octave| {
            PitchClass::iter_from(PitchClass::new(0)).map(move |pc| Pitch::new(pc, octave))
        })
        .map(|pitch| (format!("{}{}", pitch.pitch_class().ascii_name(), pitch.octave()), pitch))
        .collect()
});

/// Look up a pitch class by canonical name, e.g. `"Bb"`
pub fn pitch_class(name: &str) -> Option<PitchClass> {
    PITCH_CLASSES.get(name).copied()
}

/// Look up a pitch by canonical name, e.g. `"Db4"`
pub fn pitch(name: &str) -> Option<Pitch> {
    PITCHES.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_class_names() {
        assert_eq!(pitch_class("C"), Some(PitchClass::new(0)));
        assert_eq!(pitch_class("Bb"), Some(PitchClass::new(10)));
        // Only canonical spellings are named
        assert_eq!(pitch_class("A#"), None);
        assert_eq!(pitch_class("B\u{266D}"), None);
    }

    #[test]
    fn test_pitch_names() {
        assert_eq!(pitch("A4"), Pitch::parse("A4"));
        assert_eq!(pitch("C0"), Some(Pitch::from_value(0)));
        assert_eq!(pitch("B8"), Pitch::parse("B8"));
        assert_eq!(pitch("C9"), None);
        assert_eq!(pitch("C-1"), None);
        assert_eq!(pitch(&format!("C{}", NAMED_OCTAVES.end() + 1)), None);
        assert_eq!(PITCHES.len(), 12 * NAMED_OCTAVES.count());
    }

    #[test]
    fn test_every_name_parses_back() {
        for octave in NAMED_OCTAVES {
            for pc in PitchClass::iter_from(PitchClass::new(0)) {
                let name = format!("{}{}", pc.ascii_name(), octave);
                assert_eq!(pitch(&name), Pitch::parse(&name));
            }
        }
    }
}
