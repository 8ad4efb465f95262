// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory primitives.
//!
//! This module provides pitch classes, absolute pitches, major and minor
//! scales, and a search that finds the scales containing a set of notes.

pub mod names;
pub mod pitch;
pub mod pitch_class;
pub mod scale;
pub mod search;

pub use pitch::{Pitch, A4_FREQUENCY};
pub use pitch_class::{PitchClass, Semitones, OCTAVE};
pub use scale::{Mode, Scale, SCALE_LEN};
pub use search::{
    iterate_scales, perfect_matches, ranked_matches, scales_matching, Matches, ScaleMatch,
    DEFAULT_START,
};
