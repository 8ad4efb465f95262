// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Western music theory primitives.
//!
//! Pitch classes, absolute pitches and major/minor scales as immutable
//! value types, with parsing from and formatting to text, interval
//! arithmetic, MIDI and frequency conversion, and a search for the scales
//! that contain a set of notes.
//!
//! ```
//! use notes::music::{perfect_matches, Pitch, PitchClass, Scale};
//!
//! let a4 = Pitch::parse("A4").unwrap();
//! assert_eq!(a4.midi(), 69);
//! assert_eq!(a4.frequency(), 440.0);
//!
//! let triad = ["C", "E", "G"].map(|n| PitchClass::parse(n).unwrap());
//! assert!(perfect_matches(triad).contains(&Scale::parse("Cmaj").unwrap()));
//! ```

pub mod config;
pub mod error;
pub mod eval;
pub mod music;

pub use error::{Error, Result};
pub use music::{Mode, Pitch, PitchClass, Scale};
