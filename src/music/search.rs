// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Search over the universe of major and minor scales.
//!
//! There are 24 scales: one major and one minor on each pitch class.
//! Given a set of notes, the search either keeps the scales that contain
//! every note or ranks all scales by how many of the notes they contain.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use tracing::{debug, trace};

use super::pitch_class::PitchClass;
use super::scale::{Mode, Scale};

/// Root at which the scale universe is enumerated by default (A)
pub const DEFAULT_START: PitchClass = PitchClass::new(9);

/// Enumerate scales over the twelve pitch classes ascending from `start`.
///
/// With no mode this yields 24 scales, minor then major on each root.
/// With a mode it yields the 12 scales of that mode.
pub fn iterate_scales(
    start: PitchClass,
    mode: Option<Mode>,
) -> impl Iterator<Item = Scale> + Clone {
    let modes: &'static [Mode] = match mode {
        None => &Mode::ALL,
        Some(Mode::Minor) => &[Mode::Minor],
        Some(Mode::Major) => &[Mode::Major],
    };

    PitchClass::iter_from(start)
        .flat_map(move |root| modes.iter().map(move |&mode| Scale::new(root, mode)))
}

/// A scale together with the target notes it contains
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleMatch {
    /// Matching notes in scale degree order
    pub matched: Vec<PitchClass>,
    pub scale: Scale,
}

impl ScaleMatch {
    fn new(scale: Scale, targets: &BTreeSet<PitchClass>) -> Self {
        let matched = scale
            .notes()
            .into_iter()
            .filter(|note| targets.contains(note))
            .collect();
        Self { matched, scale }
    }

    /// Number of target notes found in the scale
    pub fn count(&self) -> usize {
        self.matched.len()
    }
}

/// Result of [`scales_matching`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matches {
    /// Scales containing every target note, in enumeration order
    Perfect(Vec<Scale>),
    /// Every scale, best match first
    Ranked(Vec<ScaleMatch>),
}

impl Matches {
    /// The scales in result order, dropping match details
    pub fn scales(&self) -> Vec<Scale> {
        match self {
            Matches::Perfect(scales) => scales.clone(),
            Matches::Ranked(matches) => matches.iter().map(|m| m.scale).collect(),
        }
    }
}

/// Find the scales related to a set of notes. Duplicate notes are ignored.
pub fn scales_matching<I>(targets: I, perfect: bool) -> Matches
where
    I: IntoIterator<Item = PitchClass>,
{
    if perfect {
        Matches::Perfect(perfect_matches(targets))
    } else {
        Matches::Ranked(ranked_matches(targets))
    }
}

/// Scales whose notes include every target note, in enumeration order
pub fn perfect_matches<I>(targets: I) -> Vec<Scale>
where
    I: IntoIterator<Item = PitchClass>,
{
    let targets: BTreeSet<PitchClass> = targets.into_iter().collect();
    let scales: Vec<Scale> = universe(&targets)
        .filter(|m| m.count() == targets.len())
        .map(|m| m.scale)
        .collect();

    debug!(targets = targets.len(), found = scales.len(), "perfect scale search");
    scales
}

/// All 24 scales ordered by match count descending, then by name ascending
pub fn ranked_matches<I>(targets: I) -> Vec<ScaleMatch>
where
    I: IntoIterator<Item = PitchClass>,
{
    let targets: BTreeSet<PitchClass> = targets.into_iter().collect();
    let mut keyed: Vec<(String, ScaleMatch)> = universe(&targets)
        .map(|m| (m.scale.to_string(), m))
        .collect();

    // Stable sort on (-count, name)
    keyed.sort_by(|(a_name, a), (b_name, b)| {
        (Reverse(a.count()), a_name).cmp(&(Reverse(b.count()), b_name))
    });

    if let Some((name, best)) = keyed.first() {
        debug!(targets = targets.len(), best = %name, count = best.count(), "ranked scale search");
    }
    keyed.into_iter().map(|(_, m)| m).collect()
}

fn universe(targets: &BTreeSet<PitchClass>) -> impl Iterator<Item = ScaleMatch> + '_ {
    iterate_scales(DEFAULT_START, None).map(move |scale| {
        let m = ScaleMatch::new(scale, targets);
        trace!(scale = %scale, count = m.count(), "scored scale");
        m
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pcs(names: &[&str]) -> Vec<PitchClass> {
        names.iter().map(|n| PitchClass::parse(n).unwrap()).collect()
    }

    fn scale(text: &str) -> Scale {
        Scale::parse(text).unwrap()
    }

    #[test]
    fn test_iterate_scales_default() {
        let scales: Vec<String> = iterate_scales(DEFAULT_START, None)
            .map(|s| s.to_string())
            .collect();
        assert_eq!(scales.len(), 24);
        assert_eq!(scales[0], "Amin");
        assert_eq!(scales[1], "Amaj");
        assert_eq!(scales[2], "B\u{266D}min");
        assert_eq!(scales[23], "A\u{266D}maj");
    }

    #[test]
    fn test_iterate_scales_single_mode() {
        let scales: Vec<Scale> = iterate_scales(PitchClass::new(0), Some(Mode::Major)).collect();
        assert_eq!(scales.len(), 12);
        assert!(scales.iter().all(|s| s.mode() == Mode::Major));
        assert_eq!(scales[0], scale("Cmaj"));
        assert_eq!(scales[11], scale("Bmaj"));
    }

    #[test]
    fn test_iterate_scales_restartable() {
        let iter = iterate_scales(DEFAULT_START, Some(Mode::Minor));
        assert_eq!(iter.clone().count(), 12);
        assert_eq!(iter.count(), 12);
    }

    #[test]
    fn test_perfect_matches_c_major_triad() {
        let found = perfect_matches(pcs(&["C", "E", "G"]));
        assert!(found.contains(&scale("Cmaj")));
        assert!(found.contains(&scale("Gmaj")));
        assert!(found.contains(&scale("Fmaj")));
        assert!(found.contains(&scale("Emin")));
        assert!(!found.contains(&scale("Dmaj")));
        // The minor pattern raises the seventh, so A minor has A♭ and no G
        assert!(!found.contains(&scale("Amin")));

        for s in &found {
            for note in pcs(&["C", "E", "G"]) {
                assert!(s.contains(note), "{} lacks {}", s, note);
            }
        }

        // Enumeration order is kept
        let order: Vec<Scale> = iterate_scales(DEFAULT_START, None)
            .filter(|s| found.contains(s))
            .collect();
        assert_eq!(found, order);
    }

    #[test]
    fn test_perfect_matches_deduplicates() {
        let once = perfect_matches(pcs(&["C", "E", "G"]));
        let twice = perfect_matches(pcs(&["C", "E", "G", "C", "B#"]));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_perfect_matches_empty_targets() {
        assert_eq!(perfect_matches(Vec::new()).len(), 24);
    }

    #[test]
    fn test_perfect_matches_chromatic_is_empty() {
        let all: Vec<PitchClass> = PitchClass::iter_from(PitchClass::new(0)).collect();
        assert!(perfect_matches(all).is_empty());
    }

    #[test]
    fn test_ranked_order() {
        let ranked = ranked_matches(pcs(&["C", "D", "E", "F", "G", "A", "B"]));
        assert_eq!(ranked.len(), 24);
        assert_eq!(ranked[0].scale, scale("Cmaj"));
        assert_eq!(ranked[0].count(), 7);

        for pair in ranked.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.count() >= b.count());
            if a.count() == b.count() {
                assert!(a.scale.to_string() <= b.scale.to_string());
            }
        }
    }

    #[test]
    fn test_ranked_ties_sorted_by_name() {
        // Both Cmaj and Gmaj contain C, E and G; names break the tie
        let ranked = ranked_matches(pcs(&["C", "E", "G"]));
        let top: Vec<String> = ranked
            .iter()
            .take_while(|m| m.count() == 3)
            .map(|m| m.scale.to_string())
            .collect();
        let mut sorted = top.clone();
        sorted.sort();
        assert_eq!(top, sorted);
        assert!(top.contains(&"Cmaj".to_string()));
    }

    #[test]
    fn test_ranked_matched_in_degree_order() {
        let ranked = ranked_matches(pcs(&["G", "E", "C"]));
        let c_major = ranked.iter().find(|m| m.scale == scale("Cmaj")).unwrap();
        assert_eq!(c_major.matched, pcs(&["C", "E", "G"]));

        let a_minor = ranked.iter().find(|m| m.scale == scale("Amin")).unwrap();
        assert_eq!(a_minor.matched, pcs(&["C", "E"]));
    }

    #[test]
    fn test_scales_matching_dispatch() {
        let targets = pcs(&["C", "E", "G"]);
        match scales_matching(targets.clone(), true) {
            Matches::Perfect(scales) => assert_eq!(scales, perfect_matches(targets.clone())),
            other => panic!("expected perfect matches, got {:?}", other),
        }
        match scales_matching(targets.clone(), false) {
            Matches::Ranked(matches) => assert_eq!(matches.len(), 24),
            other => panic!("expected ranked matches, got {:?}", other),
        }
    }
}
