// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Runtime-typed operands and binary expressions.
//!
//! Text typed by a user can denote an integer, a pitch class, a pitch or
//! a scale. `Operand` carries that value with its type so the arithmetic
//! and equality rules of each type can be applied at runtime. Pairings
//! that the types do not support are reported as
//! [`Error::TypeMismatch`], never silently coerced or compared unequal.
//! Results that do not fit their type are [`Error::Overflow`].

use std::fmt;

use crate::error::{Error, Result};
use crate::music::{Pitch, PitchClass, Scale, Semitones};

/// A value whose type is known only at runtime
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Semitone interval or plain integer
    Int(Semitones),
    PitchClass(PitchClass),
    Pitch(Pitch),
    Scale(Scale),
    /// Result of a comparison
    Bool(bool),
    /// Anything else
    Text(String),
}

impl Operand {
    /// Classify text, trying integer, pitch class, pitch and scale in turn.
    ///
    /// A bare note name is a pitch class; it is only a pitch with an octave.
    pub fn parse(text: &str) -> Self {
        if let Some(value) = parse_int(text) {
            return Operand::Int(value);
        }
        if let Some(pc) = PitchClass::parse(text) {
            return Operand::PitchClass(pc);
        }
        if let Some(pitch) = Pitch::parse(text) {
            return Operand::Pitch(pitch);
        }
        if let Some(scale) = Scale::parse(text).or_else(|| Scale::parse_traktor(text)) {
            return Operand::Scale(scale);
        }
        Operand::Text(text.to_string())
    }

    /// Name of the operand's type, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Int(_) => "integer",
            Operand::PitchClass(_) => "pitch class",
            Operand::Pitch(_) => "pitch",
            Operand::Scale(_) => "scale",
            Operand::Bool(_) => "boolean",
            Operand::Text(_) => "text",
        }
    }

    /// Equality with the per-type rules.
    ///
    /// A pitch class equals an integer when both reduce to the same value
    /// modulo 12. Comparing unrelated types is an error.
    pub fn checked_eq(&self, other: &Operand) -> Result<bool> {
        match (self, other) {
            (Operand::Int(a), Operand::Int(b)) => Ok(a == b),
            (Operand::PitchClass(a), Operand::PitchClass(b)) => Ok(a == b),
            (Operand::PitchClass(a), Operand::Int(b)) => Ok(a == b),
            (Operand::Int(a), Operand::PitchClass(b)) => Ok(a == b),
            (Operand::Pitch(a), Operand::Pitch(b)) => Ok(a == b),
            (Operand::Pitch(a), Operand::Int(b)) => Ok(a.value() == i64::from(*b)),
            (Operand::Int(a), Operand::Pitch(b)) => Ok(i64::from(*a) == b.value()),
            (Operand::Scale(a), Operand::Scale(b)) => Ok(a == b),
            (Operand::Bool(a), Operand::Bool(b)) => Ok(a == b),
            _ => Err(self.mismatch("==", other)),
        }
    }

    /// Addition: an interval can be added to a pitch class or a pitch
    pub fn checked_add(&self, other: &Operand) -> Result<Operand> {
        match (self, other) {
            (Operand::Int(a), Operand::Int(b)) => a
                .checked_add(*b)
                .map(Operand::Int)
                .ok_or_else(|| self.overflow("+", other)),
            (Operand::PitchClass(pc), Operand::Int(interval)) => {
                Ok(Operand::PitchClass(*pc + *interval))
            }
            (Operand::Pitch(pitch), Operand::Int(interval)) => pitch
                .checked_transpose(*interval)
                .map(Operand::Pitch)
                .ok_or_else(|| self.overflow("+", other)),
            _ => Err(self.mismatch("+", other)),
        }
    }

    /// Subtraction.
    ///
    /// Two pitch classes give the ascending distance in `0..12`; two pitches
    /// give the signed semitone difference.
    pub fn checked_sub(&self, other: &Operand) -> Result<Operand> {
        match (self, other) {
            (Operand::Int(a), Operand::Int(b)) => a
                .checked_sub(*b)
                .map(Operand::Int)
                .ok_or_else(|| self.overflow("-", other)),
            (Operand::PitchClass(pc), Operand::Int(interval)) => {
                Ok(Operand::PitchClass(*pc - *interval))
            }
            (Operand::PitchClass(a), Operand::PitchClass(b)) => Ok(Operand::Int(*a - *b)),
            (Operand::Pitch(pitch), Operand::Int(interval)) => pitch
                .checked_subtract(*interval)
                .map(Operand::Pitch)
                .ok_or_else(|| self.overflow("-", other)),
            // The difference is an integer operand, so it must fit in i32
            (Operand::Pitch(a), Operand::Pitch(b)) => a
                .checked_interval_from(*b)
                .map(Operand::Int)
                .ok_or_else(|| self.overflow("-", other)),
            _ => Err(self.mismatch("-", other)),
        }
    }

    fn overflow(&self, op: &'static str, other: &Operand) -> Error {
        Error::Overflow {
            op,
            lhs: self.type_name(),
            rhs: other.type_name(),
        }
    }

    fn mismatch(&self, op: &'static str, other: &Operand) -> Error {
        Error::TypeMismatch {
            op,
            lhs: self.type_name(),
            rhs: other.type_name(),
        }
    }
}

fn parse_int(text: &str) -> Option<Semitones> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Int(v) => write!(f, "{}", v),
            Operand::PitchClass(pc) => write!(f, "{}", pc),
            Operand::Pitch(p) => write!(f, "{}", p),
            Operand::Scale(s) => write!(f, "{}", s),
            Operand::Bool(b) => write!(f, "{}", b),
            Operand::Text(t) => write!(f, "{}", t),
        }
    }
}

/// Binary operators understood by [`evaluate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Eq,
    Ne,
}

impl Operator {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "==" => Some(Operator::Eq),
            "!=" => Some(Operator::Ne),
            _ => None,
        }
    }
}

/// Apply `op` to two operands
pub fn evaluate(lhs: &Operand, op: Operator, rhs: &Operand) -> Result<Operand> {
    match op {
        Operator::Add => lhs.checked_add(rhs),
        Operator::Sub => lhs.checked_sub(rhs),
        Operator::Eq => lhs.checked_eq(rhs).map(Operand::Bool),
        // Mismatched types fail for != exactly as for ==
        Operator::Ne => lhs.checked_eq(rhs).map(|eq| Operand::Bool(!eq)),
    }
}

/// Parse and evaluate `lhs op rhs` from text
pub fn evaluate_str(lhs: &str, op: &str, rhs: &str) -> Result<Operand> {
    let operator = Operator::parse(op).ok_or_else(|| Error::parse("operator", op))?;
    evaluate(&Operand::parse(lhs), operator, &Operand::parse(rhs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(Operand::parse("-3"), Operand::Int(-3));
        assert_eq!(Operand::parse("C#"), Operand::PitchClass(PitchClass::new(1)));
        assert_eq!(Operand::parse("A4"), Operand::Pitch(Pitch::from_value(57)));
        assert_eq!(
            Operand::parse("Am"),
            Operand::Scale(Scale::minor(PitchClass::new(9)))
        );
        assert_eq!(
            Operand::parse("1d"),
            Operand::Scale(Scale::major(PitchClass::new(0)))
        );
        assert_eq!(
            Operand::parse("not a number"),
            Operand::Text("not a number".to_string())
        );
    }

    #[test]
    fn test_pitch_class_equality_against_text_fails() {
        let pc = Operand::PitchClass(PitchClass::new(0));
        let text = Operand::Text("not a number".to_string());
        assert_eq!(
            pc.checked_eq(&text),
            Err(Error::TypeMismatch {
                op: "==",
                lhs: "pitch class",
                rhs: "text",
            })
        );
    }

    #[test]
    fn test_pitch_class_equality_against_integer() {
        let pc = Operand::PitchClass(PitchClass::new(1));
        assert_eq!(pc.checked_eq(&Operand::Int(13)), Ok(true));
        assert_eq!(Operand::Int(1).checked_eq(&pc), Ok(true));
        assert_eq!(pc.checked_eq(&Operand::Int(2)), Ok(false));
    }

    #[test]
    fn test_pitch_class_and_pitch_do_not_compare() {
        let pc = Operand::parse("C");
        let pitch = Operand::parse("C0");
        assert!(pc.checked_eq(&pitch).is_err());
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(evaluate_str("A4", "+", "3").unwrap().to_string(), "C5");
        assert_eq!(evaluate_str("C", "-", "D"), Ok(Operand::Int(10)));
        assert_eq!(evaluate_str("C4", "-", "D4"), Ok(Operand::Int(-2)));
        assert_eq!(evaluate_str("B", "+", "1"), Ok(Operand::PitchClass(PitchClass::new(0))));
        assert_eq!(evaluate_str("C#", "==", "Db"), Ok(Operand::Bool(true)));
        assert_eq!(evaluate_str("Cmaj", "!=", "1d"), Ok(Operand::Bool(false)));
    }

    #[test]
    fn test_arithmetic_mismatch() {
        assert!(matches!(
            evaluate_str("C", "+", "D"),
            Err(Error::TypeMismatch { op: "+", .. })
        ));
        assert!(matches!(
            evaluate_str("3", "+", "C"),
            Err(Error::TypeMismatch { op: "+", .. })
        ));
        assert!(matches!(
            evaluate_str("C4", "-", "C"),
            Err(Error::TypeMismatch { op: "-", .. })
        ));
        assert!(matches!(
            evaluate_str("Cmaj", "+", "2"),
            Err(Error::TypeMismatch { .. })
        ));
        assert!(matches!(
            evaluate_str("C", "!=", "hello"),
            Err(Error::TypeMismatch { op: "==", .. })
        ));
    }

    #[test]
    fn test_overflow_is_an_error() {
        assert_eq!(
            evaluate_str("2147483647", "+", "1"),
            Err(Error::Overflow {
                op: "+",
                lhs: "integer",
                rhs: "integer",
            })
        );
        assert!(matches!(
            evaluate_str("-2147483648", "-", "1"),
            Err(Error::Overflow { op: "-", .. })
        ));
        assert!(matches!(
            evaluate_str("C2147483647", "-", "C-2147483648"),
            Err(Error::Overflow { op: "-", lhs: "pitch", rhs: "pitch" })
        ));
        let top = Operand::Pitch(Pitch::from_value(i64::MAX));
        assert!(matches!(
            top.checked_add(&Operand::Int(1)),
            Err(Error::Overflow { op: "+", .. })
        ));
    }

    #[test]
    fn test_large_pitch_arithmetic() {
        let c4 = 48;
        assert_eq!(
            evaluate_str("C4", "+", "2147483647"),
            Ok(Operand::Pitch(Pitch::from_value(c4 + 2_147_483_647)))
        );
        assert_eq!(
            evaluate_str("C4", "-", "-2147483648"),
            Ok(Operand::Pitch(Pitch::from_value(c4 + 2_147_483_648)))
        );
        assert_eq!(
            evaluate_str("C200000000", "-", "C199999999"),
            Ok(Operand::Int(12))
        );
        assert_eq!(Operand::parse("C4").checked_eq(&Operand::Int(48)), Ok(true));
    }

    #[test]
    fn test_unknown_operator() {
        assert!(matches!(
            evaluate_str("C", "*", "2"),
            Err(Error::Parse { kind: "operator", .. })
        ));
    }
}
