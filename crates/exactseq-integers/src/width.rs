//! Narrow widths and the overflow detector.
//!
//! A computation starts in the *narrow* representation, bounded by a
//! [`Width`], and moves to the *wide* (arbitrary precision) representation
//! once a candidate value no longer fits. The detector is exact: it only ever
//! compares integers, never approximations.

use std::fmt;

use crate::{Integer, Rational};

/// The bounded integer width used by the narrow representation.
///
/// Narrow values are always carried in an `i64`, but are kept inside the
/// bounds of the selected width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Width {
    /// Values bounded like an `i32`.
    Bits32,
    /// Values bounded like an `i64`.
    #[default]
    Bits64,
}

impl Width {
    /// Number of bits of the width.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Width::Bits32 => 32,
            Width::Bits64 => 64,
        }
    }

    /// Smallest representable value.
    #[must_use]
    pub const fn min_value(self) -> i64 {
        match self {
            Width::Bits32 => i32::MIN as i64,
            Width::Bits64 => i64::MIN,
        }
    }

    /// Largest representable value.
    #[must_use]
    pub const fn max_value(self) -> i64 {
        match self {
            Width::Bits32 => i32::MAX as i64,
            Width::Bits64 => i64::MAX,
        }
    }

    /// Returns true if `value` lies within the bounds of this width.
    #[must_use]
    pub const fn contains(self, value: i128) -> bool {
        value >= self.min_value() as i128 && value <= self.max_value() as i128
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "i{}", self.bits())
    }
}

/// The representation a value or a computation currently uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Repr {
    /// Bounded, fixed-size representation.
    Narrow(Width),
    /// Arbitrary precision representation.
    Wide,
}

impl fmt::Display for Repr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Repr::Narrow(width) => write!(f, "narrow {width}"),
            Repr::Wide => f.write_str("wide"),
        }
    }
}

/// Values that can be tested against a narrow width.
pub trait Representable {
    /// Returns true if the value is exactly representable in `width`.
    ///
    /// Rationals are tested in lowest terms: the numerator must lie within
    /// the width and the (positive) denominator must not exceed its maximum.
    fn fits(&self, width: Width) -> bool;
}

/// Returns true if `candidate` cannot be held in the narrow representation.
#[must_use]
pub fn would_overflow<T: Representable + ?Sized>(candidate: &T, width: Width) -> bool {
    !candidate.fits(width)
}

impl Representable for i128 {
    fn fits(&self, width: Width) -> bool {
        width.contains(*self)
    }
}

impl Representable for i64 {
    fn fits(&self, width: Width) -> bool {
        width.contains(i128::from(*self))
    }
}

impl Representable for Integer {
    fn fits(&self, width: Width) -> bool {
        self.to_i64().is_some_and(|v| v.fits(width))
    }
}

impl Representable for Rational {
    fn fits(&self, width: Width) -> bool {
        self.numerator().fits(width) && self.denominator().fits(width)
    }
}

/// Lossless conversion of a narrow value into its wide counterpart.
pub trait Widen {
    /// The wide type.
    type Wide;

    /// Re-expresses the value in the wide representation.
    fn widen(self) -> Self::Wide;
}

impl Widen for i64 {
    type Wide = Integer;

    fn widen(self) -> Integer {
        Integer::new(self)
    }
}

impl<T: Widen> Widen for Vec<T> {
    type Wide = Vec<T::Wide>;

    fn widen(self) -> Vec<T::Wide> {
        self.into_iter().map(Widen::widen).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_follow_width() {
        assert!(Width::Bits64.contains(i128::from(i64::MAX)));
        assert!(!Width::Bits64.contains(i128::from(i64::MAX) + 1));
        assert!(Width::Bits32.contains(i128::from(i32::MIN)));
        assert!(!Width::Bits32.contains(i128::from(i32::MIN) - 1));
    }

    #[test]
    fn test_detector_on_integers() {
        let twenty_one_factorial: Integer = "51090942171709440000".parse().unwrap();
        assert!(would_overflow(&twenty_one_factorial, Width::Bits64));
        assert!(!would_overflow(&Integer::new(2_432_902_008_176_640_000), Width::Bits64));
        assert!(would_overflow(&Integer::new(6_227_020_800), Width::Bits32));
    }

    #[test]
    fn test_detector_on_rationals_checks_both_parts() {
        let big_den = Rational::new(Integer::new(1), Integer::new(i64::from(i32::MAX) + 1));
        assert!(would_overflow(&big_den, Width::Bits32));
        assert!(!would_overflow(&big_den, Width::Bits64));
        let small = Rational::from_i64(-7, 3);
        assert!(!would_overflow(&small, Width::Bits32));
    }

    #[test]
    fn test_widen_vec() {
        let wide = vec![1_i64, -2, 3].widen();
        assert_eq!(wide, vec![Integer::new(1), Integer::new(-2), Integer::new(3)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Repr::Narrow(Width::Bits64).to_string(), "narrow i64");
        assert_eq!(Repr::Wide.to_string(), "wide");
    }
}
