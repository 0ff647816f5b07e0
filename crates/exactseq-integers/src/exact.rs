//! The tagged exact value returned by every sequence operation.

use num_traits::{One, Zero};
use std::fmt;

use crate::width::{Representable, Width};
use crate::{Integer, Rational, SmallRational};

/// An exact integer or rational, held either narrow or wide.
///
/// Equality is numeric: a narrow and a wide value denoting the same number
/// compare equal. Use [`ExactNumber::is_wide`] to inspect the representation.
#[derive(Clone)]
pub enum ExactNumber {
    /// A narrow integer.
    SmallInt(i64),
    /// A wide integer.
    BigInt(Integer),
    /// A narrow rational.
    SmallRatio(SmallRational),
    /// A wide rational.
    BigRatio(Rational),
}

impl ExactNumber {
    /// Creates a rational value, narrow when it fits an `i64`.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn ratio(numerator: i64, denominator: i64) -> Self {
        match SmallRational::new(numerator, denominator, Width::Bits64) {
            Some(small) => Self::SmallRatio(small),
            None => Self::BigRatio(Rational::from_i64(numerator, denominator)),
        }
    }

    /// Returns true if the value is held in the wide representation.
    #[must_use]
    pub fn is_wide(&self) -> bool {
        matches!(self, Self::BigInt(_) | Self::BigRatio(_))
    }

    /// Returns true for the integer variants.
    ///
    /// A rational variant with unit denominator is not an integer variant.
    #[must_use]
    pub fn is_integer_kind(&self) -> bool {
        matches!(self, Self::SmallInt(_) | Self::BigInt(_))
    }

    /// Returns true if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::SmallInt(n) => *n == 0,
            Self::BigInt(n) => n.is_zero(),
            Self::SmallRatio(r) => r.is_zero(),
            Self::BigRatio(r) => r.is_zero(),
        }
    }

    /// Returns the numerator in lowest terms.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        match self {
            Self::SmallInt(n) => Integer::new(*n),
            Self::BigInt(n) => n.clone(),
            Self::SmallRatio(r) => Integer::new(r.numerator()),
            Self::BigRatio(r) => r.numerator(),
        }
    }

    /// Returns the positive denominator in lowest terms.
    #[must_use]
    pub fn denominator(&self) -> Integer {
        match self {
            Self::SmallInt(_) | Self::BigInt(_) => Integer::one(),
            Self::SmallRatio(r) => Integer::new(r.denominator()),
            Self::BigRatio(r) => r.denominator(),
        }
    }

    /// Re-expresses the value as a wide rational. Never loses precision.
    #[must_use]
    pub fn to_rational(&self) -> Rational {
        match self {
            Self::SmallInt(n) => Rational::from(*n),
            Self::BigInt(n) => Rational::from_integer(n.clone()),
            Self::SmallRatio(r) => Rational::from(*r),
            Self::BigRatio(r) => r.clone(),
        }
    }

    /// Returns the value as a wide integer if it is integral.
    #[must_use]
    pub fn to_integer(&self) -> Option<Integer> {
        match self {
            Self::SmallInt(n) => Some(Integer::new(*n)),
            Self::BigInt(n) => Some(n.clone()),
            Self::SmallRatio(r) => r.is_integer().then(|| Integer::new(r.numerator())),
            Self::BigRatio(r) => r.to_integer(),
        }
    }

    /// Returns the value as an `i64` if it is an integer in range.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            Self::SmallInt(n) => Some(*n),
            _ => self.to_integer()?.to_i64(),
        }
    }

    /// Moves the value to the wide representation, keeping its kind.
    #[must_use]
    pub fn widen(self) -> Self {
        match self {
            Self::SmallInt(n) => Self::BigInt(Integer::new(n)),
            Self::SmallRatio(r) => Self::BigRatio(r.into()),
            wide => wide,
        }
    }
}

impl PartialEq for ExactNumber {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::SmallInt(a), Self::SmallInt(b)) => a == b,
            (Self::SmallRatio(a), Self::SmallRatio(b)) => a == b,
            _ => self.to_rational() == other.to_rational(),
        }
    }
}

impl Eq for ExactNumber {}

impl Representable for ExactNumber {
    fn fits(&self, width: Width) -> bool {
        match self {
            Self::SmallInt(n) => n.fits(width),
            Self::BigInt(n) => n.fits(width),
            Self::SmallRatio(r) => r.fits(width),
            Self::BigRatio(r) => r.fits(width),
        }
    }
}

impl fmt::Debug for ExactNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SmallInt(n) => write!(f, "SmallInt({n})"),
            Self::BigInt(n) => write!(f, "BigInt({n})"),
            Self::SmallRatio(r) => write!(f, "SmallRatio({r})"),
            Self::BigRatio(r) => write!(f, "BigRatio({r})"),
        }
    }
}

/// Integers print as `n`, rationals always as `n/d`.
impl fmt::Display for ExactNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SmallInt(n) => write!(f, "{n}"),
            Self::BigInt(n) => write!(f, "{n}"),
            Self::SmallRatio(r) => write!(f, "{r}"),
            Self::BigRatio(r) => write!(f, "{r}"),
        }
    }
}

impl From<i64> for ExactNumber {
    fn from(n: i64) -> Self {
        Self::SmallInt(n)
    }
}

impl From<Integer> for ExactNumber {
    fn from(n: Integer) -> Self {
        Self::BigInt(n)
    }
}

impl From<SmallRational> for ExactNumber {
    fn from(r: SmallRational) -> Self {
        Self::SmallRatio(r)
    }
}

impl From<Rational> for ExactNumber {
    fn from(r: Rational) -> Self {
        Self::BigRatio(r)
    }
}
