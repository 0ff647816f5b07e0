//! Narrow arithmetic.
//!
//! Every operation here is computed exactly in `i128` (the product of two
//! `i64` always fits), reduced, and then handed to the overflow detector.
//! `None` means the exact result is not representable in the given width;
//! it never means the result was approximated.

use std::fmt;

use crate::width::{would_overflow, Representable, Widen, Width};
use crate::Rational;

fn narrow(value: i128, width: Width) -> Option<i64> {
    if would_overflow(&value, width) {
        return None;
    }
    i64::try_from(value).ok()
}

/// Checked `a + b` within `width`.
#[must_use]
pub fn checked_add(a: i64, b: i64, width: Width) -> Option<i64> {
    narrow(i128::from(a) + i128::from(b), width)
}

/// Checked `a * b` within `width`.
#[must_use]
pub fn checked_mul(a: i64, b: i64, width: Width) -> Option<i64> {
    narrow(i128::from(a) * i128::from(b), width)
}

/// Checked `base^exp` within `width`.
#[must_use]
pub fn checked_pow(base: i64, exp: u32, width: Width) -> Option<i64> {
    // An i128 overflow implies an overflow of every narrow width.
    narrow(i128::from(base).checked_pow(exp)?, width)
}

/// Checked binomial step: `c * numer / denom`, where the division is exact.
///
/// This is the multiplicative recurrence `C(m, k+1) = C(m, k) * (m - k) / (k + 1)`.
#[must_use]
pub fn checked_binomial_step(c: i64, numer: i64, denom: i64, width: Width) -> Option<i64> {
    narrow(i128::from(c) * i128::from(numer) / i128::from(denom), width)
}

/// Checked least common multiple of `|a|` and `|b|` within `width`.
///
/// `lcm(0, b)` is `0`.
#[must_use]
pub fn checked_lcm(a: i64, b: i64, width: Width) -> Option<i64> {
    let (a, b) = (i128::from(a).unsigned_abs(), i128::from(b).unsigned_abs());
    if a == 0 || b == 0 {
        return Some(0);
    }
    let lcm = a / gcd_u128(a, b) * b;
    narrow(i128::try_from(lcm).ok()?, width)
}

fn gcd_u128(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// A rational held in the narrow representation.
///
/// Invariants: lowest terms, positive denominator, both parts within the
/// width the value was produced for.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SmallRational {
    num: i64,
    den: i64,
}

impl SmallRational {
    /// Zero.
    pub const ZERO: Self = Self { num: 0, den: 1 };

    /// One.
    pub const ONE: Self = Self { num: 1, den: 1 };

    /// Creates a reduced rational, or `None` if it does not fit `width`.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: i64, denominator: i64, width: Width) -> Option<Self> {
        assert!(denominator != 0, "denominator cannot be zero");
        Self::reduce(i128::from(numerator), i128::from(denominator), width)
    }

    /// Creates the integer `n` as a rational.
    #[must_use]
    pub const fn from_integer(n: i64) -> Self {
        Self { num: n, den: 1 }
    }

    fn reduce(num: i128, den: i128, width: Width) -> Option<Self> {
        let g = gcd_u128(num.unsigned_abs(), den.unsigned_abs());
        // g > 0 because den != 0, and g <= |den| < 2^127.
        let g = g as i128;
        let (mut num, mut den) = (num / g, den / g);
        if den < 0 {
            num = -num;
            den = -den;
        }
        if would_overflow(&num, width) || would_overflow(&den, width) {
            return None;
        }
        Some(Self {
            num: i64::try_from(num).ok()?,
            den: i64::try_from(den).ok()?,
        })
    }

    /// Returns the numerator.
    #[must_use]
    pub const fn numerator(self) -> i64 {
        self.num
    }

    /// Returns the denominator (always positive).
    #[must_use]
    pub const fn denominator(self) -> i64 {
        self.den
    }

    /// Returns true if the denominator is 1.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        self.den == 1
    }

    /// Returns true if this is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.num == 0
    }

    /// Checked addition.
    #[must_use]
    pub fn checked_add(self, rhs: Self, width: Width) -> Option<Self> {
        let (a, b) = (i128::from(self.num), i128::from(self.den));
        let (c, d) = (i128::from(rhs.num), i128::from(rhs.den));
        Self::reduce(a * d + c * b, b * d, width)
    }

    /// Checked subtraction.
    #[must_use]
    pub fn checked_sub(self, rhs: Self, width: Width) -> Option<Self> {
        self.checked_add(rhs.checked_neg(width)?, width)
    }

    /// Checked multiplication.
    #[must_use]
    pub fn checked_mul(self, rhs: Self, width: Width) -> Option<Self> {
        Self::reduce(
            i128::from(self.num) * i128::from(rhs.num),
            i128::from(self.den) * i128::from(rhs.den),
            width,
        )
    }

    /// Checked multiplication by an integer.
    #[must_use]
    pub fn checked_mul_int(self, k: i64, width: Width) -> Option<Self> {
        Self::reduce(i128::from(self.num) * i128::from(k), i128::from(self.den), width)
    }

    /// Checked division.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[must_use]
    pub fn checked_div(self, rhs: Self, width: Width) -> Option<Self> {
        assert!(!rhs.is_zero(), "division by zero");
        Self::reduce(
            i128::from(self.num) * i128::from(rhs.den),
            i128::from(self.den) * i128::from(rhs.num),
            width,
        )
    }

    /// Checked division by an integer.
    ///
    /// # Panics
    ///
    /// Panics if `k` is zero.
    #[must_use]
    pub fn checked_div_int(self, k: i64, width: Width) -> Option<Self> {
        assert!(k != 0, "division by zero");
        Self::reduce(i128::from(self.num), i128::from(self.den) * i128::from(k), width)
    }

    /// Checked negation; fails only for the most negative numerator.
    #[must_use]
    pub fn checked_neg(self, width: Width) -> Option<Self> {
        Self::reduce(-i128::from(self.num), i128::from(self.den), width)
    }
}

impl Representable for SmallRational {
    fn fits(&self, width: Width) -> bool {
        self.num.fits(width) && self.den.fits(width)
    }
}

impl Widen for SmallRational {
    type Wide = Rational;

    fn widen(self) -> Rational {
        Rational::from_i64(self.num, self.den)
    }
}

impl From<SmallRational> for Rational {
    fn from(value: SmallRational) -> Self {
        value.widen()
    }
}

impl fmt::Debug for SmallRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SmallRational({}/{})", self.num, self.den)
    }
}

impl fmt::Display for SmallRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}
