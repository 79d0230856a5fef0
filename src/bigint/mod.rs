use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Implements a binary operator for every owned/borrowed combination of
/// operands, plus the matching assign operator, on top of a `&self, &rhs`
/// method.
macro_rules! forward_binop {
    (impl $imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident => $inner:ident) => {
        impl<const BASE: u32> core::ops::$imp<&BigIntImpl<BASE>> for &BigIntImpl<BASE> {
            type Output = BigIntImpl<BASE>;

            fn $method(self, rhs: &BigIntImpl<BASE>) -> BigIntImpl<BASE> { self.$inner(rhs) }
        }

        impl<const BASE: u32> core::ops::$imp<BigIntImpl<BASE>> for &BigIntImpl<BASE> {
            type Output = BigIntImpl<BASE>;

            fn $method(self, rhs: BigIntImpl<BASE>) -> BigIntImpl<BASE> { self.$inner(&rhs) }
        }

        impl<const BASE: u32> core::ops::$imp<&BigIntImpl<BASE>> for BigIntImpl<BASE> {
            type Output = BigIntImpl<BASE>;

            fn $method(self, rhs: &BigIntImpl<BASE>) -> BigIntImpl<BASE> { (&self).$inner(rhs) }
        }

        impl<const BASE: u32> core::ops::$imp<BigIntImpl<BASE>> for BigIntImpl<BASE> {
            type Output = BigIntImpl<BASE>;

            fn $method(self, rhs: BigIntImpl<BASE>) -> BigIntImpl<BASE> { (&self).$inner(&rhs) }
        }

        impl<const BASE: u32> core::ops::$assign_imp<&BigIntImpl<BASE>> for BigIntImpl<BASE> {
            fn $assign_method(&mut self, rhs: &BigIntImpl<BASE>) { *self = (&*self).$inner(rhs); }
        }

        impl<const BASE: u32> core::ops::$assign_imp<BigIntImpl<BASE>> for BigIntImpl<BASE> {
            fn $assign_method(&mut self, rhs: BigIntImpl<BASE>) { *self = (&*self).$inner(&rhs); }
        }
    };
}

mod add;
mod bits;
mod cmp;
mod convert;
mod div;
mod fmt;
mod mul;
mod num;
mod sub;

/// A single digit of the magnitude. Only the low `BASE` bits are used.
pub type Digit = u32;

/// Wide enough for `(RADIX - 1)^2 + 2 * (RADIX - 1)` at `BASE = 32`.
pub type DoubleDigit = u64;

pub(crate) type Digits = VecDeque<Digit>;

/// Sign-magnitude integer whose digits are `BASE` bits wide.
///
/// The magnitude is stored least significant digit first and is always
/// normalized: it is never empty, carries no most significant zero digits,
/// and zero is exactly one zero digit with a non-negative sign. Because of
/// that, structural equality is numeric equality.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct BigIntImpl<const BASE: u32> {
    digits: Digits,
    non_negative: bool,
}

pub type BigInt = BigIntImpl<32>;
pub type BigInt16 = BigIntImpl<16>;
pub type BigInt8 = BigIntImpl<8>;
pub type BigInt4 = BigIntImpl<4>;
pub type BigInt2 = BigIntImpl<2>;
pub type BigInt1 = BigIntImpl<1>;

impl<const BASE: u32> BigIntImpl<BASE> {
    pub const BASE: u32 = BASE;
    pub const RADIX: DoubleDigit = 1 << BASE;
    pub const MASK: DoubleDigit = Self::RADIX - 1;

    const VALID_BASE: () = assert!(BASE >= 1 && BASE <= 32, "digit width must be within 1..=32 bits");

    /// The canonical zero.
    pub fn new() -> Self { Self::from_magnitude(Digits::new()) }

    /// Builds a non-negative value from raw digits, least significant first.
    pub(crate) fn from_magnitude(digits: Digits) -> Self {
        let mut value = Self { digits, non_negative: true };
        value.normalize();
        value
    }

    /// Sets the sign, keeping zero non-negative.
    pub(crate) fn with_sign(mut self, negative: bool) -> Self {
        self.non_negative = !negative;
        self.normalize();
        self
    }

    /// Restores the representation invariants after any change to the
    /// digits or the sign.
    pub(crate) fn normalize(&mut self) {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_BASE;

        while self.digits.len() > 1 && self.digits.back() == Some(&0) {
            self.digits.pop_back();
        }
        if self.digits.is_empty() {
            self.digits.push_back(0);
        }
        if self.is_zero() {
            self.non_negative = true;
        }
        debug_assert!(self.digits.iter().all(|&d| (d as DoubleDigit) < Self::RADIX));
    }

    /// Digits of the magnitude, least significant first.
    pub fn digits(&self) -> impl DoubleEndedIterator<Item = Digit> + ExactSizeIterator + '_ {
        self.digits.iter().copied()
    }

    /// Number of digits in the magnitude. Zero has one digit.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.digits.len() }

    pub fn is_positive(&self) -> bool { self.non_negative && !self.is_zero() }

    pub fn is_negative(&self) -> bool { !self.non_negative }

    pub fn is_zero(&self) -> bool { self.digits.len() == 1 && self.digits[0] == 0 }

    pub fn is_one(&self) -> bool { self.non_negative && self.digits.len() == 1 && self.digits[0] == 1 }

    pub fn is_even(&self) -> bool { self.digits[0] & 1 == 0 }

    pub fn is_odd(&self) -> bool { self.digits[0] & 1 == 1 }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self { digits: self.digits.clone(), non_negative: true }
    }
}

impl<const BASE: u32> Default for BigIntImpl<BASE> {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod test {
    use super::{BigInt, BigInt1, BigInt8, BigIntImpl, Digits};

    #[test]
    fn test_normalize() {
        let value = BigInt::from_magnitude(Digits::from(vec![7, 0, 0, 0]));
        assert_eq!(value.len(), 1);
        assert_eq!(value, BigInt::from(7));

        let mut again = value.clone();
        again.normalize();
        assert_eq!(again, value);

        let zero = BigInt::from_magnitude(Digits::new());
        assert!(zero.is_zero());
        assert_eq!(zero.len(), 1);
        assert_eq!(zero, BigInt::default());

        let negative_zero = BigInt::from_magnitude(Digits::from(vec![0, 0])).with_sign(true);
        assert!(!negative_zero.is_negative());
        assert_eq!(negative_zero, BigInt::new());
    }

    #[test]
    fn test_radix_constants() {
        assert_eq!(BigInt::RADIX, 1 << 32);
        assert_eq!(BigInt::MASK, u32::MAX as u64);
        assert_eq!(BigInt8::RADIX, 256);
        assert_eq!(BigInt1::RADIX, 2);
        assert_eq!(BigIntImpl::<5>::MASK, 31);
    }

    #[test]
    fn test_predicates() {
        for i in -10i64..100 {
            let value = BigInt::from(i);
            assert_eq!(value.is_positive(), i > 0, "positive failed for {i}");
            assert_eq!(value.is_negative(), i < 0, "negative failed for {i}");
            assert_eq!(value.is_zero(), i == 0, "zero failed for {i}");
            assert_eq!(value.is_one(), i == 1, "one failed for {i}");
            assert_eq!(value.is_even(), i % 2 == 0, "even failed for {i}");
            assert_eq!(value.is_odd(), i % 2 != 0, "odd failed for {i}");

            let small = BigInt1::from(i);
            assert_eq!(small.is_even(), i % 2 == 0);
            assert_eq!(small.is_one(), i == 1);
        }
    }

    #[test]
    fn test_take_leaves_zero() {
        let mut num2 = BigInt::from(12345);
        let mut num3 = std::mem::take(&mut num2);
        num3 -= BigInt::from(100);
        assert_eq!(num3.to_num(), 12245);
        assert_eq!(num2.to_num(), 0);
        assert!(num2.is_zero());
        num2 += BigInt::from(100);
        assert_eq!(num2.to_num(), 100);
    }

    #[test]
    fn test_digits() {
        let value = BigInt8::from(0x0102_03i64);
        assert_eq!(value.digits().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(value.len(), 3);
        assert_eq!(BigInt8::from(-5).abs(), BigInt8::from(5));
    }
}
