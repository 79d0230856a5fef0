use crate::bigint::convert::repack;
use crate::bigint::BigIntImpl;
use crate::error::Error;
use num_bigint::{BigUint, Sign};
use num_traits::{Num, One, Signed, ToPrimitive, Zero};

impl<const BASE: u32> Zero for BigIntImpl<BASE> {
    fn zero() -> Self { Self::new() }

    fn is_zero(&self) -> bool { BigIntImpl::is_zero(self) }
}

impl<const BASE: u32> One for BigIntImpl<BASE> {
    fn one() -> Self { Self::from(1u8) }

    fn is_one(&self) -> bool { BigIntImpl::is_one(self) }
}

impl<const BASE: u32> Num for BigIntImpl<BASE> {
    type FromStrRadixErr = Error;

    /// Only radix 10 is supported. A leading `-` is accepted.
    fn from_str_radix(s: &str, radix: u32) -> Result<Self, Error> {
        if radix != 10 {
            return Err(Error::UnsupportedRadix(radix));
        }
        Self::parse_signed(s)
    }
}

impl<const BASE: u32> Signed for BigIntImpl<BASE> {
    fn abs(&self) -> Self { BigIntImpl::abs(self) }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            Self::new()
        } else {
            self - other
        }
    }

    fn signum(&self) -> Self {
        if BigIntImpl::is_zero(self) {
            Self::new()
        } else {
            Self::from(1u8).with_sign(self.is_negative())
        }
    }

    fn is_positive(&self) -> bool { BigIntImpl::is_positive(self) }

    fn is_negative(&self) -> bool { BigIntImpl::is_negative(self) }
}

impl<const BASE: u32> BigIntImpl<BASE> {
    /// Magnitude as `u128`, or `None` when it needs more than 128 bits.
    fn magnitude_u128(&self) -> Option<u128> {
        self.digits
            .iter()
            .rev()
            .try_fold(0u128, |acc, &digit| acc.checked_mul(Self::RADIX as u128)?.checked_add(digit as u128))
    }
}

/// Checked conversions. `to_num` is the wrapping one.
impl<const BASE: u32> ToPrimitive for BigIntImpl<BASE> {
    fn to_i64(&self) -> Option<i64> { self.to_i128().and_then(|v| v.to_i64()) }

    fn to_u64(&self) -> Option<u64> { self.to_u128().and_then(|v| v.to_u64()) }

    fn to_i128(&self) -> Option<i128> {
        let magnitude = self.magnitude_u128()?;
        if self.is_negative() {
            0i128.checked_sub_unsigned(magnitude)
        } else {
            i128::try_from(magnitude).ok()
        }
    }

    fn to_u128(&self) -> Option<u128> {
        if self.is_negative() {
            return None;
        }
        self.magnitude_u128()
    }
}

impl<const BASE: u32> From<&num_bigint::BigInt> for BigIntImpl<BASE> {
    fn from(num: &num_bigint::BigInt) -> Self {
        Self::from_magnitude(repack(num.magnitude().iter_u32_digits(), 32, BASE))
            .with_sign(num.sign() == Sign::Minus)
    }
}

impl<const BASE: u32> From<&BigIntImpl<BASE>> for num_bigint::BigInt {
    fn from(num: &BigIntImpl<BASE>) -> Self {
        let words: Vec<u32> = repack(num.digits(), BASE, 32).into_iter().collect();
        let sign = if num.is_negative() { Sign::Minus } else { Sign::Plus };
        num_bigint::BigInt::from_biguint(sign, BigUint::new(words))
    }
}
