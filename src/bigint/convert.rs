use crate::bigint::{BigIntImpl, Digit, Digits, DoubleDigit};
use crate::error::Error;
use core::str::FromStr;

/// Regroups a little-endian stream of `from_bits`-wide digits into
/// `to_bits`-wide digits. Both widths must be within `1..=32`.
pub(crate) fn repack<I: IntoIterator<Item = Digit>>(digits: I, from_bits: u32, to_bits: u32) -> Digits {
    let mask: DoubleDigit = (1 << to_bits) - 1;
    let mut result = Digits::new();
    let mut buffer: DoubleDigit = 0;
    let mut filled = 0u32;
    for digit in digits {
        buffer |= (digit as DoubleDigit) << filled;
        filled += from_bits;
        while filled >= to_bits {
            result.push_back((buffer & mask) as Digit);
            buffer >>= to_bits;
            filled -= to_bits;
        }
    }
    if filled > 0 {
        result.push_back(buffer as Digit);
    }
    result
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl<const BASE: u32> From<$t> for BigIntImpl<BASE> {
            fn from(num: $t) -> Self { Self::from_u128(num as u128) }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl<const BASE: u32> From<$t> for BigIntImpl<BASE> {
            fn from(num: $t) -> Self { Self::from_u128(num.unsigned_abs() as u128).with_sign(num < 0) }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128, isize);

impl<const BASE: u32> BigIntImpl<BASE> {
    fn from_u128(mut num: u128) -> Self {
        let mut digits = Digits::new();
        while num != 0 {
            digits.push_back((num & Self::MASK as u128) as Digit);
            num >>= BASE;
        }
        Self::from_magnitude(digits)
    }

    /// Lossy conversion to `i64`: digits are accumulated with wrapping
    /// arithmetic, so magnitudes past 64 bits wrap around silently. Use
    /// `num_traits::ToPrimitive` for a checked conversion.
    pub fn to_num(&self) -> i64 {
        let radix = Self::RADIX as i64;
        let magnitude = self
            .digits
            .iter()
            .rev()
            .fold(0i64, |acc, &digit| acc.wrapping_mul(radix).wrapping_add(digit as i64));
        if self.is_negative() {
            magnitude.wrapping_neg()
        } else {
            magnitude
        }
    }

    /// Parses a decimal string with an optional leading `-`.
    ///
    /// `FromStr` accepts digits only; this is the signed counterpart.
    pub fn parse_signed(s: &str) -> Result<Self, Error> {
        match s.strip_prefix('-') {
            Some(rest) => Ok(-Self::parse_digits(rest, 1)?),
            None => Self::parse_digits(s, 0),
        }
    }

    fn parse_digits(s: &str, offset: usize) -> Result<Self, Error> {
        if s.is_empty() {
            tracing::debug!("rejected empty decimal string");
            return Err(Error::Empty);
        }
        let ten = Self::from(10u8);
        let mut result = Self::new();
        for (position, c) in s.chars().enumerate() {
            let digit = match c.to_digit(10) {
                Some(digit) => digit,
                None => {
                    tracing::debug!(position = position + offset, found = %c, "rejected non-digit character");
                    return Err(Error::InvalidDigit { position: position + offset, found: c });
                }
            };
            result *= &ten;
            result += Self::from(digit);
        }
        Ok(result)
    }

    /// Same value with `OTHER`-bit digits.
    pub fn into_radix<const OTHER: u32>(&self) -> BigIntImpl<OTHER> {
        tracing::trace!(from = BASE, to = OTHER, digits = self.len(), "converting radix");
        BigIntImpl::<OTHER>::from_magnitude(repack(self.digits(), BASE, OTHER)).with_sign(self.is_negative())
    }
}

/// Decimal digits only, without a sign, e.g. `"12345"`. Leading zeros are
/// accepted.
impl<const BASE: u32> FromStr for BigIntImpl<BASE> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::parse_digits(s, 0) }
}

impl<const BASE: u32> From<BigIntImpl<BASE>> for String {
    fn from(num: BigIntImpl<BASE>) -> String { num.to_string() }
}

impl<const BASE: u32> TryFrom<String> for BigIntImpl<BASE> {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> { Self::parse_signed(&s) }
}

#[cfg(test)]
mod test {
    use super::repack;
    use crate::bigint::{BigInt, BigInt1, BigInt16, BigInt8, BigIntImpl, Digits};
    use crate::error::Error;
    use num_bigint::{BigInt as Reference, RandomBits};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_constructors() {
        let int_num = BigInt::from(12345);
        let string_num: BigInt = "12345".parse().unwrap();

        assert_eq!(int_num, string_num);
        assert_eq!(int_num.to_num(), 12345);
        assert_eq!(string_num.to_num(), 12345);
        assert_eq!(int_num.to_string(), "12345");
        assert_eq!(string_num.to_string(), "12345");
    }

    #[test]
    fn test_machine_integers() {
        for value in [0i64, 1, -1, 255, 256, -65536, i64::MAX, i64::MIN, i64::MIN + 1] {
            assert_eq!(BigInt::from(value).to_num(), value);
            assert_eq!(BigInt1::from(value).to_num(), value);
            assert_eq!(BigIntImpl::<7>::from(value).to_num(), value);
        }
        assert_eq!(BigInt8::from(u8::MAX).digits().collect::<Vec<_>>(), vec![255]);
        assert_eq!(BigInt::from(u128::MAX).len(), 4);
        assert_eq!(BigInt::from(i128::MIN).to_string(), i128::MIN.to_string());
        assert_eq!(BigInt16::from(usize::MAX).to_string(), usize::MAX.to_string());
    }

    #[test]
    fn test_to_num_wraps() {
        let big = BigInt::from(u64::MAX);
        assert_eq!(big.to_num(), -1);
        let past = BigInt::from(1).scale_up(64) + BigInt::from(5);
        assert_eq!(past.to_num(), 5);
    }

    #[test]
    fn test_parse() {
        let num: BigInt = "123456789".parse().unwrap();
        assert_eq!(num.to_string(), "123456789");

        let padded: BigInt8 = "000042".parse().unwrap();
        assert_eq!(padded.to_num(), 42);

        assert_eq!("0".parse::<BigInt>().unwrap(), BigInt::new());
        assert_eq!("".parse::<BigInt>(), Err(Error::Empty));
        assert_eq!("12a4".parse::<BigInt>(), Err(Error::InvalidDigit { position: 2, found: 'a' }));
        assert_eq!("-12".parse::<BigInt>(), Err(Error::InvalidDigit { position: 0, found: '-' }));
        assert_eq!("+12".parse::<BigInt>(), Err(Error::InvalidDigit { position: 0, found: '+' }));
    }

    #[test]
    fn test_parse_signed() {
        assert_eq!(BigInt::parse_signed("-12").unwrap().to_num(), -12);
        assert_eq!(BigInt::parse_signed("12").unwrap().to_num(), 12);
        assert_eq!(BigInt::parse_signed("-0").unwrap(), BigInt::new());
        assert_eq!(BigInt::parse_signed("-"), Err(Error::Empty));
        assert_eq!(BigInt::parse_signed("--1"), Err(Error::InvalidDigit { position: 1, found: '-' }));
    }

    #[test]
    fn test_repack() {
        let digits = repack(vec![0xAB, 0xCD], 8, 4);
        assert_eq!(digits, Digits::from(vec![0xB, 0xA, 0xD, 0xC]));
        let digits = repack(vec![1, 0, 1, 1, 0, 1], 1, 32);
        assert_eq!(digits, Digits::from(vec![0b101101]));
        assert!(repack(Vec::new(), 3, 5).is_empty());
    }

    #[test]
    fn test_into_radix() {
        let mut prng = ChaCha20Rng::seed_from_u64(1);

        for _ in 0..50 {
            let a: Reference = prng.sample(RandomBits::new(300));
            let wide = BigInt::from(&a);
            let narrow: BigInt1 = wide.into_radix();
            let odd: BigIntImpl<13> = narrow.into_radix();
            assert_eq!(Reference::from(&narrow), a);
            assert_eq!(Reference::from(&odd), a);
            assert_eq!(odd.into_radix::<32>(), wide);
        }
    }
}
