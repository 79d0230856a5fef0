use crate::bigint::{BigIntImpl, Digit, Digits, DoubleDigit};
use crate::error::Error;

impl<const BASE: u32> BigIntImpl<BASE> {
    /// Quotient and remainder of two magnitudes by long division.
    ///
    /// Digits of `a` are consumed from the most significant one down. For
    /// each digit the remainder is scaled by the radix one bit at a time and
    /// the divisor is subtracted whenever it fits, so every bit needs at most
    /// one subtraction.
    ///
    /// `b` must not be zero.
    pub(crate) fn unsigned_div_rem(a: &Digits, b: &Digits) -> (Self, Self) {
        let mut quotient: Digits = std::iter::repeat(0).take(a.len()).collect();
        // kept without most significant zeros; empty is zero
        let mut remainder = Digits::with_capacity(b.len() + 1);

        for i in (0..a.len()).rev() {
            for bit in (0..BASE).rev() {
                Self::shift_in_bit(&mut remainder, (a[i] >> bit) & 1);
                if !Self::magnitude_less(&remainder, b) {
                    Self::sub_in_place(&mut remainder, b);
                    while remainder.back() == Some(&0) {
                        remainder.pop_back();
                    }
                    quotient[i] |= 1 << bit;
                }
            }
        }
        (Self::from_magnitude(quotient), Self::from_magnitude(remainder))
    }

    /// remainder = remainder * 2 + bit
    fn shift_in_bit(remainder: &mut Digits, bit: Digit) {
        let mut carry = bit;
        for digit in remainder.iter_mut() {
            let top = *digit >> (BASE - 1);
            *digit = ((*digit as DoubleDigit) << 1 & Self::MASK) as Digit | carry;
            carry = top;
        }
        if carry != 0 {
            remainder.push_back(carry);
        }
    }

    /// Truncating quotient and the remainder whose sign follows the dividend.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self), Error> {
        if rhs.is_zero() {
            tracing::debug!(dividend_digits = self.len(), "rejected division by zero");
            return Err(Error::DivisionByZero);
        }
        let (quotient, remainder) = Self::unsigned_div_rem(&self.digits, &rhs.digits);
        Ok((
            quotient.with_sign(self.is_negative() != rhs.is_negative()),
            remainder.with_sign(self.is_negative()),
        ))
    }

    /// Truncating division. The quotient is negative iff exactly one
    /// operand is.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, Error> {
        self.div_rem(rhs).map(|(quotient, _)| quotient)
    }

    /// Remainder of truncating division, signed like the dividend.
    pub fn checked_rem(&self, rhs: &Self) -> Result<Self, Error> {
        self.div_rem(rhs).map(|(_, remainder)| remainder)
    }

    fn div_impl(&self, rhs: &Self) -> Self {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("attempt to divide by zero: {}", err),
        }
    }

    fn rem_impl(&self, rhs: &Self) -> Self {
        match self.checked_rem(rhs) {
            Ok(remainder) => remainder,
            Err(err) => panic!("attempt to calculate the remainder with a divisor of zero: {}", err),
        }
    }
}

// # Panics
//
// `/` and `%` panic on a zero divisor, like the primitive integers. Use
// `checked_div`, `checked_rem` or `div_rem` to get an `Error` instead.
forward_binop!(impl Div, div, DivAssign, div_assign => div_impl);
forward_binop!(impl Rem, rem, RemAssign, rem_assign => rem_impl);
