use crate::bigint::{BigIntImpl, Digit, Digits, DoubleDigit};

impl<const BASE: u32> BigIntImpl<BASE> {
    /// Schoolbook product of two magnitudes, Algorithm M from Knuth's
    /// TAOCP Vol. 2, 4.3.1.
    pub(crate) fn unsigned_mul(a: &Digits, b: &Digits) -> Self {
        let (m, n) = (a.len(), b.len());
        let mut result: Digits = std::iter::repeat(0).take(m + n).collect();

        for j in 0..n {
            let multiplier = b[j] as DoubleDigit;
            let mut carry: DoubleDigit = 0;
            for i in 0..m {
                // at most (RADIX - 1)^2 + 2 * (RADIX - 1) = RADIX^2 - 1
                let t = a[i] as DoubleDigit * multiplier + result[i + j] as DoubleDigit + carry;
                result[i + j] = (t & Self::MASK) as Digit;
                carry = t >> BASE;
            }
            result[j + m] = carry as Digit;
        }
        Self::from_magnitude(result)
    }

    fn mul_impl(&self, rhs: &Self) -> Self {
        Self::unsigned_mul(&self.digits, &rhs.digits).with_sign(self.is_negative() != rhs.is_negative())
    }
}

forward_binop!(impl Mul, mul, MulAssign, mul_assign => mul_impl);
