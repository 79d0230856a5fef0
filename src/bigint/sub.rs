use crate::bigint::{BigIntImpl, Digit, Digits};

impl<const BASE: u32> BigIntImpl<BASE> {
    /// Compute the difference of two magnitudes
    ///
    /// `a` must be at least as large as `b`.
    pub(crate) fn unsigned_sub(a: &Digits, b: &Digits) -> Self {
        let mut result = a.clone();
        Self::sub_in_place(&mut result, b);
        Self::from_magnitude(result)
    }

    /// Subtract `b` from `a` digit by digit, borrowing from the next digit
    /// whenever one would go negative. The length of `a` is unchanged.
    pub(crate) fn sub_in_place(a: &mut Digits, b: &Digits) {
        debug_assert!(!Self::magnitude_less(a, b));
        let radix = Self::RADIX as i64;
        let mut borrow = 0i64;
        for (i, digit) in a.iter_mut().enumerate() {
            let second = b.get(i).copied().unwrap_or(0) as i64;
            let mut diff = *digit as i64 - second - borrow;
            if diff < 0 {
                diff += radix;
                borrow = 1;
            } else {
                borrow = 0;
            }
            *digit = diff as Digit;
        }
    }

    fn sub_impl(&self, rhs: &Self) -> Self { self.add_signed(rhs, !rhs.is_negative()) }

    /// Prefix decrement: subtracts one in place and returns the receiver.
    pub fn dec(&mut self) -> &mut Self {
        *self -= Self::from(1u8);
        self
    }

    /// Postfix decrement: subtracts one in place and returns the old value.
    pub fn post_dec(&mut self) -> Self {
        let old = self.clone();
        self.dec();
        old
    }
}

forward_binop!(impl Sub, sub, SubAssign, sub_assign => sub_impl);

impl<const BASE: u32> core::ops::Neg for &BigIntImpl<BASE> {
    type Output = BigIntImpl<BASE>;

    fn neg(self) -> BigIntImpl<BASE> { self.clone().with_sign(self.non_negative) }
}

impl<const BASE: u32> core::ops::Neg for BigIntImpl<BASE> {
    type Output = BigIntImpl<BASE>;

    fn neg(self) -> BigIntImpl<BASE> {
        let negative = self.non_negative;
        self.with_sign(negative)
    }
}
