use crate::bigint::{BigIntImpl, Digit, Digits, DoubleDigit};

impl<const BASE: u32> BigIntImpl<BASE> {
    /// Compute the sum of two magnitudes
    pub(crate) fn unsigned_add(a: &Digits, b: &Digits) -> Self {
        let mut result = Digits::with_capacity(a.len().max(b.len()) + 1);
        let mut carry: DoubleDigit = 0;
        let mut i = 0;
        while i < a.len().max(b.len()) || carry != 0 {
            let first = a.get(i).copied().unwrap_or(0) as DoubleDigit;
            let second = b.get(i).copied().unwrap_or(0) as DoubleDigit;
            let sum = first + second + carry;
            result.push_back((sum & Self::MASK) as Digit);
            carry = sum >> BASE;
            i += 1;
        }
        Self::from_magnitude(result)
    }

    /// Signed sum of `self` and `rhs`, where `rhs_negative` overrides the
    /// sign of `rhs`. Subtraction flips it instead of negating `rhs`.
    pub(crate) fn add_signed(&self, rhs: &Self, rhs_negative: bool) -> Self {
        let lhs_negative = self.is_negative();
        if lhs_negative == rhs_negative {
            Self::unsigned_add(&self.digits, &rhs.digits).with_sign(lhs_negative)
        } else if Self::magnitude_less(&self.digits, &rhs.digits) {
            // -a + b == b - a, a + (-b) == -(b - a)
            Self::unsigned_sub(&rhs.digits, &self.digits).with_sign(rhs_negative)
        } else {
            // -a + b == -(a - b), a + (-b) == a - b
            Self::unsigned_sub(&self.digits, &rhs.digits).with_sign(lhs_negative)
        }
    }

    fn add_impl(&self, rhs: &Self) -> Self { self.add_signed(rhs, rhs.is_negative()) }

    /// Prefix increment: adds one in place and returns the receiver.
    pub fn inc(&mut self) -> &mut Self {
        *self += Self::from(1u8);
        self
    }

    /// Postfix increment: adds one in place and returns the old value.
    pub fn post_inc(&mut self) -> Self {
        let old = self.clone();
        self.inc();
        old
    }
}

forward_binop!(impl Add, add, AddAssign, add_assign => add_impl);
