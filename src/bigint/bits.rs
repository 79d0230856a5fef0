use crate::bigint::{BigIntImpl, Digit, DoubleDigit};

impl<const BASE: u32> BigIntImpl<BASE> {
    /// Low `k` bits of `num`. Any `k` of at least `Digit::BITS` keeps all of it.
    pub fn least_bits(num: Digit, k: u32) -> Digit {
        if k >= Digit::BITS {
            return num;
        }
        (num as DoubleDigit & ((1 << k) - 1)) as Digit
    }

    pub fn twice(&self) -> Self { self.scale_up(1) }

    /// Halves the magnitude, rounding toward zero.
    pub fn half(&self) -> Self { self.scale_down(1) }

    /// `floor(|self| / 2^k)` carrying the sign of `self`
    pub fn scale_down(&self, k: u32) -> Self {
        let whole = (k / BASE) as usize;
        let partial = k % BASE;

        let mut digits = self.digits.clone();
        let dropped = whole.min(digits.len());
        digits.drain(..dropped);

        if partial != 0 {
            let mut carried: Digit = 0;
            for digit in digits.iter_mut().rev() {
                let low = Self::least_bits(*digit, partial);
                *digit = (*digit >> partial) | (carried << (BASE - partial));
                carried = low;
            }
        }
        Self::from_magnitude(digits).with_sign(self.is_negative())
    }

    /// `self * 2^k`
    pub fn scale_up(&self, k: u32) -> Self {
        let whole = (k / BASE) as usize;
        let partial = k % BASE;

        let mut digits = self.digits.clone();

        if partial != 0 {
            digits.push_back(0);
            let mut carried: Digit = 0;
            for digit in digits.iter_mut() {
                let high = Self::least_bits(*digit >> (BASE - partial), partial);
                *digit = ((*digit as DoubleDigit) << partial & Self::MASK) as Digit | carried;
                carried = high;
            }
        }
        for _ in 0..whole {
            digits.push_front(0);
        }
        Self::from_magnitude(digits).with_sign(self.is_negative())
    }
}
