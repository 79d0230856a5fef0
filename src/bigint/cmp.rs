use crate::bigint::{BigIntImpl, Digits};
use core::cmp::Ordering;

impl<const BASE: u32> BigIntImpl<BASE> {
    /// Orders two normalized magnitudes: the shorter one is smaller,
    /// otherwise the most significant differing digit decides.
    pub(crate) fn magnitude_cmp(a: &Digits, b: &Digits) -> Ordering {
        a.len().cmp(&b.len()).then_with(|| a.iter().rev().cmp(b.iter().rev()))
    }

    // return if |a| < |b|
    pub(crate) fn magnitude_less(a: &Digits, b: &Digits) -> bool {
        Self::magnitude_cmp(a, b) == Ordering::Less
    }
}

impl<const BASE: u32> Ord for BigIntImpl<BASE> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (false, false) => Self::magnitude_cmp(&self.digits, &other.digits),
            (true, true) => Self::magnitude_cmp(&other.digits, &self.digits),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
        }
    }
}

impl<const BASE: u32> PartialOrd for BigIntImpl<BASE> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}
