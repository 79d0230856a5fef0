use crate::bigint::BigIntImpl;
use std::fmt;

impl<const BASE: u32> BigIntImpl<BASE> {
    /// Decimal digits of the magnitude, most significant first.
    fn decimal_magnitude(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let ten = Self::from(10u8);
        let mut reversed = Vec::new();
        let mut rest = self.digits.clone();
        while !(rest.len() == 1 && rest[0] == 0) {
            let (quotient, remainder) = Self::unsigned_div_rem(&rest, &ten.digits);
            // below BASE 4 the remainder can span several digits
            reversed.push(b'0' + remainder.to_num() as u8);
            rest = quotient.digits;
        }
        reversed.iter().rev().map(|&b| b as char).collect()
    }
}

impl<const BASE: u32> fmt::Display for BigIntImpl<BASE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.decimal_magnitude())
    }
}

/// Decimal value, then the raw digits and their `BASE`-bit binary form,
/// most significant first. Meant for debugging only.
impl<const BASE: u32> fmt::Debug for BigIntImpl<BASE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Base 10: {} - Digits:", self)?;
        for digit in self.digits.iter().rev() {
            write!(f, " {}", digit)?;
        }
        write!(f, " - Binary:")?;
        for digit in self.digits.iter().rev() {
            write!(f, " {:0width$b}", digit, width = BASE as usize)?;
        }
        Ok(())
    }
}
