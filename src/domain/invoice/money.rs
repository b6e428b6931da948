use rust_decimal::{Decimal, RoundingStrategy};

/// Round a monetary value to 2 decimal places, half away from zero.
///
/// Applied exactly once per derived value, at the point of computation.
pub fn round2(value: Decimal) -> Decimal {
  value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount as `₹ #,##0.00` with 3-digit grouping. The sign stays
/// inside the number (`₹ -1,234.56`).
pub fn format_inr(amount: Decimal) -> String {
  let rounded = round2(amount);
  let plain = format!("{:.2}", rounded.abs());
  let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

  let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
  for (i, digit) in int_part.chars().enumerate() {
    if i > 0 && (int_part.len() - i) % 3 == 0 {
      grouped.push(',');
    }
    grouped.push(digit);
  }

  let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
    "-"
  } else {
    ""
  };
  format!("₹ {}{}.{}", sign, grouped, frac_part)
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  #[test]
  fn test_round2_half_away_from_zero() {
    assert_eq!(round2(dec!(2.345)), dec!(2.35));
    assert_eq!(round2(dec!(2.344)), dec!(2.34));
    assert_eq!(round2(dec!(-2.345)), dec!(-2.35));
    assert_eq!(round2(dec!(0.005)), dec!(0.01));
    assert_eq!(round2(dec!(36)), dec!(36));
  }

  #[test]
  fn test_format_inr_grouping() {
    assert_eq!(format_inr(dec!(0)), "₹ 0.00");
    assert_eq!(format_inr(dec!(236)), "₹ 236.00");
    assert_eq!(format_inr(dec!(1234.5)), "₹ 1,234.50");
    assert_eq!(format_inr(dec!(1234567.5)), "₹ 1,234,567.50");
    assert_eq!(format_inr(dec!(100000)), "₹ 100,000.00");
  }

  #[test]
  fn test_format_inr_negative() {
    assert_eq!(format_inr(dec!(-1234.56)), "₹ -1,234.56");
    // A negative residue that rounds to zero loses its sign.
    assert_eq!(format_inr(dec!(-0.001)), "₹ 0.00");
  }
}
