use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::round2;
use super::normalizer::LineItemDraft;

// Line item with its derived amounts. Amounts are computed exactly once, in
// `from_draft`; negative inputs propagate arithmetically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
  pub description: String,
  pub hsn: String,
  pub quantity: Decimal,
  pub unit_price: Decimal,
  pub tax_rate: Decimal,
  pub taxable: Decimal,
  pub tax_amount: Decimal,
  pub total: Decimal,
}

impl LineItem {
  pub fn from_draft(draft: LineItemDraft) -> Self {
    // Taxable value keeps full precision; only tax and total are rounded.
    let taxable = draft.quantity * draft.unit_price;
    let tax_amount = round2(taxable * draft.tax_rate / Decimal::from(100));
    let total = round2(taxable + tax_amount);

    Self {
      description: draft.description,
      hsn: draft.hsn,
      quantity: draft.quantity,
      unit_price: draft.unit_price,
      tax_rate: draft.tax_rate,
      taxable,
      tax_amount,
      total,
    }
  }
}

// Invoice totals - calculated, never supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
  pub sub_total: Decimal,
  pub total_tax: Decimal,
  pub grand_total: Decimal,
}

impl InvoiceTotals {
  pub fn calculate(items: &[LineItem]) -> Self {
    // Subtotal sums the unrounded taxable values; total tax sums the
    // already-rounded per-item tax amounts.
    let sub_total = items.iter().fold(Decimal::ZERO, |acc, item| acc + item.taxable);
    let total_tax = items
      .iter()
      .fold(Decimal::ZERO, |acc, item| acc + item.tax_amount);
    let grand_total = round2(sub_total + total_tax);

    Self {
      sub_total,
      total_tax,
      grand_total,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyParty {
  pub name: String,
  pub address_line1: String,
  pub address_line2: String,
  pub gstin: String,
  pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerParty {
  pub name: String,
  pub address: String,
  pub gstin: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankDetails {
  pub name: String,
  pub account: String,
  pub ifsc: String,
}

/// The assembled invoice record. Built fresh per request, consumed by exactly
/// one presentation path, never mutated after assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
  pub invoice_no: String,
  pub date: String,
  pub due_date: String,
  pub company: CompanyParty,
  pub customer: CustomerParty,
  pub items: Vec<LineItem>,
  pub sub_total: Decimal,
  pub total_tax: Decimal,
  pub grand_total: Decimal,
  pub bank: BankDetails,
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  fn draft(qty: Decimal, price: Decimal, rate: Decimal) -> LineItemDraft {
    LineItemDraft {
      description: "Item".to_string(),
      hsn: String::new(),
      quantity: qty,
      unit_price: price,
      tax_rate: rate,
    }
  }

  #[test]
  fn test_line_item_amounts() {
    let item = LineItem::from_draft(draft(dec!(2), dec!(100), dec!(18)));

    assert_eq!(item.taxable, dec!(200));
    assert_eq!(item.tax_amount, dec!(36.00));
    assert_eq!(item.total, dec!(236.00));
  }

  #[test]
  fn test_line_item_tax_rounds_half_away_from_zero() {
    // 3 * 33.33 = 99.99, 5% of that is 4.9995 -> 5.00
    let item = LineItem::from_draft(draft(dec!(3), dec!(33.33), dec!(5)));

    assert_eq!(item.taxable, dec!(99.99));
    assert_eq!(item.tax_amount, dec!(5.00));
    assert_eq!(item.total, dec!(104.99));
  }

  #[test]
  fn test_zero_quantity_or_price_is_all_zero() {
    let item = LineItem::from_draft(draft(dec!(0), dec!(100), dec!(18)));
    assert_eq!(item.taxable, Decimal::ZERO);
    assert_eq!(item.tax_amount, Decimal::ZERO);
    assert_eq!(item.total, Decimal::ZERO);

    let item = LineItem::from_draft(draft(dec!(3), dec!(0), dec!(18)));
    assert_eq!(item.total, Decimal::ZERO);
  }

  #[test]
  fn test_negative_inputs_propagate() {
    let item = LineItem::from_draft(draft(dec!(-1), dec!(100), dec!(18)));

    assert_eq!(item.taxable, dec!(-100));
    assert_eq!(item.tax_amount, dec!(-18.00));
    assert_eq!(item.total, dec!(-118.00));
  }

  #[test]
  fn test_totals_over_items() {
    let items = vec![
      LineItem::from_draft(draft(dec!(2), dec!(100), dec!(18))),
      LineItem::from_draft(draft(dec!(1), dec!(50), dec!(18))),
    ];

    let totals = InvoiceTotals::calculate(&items);
    assert_eq!(totals.sub_total, dec!(250));
    assert_eq!(totals.total_tax, dec!(45.00));
    assert_eq!(totals.grand_total, dec!(295.00));
  }

  #[test]
  fn test_totals_sum_rounded_tax_amounts() {
    // Each item's tax rounds to 0.33; the aggregate must be 0.66, not
    // round2(0.6666...) = 0.67.
    let items = vec![
      LineItem::from_draft(draft(dec!(1), dec!(6.66), dec!(5))),
      LineItem::from_draft(draft(dec!(1), dec!(6.66), dec!(5))),
    ];

    assert_eq!(items[0].tax_amount, dec!(0.33));
    let totals = InvoiceTotals::calculate(&items);
    assert_eq!(totals.total_tax, dec!(0.66));
    assert_eq!(totals.grand_total, dec!(13.98));
  }

  #[test]
  fn test_totals_of_no_items() {
    let totals = InvoiceTotals::calculate(&[]);
    assert_eq!(totals.sub_total, Decimal::ZERO);
    assert_eq!(totals.total_tax, Decimal::ZERO);
    assert_eq!(totals.grand_total, Decimal::ZERO);
  }
}
