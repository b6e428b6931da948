use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// A submitted field is either a single value or an ordered list of values,
// depending on how many times its key appeared in the form body. A scalar is
// equivalent to a one-element list for all downstream indexing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
  Scalar(String),
  List(Vec<String>),
}

impl FieldValue {
  fn push(&mut self, value: String) {
    match self {
      FieldValue::Scalar(first) => {
        *self = FieldValue::List(vec![std::mem::take(first), value]);
      }
      FieldValue::List(values) => values.push(value),
    }
  }

  /// Number of values carried by this field, always at least 1.
  pub fn count(&self) -> usize {
    match self {
      FieldValue::Scalar(_) => 1,
      FieldValue::List(values) => values.len(),
    }
  }

  /// Value at `index`, treating a scalar as a one-element list. Indexes past
  /// the end are simply missing.
  pub fn at(&self, index: usize) -> Option<&str> {
    match self {
      FieldValue::Scalar(value) if index == 0 => Some(value),
      FieldValue::Scalar(_) => None,
      FieldValue::List(values) => values.get(index).map(String::as_str),
    }
  }
}

/// One form submission: decoded urlencoded pairs grouped by key, keys kept in
/// first-appearance order, repeated keys kept in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
  fields: Vec<(String, FieldValue)>,
}

impl Submission {
  pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
    let mut fields: Vec<(String, FieldValue)> = Vec::new();
    for (key, value) in pairs {
      match fields.iter_mut().find(|(k, _)| *k == key) {
        Some((_, existing)) => existing.push(value),
        None => fields.push((key, FieldValue::Scalar(value))),
      }
    }
    Self { fields }
  }

  /// Build a submission from already-shaped fields.
  pub fn from_fields(fields: Vec<(String, FieldValue)>) -> Self {
    Self { fields }
  }

  pub fn get(&self, key: &str) -> Option<&FieldValue> {
    self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
  }

  /// First value of `key`, if the key appeared at all. An empty string is a
  /// present value, not an absence.
  pub fn text(&self, key: &str) -> Option<&str> {
    self.get(key).and_then(|field| field.at(0))
  }

  fn text_at(&self, key: &str, index: usize) -> &str {
    self.get(key).and_then(|field| field.at(index)).unwrap_or("")
  }

  fn number_at(&self, key: &str, index: usize) -> Decimal {
    self
      .get(key)
      .and_then(|field| field.at(index))
      .map(parse_number)
      .unwrap_or(Decimal::ZERO)
  }
}

/// Raw line-item input, one per submitted row. Derived amounts are computed
/// later by `LineItem::from_draft`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItemDraft {
  pub description: String,
  pub hsn: String,
  pub quantity: Decimal,
  pub unit_price: Decimal,
  pub tax_rate: Decimal,
}

/// Produce the ordered line-item drafts for a submission.
///
/// The `description` field decides the row count: a list yields one row per
/// entry with all other fields read as parallel lists, a scalar (or absent)
/// field yields exactly one row. Missing entries fall back to empty text or
/// zero; this never fails.
pub fn normalize_items(submission: &Submission) -> Vec<LineItemDraft> {
  let count = submission.get("description").map_or(1, FieldValue::count);

  (0..count)
    .map(|i| LineItemDraft {
      description: submission.text_at("description", i).to_string(),
      hsn: submission.text_at("hsn", i).to_string(),
      quantity: submission.number_at("qty", i),
      unit_price: submission.number_at("price", i),
      tax_rate: submission.number_at("taxRate", i),
    })
    .collect()
}

/// Permissive numeric coercion: plain decimal first, scientific notation as a
/// fallback, anything else is zero.
fn parse_number(raw: &str) -> Decimal {
  let trimmed = raw.trim();
  Decimal::from_str(trimmed)
    .or_else(|_| Decimal::from_scientific(trimmed))
    .unwrap_or(Decimal::ZERO)
}
