use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use tera::Tera;

use crate::domain::invoice::{Invoice, format_inr};

/// Template engine wrapper for rendering HTML pages.
///
/// The `currency` filter is registered at construction, so every surface that
/// renders an invoice formats amounts the same way.
#[derive(Clone)]
pub struct TemplateEngine {
  tera: Arc<Tera>,
}

impl TemplateEngine {
  pub fn new() -> Result<Self, tera::Error> {
    let mut tera = Tera::new("templates/**/*.html.tera")?;
    tera.autoescape_on(vec!["html.tera", ".html"]);
    tera.register_filter("currency", currency_filter);

    Ok(Self {
      tera: Arc::new(tera),
    })
  }

  /// Render a template with the given context
  pub fn render(&self, template: &str, context: &tera::Context) -> Result<String, tera::Error> {
    self.tera.render(template, context)
  }

  /// Render the invoice document. Both the interactive view and the PDF
  /// export go through here, so the two paths cannot diverge.
  pub fn render_invoice(&self, invoice: &Invoice) -> Result<String, tera::Error> {
    let mut context = tera::Context::new();
    context.insert("invoice", invoice);
    self.tera.render("pages/invoice.html.tera", &context)
  }
}

/// Tera filter: format a monetary amount as `₹ #,##0.00`. Decimal values
/// serialize as strings, so both string and numeric inputs are accepted;
/// anything unparseable formats as zero, matching the coercion rules of the
/// computation core.
fn currency_filter(
  value: &tera::Value,
  _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
  let amount = match value {
    tera::Value::String(s) => Decimal::from_str(s).unwrap_or(Decimal::ZERO),
    tera::Value::Number(n) => n
      .as_f64()
      .and_then(Decimal::from_f64_retain)
      .unwrap_or(Decimal::ZERO),
    _ => Decimal::ZERO,
  };

  Ok(tera::Value::String(format_inr(amount)))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn apply(value: tera::Value) -> String {
    match currency_filter(&value, &HashMap::new()).unwrap() {
      tera::Value::String(s) => s,
      other => panic!("expected string, got {:?}", other),
    }
  }

  #[test]
  fn test_currency_filter_formats_strings_and_numbers() {
    assert_eq!(apply(tera::Value::String("1234567.5".to_string())), "₹ 1,234,567.50");
    assert_eq!(apply(tera::Value::from(250)), "₹ 250.00");
  }

  #[test]
  fn test_currency_filter_coerces_garbage_to_zero() {
    assert_eq!(apply(tera::Value::String("n/a".to_string())), "₹ 0.00");
    assert_eq!(apply(tera::Value::Null), "₹ 0.00");
  }
}
