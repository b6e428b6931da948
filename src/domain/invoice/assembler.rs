use chrono::{DateTime, Duration, Utc};

use super::entities::{BankDetails, CompanyParty, CustomerParty, Invoice, InvoiceTotals, LineItem};
use super::normalizer::Submission;

pub const DATE_FORMAT: &str = "%d-%b-%Y";
pub const DUE_DATE_OFFSET_DAYS: i64 = 15;

/// The defaults table for every optional textual field. A default applies
/// only when the field's key never appeared in the submission; an explicit
/// empty string is preserved as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDefaults {
  pub company_name: &'static str,
  pub company_address_line1: &'static str,
  pub company_address_line2: &'static str,
  pub company_gstin: &'static str,
  pub company_phone: &'static str,
  pub customer_name: &'static str,
  pub customer_address: &'static str,
  pub customer_gstin: &'static str,
  pub bank_name: &'static str,
  pub bank_account: &'static str,
  pub bank_ifsc: &'static str,
}

impl Default for InvoiceDefaults {
  fn default() -> Self {
    Self {
      company_name: "AK ENTERPRISES",
      company_address_line1: "",
      company_address_line2: "",
      company_gstin: "",
      company_phone: "",
      customer_name: "",
      customer_address: "",
      customer_gstin: "",
      bank_name: "",
      bank_account: "",
      bank_ifsc: "",
    }
  }
}

/// Combine normalized items, calculated totals, and the submission's party,
/// bank, and date fields into one immutable invoice record.
///
/// Pure in its inputs: `now` is the only clock this function sees, so two
/// calls with identical arguments produce identical invoices.
pub fn assemble(
  submission: &Submission,
  items: Vec<LineItem>,
  totals: InvoiceTotals,
  now: DateTime<Utc>,
  defaults: &InvoiceDefaults,
) -> Invoice {
  let field = |key: &str, default: &str| -> String {
    submission.text(key).unwrap_or(default).to_string()
  };

  let invoice_no = submission
    .text("invoiceNo")
    .map(str::to_string)
    .unwrap_or_else(|| format!("INV-{}", now.timestamp_millis()));
  let date = submission
    .text("date")
    .map(str::to_string)
    .unwrap_or_else(|| now.format(DATE_FORMAT).to_string());
  let due_date = submission
    .text("dueDate")
    .map(str::to_string)
    .unwrap_or_else(|| {
      (now + Duration::days(DUE_DATE_OFFSET_DAYS))
        .format(DATE_FORMAT)
        .to_string()
    });

  Invoice {
    invoice_no,
    date,
    due_date,
    company: CompanyParty {
      name: field("companyName", defaults.company_name),
      address_line1: field("address1", defaults.company_address_line1),
      address_line2: field("address2", defaults.company_address_line2),
      gstin: field("gstin", defaults.company_gstin),
      phone: field("companyPhone", defaults.company_phone),
    },
    customer: CustomerParty {
      name: field("customerName", defaults.customer_name),
      address: field("customerAddress", defaults.customer_address),
      gstin: field("customerGstin", defaults.customer_gstin),
    },
    items,
    sub_total: totals.sub_total,
    total_tax: totals.total_tax,
    grand_total: totals.grand_total,
    bank: BankDetails {
      name: field("bankName", defaults.bank_name),
      account: field("bankAccount", defaults.bank_account),
      ifsc: field("bankIfsc", defaults.bank_ifsc),
    },
  }
}
