use std::sync::Arc;

use crate::domain::invoice::{
  Invoice, InvoiceDefaults, InvoiceTotals, LineItem, Submission, assemble, normalize_items,
  ports::Clock,
};

/// The decoded urlencoded pairs of one form submission, in body order.
#[derive(Debug, Clone)]
pub struct BuildInvoiceCommand {
  pub fields: Vec<(String, String)>,
}

/// Runs the computation pipeline: normalize the submitted fields, compute
/// per-item and aggregate amounts, assemble the invoice record.
///
/// Total over its input domain: malformed numbers coerce to zero and missing
/// fields take their defaults, so execution never fails.
pub struct BuildInvoiceUseCase {
  clock: Arc<dyn Clock>,
  defaults: InvoiceDefaults,
}

impl BuildInvoiceUseCase {
  pub fn new(clock: Arc<dyn Clock>) -> Self {
    Self {
      clock,
      defaults: InvoiceDefaults::default(),
    }
  }

  pub fn execute(&self, command: BuildInvoiceCommand) -> Invoice {
    let submission = Submission::from_pairs(command.fields);

    let items: Vec<LineItem> = normalize_items(&submission)
      .into_iter()
      .map(LineItem::from_draft)
      .collect();
    let totals = InvoiceTotals::calculate(&items);

    assemble(
      &submission,
      items,
      totals,
      self.clock.now(),
      &self.defaults,
    )
  }
}
