pub mod assembler;
pub mod entities;
pub mod errors;
pub mod money;
pub mod normalizer;
pub mod ports;

pub use assembler::{InvoiceDefaults, assemble};
pub use entities::{BankDetails, CompanyParty, CustomerParty, Invoice, InvoiceTotals, LineItem};
pub use errors::ExportError;
pub use money::{format_inr, round2};
pub use normalizer::{FieldValue, LineItemDraft, Submission, normalize_items};
pub use ports::{Clock, PdfRenderer};
