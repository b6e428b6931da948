pub mod build_invoice;
pub mod export_invoice;

pub use build_invoice::{BuildInvoiceCommand, BuildInvoiceUseCase};
pub use export_invoice::ExportInvoiceUseCase;
