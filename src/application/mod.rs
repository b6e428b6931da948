//! Application layer
//!
//! Use cases that orchestrate the invoice domain: building an invoice record
//! from a raw submission, and exporting a rendered invoice to PDF.

pub mod invoice;
