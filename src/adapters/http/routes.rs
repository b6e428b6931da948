use actix_web::web;
use std::sync::Arc;

use crate::application::invoice::{BuildInvoiceUseCase, ExportInvoiceUseCase};
use crate::domain::invoice::ports::Clock;

use super::handlers::{invoices_web, pages};
use super::templates::TemplateEngine;

/// Everything the web routes need, wired once in `main`.
pub struct WebRouteDependencies {
  pub templates: TemplateEngine,
  pub clock: Arc<dyn Clock>,
  pub build_invoice_use_case: Arc<BuildInvoiceUseCase>,
  pub export_invoice_use_case: Arc<ExportInvoiceUseCase>,
}

/// Configure the invoice web routes
///
/// # Routes
///
/// - GET / - Invoice entry form
/// - POST /invoice - Render the computed invoice as HTML
/// - POST /invoice/pdf - Export the computed invoice as a PDF download
pub fn configure_web_routes(cfg: &mut web::ServiceConfig, deps: WebRouteDependencies) {
  cfg
    .app_data(web::Data::new(deps.templates))
    .app_data(web::Data::new(deps.clock))
    .app_data(web::Data::new(deps.build_invoice_use_case))
    .app_data(web::Data::new(deps.export_invoice_use_case))
    // Multi-row submissions repeat every field name per row
    .app_data(web::FormConfig::default().limit(10 * 1024 * 1024))
    .route("/", web::get().to(pages::invoice_form_page))
    .route("/invoice", web::post().to(invoices_web::render_invoice_page))
    .route(
      "/invoice/pdf",
      web::post().to(invoices_web::download_invoice_pdf),
    );
}
