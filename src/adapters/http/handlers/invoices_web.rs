use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::adapters::http::{errors::ApiError, templates::TemplateEngine};
use crate::application::invoice::{BuildInvoiceCommand, BuildInvoiceUseCase, ExportInvoiceUseCase};
use crate::domain::invoice::ExportError;

const FALLBACK_PDF_STEM: &str = "invoice";

// POST /invoice - Render the computed invoice as an interactive HTML page
pub async fn render_invoice_page(
  form: web::Form<Vec<(String, String)>>,
  templates: web::Data<TemplateEngine>,
  build_invoice_use_case: web::Data<Arc<BuildInvoiceUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let invoice = build_invoice_use_case.execute(BuildInvoiceCommand {
    fields: form.into_inner(),
  });

  let html = templates.render_invoice(&invoice)?;
  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

// POST /invoice/pdf - Render the same invoice document and return it as a
// downloadable PDF. Every failure past this point maps to one generic 500.
pub async fn download_invoice_pdf(
  form: web::Form<Vec<(String, String)>>,
  templates: web::Data<TemplateEngine>,
  build_invoice_use_case: web::Data<Arc<BuildInvoiceUseCase>>,
  export_invoice_use_case: web::Data<Arc<ExportInvoiceUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let invoice = build_invoice_use_case.execute(BuildInvoiceCommand {
    fields: form.into_inner(),
  });

  let html = templates
    .render_invoice(&invoice)
    .map_err(ExportError::from)?;
  let pdf = export_invoice_use_case.execute(&html).await?;

  let stem = if invoice.invoice_no.is_empty() {
    FALLBACK_PDF_STEM
  } else {
    invoice.invoice_no.as_str()
  };

  Ok(
    HttpResponse::Ok()
      .content_type("application/pdf")
      .insert_header((
        "Content-Disposition",
        format!("attachment; filename=\"{}.pdf\"", stem),
      ))
      .body(pdf),
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::adapters::http::routes::{WebRouteDependencies, configure_web_routes};
  use crate::domain::invoice::ports::{Clock, PdfRenderer};
  use actix_web::{
    App,
    http::StatusCode,
    test::{self, TestRequest},
  };
  use async_trait::async_trait;
  use chrono::{DateTime, TimeZone, Utc};
  use std::time::Duration;

  struct FixedClock;

  impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
      Utc.with_ymd_and_hms(2026, 8, 7, 10, 0, 0).unwrap()
    }
  }

  struct StubPdfRenderer;

  #[async_trait]
  impl PdfRenderer for StubPdfRenderer {
    async fn render(&self, _html: &str) -> Result<Vec<u8>, ExportError> {
      Ok(b"%PDF-1.7 stub".to_vec())
    }
  }

  struct FailingPdfRenderer;

  #[async_trait]
  impl PdfRenderer for FailingPdfRenderer {
    async fn render(&self, _html: &str) -> Result<Vec<u8>, ExportError> {
      Err(ExportError::RendererUnavailable(
        "wkhtmltopdf not found".to_string(),
      ))
    }
  }

  fn dependencies(renderer: Arc<dyn PdfRenderer>) -> WebRouteDependencies {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);
    WebRouteDependencies {
      templates: TemplateEngine::new().expect("templates load"),
      clock: clock.clone(),
      build_invoice_use_case: Arc::new(BuildInvoiceUseCase::new(clock)),
      export_invoice_use_case: Arc::new(ExportInvoiceUseCase::new(
        renderer,
        Duration::from_secs(5),
      )),
    }
  }

  const TWO_ITEM_FORM: &str =
    "description=Widget&description=Gadget&hsn=8471&hsn=8517&qty=2&qty=1&price=100&price=50&taxRate=18&taxRate=18&invoiceNo=INV-042&customerName=Acme+Corp";

  #[actix_web::test]
  async fn test_invoice_view_renders_computed_amounts() {
    let app = test::init_service(
      App::new().configure(|cfg| configure_web_routes(cfg, dependencies(Arc::new(StubPdfRenderer)))),
    )
    .await;

    let req = TestRequest::post()
      .uri("/invoice")
      .insert_header(("content-type", "application/x-www-form-urlencoded"))
      .set_payload(TWO_ITEM_FORM)
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("Widget"));
    assert!(body.contains("INV-042"));
    assert!(body.contains("₹ 236.00"));
    assert!(body.contains("₹ 295.00"));
  }

  #[actix_web::test]
  async fn test_pdf_download_sets_attachment_headers() {
    let app = test::init_service(
      App::new().configure(|cfg| configure_web_routes(cfg, dependencies(Arc::new(StubPdfRenderer)))),
    )
    .await;

    let req = TestRequest::post()
      .uri("/invoice/pdf")
      .insert_header(("content-type", "application/x-www-form-urlencoded"))
      .set_payload(TWO_ITEM_FORM)
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
      resp.headers().get("content-type").unwrap(),
      "application/pdf"
    );
    assert_eq!(
      resp.headers().get("content-disposition").unwrap(),
      "attachment; filename=\"INV-042.pdf\""
    );

    let body = test::read_body(resp).await;
    assert_eq!(body.as_ref(), b"%PDF-1.7 stub");
  }

  #[actix_web::test]
  async fn test_pdf_filename_falls_back_when_invoice_no_empty() {
    let app = test::init_service(
      App::new().configure(|cfg| configure_web_routes(cfg, dependencies(Arc::new(StubPdfRenderer)))),
    )
    .await;

    let req = TestRequest::post()
      .uri("/invoice/pdf")
      .insert_header(("content-type", "application/x-www-form-urlencoded"))
      .set_payload("description=Service&invoiceNo=")
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(
      resp.headers().get("content-disposition").unwrap(),
      "attachment; filename=\"invoice.pdf\""
    );
  }

  #[actix_web::test]
  async fn test_pdf_export_failure_yields_one_generic_error() {
    let app = test::init_service(
      App::new()
        .configure(|cfg| configure_web_routes(cfg, dependencies(Arc::new(FailingPdfRenderer)))),
    )
    .await;

    let req = TestRequest::post()
      .uri("/invoice/pdf")
      .insert_header(("content-type", "application/x-www-form-urlencoded"))
      .set_payload(TWO_ITEM_FORM)
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert_eq!(body, "Error generating PDF");
  }

  #[actix_web::test]
  async fn test_form_page_prefills_dates() {
    let app = test::init_service(
      App::new().configure(|cfg| configure_web_routes(cfg, dependencies(Arc::new(StubPdfRenderer)))),
    )
    .await;

    let resp = test::call_service(&app, TestRequest::get().uri("/").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("07-Aug-2026"));
    assert!(body.contains("22-Aug-2026"));
  }
}
