use actix_web::{HttpResponse, web};
use chrono::Duration;
use std::sync::Arc;

use crate::adapters::http::{errors::ApiError, templates::TemplateEngine};
use crate::domain::invoice::assembler::{DATE_FORMAT, DUE_DATE_OFFSET_DAYS};
use crate::domain::invoice::{InvoiceDefaults, ports::Clock};

// GET / - Invoice entry form
//
// Dates and the company name are pre-filled so the submitted keys carry the
// values a user sees; server-side defaulting only covers keys that are absent
// from the submission entirely.
pub async fn invoice_form_page(
  templates: web::Data<TemplateEngine>,
  clock: web::Data<Arc<dyn Clock>>,
) -> Result<HttpResponse, ApiError> {
  let now = clock.now();
  let defaults = InvoiceDefaults::default();

  let mut context = tera::Context::new();
  context.insert("today", &now.format(DATE_FORMAT).to_string());
  context.insert(
    "default_due_date",
    &(now + Duration::days(DUE_DATE_OFFSET_DAYS))
      .format(DATE_FORMAT)
      .to_string(),
  );
  context.insert("default_company_name", defaults.company_name);

  let html = templates.render("pages/invoice_form.html.tera", &context)?;
  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}
