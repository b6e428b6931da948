use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use std::fmt;

use crate::domain::invoice::ExportError;

/// HTTP boundary error. The computation core never fails, so everything that
/// can land here comes from rendering or exporting — one flat boundary, one
/// undifferentiated 500 to the caller. Details stay in the server log.
#[derive(Debug)]
pub enum ApiError {
  /// Template rendering failure on the interactive path
  Template(tera::Error),

  /// Any failure on the export path
  Export(ExportError),
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::Template(err) => write!(f, "Template error: {}", err),
      ApiError::Export(err) => write!(f, "Export error: {}", err),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
  }

  fn error_response(&self) -> HttpResponse {
    let body = match self {
      ApiError::Template(err) => {
        tracing::error!("Template rendering failed: {}", err);
        "An internal server error occurred"
      }
      ApiError::Export(err) => {
        tracing::error!("PDF export failed: {}", err);
        "Error generating PDF"
      }
    };

    HttpResponse::build(self.status_code())
      .content_type(ContentType::plaintext())
      .body(body)
  }
}

impl From<tera::Error> for ApiError {
  fn from(error: tera::Error) -> Self {
    ApiError::Template(error)
  }
}

impl From<ExportError> for ApiError {
  fn from(error: ExportError) -> Self {
    ApiError::Export(error)
  }
}
