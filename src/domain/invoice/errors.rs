use thiserror::Error;

/// Failures on the export path. The computation core itself is total; only
/// rendering an invoice to a document can fail.
#[derive(Debug, Error)]
pub enum ExportError {
  #[error("Template rendering failed: {0}")]
  Template(#[from] tera::Error),

  #[error("PDF renderer unavailable: {0}")]
  RendererUnavailable(String),

  #[error("PDF rendering failed: {0}")]
  RenderFailed(String),

  #[error("PDF rendering timed out after {0} seconds")]
  Timeout(u64),
}
