use std::sync::Arc;
use std::time::Duration;

use crate::domain::invoice::ExportError;
use crate::domain::invoice::ports::PdfRenderer;

/// Drives the export pipeline: hand the rendered invoice HTML to the PDF
/// renderer, bounded by a timeout so a wedged renderer cannot hold its
/// resources indefinitely.
pub struct ExportInvoiceUseCase {
  renderer: Arc<dyn PdfRenderer>,
  render_timeout: Duration,
}

impl ExportInvoiceUseCase {
  pub fn new(renderer: Arc<dyn PdfRenderer>, render_timeout: Duration) -> Self {
    Self {
      renderer,
      render_timeout,
    }
  }

  pub async fn execute(&self, html: &str) -> Result<Vec<u8>, ExportError> {
    tokio::time::timeout(self.render_timeout, self.renderer.render(html))
      .await
      .map_err(|_| ExportError::Timeout(self.render_timeout.as_secs()))?
  }
}
