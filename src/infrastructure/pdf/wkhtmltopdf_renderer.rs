use async_trait::async_trait;
use tokio::process::Command;

use crate::domain::invoice::errors::ExportError;
use crate::domain::invoice::ports::PdfRenderer;

/// Renders invoice HTML to PDF bytes through the wkhtmltopdf binary.
///
/// Each render acquires a temporary working directory, writes the document
/// into it, runs the converter, and reads the result back. The directory is
/// released on every path when the guard drops.
pub struct WkHtmlToPdfRenderer {
  wkhtmltopdf_path: String,
}

impl WkHtmlToPdfRenderer {
  pub fn new(wkhtmltopdf_path: Option<String>) -> Self {
    let wkhtmltopdf_path = wkhtmltopdf_path.unwrap_or_else(|| "wkhtmltopdf".to_string());

    Self { wkhtmltopdf_path }
  }

  async fn verify_wkhtmltopdf_installed(&self) -> Result<(), ExportError> {
    let output = Command::new(&self.wkhtmltopdf_path)
      .arg("--version")
      .output()
      .await
      .map_err(|e| {
        ExportError::RendererUnavailable(format!(
          "wkhtmltopdf not found: {}. Please install wkhtmltopdf.",
          e
        ))
      })?;

    if !output.status.success() {
      return Err(ExportError::RendererUnavailable(
        "wkhtmltopdf is not working correctly".to_string(),
      ));
    }

    Ok(())
  }
}

#[async_trait]
impl PdfRenderer for WkHtmlToPdfRenderer {
  async fn render(&self, html: &str) -> Result<Vec<u8>, ExportError> {
    self.verify_wkhtmltopdf_installed().await?;

    // Scoped working directory; dropped (and deleted) on success and failure
    // alike.
    let workdir = tempfile::tempdir()
      .map_err(|e| ExportError::RenderFailed(format!("Could not create work dir: {}", e)))?;
    let html_path = workdir.path().join("invoice.html");
    let pdf_path = workdir.path().join("invoice.pdf");

    tokio::fs::write(&html_path, html)
      .await
      .map_err(|e| ExportError::RenderFailed(format!("Could not write document: {}", e)))?;

    let output = Command::new(&self.wkhtmltopdf_path)
      .args([
        "--page-size",
        "A4",
        "--margin-top",
        "10mm",
        "--margin-bottom",
        "10mm",
        "--margin-left",
        "10mm",
        "--margin-right",
        "10mm",
        "--print-media-type",
        "--enable-local-file-access",
        "--quiet",
      ])
      .arg(&html_path)
      .arg(&pdf_path)
      .output()
      .await
      .map_err(|e| ExportError::RenderFailed(format!("wkhtmltopdf execution failed: {}", e)))?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(ExportError::RenderFailed(format!(
        "wkhtmltopdf failed: {}",
        stderr
      )));
    }

    let bytes = tokio::fs::read(&pdf_path)
      .await
      .map_err(|e| ExportError::RenderFailed(format!("PDF file was not created: {}", e)))?;

    tracing::debug!(bytes = bytes.len(), "Generated PDF");
    Ok(bytes)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_missing_binary_is_renderer_unavailable() {
    let renderer =
      WkHtmlToPdfRenderer::new(Some("/nonexistent/path/to/wkhtmltopdf".to_string()));

    let err = renderer.render("<html></html>").await.unwrap_err();
    assert!(matches!(err, ExportError::RendererUnavailable(_)));
  }
}
