use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::errors::ExportError;

/// Source of the current time. Injected so assembly stays a pure function of
/// its inputs and tests can pin the clock.
pub trait Clock: Send + Sync {
  fn now(&self) -> DateTime<Utc>;
}

/// Renders an HTML document to PDF bytes.
#[async_trait]
pub trait PdfRenderer: Send + Sync {
  async fn render(&self, html: &str) -> Result<Vec<u8>, ExportError>;
}
