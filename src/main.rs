use actix_files as fs;
use actix_web::{App, HttpServer, middleware::Logger, web};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gstbill::{
  adapters::http::{RequestIdMiddleware, TemplateEngine, WebRouteDependencies, configure_web_routes},
  application::invoice::{BuildInvoiceUseCase, ExportInvoiceUseCase},
  domain::invoice::ports::{Clock, PdfRenderer},
  infrastructure::{clock::SystemClock, config::Config, pdf::WkHtmlToPdfRenderer},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "gstbill=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting gstbill");

  // Load configuration
  let config = Config::load().expect("Failed to load configuration");
  tracing::info!("Configuration loaded successfully");

  // Initialize template engine
  let templates = TemplateEngine::new().expect("Failed to initialize template engine");
  tracing::info!("Template engine initialized");

  // Initialize the PDF renderer and use cases
  let clock: Arc<dyn Clock> = Arc::new(SystemClock);
  let renderer: Arc<dyn PdfRenderer> =
    Arc::new(WkHtmlToPdfRenderer::new(config.pdf.wkhtmltopdf_path.clone()));
  let build_invoice_use_case = Arc::new(BuildInvoiceUseCase::new(clock.clone()));
  let export_invoice_use_case = Arc::new(ExportInvoiceUseCase::new(
    renderer,
    Duration::from_secs(config.pdf.render_timeout_seconds),
  ));
  tracing::info!("PDF renderer initialized");

  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  // Create and start the HTTP server
  HttpServer::new(move || {
    App::new()
      // Add request ID middleware
      .wrap(RequestIdMiddleware::new())
      // Add logging middleware
      .wrap(Logger::default())
      // Configure web UI routes
      .configure(|cfg| {
        configure_web_routes(
          cfg,
          WebRouteDependencies {
            templates: templates.clone(),
            clock: clock.clone(),
            build_invoice_use_case: build_invoice_use_case.clone(),
            export_invoice_use_case: export_invoice_use_case.clone(),
          },
        )
      })
      // Static files
      .service(fs::Files::new("/static", "./static"))
      // Health check endpoint
      .route("/health", web::get().to(health_check))
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await
}

/// Health check endpoint
async fn health_check() -> &'static str {
  "OK"
}
