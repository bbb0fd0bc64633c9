#[derive(thiserror::Error, Debug)]
pub enum Error {
    // Metadata service
    #[error("HTTP client error {0}")]
    Http(#[from] reqwest::Error),
    #[error("Metadata attribute {0} not available: {1}")]
    AttributeUnavailable(String, String),

    // Reporter
    #[error("Error rendering template: {0}")]
    Template(#[from] askama::Error),
    #[error("Failed to bind HTTP listener: {0}")]
    Bind(#[from] warp::Error),
    #[error("Failed to install signal handler: {0}")]
    Signal(std::io::Error),

    // Configuration
    #[error("Invalid value for {0}: {1}")]
    InvalidConfig(String, String),

    // Tracing
    #[error("Failed to set up OTLP exporter: {0}")]
    Otlp(#[from] opentelemetry::trace::TraceError),
    #[error("Failed to install tracing subscriber: {0}")]
    TracingInit(#[from] tracing_subscriber::util::TryInitError),
}
