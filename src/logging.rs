use crate::errors::Error;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::trace::{Tracer, TracerProvider};
use opentelemetry_sdk::{trace, Resource};
use std::env;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer, Registry};

const SERVICE_NAME: &str = "instance-details";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Create a tracing_subscriber layer which exports traces to the given OTLP endpoint.
/// In addition to the tracing_subscriber layer, it also returns a TracerProvider which should be
/// kept in scope in order for the exporter to stay alive. Dropping that will cause the exporter
/// to silently stop sending traces
fn setup_otlp_layer(
    endpoint: &str,
) -> Result<(TracerProvider, OpenTelemetryLayer<Registry, Tracer>), Error> {
    let otlp_exporter = opentelemetry_otlp::new_exporter()
        .http()
        .with_endpoint(endpoint)
        .build_span_exporter()?;

    let provider = TracerProvider::builder()
        .with_simple_exporter(otlp_exporter)
        .with_config(
            trace::config().with_resource(Resource::new(vec![KeyValue::new(
                "service.name",
                SERVICE_NAME,
            )])),
        )
        .build();

    let tracer = provider.tracer(SERVICE_NAME);
    let layer = tracing_opentelemetry::layer().with_tracer(tracer);

    Ok((provider, layer))
}

/// Installs the global subscriber. `log` records (warp's access log among them) are
/// forwarded to it as well.
pub fn setup_tracing() -> Result<Option<TracerProvider>, Error> {
    let console_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_filter(env_filter());

    let subscriber = Registry::default();
    let mut layers = Vec::new();

    let mut provider = None;
    if let Ok(endpoint) = env::var("OTLP_ENDPOINT") {
        println!("Adding OTLP export to {endpoint}");
        let (tracer_provider, exporter_layer) = setup_otlp_layer(&endpoint)?;
        layers.push(exporter_layer.with_filter(env_filter()).boxed());
        provider = Some(tracer_provider);
    }
    layers.push(console_layer.boxed());
    subscriber.with(layers).try_init()?;

    Ok(provider)
}
