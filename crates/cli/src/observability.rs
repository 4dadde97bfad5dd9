//! Tracing subscriber and OpenTelemetry exporter wiring.
//!
//! Every crate in the workspace emits through `tracing`; this module decides
//! where those spans and events go. Events are written to stdout (pretty or
//! JSON). When an OTLP endpoint is configured, spans are also exported over
//! gRPC with a batch exporter on the tokio runtime.

use anyhow::Context;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::trace::TracerProvider;
use opentelemetry_sdk::{runtime, Resource};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::args::LogFormat;

const SERVICE_NAME: &str = "pipeline-inspector";

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "pipeline_inspector=info,listener=info,pipeline=info,tower_http=info";

/// Handle to the installed exporters; flush it before the process exits.
#[must_use]
pub struct Telemetry {
    provider: Option<TracerProvider>,
}

impl Telemetry {
    /// Flushes and stops the OTLP exporter, if one was installed.
    pub fn shutdown(self) {
        if let Some(provider) = self.provider {
            if let Err(err) = provider.shutdown() {
                tracing::warn!(%err, "failed to flush OTLP exporter");
            }
        }
    }
}

/// Installs the global tracing subscriber.
///
/// Must be called from within the tokio runtime when `otlp_endpoint` is set.
pub fn init(format: LogFormat, otlp_endpoint: Option<&str>) -> anyhow::Result<Telemetry> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = match format {
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer().json().boxed(),
    };

    let provider = otlp_endpoint.map(otlp_provider).transpose()?;
    let otel_layer = provider
        .as_ref()
        .map(|provider| tracing_opentelemetry::layer().with_tracer(provider.tracer(SERVICE_NAME)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(otel_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    if let Some(endpoint) = otlp_endpoint {
        tracing::info!(endpoint, "exporting spans over OTLP");
    }

    Ok(Telemetry { provider })
}

fn otlp_provider(endpoint: &str) -> anyhow::Result<TracerProvider> {
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()
        .with_context(|| format!("failed to build OTLP exporter for {endpoint}"))?;

    Ok(TracerProvider::builder()
        .with_batch_exporter(exporter, runtime::Tokio)
        .with_resource(Resource::new([KeyValue::new("service.name", SERVICE_NAME)]))
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shutdown_without_exporter_is_a_no_op() {
        Telemetry { provider: None }.shutdown();
    }

    #[test]
    fn failed_flush_is_logged_not_panicked() {
        let provider = TracerProvider::builder().build();
        let first = provider.clone().shutdown();
        assert!(first.is_ok(), "first shutdown flushes: {first:?}");

        // A second shutdown reports an error, which must only be logged.
        Telemetry {
            provider: Some(provider),
        }
        .shutdown();
    }
}
