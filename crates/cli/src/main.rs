//! Pipeline inspector entry point.
//!
//! This binary is the composition root for the service. Responsibilities:
//!
//! 1. **Parse configuration** from flags and environment variables.
//! 2. **Wire observability**: configure `tracing-subscriber` (pretty or JSON)
//!    and, when an endpoint is set, an OpenTelemetry OTLP exporter. All spans
//!    and events emitted by the `pipeline` and `listener` crates flow through it.
//! 3. **Serve**: bind the listener and run it until Ctrl-C or SIGTERM, then
//!    drain in-flight requests and flush telemetry.

mod args;
mod observability;

use anyhow::Context;
use clap::Parser;

use args::Args;
use listener::ListenerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let telemetry = observability::init(args.log_format, args.otlp_endpoint.as_deref())?;

    let config = args.listener_config();
    tracing::info!(
        bind = %config.bind_addr,
        body_limit = config.body_limit,
        version = env!("CARGO_PKG_VERSION"),
        "starting pipeline inspector"
    );

    let result = run(&config).await;
    if let Err(err) = &result {
        tracing::error!(error = %format!("{err:#}"), "pipeline inspector stopped with an error");
    }
    telemetry.shutdown();
    result
}

async fn run(config: &ListenerConfig) -> anyhow::Result<()> {
    let socket = listener::bind(config.bind_addr).await?;
    listener::serve(socket, config, shutdown_signal())
        .await
        .context("listener terminated")?;
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
