//! Command-line and environment configuration.

use std::net::SocketAddr;

use clap::{Parser, ValueEnum};

use listener::config::{DEFAULT_BIND_ADDR, DEFAULT_BODY_LIMIT};
use listener::ListenerConfig;

/// Output format of log events written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable, one line per event.
    Pretty,
    /// One JSON object per event.
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "pipeline-inspector")]
#[command(version, about = "HTTP service reporting node/edge counts and acyclicity of submitted pipelines")]
pub struct Args {
    /// Address to listen on.
    #[arg(long, env = "PIPELINE_INSPECTOR_BIND", default_value = DEFAULT_BIND_ADDR)]
    pub bind: SocketAddr,

    /// Maximum accepted request body, in bytes.
    #[arg(long, env = "PIPELINE_INSPECTOR_BODY_LIMIT", default_value_t = DEFAULT_BODY_LIMIT)]
    pub body_limit: usize,

    /// Log output format.
    #[arg(long, env = "PIPELINE_INSPECTOR_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// OTLP/gRPC collector endpoint. Span export is disabled when unset.
    #[arg(long, env = "OTEL_EXPORTER_OTLP_ENDPOINT")]
    pub otlp_endpoint: Option<String>,
}

impl Args {
    /// Listener settings derived from these arguments.
    pub fn listener_config(&self) -> ListenerConfig {
        ListenerConfig {
            bind_addr: self.bind,
            body_limit: self.body_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_flags() {
        let args = Args::try_parse_from(["pipeline-inspector"]).expect("parses");
        assert_eq!(args.listener_config(), ListenerConfig::default());
        assert_eq!(args.log_format, LogFormat::Pretty);
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "pipeline-inspector",
            "--bind",
            "0.0.0.0:9000",
            "--body-limit",
            "1024",
            "--log-format",
            "json",
            "--otlp-endpoint",
            "http://collector:4317",
        ])
        .expect("parses");
        let config = args.listener_config();
        assert_eq!(config.bind_addr, SocketAddr::from(([0, 0, 0, 0], 9000)));
        assert_eq!(config.body_limit, 1024);
        assert_eq!(args.log_format, LogFormat::Json);
        assert_eq!(args.otlp_endpoint.as_deref(), Some("http://collector:4317"));
    }

    #[test]
    fn invalid_bind_address_is_rejected() {
        assert!(Args::try_parse_from(["pipeline-inspector", "--bind", "not-an-address"]).is_err());
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
