//! Observability & Logging Config

use clap::Args;

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Request timing and trace export settings.
#[derive(Debug, Args)]
pub struct ObservabilityConfig {
    /// Requests slower than this many milliseconds are logged as warnings.
    #[arg(long, env = "SLOW_REQUEST_THRESHOLD_MS", default_value_t = 1_000_u64)]
    pub slow_request_threshold_ms: u64,

    /// OpenTelemetry export.
    #[command(flatten)]
    pub otel: OtelConfig,
}

/// OpenTelemetry trace export. Off unless `OTEL_ENABLED=true`.
#[derive(Debug, Args)]
pub struct OtelConfig {
    /// Export request spans over OTLP.
    #[arg(
        id = "otel_enabled",
        long = "otel-enabled",
        env = "OTEL_ENABLED",
        default_value_t = false,
        action = clap::ArgAction::Set
    )]
    pub enabled: bool,

    /// Continue traces named by an incoming `traceparent` header.
    #[arg(
        id = "otel_propagate_parent",
        long = "otel-propagate-parent",
        env = "OTEL_PARENT_PROPAGATION_ENABLED",
        default_value_t = false,
        action = clap::ArgAction::Set
    )]
    pub propagate_parent: bool,

    /// OTLP gRPC collector endpoint.
    #[arg(
        id = "otel_endpoint",
        long = "otel-endpoint",
        env = "OTEL_EXPORTER_OTLP_ENDPOINT",
        default_value = "http://localhost:4317"
    )]
    pub endpoint: String,

    /// Export timeout in seconds.
    #[arg(
        id = "otel_timeout_seconds",
        long = "otel-timeout-seconds",
        env = "OTEL_EXPORTER_OTLP_TIMEOUT_SECONDS",
        default_value_t = 3_u64
    )]
    pub timeout_seconds: u64,

    /// `service.name` resource attribute.
    #[arg(
        id = "otel_service_name",
        long = "otel-service-name",
        env = "OTEL_SERVICE_NAME",
        default_value = "cafe-json"
    )]
    pub service_name: String,

    /// `service.version` resource attribute.
    #[arg(
        id = "otel_service_version",
        long = "otel-service-version",
        env = "OTEL_SERVICE_VERSION",
        default_value = env!("CARGO_PKG_VERSION")
    )]
    pub service_version: String,

    /// `deployment.environment.name` resource attribute.
    #[arg(
        id = "otel_environment",
        long = "otel-environment",
        env = "OTEL_DEPLOYMENT_ENVIRONMENT",
        default_value = "development"
    )]
    pub environment: String,

    /// Head sampling ratio, clamped to [0.0, 1.0].
    #[arg(
        id = "otel_sample_ratio",
        long = "otel-sample-ratio",
        env = "OTEL_TRACE_SAMPLE_RATIO",
        default_value_t = 1.0_f64
    )]
    pub sample_ratio: f64,
}
