//! Observability setup for Ebios: the tracing subscriber and the optional
//! OpenTelemetry bridge.

pub mod tracing_setup;
