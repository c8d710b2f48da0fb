//! Observability samples and the sinks they are reported to.
//!
//! Samples are recorded on the [`Ctx`](crate::ctx::Ctx) while an operation runs and handed to the
//! [`Telemetry`] sink only after the unit of work commits, so a rolled-back operation never
//! reports.

use std::fmt::Display;

use liquidstake_primitives::types::ChainId;
use prometheus::{register_gauge_vec_with_registry, GaugeVec, Registry};

/// The gauges reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gauge {
    /// The exchange rate of a host chain.
    CValue,

    /// Whether a host chain is active: `1` or `0`.
    Active,
}

impl Display for Gauge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gauge::CValue => write!(f, "c_value"),
            Gauge::Active => write!(f, "active"),
        }
    }
}

/// A single gauge reading for one chain.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeSample {
    /// The gauge being set.
    pub gauge: Gauge,

    /// The chain the reading belongs to.
    pub chain_id: ChainId,

    /// The reading.
    pub value: f64,
}

/// A sink for gauge samples.
pub trait Telemetry: Send + Sync {
    /// Sets `sample.gauge` for `sample.chain_id` to `sample.value`.
    fn set_gauge(&self, sample: &GaugeSample);
}

/// A sink that drops every sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTelemetry;

impl Telemetry for NoopTelemetry {
    fn set_gauge(&self, _sample: &GaugeSample) {}
}

/// A sink that exports samples as prometheus gauges labelled by chain id.
#[derive(Debug, Clone)]
pub struct PrometheusTelemetry {
    c_value: GaugeVec,
    active: GaugeVec,
}

impl PrometheusTelemetry {
    /// Registers the engine's gauges with `registry`.
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        Ok(Self {
            c_value: register_gauge_vec_with_registry!(
                "liquidstake_c_value",
                "Exchange rate of minted receipt tokens to backing, by host chain",
                &["chain_id"],
                registry,
            )?,
            active: register_gauge_vec_with_registry!(
                "liquidstake_active",
                "Whether the host chain accepts new operations, by host chain",
                &["chain_id"],
                registry,
            )?,
        })
    }
}

impl Telemetry for PrometheusTelemetry {
    fn set_gauge(&self, sample: &GaugeSample) {
        let vec = match sample.gauge {
            Gauge::CValue => &self.c_value,
            Gauge::Active => &self.active,
        };

        vec.with_label_values(&[sample.chain_id.as_str()])
            .set(sample.value);
    }
}
