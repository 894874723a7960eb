//! # Domain Model: Case Documents and Metrics
//!
//! A case file is a YAML mapping-of-mappings. Most of it is free-form
//! narrative (`project`, `customer`, `problem`, `evidence`, `results`,
//! `cta`) that flows straight through to the report template. The one
//! section with decidable semantics is `metrics`, which is decoded into
//! typed snapshots so the delta calculator works on plain numbers.
//!
//! ## Defaulting
//!
//! Authors routinely leave metrics fields out while drafting. Every
//! numeric field, and each snapshot itself, defaults to zero when absent,
//! so a partially filled case file still loads and computes (zero) deltas.
//! Wrong *types* are a different matter and fail the load.

use serde::{Deserialize, Serialize};

/// One measured snapshot of the funnel, before or after the engagement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    #[serde(default)]
    pub ramp_days: f64,
    #[serde(default)]
    pub avg_meetings_per_rep_week: f64,
    #[serde(default)]
    pub qualified_rate_pct: f64,
}

/// The `metrics` section of a case file: the before/after snapshot pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(default)]
    pub baseline: MetricSnapshot,
    #[serde(default)]
    pub after: MetricSnapshot,
}

/// Derived before/after comparison values.
///
/// Recomputed on every generate run and attached to the document under
/// the `deltas` key just before rendering; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeltaSet {
    /// Relative change in ramp time, percent.
    pub ramp_days_pct: f64,
    /// Relative change in meetings per rep per week, percent.
    pub meetings_pct: f64,
    /// Absolute change in qualified rate, percentage points.
    pub qualified_pp: f64,
}

/// A parsed case file.
///
/// Keeps the full document as a loosely-typed mapping so unknown sections
/// pass through to the template untouched, while offering typed access to
/// the `metrics` section.
#[derive(Debug, Clone)]
pub struct CaseDocument {
    data: serde_yaml::Mapping,
}

impl CaseDocument {
    /// Parses a case file. The top level must be a YAML mapping.
    pub fn parse(raw: &str) -> std::result::Result<Self, serde_yaml::Error> {
        let data: serde_yaml::Mapping = serde_yaml::from_str(raw)?;
        Ok(Self { data })
    }

    /// Decodes the `metrics` section. An absent or null section yields
    /// all-zero snapshots; a section of the wrong shape is an error.
    pub fn metrics(&self) -> std::result::Result<Metrics, serde_yaml::Error> {
        match self.data.get("metrics") {
            None | Some(serde_yaml::Value::Null) => Ok(Metrics::default()),
            Some(value) => serde_yaml::from_value(value.clone()),
        }
    }

    /// Attaches computed deltas under the `deltas` key, replacing any
    /// pre-existing value there.
    pub fn attach_deltas(&mut self, deltas: &DeltaSet) {
        let mut mapping = serde_yaml::Mapping::new();
        mapping.insert("ramp_days_pct".into(), deltas.ramp_days_pct.into());
        mapping.insert("meetings_pct".into(), deltas.meetings_pct.into());
        mapping.insert("qualified_pp".into(), deltas.qualified_pp.into());
        self.data
            .insert("deltas".into(), serde_yaml::Value::Mapping(mapping));
    }

    /// The full document mapping, for the renderer.
    pub fn data(&self) -> &serde_yaml::Mapping {
        &self.data
    }
}
