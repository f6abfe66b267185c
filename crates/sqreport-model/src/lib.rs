//! # sqreport-model
//!
//! **Tier 1 (Normalization)**
//!
//! Turns a raw, partially missing, mixed-type measure set into the single
//! canonical [`MetricsModel`] every renderer consumes.
//!
//! ## What belongs here
//! * The one coercion pass (`numeric` / `textual` split)
//! * Derived figures (covered lines, covered branches) and their defaults
//!
//! ## What does NOT belong here
//! * Output formatting of any kind
//! * Reading measure files

mod coerce;
pub mod keys;
mod metrics;

pub use coerce::{
    CoercedMeasures, MeasureValue, coerce_measures, coerce_value, parse_number,
    raw_measures_from_json,
};
pub use metrics::{FieldValue, MetricField, MetricsModel};
