//! CLI library components for the tabular exporter.

pub mod logging;
