use crate::logging::{LogEvent, LogFields, LogLevel};
use crate::packing::PackingResult;
use serde_json::json;

/// Running counters across packing runs.
#[derive(Debug, Default, Clone)]
pub struct PackingMetrics {
    runs: u64,
    units_requested: u64,
    units_placed: u64,
    units_overflowed: u64,
    incomplete_runs: u64,
}

impl PackingMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_run(&mut self, requested: usize, result: &PackingResult<'_>) {
        self.runs = self.runs.saturating_add(1);
        self.units_requested = self.units_requested.saturating_add(requested as u64);
        self.units_placed = self
            .units_placed
            .saturating_add(result.placed_count() as u64);
        self.units_overflowed = self
            .units_overflowed
            .saturating_add(result.overflow_count() as u64);
        if !result.is_complete() {
            self.incomplete_runs = self.incomplete_runs.saturating_add(1);
        }
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            runs: self.runs,
            units_requested: self.units_requested,
            units_placed: self.units_placed,
            units_overflowed: self.units_overflowed,
            incomplete_runs: self.incomplete_runs,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub runs: u64,
    pub units_requested: u64,
    pub units_placed: u64,
    pub units_overflowed: u64,
    pub incomplete_runs: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "packing_metrics", self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("runs".to_string(), json!(self.runs));
        map.insert("units_requested".to_string(), json!(self.units_requested));
        map.insert("units_placed".to_string(), json!(self.units_placed));
        map.insert("units_overflowed".to_string(), json!(self.units_overflowed));
        map.insert("incomplete_runs".to_string(), json!(self.incomplete_runs));
        map
    }
}
