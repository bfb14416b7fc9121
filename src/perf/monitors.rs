use std::time::Duration;

use crate::perf::Monitor;

/// Writes each measurement to stdout as it arrives.
#[derive(Default)]
pub struct PrintMonitor {}

impl Monitor for PrintMonitor {
    fn add_measurement(&mut self, duration: Duration) {
        println!("Duration: {}ms", duration.as_millis());
    }
}

/// Accumulates measurements for later inspection.
#[derive(Default)]
pub struct RecordingMonitor {
    measurements: Vec<Duration>,
}

impl Monitor for RecordingMonitor {
    fn add_measurement(&mut self, duration: Duration) {
        self.measurements.push(duration);
    }
}

impl RecordingMonitor {
    /// The measurements received so far, in arrival order.
    pub fn measurements(&self) -> &[Duration] {
        &self.measurements
    }
}
