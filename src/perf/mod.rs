//! Scoped timing with pluggable measurement sinks.
//!
//! A [`Timer`] reports its elapsed time to a [`Monitor`] when dropped, so
//! placement within the scope decides what gets measured:
//!
//! ```
//! use satchel::perf::{measure, RecordingMonitor};
//!
//! let mut monitor = RecordingMonitor::default();
//! measure(&mut monitor, || {
//!     let _ = (0..1000).sum::<u64>();
//! });
//! assert_eq!(monitor.measurements().len(), 1);
//! ```

mod monitors;
mod timer;

pub use monitors::{PrintMonitor, RecordingMonitor};
pub use timer::{measure, Monitor, Timer};
