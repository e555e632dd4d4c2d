//! Wall-clock instrumentation around the phases of a run.
//!
//! The timer wraps each phase from the outside, the render code itself is
//! never aware of it.

use chrono::Local;
use std::{
    fmt::Write,
    time::{Duration, Instant},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    ConfigLoad,
    CanvasInit,
    PixelProcessing,
    FileSave,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::ConfigLoad => "Configuration loading",
            Phase::CanvasInit => "Canvas initialization",
            Phase::PixelProcessing => "Pixel processing",
            Phase::FileSave => "Image saving",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PhaseTimer {
    start: Instant,
    phases: Vec<(Phase, Duration)>,
}

impl Default for PhaseTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseTimer {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            phases: Vec::with_capacity(4),
        }
    }

    /// Run `f` and record how long it took under `phase`
    pub fn measure<T>(&mut self, phase: Phase, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let output = f();
        self.phases.push((phase, start.elapsed()));
        output
    }

    pub fn phases(&self) -> &[(Phase, Duration)] {
        &self.phases
    }

    pub fn elapsed(&self, phase: Phase) -> Option<Duration> {
        self.phases
            .iter()
            .filter(|(p, _)| *p == phase)
            .map(|(_, d)| *d)
            .reduce(|a, b| a + b)
    }

    pub fn total(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn report(&self) -> String {
        let rule = "=".repeat(50);
        let mut out = String::new();

        _ = writeln!(
            out,
            "Performance Breakdown ({}):",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        _ = writeln!(out, "{rule}");
        for (phase, duration) in &self.phases {
            _ = writeln!(out, "{}: {:.4} seconds", phase.name(), duration.as_secs_f64());
        }
        _ = writeln!(out, "{rule}");
        _ = write!(
            out,
            "Total execution time: {:.4} seconds",
            self.total().as_secs_f64()
        );

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_measure_returns_output() {
        let mut timer = PhaseTimer::new();
        let value = timer.measure(Phase::ConfigLoad, || 42);
        assert_eq!(value, 42);

        let result: Result<u8, &str> = timer.measure(Phase::FileSave, || Err("boom"));
        assert!(result.is_err());
        assert_eq!(timer.phases().len(), 2);
    }

    #[test]
    fn test_elapsed_and_total() {
        let mut timer = PhaseTimer::new();
        timer.measure(Phase::PixelProcessing, || {
            thread::sleep(Duration::from_millis(5))
        });

        let pixel = timer.elapsed(Phase::PixelProcessing).unwrap();
        assert!(pixel >= Duration::from_millis(5));
        assert!(timer.total() >= pixel);
        assert!(timer.elapsed(Phase::FileSave).is_none());
    }

    #[test]
    fn test_report_layout() {
        let mut timer = PhaseTimer::new();
        timer.measure(Phase::ConfigLoad, || ());
        timer.measure(Phase::CanvasInit, || ());
        timer.measure(Phase::PixelProcessing, || ());
        timer.measure(Phase::FileSave, || ());

        let report = timer.report();
        let lines = report.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("Performance Breakdown ("));
        assert_eq!(lines[1], "=".repeat(50));
        assert!(lines[2].starts_with("Configuration loading: "));
        assert!(lines[3].starts_with("Canvas initialization: "));
        assert!(lines[4].starts_with("Pixel processing: "));
        assert!(lines[5].starts_with("Image saving: "));
        assert_eq!(lines[6], "=".repeat(50));
        assert!(lines[7].starts_with("Total execution time: "));
        assert!(lines[7].ends_with(" seconds"));
    }
}
