//! Day loop that drives a pharmacy forward.
//!
//! [`run_days`] wraps [`Pharmacy::advance_all`] with a day counter and a
//! callback so the caller can observe every day without touching the core.
//! [`SnapshotLog`] is the callback that records each day's catalogue, in the
//! `{"result": [[...], ...]}` layout written by the engine binary.

use pharmacy_types::DrugRecord;
use serde::Serialize;
use tracing::{debug, info};

use crate::clock::{ClockError, DayClock};
use crate::pharmacy::Pharmacy;

/// Errors that can occur during a simulation run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// The day counter failed to advance.
    #[error("clock error: {source}")]
    Clock {
        /// The underlying clock error.
        #[from]
        source: ClockError,
    },
}

/// What happened on one simulated day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    /// The day that was executed (1 for the first day).
    pub day: u64,
    /// Every drug after the day's update, in catalogue order.
    pub drugs: Vec<DrugRecord>,
    /// Drugs at or past their expiry date after the update.
    pub expired: usize,
}

/// Result of a simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    /// Number of days executed by this run.
    pub total_days: u64,
    /// Clock reading when the run ended.
    pub final_day: u64,
    /// Summary of the last day, if any day ran.
    pub final_summary: Option<DaySummary>,
}

/// Callback invoked after each day completes.
pub trait DayCallback {
    /// Called with the summary of a finished day.
    fn on_day(&mut self, summary: &DaySummary);
}

/// A no-op day callback for testing.
pub struct NoOpCallback;

impl DayCallback for NoOpCallback {
    fn on_day(&mut self, _summary: &DaySummary) {}
}

/// Callback that keeps every day's catalogue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SnapshotLog {
    /// One entry per day, each holding the catalogue after that day.
    pub result: Vec<Vec<DrugRecord>>,
}

impl SnapshotLog {
    /// Create an empty log.
    pub const fn new() -> Self {
        Self { result: Vec::new() }
    }

    /// Number of days recorded.
    pub fn days(&self) -> usize {
        self.result.len()
    }
}

impl DayCallback for SnapshotLog {
    fn on_day(&mut self, summary: &DaySummary) {
        self.result.push(summary.drugs.clone());
    }
}

/// Advance `pharmacy` by `days` days.
///
/// Each day advances `clock`, updates every drug once and hands a
/// [`DaySummary`] to `callback`. A run of zero days does nothing.
///
/// # Errors
///
/// Returns [`RunnerError::Clock`] if the day counter overflows. Days
/// completed before the overflow have already been applied.
pub fn run_days(
    pharmacy: &mut Pharmacy,
    clock: &mut DayClock,
    days: u64,
    callback: &mut dyn DayCallback,
) -> Result<SimulationResult, RunnerError> {
    let mut final_summary: Option<DaySummary> = None;
    let mut total_days: u64 = 0;

    info!(
        days,
        start_day = clock.day(),
        drug_count = pharmacy.len(),
        "Simulation starting"
    );

    for _ in 0..days {
        let day = clock.advance()?;
        pharmacy.advance_all();

        let summary = DaySummary {
            day,
            drugs: pharmacy.records(),
            expired: pharmacy.expired_count(),
        };
        debug!(day, expired = summary.expired, "Day complete");

        callback.on_day(&summary);
        final_summary = Some(summary);
        total_days = total_days.saturating_add(1);
    }

    info!(total_days, final_day = clock.day(), "Simulation finished");

    Ok(SimulationResult {
        total_days,
        final_day: clock.day(),
        final_summary,
    })
}
