//! Persistence seam for finished runs.
//!
//! The engine records each run exactly once through an explicitly injected
//! store. Storage failure is never fatal to the simulation; the engine
//! logs it and moves on.

use std::error::Error;

use pathbreak_core::enums::ArtifactId;

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRecord {
    pub score: u64,
    pub wave: u32,
    pub artifacts: Vec<ArtifactId>,
}

/// Where finished runs go.
pub trait ProgressStore {
    fn record_run(&mut self, record: &RunRecord) -> Result<(), Box<dyn Error>>;
}

/// Discards everything. The default store.
#[derive(Debug, Default)]
pub struct NullProgress;

impl ProgressStore for NullProgress {
    fn record_run(&mut self, _record: &RunRecord) -> Result<(), Box<dyn Error>> {
        Ok(())
    }
}

/// Keeps runs in memory; used by tests and embedding frontends that do
/// their own persistence.
#[derive(Debug, Default)]
pub struct MemoryProgress {
    pub runs: Vec<RunRecord>,
}

impl ProgressStore for MemoryProgress {
    fn record_run(&mut self, record: &RunRecord) -> Result<(), Box<dyn Error>> {
        self.runs.push(record.clone());
        Ok(())
    }
}
