use std::sync::atomic::{AtomicU64, Ordering};

/// Running byte total for one root.
///
/// Only ever added to. A `load` is meaningful once the scheduler that runs the
/// root's tasks has quiesced; the scheduler's wait provides the ordering.
#[derive(Debug, Default)]
pub struct SizeAccumulator(AtomicU64);

impl SizeAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, bytes: u64) {
        self.0.fetch_add(bytes, Ordering::Relaxed);
    }

    pub fn load(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}
