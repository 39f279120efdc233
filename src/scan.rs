//! Runs one scan: a shared worker pool, one accumulator and one root task
//! per input path, and a single wait for quiescence.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::{
    error::ScanError,
    file_system::{read::TraversalTask, size::SizeAccumulator},
    scheduler::WorkScheduler,
    stats::{ScanSnapshot, ScanStats},
};

/// Final size of one input path
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RootSize {
    pub path: PathBuf,
    pub size: u64,
}

#[derive(Clone, Debug)]
pub struct ScanReport {
    /// In the order the paths were given
    pub roots: Vec<RootSize>,
    pub stats: ScanSnapshot,
}

/// A scan whose root tasks have been submitted but not yet waited on
pub struct Scan {
    scheduler: WorkScheduler,
    roots: Vec<(PathBuf, Arc<SizeAccumulator>)>,
    stats: Arc<ScanStats>,
}

impl Scan {
    pub fn start<I>(paths: I, threads: usize) -> Result<Self, ScanError>
    where
        I: IntoIterator,
        I::Item: Into<PathBuf>,
    {
        let scheduler = WorkScheduler::new(threads)?;
        let stats = Arc::new(ScanStats::default());

        let roots: Vec<_> = paths
            .into_iter()
            .map(|path| (path.into(), Arc::new(SizeAccumulator::new())))
            .collect();

        for (path, total) in &roots {
            TraversalTask::new(
                path.clone(),
                Arc::clone(total),
                scheduler.handle(),
                Arc::clone(&stats),
            )
            .submit();
        }
        debug!(roots = roots.len(), threads, "scan started");

        Ok(Self {
            scheduler,
            roots,
            stats,
        })
    }

    /// Live counters, for progress display while the scan runs.
    pub fn stats(&self) -> Arc<ScanStats> {
        Arc::clone(&self.stats)
    }

    /// Wait for every task to finish and collect the totals.
    pub fn finish(self) -> ScanReport {
        self.scheduler.wait();

        let roots = self
            .roots
            .into_iter()
            .map(|(path, total)| {
                let size = total.load();
                debug!(path = %path.display(), size, "root total");
                RootSize { path, size }
            })
            .collect();

        ScanReport {
            roots,
            stats: self.stats.snapshot(),
        }
    }
}

/// Scan `paths` with `threads` workers and return their totals.
pub fn measure<I>(paths: I, threads: usize) -> Result<ScanReport, ScanError>
where
    I: IntoIterator,
    I::Item: Into<PathBuf>,
{
    Ok(Scan::start(paths, threads)?.finish())
}
