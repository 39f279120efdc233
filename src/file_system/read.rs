use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::{
    error::{EntryError, Stage},
    file_system::{
        entry_type::{classify_entry, classify_path, entry_size, Classified, EntryKind},
        size::SizeAccumulator,
    },
    ok_or,
    scheduler::SchedulerHandle,
    stats::ScanStats,
};

/// One unit of traversal work: a path plus the root it is counted towards.
///
/// A task adds regular files straight into `total` and submits one new task
/// per subdirectory. It never waits on the tasks it submits.
pub struct TraversalTask {
    path: PathBuf,
    total: Arc<SizeAccumulator>,
    scheduler: SchedulerHandle,
    stats: Arc<ScanStats>,
}

impl TraversalTask {
    pub fn new(
        path: PathBuf,
        total: Arc<SizeAccumulator>,
        scheduler: SchedulerHandle,
        stats: Arc<ScanStats>,
    ) -> Self {
        Self {
            path,
            total,
            scheduler,
            stats,
        }
    }

    /// Hand the task to its scheduler.
    pub fn submit(self) {
        let scheduler = self.scheduler.clone();
        scheduler.submit(move || self.run());
    }

    /// Classify the task's own path and act on it.
    pub fn run(self) {
        let classified = classify_path(&self.path).unwrap_or_else(|err| {
            self.skip(err);
            Classified::INACCESSIBLE
        });

        match classified.kind {
            EntryKind::Regular => {
                self.total.add(classified.size);
                self.stats.record_file();
            }
            EntryKind::Directory => self.read_dir(),
            EntryKind::Inaccessible => {}
            kind => self.ignore(&self.path, kind),
        }
    }

    fn read_dir(&self) {
        let it = ok_or!(fs::read_dir(&self.path), err => {
            self.skip(EntryError::classify(&self.path, Stage::ReadDir, err));
            return;
        });
        self.stats.record_dir();

        for entry in it {
            // Give up on the rest of this directory; keep what was counted.
            let entry = ok_or!(entry, err => {
                self.skip(EntryError::classify(&self.path, Stage::ReadDir, err));
                break;
            });

            let kind = classify_entry(&entry).unwrap_or_else(|err| {
                self.skip(err);
                EntryKind::Inaccessible
            });

            match kind {
                EntryKind::Regular => {
                    let size = ok_or!(entry_size(&entry), err => {
                        self.skip(err);
                        continue;
                    });
                    self.total.add(size);
                    self.stats.record_file();
                }
                EntryKind::Directory => self.child(entry.path()).submit(),
                EntryKind::Inaccessible => {}
                kind => self.ignore(&entry.path(), kind),
            }
        }
    }

    fn child(&self, path: PathBuf) -> Self {
        Self::new(
            path,
            Arc::clone(&self.total),
            self.scheduler.clone(),
            Arc::clone(&self.stats),
        )
    }

    fn ignore(&self, path: &Path, kind: EntryKind) {
        match kind {
            EntryKind::Special(special) => {
                debug!("'{}' is {}, not counted", path.display(), special.describe())
            }
            _ => debug!(path = %path.display(), ?kind, "not counted"),
        }
        self.stats.apply_skipped(&kind);
    }

    fn skip(&self, err: EntryError) {
        warn!("{err}");
        self.stats.record_error();
    }
}
