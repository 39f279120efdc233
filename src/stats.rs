use std::sync::atomic::{AtomicU64, Ordering};

use crate::file_system::entry_type::EntryKind;

/// Counters shared by every task of one scan.
///
/// These are informational only. Totals live in the per-root accumulators.
#[derive(Debug, Default)]
pub struct ScanStats {
    dirs: AtomicU64,
    files: AtomicU64,
    skipped: AtomicU64,
    errors: AtomicU64,
}

impl ScanStats {
    pub fn record_dir(&self) {
        self.dirs.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_file(&self) {
        self.files.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Count an entry that is deliberately left out of the total.
    pub fn apply_skipped(&self, kind: &EntryKind) {
        match kind {
            EntryKind::Symlink | EntryKind::Special(_) => {
                self.skipped.fetch_add(1, Ordering::Relaxed);
            }
            // already counted through record_error
            EntryKind::Inaccessible => {}
            EntryKind::Regular | EntryKind::Directory => {}
        }
    }

    pub fn snapshot(&self) -> ScanSnapshot {
        ScanSnapshot {
            dirs: self.dirs.load(Ordering::Relaxed),
            files: self.files.load(Ordering::Relaxed),
            skipped: self.skipped.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ScanSnapshot {
    /// Directories enumerated
    pub dirs: u64,
    /// Regular files whose size was counted
    pub files: u64,
    /// Symlinks and special files left out
    pub skipped: u64,
    /// Entries lost to an error
    pub errors: u64,
}
