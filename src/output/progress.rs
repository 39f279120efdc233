use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::stats::ScanStats;

const REFRESH: Duration = Duration::from_millis(100);

/// Spinner on stderr showing how far a running scan has got.
///
/// The spinner is cleared when it is finished or dropped.
pub struct Spinner {
    pb: ProgressBar,
    done: Arc<AtomicBool>,
    poller: Option<JoinHandle<()>>,
}

impl Spinner {
    pub fn start(stats: Arc<ScanStats>) -> Self {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .template("{spinner} Scanning... [{elapsed_precise}] {msg}")
        {
            pb.set_style(style);
        }
        pb.enable_steady_tick(REFRESH);

        let done = Arc::new(AtomicBool::new(false));
        let poller = {
            let pb = pb.clone();
            let done = Arc::clone(&done);
            thread::Builder::new()
                .name("mtdu-progress".into())
                .spawn(move || {
                    while !done.load(Ordering::Relaxed) {
                        let s = stats.snapshot();
                        pb.set_message(format!(
                            "{} dirs, {} files, {} errors",
                            s.dirs, s.files, s.errors
                        ));
                        thread::sleep(REFRESH);
                    }
                })
                .ok()
        };

        Self { pb, done, poller }
    }

    pub fn finish(self) {
        // stopped and cleared by Drop
    }

    fn stop(&mut self) {
        self.done.store(true, Ordering::Relaxed);
        if let Some(poller) = self.poller.take() {
            let _ = poller.join();
        }
        self.pb.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.stop();
    }
}
