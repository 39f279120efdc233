use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Condvar, Mutex, PoisonError};

/// Count of tasks that are queued or running, with a blocking wait for zero.
///
/// `begin` must be called before a task becomes visible to workers and
/// `finish` only after the task has returned. A running task that submits
/// more work therefore keeps the count above zero until its children are
/// counted.
#[derive(Debug, Default)]
pub struct PendingTasks {
    count: AtomicUsize,
    mu: Mutex<()>,
    cvar: Condvar,
}

impl PendingTasks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }

    pub fn finish(&self) {
        let prev = self.count.fetch_sub(1, Ordering::SeqCst);
        debug_assert!(prev > 0, "finish without matching begin");
        if prev == 1 {
            // Taking the lock orders this notify after any waiter's check.
            let _guard = self.mu.lock().unwrap_or_else(PoisonError::into_inner);
            self.cvar.notify_all();
        }
    }

    pub fn get(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Block until the count is zero.
    pub fn wait_idle(&self) {
        let mut guard = self.mu.lock().unwrap_or_else(PoisonError::into_inner);
        while self.count.load(Ordering::SeqCst) != 0 {
            guard = self
                .cvar
                .wait(guard)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn wait_returns_immediately_when_idle() {
        let pending = PendingTasks::new();
        pending.wait_idle();
        assert_eq!(pending.get(), 0);
    }

    #[test]
    fn wait_blocks_until_last_finish() {
        let pending = Arc::new(PendingTasks::new());
        pending.begin();
        pending.begin();

        let worker = {
            let pending = Arc::clone(&pending);
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(20));
                pending.finish();
                thread::sleep(Duration::from_millis(20));
                pending.finish();
            })
        };

        pending.wait_idle();
        assert_eq!(pending.get(), 0);
        worker.join().unwrap();
    }
}
