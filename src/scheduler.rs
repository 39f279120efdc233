//! Fixed-size worker pool with re-entrant submission
//!
//! Tasks are boxed closures pushed onto an unbounded MPMC channel. Any thread,
//! including a worker in the middle of running a task, may submit through a
//! [`SchedulerHandle`]. [`WorkScheduler::wait`] blocks until nothing is queued
//! or running, counting work that is submitted while it waits.
//!
//! ```text
//! submit ──► pending += 1 ──► channel ──► worker N: run task ──► pending -= 1
//!    ▲                                        │
//!    └──────────── child submissions ─────────┘
//! ```

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::{debug, error, trace};

use crate::error::ScanError;
use crate::utils::sync::PendingTasks;

pub type Task = Box<dyn FnOnce() + Send + 'static>;

enum Message {
    Run(Task),
    Stop,
}

struct Shared {
    sender: Sender<Message>,
    pending: PendingTasks,
    completed: AtomicU64,
}

/// Cloneable submission handle, given to tasks so they can fan out
#[derive(Clone)]
pub struct SchedulerHandle {
    shared: Arc<Shared>,
}

impl SchedulerHandle {
    /// Queue a task. Never blocks.
    pub fn submit<F>(&self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.shared.pending.begin();
        trace!(pending = self.shared.pending.get(), "task submitted");
        if self.shared.sender.send(Message::Run(Box::new(task))).is_err() {
            // Every receiver is gone, so the task can never run.
            error!("task submitted after worker pool shut down");
            self.shared.pending.finish();
        }
    }
}

pub struct WorkScheduler {
    handle: SchedulerHandle,
    workers: Vec<JoinHandle<()>>,
}

impl WorkScheduler {
    /// Start `threads` workers.
    pub fn new(threads: usize) -> Result<Self, ScanError> {
        if threads == 0 {
            return Err(ScanError::NoWorkers);
        }

        let (sender, receiver) = unbounded();
        let shared = Arc::new(Shared {
            sender,
            pending: PendingTasks::new(),
            completed: AtomicU64::new(0),
        });

        let mut scheduler = Self {
            handle: SchedulerHandle {
                shared: Arc::clone(&shared),
            },
            workers: Vec::with_capacity(threads),
        };

        for id in 0..threads {
            let receiver = receiver.clone();
            let shared = Arc::clone(&shared);
            let worker = thread::Builder::new()
                .name(format!("mtdu-worker-{id}"))
                .spawn(move || worker_loop(id, receiver, shared))
                .map_err(|source| ScanError::SpawnWorker { id, source })?;
            scheduler.workers.push(worker);
        }

        debug!(threads, "worker pool started");
        Ok(scheduler)
    }

    /// Default pool size: the available hardware parallelism, or 1 if unknown.
    pub fn default_threads() -> usize {
        thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    }

    pub fn handle(&self) -> SchedulerHandle {
        self.handle.clone()
    }

    pub fn submit<F>(&self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.handle.submit(task);
    }

    /// Block until no task is queued or running.
    ///
    /// Everything a task did, including its atomic adds, happens-before this
    /// returns.
    pub fn wait(&self) {
        self.handle.shared.pending.wait_idle();
    }

    pub fn threads(&self) -> usize {
        self.workers.len()
    }

    /// Tasks that have run to completion so far
    pub fn completed(&self) -> u64 {
        self.handle.shared.completed.load(Ordering::Relaxed)
    }
}

impl Drop for WorkScheduler {
    fn drop(&mut self) {
        self.wait();
        for _ in 0..self.workers.len() {
            let _ = self.handle.shared.sender.send(Message::Stop);
        }
        for worker in self.workers.drain(..) {
            if worker.join().is_err() {
                error!("worker thread panicked outside a task");
            }
        }
        debug!(completed = self.completed(), "worker pool stopped");
    }
}

fn worker_loop(id: usize, receiver: Receiver<Message>, shared: Arc<Shared>) {
    while let Ok(message) = receiver.recv() {
        let task = match message {
            Message::Run(task) => task,
            Message::Stop => break,
        };

        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(task)) {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".into());
            error!(worker = id, %reason, "task panicked");
        }

        shared.completed.fetch_add(1, Ordering::Relaxed);
        shared.pending.finish();
    }
    trace!(worker = id, "worker exiting");
}
