//! Drive a shared [`AtomicCounter`] from many OS threads at once.
//!
//! Every worker owns a clone of the same `Arc`, performs its increments and
//! then its decrements, and exits. The driver joins all workers before the
//! final read, so that read observes every update without further
//! synchronization.

use std::{
    fmt::{self, Display, Formatter},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    thread::{self, JoinHandle, Thread},
    time::{Duration, Instant},
};

use anyhow::{Error, Result};

use crate::{constants::WORKER_THREAD_NAME_PREFIX, AtomicCounter, WorkloadOptions};

/// Outcome of a finished workload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub threads: usize,
    pub increments: u64,
    pub decrements: u64,
    pub expected: i64,
    pub value: i64,
    pub elapsed: Duration,
}

impl Report {
    pub fn is_consistent(&self) -> bool {
        self.value == self.expected
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} threads x ({} increments - {} decrements) = {} (expected {}) in {:?}",
            self.threads, self.increments, self.decrements, self.value, self.expected, self.elapsed
        )
    }
}

/// Run the workload described by `opts` against `counter`.
///
/// The counter is not reset first, so `Report::expected` only matches when it
/// starts at zero.
pub fn run(opts: &WorkloadOptions, counter: Arc<AtomicCounter>) -> Result<Report> {
    opts.check()?;

    let expected = opts
        .expected_value()
        .ok_or_else(|| Error::msg("expected value overflows a 64-bit counter"))?;

    let started_at = Instant::now();
    let finished = Arc::new(AtomicUsize::new(0));
    let driver = thread::current();

    log::info!(
        "spawning {} workers, {} increments and {} decrements each",
        opts.threads,
        opts.increments,
        opts.decrements
    );

    let mut handles = Vec::with_capacity(opts.threads);

    for id in 0..opts.threads {
        let worker = Worker {
            counter: counter.clone(),
            done: DoneGuard {
                finished: finished.clone(),
                driver: driver.clone(),
            },
            increments: opts.increments,
            decrements: opts.decrements,
        };

        match worker.spawn(id) {
            Ok(handle) => handles.push(handle),
            Err(err) => {
                // workers already running still hold the counter
                if let Err(join_err) = join_all(handles) {
                    log::error!("{}", join_err);
                }
                return Err(err);
            }
        }
    }

    if let Some(interval) = opts.progress_interval {
        watch_progress(&counter, &finished, opts.threads, Duration::from_millis(interval));
    }

    join_all(handles)?;

    let report = Report {
        threads: opts.threads,
        increments: opts.increments,
        decrements: opts.decrements,
        expected,
        value: counter.get(),
        elapsed: started_at.elapsed(),
    };

    log::info!("{}", report);

    Ok(report)
}

struct Worker {
    counter: Arc<AtomicCounter>,
    done: DoneGuard,
    increments: u64,
    decrements: u64,
}

impl Worker {
    fn spawn(self, id: usize) -> Result<JoinHandle<()>> {
        thread::Builder::new()
            .name(format!("{}{}", WORKER_THREAD_NAME_PREFIX, id))
            .spawn(move || self.work())
            .map_err(|err| Error::msg(format!("fail to spawn worker {}: {}", id, err)))
    }

    fn work(self) {
        let Worker {
            counter,
            done: _done,
            increments,
            decrements,
        } = self;

        for _ in 0..increments {
            counter.increment();
        }
        for _ in 0..decrements {
            counter.decrement();
        }
    }
}

/// Marks a worker finished when dropped, including while unwinding.
struct DoneGuard {
    finished: Arc<AtomicUsize>,
    driver: Thread,
}

impl Drop for DoneGuard {
    fn drop(&mut self) {
        self.finished.fetch_add(1, Ordering::Release);
        self.driver.unpark();
    }
}

/// Join every handle, even after a failure, and return the first failure.
fn join_all(handles: Vec<JoinHandle<()>>) -> Result<()> {
    let mut res = Ok(());

    for (id, handle) in handles.into_iter().enumerate() {
        if handle.join().is_err() && res.is_ok() {
            res = Err(Error::msg(format!("worker {} panicked", id)));
        }
    }

    res
}

// park between samples, workers unpark the driver as they finish
fn watch_progress(counter: &AtomicCounter, finished: &AtomicUsize, workers: usize, interval: Duration) {
    loop {
        let done = finished.load(Ordering::Acquire);
        log::info!("{}/{} workers done, counter = {}", done, workers, counter.get());

        if done == workers {
            break;
        }

        thread::park_timeout(interval);
    }
}
