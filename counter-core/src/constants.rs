/// The default number of worker threads
pub const DEFAULT_THREADS: usize = 10;

/// The default number of increments performed by each worker
pub const DEFAULT_INCREMENTS: u64 = 500;

/// The default number of decrements performed by each worker
pub const DEFAULT_DECREMENTS: u64 = 0;

/// Prefix of worker thread names, followed by the worker index
pub const WORKER_THREAD_NAME_PREFIX: &str = "counter-worker-";
