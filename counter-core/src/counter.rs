use std::fmt::{Display, Formatter, Result};
use std::sync::atomic::{AtomicI64, Ordering::SeqCst};

/// A signed counter shared between threads without locks.
///
/// Every operation is a single atomic instruction on the inner value with
/// sequentially consistent ordering, so all threads observe one total order of
/// updates and no increment or decrement is ever lost.
///
/// Arithmetic wraps around on overflow: incrementing `i64::MAX` yields
/// `i64::MIN` and decrementing `i64::MIN` yields `i64::MAX`.
#[derive(Default, Debug)]
pub struct AtomicCounter {
    inner: AtomicI64,
}

impl AtomicCounter {
    /// Create a counter starting at zero.
    pub const fn new() -> Self {
        Self::with_value(0)
    }

    pub const fn with_value(value: i64) -> Self {
        Self {
            inner: AtomicI64::new(value),
        }
    }

    pub fn increment(&self) {
        self.inner.fetch_add(1, SeqCst);
    }

    pub fn decrement(&self) {
        self.inner.fetch_sub(1, SeqCst);
    }

    pub fn get(&self) -> i64 {
        self.inner.load(SeqCst)
    }

    /// Add `delta` and return the previous value.
    pub fn add(&self, delta: i64) -> i64 {
        self.inner.fetch_add(delta, SeqCst)
    }

    /// Store `value` and return the previous value.
    pub fn swap(&self, value: i64) -> i64 {
        self.inner.swap(value, SeqCst)
    }

    /// Set the counter back to zero and return the previous value.
    pub fn reset(&self) -> i64 {
        self.swap(0)
    }

    /// Store `new` only if the counter currently holds `current`.
    ///
    /// Returns `Ok` with the previous value on success, `Err` with the value
    /// actually observed otherwise.
    pub fn compare_exchange(&self, current: i64, new: i64) -> std::result::Result<i64, i64> {
        self.inner.compare_exchange(current, new, SeqCst, SeqCst)
    }

    pub fn into_inner(self) -> i64 {
        self.inner.into_inner()
    }
}

impl From<i64> for AtomicCounter {
    fn from(value: i64) -> Self {
        Self::with_value(value)
    }
}

impl Display for AtomicCounter {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.get())
    }
}
