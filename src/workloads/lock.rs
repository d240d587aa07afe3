//! Shared lock workload implementation.

use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering;

/// The single process-wide exclusion resource that workers contend on.
///
/// Acquisition blocks until the current holder releases; holding it for a
/// while is what manufactures the contention pattern a profiler should see.
/// The holder count is instrumentation only: it is incremented after the
/// mutex is taken and decremented before it is released, so it can never
/// observe two holders at once.
#[derive(Default)]
pub struct SharedLock {
    /// The underlying exclusion primitive.
    inner: Mutex<()>,

    /// Number of threads currently inside the critical section.
    holders: AtomicU32,
}

impl SharedLock {
    /// Acquire the lock, blocking until it is free.
    ///
    /// # Returns
    ///
    /// A guard that releases the lock when dropped.
    pub fn acquire(&self) -> HoldGuard<'_> {
        let guard = self.inner.lock().unwrap();
        self.holders.fetch_add(1, Ordering::SeqCst);
        HoldGuard {
            holders: &self.holders,
            _guard: guard,
        }
    }

    /// Number of threads currently holding the lock. At most 1 by
    /// construction; exposed so tests can check exclusion under stress.
    pub fn holders(&self) -> u32 {
        self.holders.load(Ordering::SeqCst)
    }
}

/// RAII guard for a held [`SharedLock`].
pub struct HoldGuard<'a> {
    holders: &'a AtomicU32,
    _guard: MutexGuard<'a, ()>,
}

impl Drop for HoldGuard<'_> {
    // Runs before the mutex guard field is dropped, so the count goes to
    // zero while the lock is still held.
    fn drop(&mut self) {
        self.holders.fetch_sub(1, Ordering::SeqCst);
    }
}
