//! Per-thread resample buffers
//!
//! A resample lives only for the duration of one statistic evaluation, so
//! each worker thread keeps one buffer and refills it for every resample
//! instead of allocating a fresh vector each time.

use std::cell::RefCell;

thread_local! {
    static RESAMPLE_BUFFER: RefCell<Vec<f64>> = const { RefCell::new(Vec::new()) };
}

/// Run `f` with an empty buffer of at least `capacity`
///
/// The buffer is cleared before `f` sees it and its contents are discarded
/// afterwards. A nested call on the same thread gets a fresh allocation.
pub fn with_resample_buffer<R>(capacity: usize, f: impl FnOnce(&mut Vec<f64>) -> R) -> R {
    RESAMPLE_BUFFER.with(|cell| match cell.try_borrow_mut() {
        Ok(mut buffer) => {
            buffer.clear();
            buffer.reserve(capacity);
            f(&mut buffer)
        }
        Err(_) => f(&mut Vec::with_capacity(capacity)),
    })
}
