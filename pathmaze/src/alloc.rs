//! Live-heap accounting used for per-run memory metrics.
//!
//! [`TrackingAllocator`] only counts once a binary installs it:
//!
//! ```ignore
//! #[global_allocator]
//! static GLOBAL: pathmaze::alloc::TrackingAllocator = pathmaze::alloc::TrackingAllocator;
//! ```
//!
//! Without it [`live_bytes`] stays flat and memory deltas read 0. The counter
//! is process wide, so a delta measured while other searches run
//! concurrently includes their allocations too.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

static LIVE: AtomicUsize = AtomicUsize::new(0);

/// System allocator wrapper that tracks the number of live heap bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct TrackingAllocator;

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let p = unsafe { System.alloc(layout) };
        if !p.is_null() {
            LIVE.fetch_add(layout.size(), Ordering::Relaxed);
        }
        p
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let p = unsafe { System.alloc_zeroed(layout) };
        if !p.is_null() {
            LIVE.fetch_add(layout.size(), Ordering::Relaxed);
        }
        p
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        LIVE.fetch_sub(layout.size(), Ordering::Relaxed);
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let p = unsafe { System.realloc(ptr, layout, new_size) };
        if !p.is_null() {
            LIVE.fetch_add(new_size, Ordering::Relaxed);
            LIVE.fetch_sub(layout.size(), Ordering::Relaxed);
        }
        p
    }
}

/// Bytes currently allocated through [`TrackingAllocator`].
pub fn live_bytes() -> usize {
    LIVE.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    // The test harness does not install the allocator, so only this test
    // moves the counter.
    #[test]
    fn tracks_alloc_realloc_dealloc() {
        let a = TrackingAllocator;
        let base = live_bytes();
        let layout = Layout::from_size_align(256, 8).unwrap();
        unsafe {
            let p = a.alloc(layout);
            assert!(!p.is_null());
            assert_eq!(live_bytes(), base + 256);
            let q = a.realloc(p, layout, 1024);
            assert!(!q.is_null());
            assert_eq!(live_bytes(), base + 1024);
            a.dealloc(q, Layout::from_size_align(1024, 8).unwrap());
        }
        assert_eq!(live_bytes(), base);
    }
}
