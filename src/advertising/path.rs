use crate::constants::ADVERTISEMENT_PATH_PREFIX;
use std::sync::atomic::{AtomicI64, Ordering};

/// Counter value before the first allocation.
const EMPTY: i64 = -1;

/// Hands out advertisement object paths.
///
/// Releasing only moves the counter back by one. It does not track which
/// path was freed, so a released index can be handed out again while an
/// older advertisement still uses it.
#[derive(Debug)]
pub struct PathAllocator {
    counter: AtomicI64,
}

impl Default for PathAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl PathAllocator {
    pub fn new() -> Self {
        Self {
            counter: AtomicI64::new(EMPTY),
        }
    }

    pub fn next_path(&self) -> String {
        let index = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{}{}", ADVERTISEMENT_PATH_PREFIX, index)
    }

    pub fn release_one(&self) {
        self.counter
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |count| {
                Some((count - 1).max(EMPTY))
            })
            .ok();
    }

    /// Number of paths currently counted as allocated.
    pub fn allocated(&self) -> u64 {
        (self.counter.load(Ordering::SeqCst) - EMPTY) as u64
    }
}
