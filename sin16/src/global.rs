//! The process-wide quarter-wave table.
//!
//! By default this is the [`SINE16_TABLE`] literal and needs no setup. With the
//! `generated-table` feature it is computed on first use (or by an explicit
//! [`init_table`] call) behind a [`OnceTable`], so every reader observes the
//! fully written table.

use core::cell::UnsafeCell;
use core::mem::MaybeUninit;
use core::sync::atomic::{AtomicU8, Ordering};

use crate::constants::DEFAULT_TABLE_LEN;
use crate::table::QuarterWaveTable;
#[cfg(not(feature = "generated-table"))]
use crate::table::SINE16_TABLE;

const UNINIT: u8 = 0;
const BUSY: u8 = 1;
const READY: u8 = 2;

/// A table written once and read-only afterwards.
///
/// The first caller of [`get_or_init`](OnceTable::get_or_init) moves the state
/// from `UNINIT` to `BUSY` and runs the initializer; concurrent callers spin
/// until it publishes `READY` with `Release` ordering. Readers load the state
/// with `Acquire`, so the table write happens-before every read.
pub struct OnceTable<const N: usize> {
    state: AtomicU8,
    table: UnsafeCell<MaybeUninit<QuarterWaveTable<N>>>,
}

// SAFETY: the cell is written only by the thread that won the UNINIT -> BUSY
// exchange, and read only after READY has been observed with Acquire.
unsafe impl<const N: usize> Sync for OnceTable<N> {}

impl<const N: usize> OnceTable<N> {
    /// An empty, uninitialized slot.
    pub const fn new() -> Self {
        OnceTable {
            state: AtomicU8::new(UNINIT),
            table: UnsafeCell::new(MaybeUninit::uninit()),
        }
    }

    /// Return the table, running `init` if nobody has yet.
    ///
    /// `init` must not panic: a panicking initializer leaves the slot busy
    /// and later callers spin forever.
    pub fn get_or_init<F>(&self, init: F) -> &QuarterWaveTable<N>
    where
        F: FnOnce() -> QuarterWaveTable<N>,
    {
        let mut init = Some(init);
        loop {
            match self
                .state
                .compare_exchange_weak(UNINIT, BUSY, Ordering::Acquire, Ordering::Acquire)
            {
                Ok(_) => {
                    if let Some(init) = init.take() {
                        let table = init();
                        // SAFETY: BUSY grants this thread exclusive access to the cell.
                        unsafe {
                            (*self.table.get()).write(table);
                        }
                        self.state.store(READY, Ordering::Release);
                    }
                }
                Err(READY) => break,
                Err(_) => core::hint::spin_loop(), // BUSY, or a spurious failure
            }
        }
        // SAFETY: READY was observed, so the write is complete and visible.
        unsafe { (*self.table.get()).assume_init_ref() }
    }

    /// The table if it has been initialized.
    pub fn get(&self) -> Option<&QuarterWaveTable<N>> {
        if self.is_initialized() {
            // SAFETY: READY was observed with Acquire.
            Some(unsafe { (*self.table.get()).assume_init_ref() })
        } else {
            None
        }
    }

    /// Whether the table has been published.
    pub fn is_initialized(&self) -> bool {
        self.state.load(Ordering::Acquire) == READY
    }
}

impl<const N: usize> Default for OnceTable<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "generated-table")]
static GENERATED: OnceTable<DEFAULT_TABLE_LEN> = OnceTable::new();

#[cfg(feature = "generated-table")]
fn generate() -> QuarterWaveTable<DEFAULT_TABLE_LEN> {
    let table = QuarterWaveTable::generate();
    tracing::debug!("initialized process-wide sine table");
    table
}

/// The process-wide table.
#[cfg(not(feature = "generated-table"))]
#[inline(always)]
pub fn table() -> &'static QuarterWaveTable<DEFAULT_TABLE_LEN> {
    &SINE16_TABLE
}

/// The process-wide table, generated on first call.
#[cfg(feature = "generated-table")]
#[inline]
pub fn table() -> &'static QuarterWaveTable<DEFAULT_TABLE_LEN> {
    GENERATED.get_or_init(generate)
}

/// Establish the process-wide table ahead of the first lookup.
///
/// A no-op for the static table. With `generated-table` this moves the
/// one-time generation cost out of the first [`sine`](crate::sine) call; it is
/// safe to call any number of times from any thread.
pub fn init_table() {
    #[cfg(feature = "generated-table")]
    {
        let _ = table();
    }
}

/// Number of entries in the process-wide table, padding included.
pub fn table_size() -> usize {
    table().len()
}

/// Sample `index` of the process-wide table.
///
/// # Panics
/// If `index >= table_size()`.
pub fn table_lookup(index: usize) -> i16 {
    table()[index]
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::thread;

    use super::*;

    #[test]
    fn test_table_accessors() {
        init_table();
        assert_eq!(table_size(), 17);
        assert_eq!(table_lookup(0), 0);
        assert_eq!(table_lookup(16), 32767);
        assert!(table().is_monotonic());
    }

    #[test]
    #[should_panic]
    fn test_table_lookup_out_of_range() {
        table_lookup(17);
    }

    #[test]
    fn test_once_table_runs_init_once() {
        let slot: OnceTable<9> = OnceTable::new();
        assert!(!slot.is_initialized());
        assert!(slot.get().is_none());

        let calls = AtomicUsize::new(0);
        let first = slot
            .get_or_init(|| {
                calls.fetch_add(1, Ordering::Relaxed);
                QuarterWaveTable::generate()
            })
            .clone();
        let second = slot.get_or_init(|| {
            calls.fetch_add(1, Ordering::Relaxed);
            QuarterWaveTable::generate_truncated()
        });

        assert_eq!(calls.load(Ordering::Relaxed), 1);
        assert_eq!(&first, second);
        assert_eq!(slot.get(), Some(second));
    }

    #[test]
    fn test_once_table_concurrent_readers() {
        let slot: OnceTable<17> = OnceTable::new();
        let calls = AtomicUsize::new(0);

        thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    let table = slot.get_or_init(|| {
                        calls.fetch_add(1, Ordering::Relaxed);
                        QuarterWaveTable::generate()
                    });
                    assert_eq!(table[16], 32767);
                    assert!(table.is_monotonic());
                });
            }
        });

        assert_eq!(calls.load(Ordering::Relaxed), 1);
        assert_eq!(slot.get(), Some(&QuarterWaveTable::<17>::generate()));
    }
}
