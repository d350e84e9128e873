//! Reusable line buffers
//!
//! Each emitted line is built in a buffer borrowed from a pool so the steady
//! state does no per-line allocation. The free list is a bounded
//! `crossbeam-channel`, which is lock-free on both ends and safe to share
//! between any number of threads.
//!
//! Buffers that grew past [`MAX_POOLED_CAPACITY`] are dropped on release
//! instead of pooled, so a single oversized line can't pin memory or make
//! every later line pay for it.

use crossbeam_channel::{bounded, Receiver, Sender};
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

/// Largest buffer capacity that is put back in the pool (64 KiB)
pub const MAX_POOLED_CAPACITY: usize = 64 << 10;

/// Number of idle buffers the global pool keeps around
pub const DEFAULT_POOL_SLOTS: usize = 64;

const INITIAL_CAPACITY: usize = 256;

/// Counters for pool activity
#[derive(Debug, Default)]
pub struct PoolStats {
    allocated: AtomicU64,
    reused: AtomicU64,
    discarded: AtomicU64,
}

impl PoolStats {
    /// Buffers freshly allocated because the pool was empty
    #[inline]
    pub fn allocated(&self) -> u64 {
        self.allocated.load(Ordering::Relaxed)
    }

    /// Buffers handed out from the pool
    #[inline]
    pub fn reused(&self) -> u64 {
        self.reused.load(Ordering::Relaxed)
    }

    /// Buffers dropped on release, oversized or pool full
    #[inline]
    pub fn discarded(&self) -> u64 {
        self.discarded.load(Ordering::Relaxed)
    }

    /// Total number of acquisitions
    pub fn acquired(&self) -> u64 {
        self.allocated() + self.reused()
    }
}

pub struct BufferPool {
    sender: Sender<String>,
    receiver: Receiver<String>,
    max_capacity: usize,
    stats: PoolStats,
}

impl BufferPool {
    pub fn new(slots: usize) -> Self {
        Self::with_max_capacity(slots, MAX_POOLED_CAPACITY)
    }

    pub fn with_max_capacity(slots: usize, max_capacity: usize) -> Self {
        let (sender, receiver) = bounded(slots.max(1));
        Self {
            sender,
            receiver,
            max_capacity,
            stats: PoolStats::default(),
        }
    }

    /// Take an empty buffer, reusing a pooled one when available.
    ///
    /// The buffer goes back to the pool when the guard is dropped.
    pub fn acquire(&self) -> PooledBuffer<'_> {
        let buf = match self.receiver.try_recv() {
            Ok(buf) => {
                self.stats.reused.fetch_add(1, Ordering::Relaxed);
                buf
            }
            Err(_) => {
                self.stats.allocated.fetch_add(1, Ordering::Relaxed);
                String::with_capacity(INITIAL_CAPACITY)
            }
        };

        PooledBuffer { buf, pool: self }
    }

    /// Return a buffer to the pool, unless it is oversized or the pool is
    /// already full.
    pub fn release(&self, mut buf: String) {
        if buf.capacity() > self.max_capacity {
            self.stats.discarded.fetch_add(1, Ordering::Relaxed);
            return;
        }

        buf.clear();
        if self.sender.try_send(buf).is_err() {
            self.stats.discarded.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Number of idle buffers currently pooled
    pub fn idle(&self) -> usize {
        self.receiver.len()
    }

    pub fn stats(&self) -> &PoolStats {
        &self.stats
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new(DEFAULT_POOL_SLOTS)
    }
}

/// The process-wide pool shared by every logger
pub fn global() -> &'static BufferPool {
    static POOL: OnceLock<BufferPool> = OnceLock::new();
    POOL.get_or_init(BufferPool::default)
}

/// A buffer on loan from a [`BufferPool`]
pub struct PooledBuffer<'a> {
    buf: String,
    pool: &'a BufferPool,
}

impl Deref for PooledBuffer<'_> {
    type Target = String;

    fn deref(&self) -> &String {
        &self.buf
    }
}

impl DerefMut for PooledBuffer<'_> {
    fn deref_mut(&mut self) -> &mut String {
        &mut self.buf
    }
}

impl Drop for PooledBuffer<'_> {
    fn drop(&mut self) {
        self.pool.release(std::mem::take(&mut self.buf));
    }
}
