//! Growable contiguous arenas with bulk reset.
//!
//! An [`Arena<T>`] is a contiguous region that grows geometrically and is
//! never freed element by element. [`Arena::reset`] drops the length to zero
//! and keeps the capacity, so repeated lexing runs over many files stop
//! allocating once the arenas have warmed up.
//!
//! Arenas are created by an [`ArenaManager`]. The manager is cheap to clone
//! and safe to share across threads; it hands out arenas concurrently and
//! keeps atomic accounting of the bytes they have reserved.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use thiserror::Error;

/// Catastrophic arena failure. Lexical problems never produce this.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ArenaError {
    /// Growing would exceed the configured per-arena byte limit.
    #[error("arena `{arena}` needs {requested} bytes but is limited to {limit} bytes")]
    CapacityExceeded {
        arena: &'static str,
        requested: usize,
        limit: usize,
    },
    /// The system allocator refused the reservation.
    #[error("allocation of {requested} bytes for arena `{arena}` failed")]
    AllocationFailed {
        arena: &'static str,
        requested: usize,
    },
}

/// Arena growth policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Smallest capacity (in elements) an arena grows to on first use.
    pub min_capacity: usize,
    /// Upper bound on any single arena's reserved bytes. `None` is unbounded.
    pub max_bytes_per_arena: Option<usize>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            min_capacity: 64,
            max_bytes_per_arena: None,
        }
    }
}

/// Point-in-time accounting snapshot of an [`ArenaManager`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArenaStats {
    /// Arenas created over the manager's lifetime.
    pub arenas_created: usize,
    /// Bytes currently reserved by live arenas.
    pub reserved_bytes: usize,
    /// High-water mark of `reserved_bytes`.
    pub peak_reserved_bytes: usize,
}

#[derive(Debug)]
struct Shared {
    config: ArenaConfig,
    arenas_created: AtomicUsize,
    reserved_bytes: AtomicUsize,
    peak_reserved_bytes: AtomicUsize,
}

impl Shared {
    fn grew(&self, bytes: usize) {
        let now = self.reserved_bytes.fetch_add(bytes, Ordering::Relaxed) + bytes;
        self.peak_reserved_bytes.fetch_max(now, Ordering::Relaxed);
    }

    fn released(&self, bytes: usize) {
        self.reserved_bytes.fetch_sub(bytes, Ordering::Relaxed);
    }
}

/// Creates arenas and tracks how much memory they hold.
///
/// # Thread Safety
/// All state is atomic. Clones share the same accounting, so one manager can
/// serve every lexer thread in a batch.
#[derive(Clone, Debug)]
pub struct ArenaManager {
    shared: Arc<Shared>,
}

impl ArenaManager {
    /// Create a manager with the given growth policy.
    pub fn new(config: ArenaConfig) -> Self {
        Self {
            shared: Arc::new(Shared {
                config,
                arenas_created: AtomicUsize::new(0),
                reserved_bytes: AtomicUsize::new(0),
                peak_reserved_bytes: AtomicUsize::new(0),
            }),
        }
    }

    /// The growth policy every arena from this manager follows.
    pub fn config(&self) -> ArenaConfig {
        self.shared.config
    }

    /// Create a named arena with room for `capacity` elements.
    pub fn create<T>(&self, name: &'static str, capacity: usize) -> Result<Arena<T>, ArenaError> {
        self.shared.arenas_created.fetch_add(1, Ordering::Relaxed);
        let mut arena = Arena {
            name,
            items: Vec::new(),
            shared: Arc::clone(&self.shared),
        };
        if capacity > 0 {
            arena.reserve(capacity)?;
        }
        Ok(arena)
    }

    /// Snapshot of the accounting counters.
    pub fn stats(&self) -> ArenaStats {
        ArenaStats {
            arenas_created: self.shared.arenas_created.load(Ordering::Relaxed),
            reserved_bytes: self.shared.reserved_bytes.load(Ordering::Relaxed),
            peak_reserved_bytes: self.shared.peak_reserved_bytes.load(Ordering::Relaxed),
        }
    }
}

impl Default for ArenaManager {
    fn default() -> Self {
        Self::new(ArenaConfig::default())
    }
}

/// A growable contiguous region of `T`.
///
/// Elements are addressed by `u32` index. The arena only grows; [`reset`]
/// truncates it without releasing memory.
///
/// [`reset`]: Arena::reset
#[derive(Debug)]
pub struct Arena<T> {
    name: &'static str,
    items: Vec<T>,
    shared: Arc<Shared>,
}

impl<T> Arena<T> {
    /// Debug name used in errors and traces.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the arena holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Reserved capacity in elements.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Make room for `additional` more elements, growing geometrically.
    pub fn reserve(&mut self, additional: usize) -> Result<(), ArenaError> {
        let required = self.items.len().saturating_add(additional);
        let capacity = self.items.capacity();
        if required <= capacity {
            return Ok(());
        }
        self.grow(required)
    }

    #[cold]
    fn grow(&mut self, required: usize) -> Result<(), ArenaError> {
        let elem = std::mem::size_of::<T>().max(1);
        let config = self.shared.config;
        let old_capacity = self.items.capacity();
        let mut target = required
            .max(old_capacity.saturating_mul(2))
            .max(config.min_capacity);

        if let Some(limit) = config.max_bytes_per_arena {
            let requested = required.saturating_mul(elem);
            if requested > limit {
                return Err(ArenaError::CapacityExceeded {
                    arena: self.name,
                    requested,
                    limit,
                });
            }
            target = target.min(limit / elem);
        }

        self.items
            .try_reserve_exact(target - self.items.len())
            .map_err(|_| ArenaError::AllocationFailed {
                arena: self.name,
                requested: target.saturating_mul(elem),
            })?;

        let new_capacity = self.items.capacity();
        self.shared.grew((new_capacity - old_capacity) * elem);
        tracing::trace!(
            arena = self.name,
            old_capacity,
            new_capacity,
            "arena grown"
        );
        Ok(())
    }

    /// Append an element, returning its index.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<u32, ArenaError> {
        self.reserve(1)?;
        let index = self.index_of_next();
        self.items.push(value);
        Ok(index)
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "token buffers are bounded by source length, which fits in u32"
    )]
    #[inline]
    fn index_of_next(&self) -> u32 {
        self.items.len() as u32
    }

    /// Truncate to zero elements, keeping capacity.
    pub fn reset(&mut self) {
        self.items.clear();
    }

    /// Truncate to `len` elements, keeping capacity.
    pub fn truncate(&mut self, len: usize) {
        self.items.truncate(len);
    }

    /// Element at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// All live elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Copy> Arena<T> {
    /// Append a slice, returning the index of its first element.
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<u32, ArenaError> {
        self.reserve(values.len())?;
        let index = self.index_of_next();
        self.items.extend_from_slice(values);
        Ok(index)
    }
}

impl<T> Drop for Arena<T> {
    fn drop(&mut self) {
        let elem = std::mem::size_of::<T>().max(1);
        self.shared.released(self.items.capacity() * elem);
    }
}
