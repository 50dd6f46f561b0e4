//! A `RingBuffer` guarded by a mutex.
//!
//! Each method takes the lock for exactly one logical operation. Sequences
//! that must not interleave with other threads, such as peeking at the tail
//! before deciding to push at the head, go through [`SyncRingBuffer::with`]
//! or [`SyncRingBuffer::lock`] so the whole sequence runs under one lock.
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//!
//! use ringdeque::SyncRingBuffer;
//!
//! let buffer = Arc::new(SyncRingBuffer::new(16).unwrap());
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|t| {
//!         let buffer = Arc::clone(&buffer);
//!         thread::spawn(move || {
//!             for i in 0..4 {
//!                 buffer.push_tail(t * 4 + i);
//!             }
//!         })
//!     })
//!     .collect();
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert!(buffer.is_full());
//! ```

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError, TryLockError};

use tracing::warn;

use crate::error::Result;
use crate::RingBuffer;

/// A `RingBuffer` that synchronizes every operation internally.
///
/// Reads hand out clones, since a reference cannot outlive the lock.
pub struct SyncRingBuffer<T> {
    capacity: usize,
    inner: Mutex<RingBuffer<T>>,
}

impl<T> SyncRingBuffer<T> {
    /// Creates an empty buffer holding at most `capacity` elements.
    ///
    /// Returns `Error::InvalidArgument` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<SyncRingBuffer<T>> {
        RingBuffer::new(capacity).map(SyncRingBuffer::from)
    }

    /// Acquires the lock and returns the guarded buffer.
    ///
    /// The lock is held until the guard is dropped. A lock poisoned by a
    /// panicking thread is recovered: no operation leaves the ring
    /// half-updated when an element's destructor panics.
    pub fn lock(&self) -> MutexGuard<'_, RingBuffer<T>> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            warn!(capacity = self.capacity, "recovered ring buffer from a poisoned lock");
            poisoned.into_inner()
        })
    }

    /// Runs `f` with the buffer locked for its whole duration.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::SyncRingBuffer;
    ///
    /// let buffer = SyncRingBuffer::new(2).unwrap();
    /// buffer.push_tail(1);
    /// buffer.push_tail(2);
    ///
    /// // peek and evict as one step
    /// let evicted = buffer.with(|ring| {
    ///     if ring.peek_tail() == Ok(&2) {
    ///         ring.push_head_and_evict_tail(0)
    ///     } else {
    ///         None
    ///     }
    /// });
    /// assert_eq!(evicted, Some(2));
    /// assert_eq!(buffer.to_array_head_first(), vec![0, 1]);
    /// ```
    pub fn with<R, F>(&self, f: F) -> R
        where F: FnOnce(&mut RingBuffer<T>) -> R
    {
        f(&mut self.lock())
    }

    /// Returns the buffer without locking; the exclusive borrow already
    /// rules out other threads.
    pub fn get_mut(&mut self) -> &mut RingBuffer<T> {
        self.inner.get_mut().unwrap_or_else(PoisonError::into_inner)
    }

    /// Consumes the wrapper and returns the buffer.
    pub fn into_inner(self) -> RingBuffer<T> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the maximum number of elements the buffer holds.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of elements in the buffer.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if the buffer contains no elements.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Returns true if every slot holds an element.
    pub fn is_full(&self) -> bool {
        self.lock().is_full()
    }

    /// Adds an element at the head, evicting the tail if the buffer is full.
    pub fn push_head(&self, element: T) {
        // the evicted element is dropped after the lock is released
        let evicted = self.lock().push_head_and_evict_tail(element);
        drop(evicted);
    }

    /// Adds an element at the tail, evicting the head if the buffer is full.
    pub fn push_tail(&self, element: T) {
        let evicted = self.lock().push_tail_and_evict_head(element);
        drop(evicted);
    }

    /// Adds an element at the head and returns the evicted tail, if any.
    pub fn push_head_and_evict_tail(&self, element: T) -> Option<T> {
        self.lock().push_head_and_evict_tail(element)
    }

    /// Adds an element at the tail and returns the evicted head, if any.
    pub fn push_tail_and_evict_head(&self, element: T) -> Option<T> {
        self.lock().push_tail_and_evict_head(element)
    }

    /// Removes the head element and returns it.
    pub fn pop_head(&self) -> Result<T> {
        self.lock().pop_head()
    }

    /// Removes the tail element and returns it.
    pub fn pop_tail(&self) -> Result<T> {
        self.lock().pop_tail()
    }

    /// Replaces the element at logical index `index`.
    pub fn set(&self, index: usize, element: T) -> Result<()> {
        self.lock().set(index, element)
    }

    /// Overwrites the head element.
    pub fn update_head(&self, element: T) -> Result<()> {
        self.lock().update_head(element)
    }

    /// Clears the buffer, dropping all values.
    pub fn clear(&self) {
        self.lock().clear()
    }
}

impl<T: Clone> SyncRingBuffer<T> {
    /// Returns a copy of the head element.
    pub fn peek_head(&self) -> Result<T> {
        self.lock().peek_head().cloned()
    }

    /// Returns a copy of the tail element.
    pub fn peek_tail(&self) -> Result<T> {
        self.lock().peek_tail().cloned()
    }

    /// Returns a copy of the element `offset` positions after the head.
    pub fn peek_at(&self, offset: usize) -> Result<T> {
        self.lock().peek_at(offset).cloned()
    }

    /// Returns a copy of the element at logical index `index`.
    pub fn get(&self, index: usize) -> Result<T> {
        self.lock().get(index).cloned()
    }

    /// Copies the contents into a new `Vec`, head first.
    pub fn to_array_head_first(&self) -> Vec<T> {
        self.lock().to_array_head_first()
    }

    /// Copies the contents into a new `Vec`, tail first.
    pub fn to_array_tail_first(&self) -> Vec<T> {
        self.lock().to_array_tail_first()
    }
}

impl<T> From<RingBuffer<T>> for SyncRingBuffer<T> {
    fn from(buffer: RingBuffer<T>) -> SyncRingBuffer<T> {
        SyncRingBuffer {
            capacity: buffer.capacity(),
            inner: Mutex::new(buffer),
        }
    }
}

impl<T> fmt::Debug for SyncRingBuffer<T>
    where T: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.inner.try_lock() {
            Ok(buffer) => f.debug_tuple("SyncRingBuffer").field(&*buffer).finish(),
            Err(TryLockError::Poisoned(poisoned)) => {
                f.debug_tuple("SyncRingBuffer").field(&*poisoned.into_inner()).finish()
            }
            Err(TryLockError::WouldBlock) => {
                f.debug_tuple("SyncRingBuffer").field(&"<locked>").finish()
            }
        }
    }
}
