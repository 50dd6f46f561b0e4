//! A double-ended ring buffer with a fixed capacity.
//!
//! `RingBuffer` has `O(1)` inserts and removals at both ends and `O(1)`
//! indexing like a vector. Its capacity is chosen at construction and never
//! changes. Pushing onto a full buffer never fails: the element at the
//! *opposite* end is evicted to make room, so the buffer behaves as a sliding
//! window over the most recent items.
//!
//! The contents can be read without copying as at most two contiguous
//! segments of the backing storage, which lets callers hand them straight to
//! a writer or serializer.
//!
//! This crate is inspired by [**bluss/arrayvec**]
//! [**bluss/arrayvec**]: https://github.com/bluss/arrayvec
//!
//! # Feature Flags
//! The **ringdeque** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd
//!   - Provides [`SyncRingBuffer`], a mutex-guarded variant
//!
//! Without `std` the crate is `#![no_std]` and only needs `alloc`.
//!
//! # Head and tail
//!
//! The head is logical index `0`: it is where `push_head` writes and
//! `pop_head` reads. The tail is logical index `len() - 1`. A full buffer
//! evicts the tail on `push_head` and the head on `push_tail`.
//!
//! # Examples
//! ```
//! use ringdeque::RingBuffer;
//!
//! let mut buffer = RingBuffer::new(3).unwrap();
//!
//! buffer.push_tail(1);
//! buffer.push_tail(2);
//! buffer.push_tail(3);
//! buffer.push_tail(4);
//!
//! assert_eq!(buffer.to_array_head_first(), vec![2, 3, 4]);
//! assert_eq!(buffer.pop_head(), Ok(2));
//! ```
//!
//! # Segments
//! ```
//! use ringdeque::RingBuffer;
//!
//! let mut buffer = RingBuffer::new(4).unwrap();
//!
//! buffer.extend(0..4);
//! buffer.push_tail(4);
//!
//! assert_eq!(buffer.to_segments(), (&[1, 2, 3][..], &[4][..]));
//! ```
//!
//! # Errors
//! ```
//! use ringdeque::{Error, RingBuffer};
//!
//! let mut buffer: RingBuffer<u8> = RingBuffer::new(2).unwrap();
//!
//! assert_eq!(buffer.pop_tail(), Err(Error::EmptyBuffer));
//! assert!(RingBuffer::<u8>::new(0).is_err());
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]

extern crate alloc;

pub use odds::IndexRange as RangeArgument;

pub mod error;
mod ringbuffer;
#[cfg(feature = "std")]
pub mod sync;
mod utils;

pub use error::{Error, OutOfRange, Result};
pub use ringbuffer::{IntoIter, Iter, IterMut, RingBuffer};
#[cfg(feature = "std")]
pub use sync::SyncRingBuffer;
