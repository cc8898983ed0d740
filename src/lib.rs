//! This crate provides a generic, value-semantic circular doubly-linked
//! list with owned nodes, linked into a single closed ring.
//!
//! The [`List`] appends and removes at the tail in constant time and
//! reaches the tail through the head's back-link, so no separate tail
//! pointer is ever stored. In compromise, accessing or inserting at an
//! arbitrary position takes *O*(*n*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use ring_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from([1, 2, 3]);
//!
//! list.push_back(4);        // becomes [1, 2, 3, 4]
//! list.insert(2, 10);       // becomes [1, 2, 10, 3, 4]
//! assert_eq!(list.pop_back(), Some(4));
//!
//! assert_eq!(Vec::from_iter(&list), vec![&1, &2, &10, &3]);
//! assert_eq!(list[2], 10);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//! ╔══════════╗
//! ║   head   ║ ─────┐
//! ╟──────────╢      ↓
//! ║   len    ║ ╔═══════════╗ ──next──→ ╔═══════════╗ ──next──→ ╔═══════════╗
//! ╚══════════╝ ║   Node 0  ║ ←──prev── ║   Node 1  ║ ←──prev── ║   Node 2  ║
//!     List     ╚═══════════╝           ╚═══════════╝           ╚═══════════╝
//!                 ↑    │                                           ↑    │
//!                 │    └───────────────────prev────────────────────┘    │
//!                 └────────────────────────next─────────────────────────┘
//! ```
//! The `List` contains:
//! - `head`, owning the first node of the ring (absent in an empty list);
//! - a length field `len` counting the nodes of the ring.
//!
//! Each node of the list `List<T>` is allocated on the heap and contains:
//! - the `next` pointer that points to the next element (or back to the
//!   first element if it is the last one);
//! - the `prev` pointer that points to the previous element (or to the
//!   last element if it is the first one);
//! - the actual payload `T` that depends on the element type of the list.
//!
//! There is no sentinel node: a list of *n* elements is a closed ring of
//! exactly *n* nodes, and a one-element list is a node linked to itself
//! in both directions. The logical last element (the tail) is always
//! `head.prev`.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] iterator, a double-ended,
//! fused, exact-size iterator that visits the values in ring order
//! starting at the head. It stops after exactly `len` elements **by
//! count** — a closed ring has no end node to run into — so it iterates
//! the list like an array, never wrapping around. Every call to
//! [`List::iter`] restarts an independent traversal.
//!
//! ## Examples
//!
//! ```
//! use ring_list::List;
//! use std::iter::FromIterator;
//!
//! let list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // fused, does not wrap around
//!
//! // The `prev` links drive the same traversal backwards.
//! assert_eq!(Vec::from_iter(list.iter().rev()), vec![&3, &2, &1]);
//! ```
//!
//! Mutating the list while a traversal is in progress is rejected at
//! compile time, because the iterator borrows the list.
//!
//! # Value Semantics
//!
//! Cloning a list deep-copies it: the clone is an independent ring of
//! fresh nodes. Moving a list transfers ownership of the whole ring in
//! *O*(1) without touching any node; an emptied-out source (for example
//! via [`std::mem::take`]) is a perfectly usable empty list.
//!
//! ```
//! use ring_list::List;
//! use std::iter::FromIterator;
//! use std::mem;
//!
//! let mut a = List::from([1, 2, 3]);
//!
//! let mut b = a.clone(); // deep copy
//! b.push_back(9);
//! assert_eq!(Vec::from_iter(&a), vec![&1, &2, &3]); // a is untouched
//!
//! let c = mem::take(&mut a); // move; a is left empty
//! assert_eq!(c.len(), 3);
//! a.push_back(7);
//! assert_eq!(Vec::from_iter(&a), vec![&7]);
//! ```
//!
//! # Indexed Access and Errors
//!
//! [`List::get`] and [`List::get_mut`] check the index against the
//! length before walking the ring and report
//! [`Error::IndexOutOfBounds`] for an index at or past the end — an
//! out-of-range index never wraps around to an earlier element. The
//! `list[index]` forms panic with the same message.
//!
//! Two boundary conditions are deliberately *not* errors: `pop_back` on
//! an empty list returns `None`, and `insert` with a position past the
//! end is a silent no-op.
//!
//! ```
//! use ring_list::{Error, List};
//!
//! let list = List::from([5, 6, 7]);
//! assert_eq!(list[2], 7);
//! assert_eq!(
//!     list.get(3),
//!     Err(Error::IndexOutOfBounds { index: 3, len: 3 })
//! );
//! ```

#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use list::List;

pub mod error;
pub mod list;

mod experiments;
