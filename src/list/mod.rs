use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::ptr::NonNull;

use crate::error::{Error, Result};
use crate::{IntoIter, Iter};

pub mod iterator;

mod algorithms;

/// The `List` is a circular doubly-linked list with owned nodes. Elements
/// are appended in constant time; accessing or inserting at an arbitrary
/// position takes *O*(*n*) time.
///
/// The `List` contains:
/// - `head`, owning the first node of the ring, or nothing when the list
///   is empty;
/// - a length field `len` counting the nodes of the ring.
///
/// There is no sentinel node and no separate tail pointer: the ring is
/// made of exactly `len` element nodes, and the logical last element is
/// always `head.prev`.
///
/// # Invariants
///
/// Before and after every public operation:
/// - `len == 0` if and only if `head` is absent;
/// - following `next` from `head` exactly `len` times returns to `head`;
/// - for every node `n` of the ring, `n.next.prev == n`;
/// - every node belongs to exactly one `List`.
pub struct List<T> {
    head: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

/// A node of the ring. Nodes are created and destroyed only by the
/// owning `List`; the type never escapes the crate.
pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) element: T,
}

// private methods
impl<T> List<T> {
    pub(crate) fn head_node(&self) -> Option<NonNull<Node<T>>> {
        self.head
    }

    pub(crate) fn tail_node(&self) -> Option<NonNull<Node<T>>> {
        // SAFETY: `head.prev` is always a valid node of the same ring
        // (the tail, or `head` itself in a one-element ring).
        self.head.map(|head| unsafe { head.as_ref().prev })
    }

    /// Locate the node at position `at` by walking `next` links from
    /// `head`.
    ///
    /// It is unsafe because it does not check bounds: the caller must
    /// guarantee `at < self.len`, otherwise the walk wraps around the
    /// ring and the returned node is not the one the position names.
    unsafe fn node_at(&self, at: usize) -> NonNull<Node<T>> {
        debug_assert!(at < self.len, "cannot seek to a nonexistent node");
        let mut current = self.head.unwrap();
        for _ in 0..at {
            current = current.as_ref().next;
        }
        current
    }

    /// Splice a detached `node` into the ring between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next`
    /// belong to the list, or whether they are adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    ///
    /// If `prev` and `next` do not belong to the list, or they are not
    /// adjacent nodes, this function call will make the list ill-formed.
    unsafe fn attach_node(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        node: NonNull<Node<T>>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, node);
        connect(node, next);
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, node);
            assert_adjacent(node, next);
        }
    }

    /// Unlink `node` from the ring and reclaim ownership of it.
    ///
    /// It is unsafe because it does not check whether `node` belongs to
    /// the list. The caller must also guarantee that `node` is not the
    /// only node of the ring: a one-element ring is dissolved by taking
    /// `head` directly, never by re-linking the node's neighbours.
    unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        debug_assert!(self.len > 1, "cannot unlink the only node of a ring");
        self.len -= 1;
        let node = Box::from_raw(node.as_ptr());
        connect(node.prev, node.next);
        node
    }

    /// Take the only node of the ring, leaving the list empty.
    ///
    /// It is unsafe because the caller must guarantee `self.len == 1`.
    unsafe fn take_last_node(&mut self) -> Box<Node<T>> {
        debug_assert_eq!(self.len, 1, "the ring does not have exactly one node");
        let head = self.head.take().unwrap();
        self.len = 0;
        Box::from_raw(head.as_ptr())
    }

    /// Remove the first element and return it, re-designating `head.next`
    /// as the new head. Only the owning iterator consumes the list from
    /// the front; the public mutation surface works at the tail.
    pub(crate) fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: the list is non-empty; a one-element ring is dissolved
        // by taking `head`, otherwise `head` has distinct neighbours and
        // can be unlinked.
        unsafe {
            if self.len == 1 {
                Some(self.take_last_node().element)
            } else {
                self.head = Some(head.as_ref().next);
                Some(self.detach_node(head).element)
            }
        }
    }
}

impl<T> List<T> {
    /// Create an empty `List`.
    ///
    /// # Examples
    /// ```
    /// use ring_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            head: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_back("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of elements in the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(1);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_back(2);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`, releasing every node. The
    /// list is emptied from the tail, one node at a time.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::from([1, 2]);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_back().is_some() {}
    }

    /// Provides a reference to the first element, or `None` if the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_back(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        // SAFETY: `head` is a valid node whenever the list is non-empty.
        self.head.map(|head| unsafe { &head.as_ref().element })
    }

    /// Provides a reference to the last element, or `None` if the list is
    /// empty.
    ///
    /// The last element is reached through `head.prev` in constant time;
    /// no separate tail pointer is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        // SAFETY: `head.prev` is a valid node whenever the list is
        // non-empty.
        self.tail_node().map(|tail| unsafe { &tail.as_ref().element })
    }

    /// Appends an element to the back of the list.
    ///
    /// The new node becomes the tail: it is spliced in immediately before
    /// `head`. The first element pushed into an empty list closes the
    /// ring on itself.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Some(&3));
    /// ```
    pub fn push_back(&mut self, elt: T) {
        let node = Node::new_detached(elt);
        match self.head {
            // SAFETY: `head.prev..head` is the closing edge of the ring;
            // the new node is spliced into it.
            Some(head) => unsafe {
                let tail = head.as_ref().prev;
                self.attach_node(tail, head, node);
            },
            // SAFETY: the node was just allocated; linking it to itself
            // makes it a well-formed ring of one.
            None => unsafe {
                connect(node, node);
                self.head = Some(node);
                self.len = 1;
            },
        }
    }

    /// Removes the last element (the tail, `head.prev`) and returns it,
    /// or `None` if the list is empty.
    ///
    /// Calling this on an empty list is not an error; it simply does
    /// nothing and reports `None`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), None);
    ///
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Some(3));
    /// assert_eq!(list.pop_back(), Some(1));
    /// assert_eq!(list.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: the list is non-empty; a one-element ring is dissolved
        // by taking `head`, otherwise the tail has distinct neighbours
        // and can be unlinked.
        unsafe {
            if self.len == 1 {
                Some(self.take_last_node().element)
            } else {
                let tail = head.as_ref().prev;
                Some(self.detach_node(tail).element)
            }
        }
    }

    /// Adds an element at position `at` in the list, shifting the
    /// elements from that position towards the tail.
    ///
    /// `insert(len, ..)` behaves exactly like [`push_back`]. A position
    /// past the end (`at > len`) is accepted and ignored: the call is a
    /// silent no-op, not an error. Inserting at position `0` makes the
    /// new node the head of the ring.
    ///
    /// [`push_back`]: List::push_back
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(`at`) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// list.push_back(4);
    /// list.insert(2, 10);
    /// assert_eq!(Vec::from_iter(&list), vec![&1, &2, &10, &3, &4]);
    ///
    /// assert_eq!(list.pop_back(), Some(4));
    /// assert_eq!(Vec::from_iter(&list), vec![&1, &2, &10, &3]);
    ///
    /// // Positions past the end are accepted and ignored.
    /// list.insert(9, 100);
    /// assert_eq!(list.len(), 4);
    /// ```
    pub fn insert(&mut self, at: usize, elt: T) {
        if at > self.len {
            return;
        }
        if at == self.len {
            return self.push_back(elt);
        }
        // SAFETY: `at < len`, so the walk stays inside the ring and the
        // node found has valid neighbours to splice between.
        unsafe {
            let current = self.node_at(at);
            let node = Node::new_detached(elt);
            self.attach_node(current.as_ref().prev, current, node);
            if at == 0 {
                self.head = Some(node);
            }
        }
    }

    /// Provides a reference to the element at the given position in ring
    /// order, or [`Error::IndexOutOfBounds`] when `index >= len`.
    ///
    /// The bounds check happens before any traversal: an out-of-range
    /// index never walks the ring and never wraps around to an earlier
    /// element.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(`index`) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::{Error, List};
    ///
    /// let list = List::from([5, 6, 7]);
    /// assert_eq!(list.get(2), Ok(&7));
    /// assert_eq!(
    ///     list.get(3),
    ///     Err(Error::IndexOutOfBounds { index: 3, len: 3 })
    /// );
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        if index >= self.len {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        // SAFETY: `index < len` was checked right above.
        Ok(unsafe { &self.node_at(index).as_ref().element })
    }

    /// Provides a mutable reference to the element at the given position
    /// in ring order, or [`Error::IndexOutOfBounds`] when `index >= len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(`index`) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// if let Ok(x) = list.get_mut(1) {
    ///     *x = 5;
    /// }
    /// assert_eq!(Vec::from_iter(list), vec![1, 5, 3]);
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        if index >= self.len {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        // SAFETY: `index < len` was checked right above.
        Ok(unsafe { &mut self.node_at(index).as_mut().element })
    }

    /// Provides a forward iterator over the values of the ring.
    ///
    /// The traversal starts at `head`, follows `next` links, and ends
    /// after exactly `len` elements. Each call restarts an independent
    /// traversal; any number of them may run side by side.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

impl<T> Index<usize> for List<T> {
    type Output = T;

    /// Bounds-checked indexed access.
    ///
    /// # Panics
    ///
    /// Panics with the [`Error::IndexOutOfBounds`] message if
    /// `index >= len`. Use [`List::get`] for the non-panicking form.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(element) => element,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<usize> for List<T> {
    /// Bounds-checked mutable indexed access.
    ///
    /// # Panics
    ///
    /// Panics with the [`Error::IndexOutOfBounds`] message if
    /// `index >= len`. Use [`List::get_mut`] for the non-panicking form.
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(element) => element,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Allocate a node that is not yet part of any ring.
    ///
    /// Both links are dangling until the caller splices the node in;
    /// they are never read before then.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
            element,
        })))
    }
}

/// Make `next` follow `prev`, writing both link directions.
unsafe fn connect<T>(mut prev: NonNull<Node<T>>, mut next: NonNull<Node<T>>) {
    prev.as_mut().next = next;
    next.as_mut().prev = prev;
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    unsafe {
        assert_eq!(prev.as_ref().next, next);
        assert_eq!(next.as_ref().prev, prev);
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

// Ensure that `List` and its read-only iterators are covariant in their
// type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use std::cell::RefCell;
    use std::iter::FromIterator;
    use std::mem;

    /// Walk the raw links and check the ring shape: `next` from `head`
    /// returns to `head` after exactly `len` steps, and every back-link
    /// is the exact inverse of the forward link it answers.
    fn check_ring<T>(list: &List<T>) {
        match list.head {
            None => assert_eq!(list.len, 0, "an empty ring must have length 0"),
            Some(head) => unsafe {
                assert_ne!(list.len, 0, "a non-empty ring must have nonzero length");
                let mut current = head;
                for _ in 0..list.len {
                    let next = current.as_ref().next;
                    assert_eq!(next.as_ref().prev, current);
                    current = next;
                }
                assert_eq!(current, head, "the ring does not close after `len` steps");
            },
        }
    }

    fn to_vec<T: Clone>(list: &List<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        check_ring(&list);
        list.push_back(1);
        assert!(!list.is_empty());
        check_ring(&list);
        assert_eq!(list.pop_back(), Some(1));
        assert!(list.is_empty());
        check_ring(&list);
    }

    #[test]
    fn list_push_order_and_size() {
        let mut list = List::new();
        for i in 0..10 {
            list.push_back(i);
            assert_eq!(list.len(), i + 1);
            check_ring(&list);
        }
        assert_eq!(to_vec(&list), Vec::from_iter(0..10));
        assert_eq!(list.front(), Some(&0));
        assert_eq!(list.back(), Some(&9));
    }

    #[test]
    fn list_drop_releases_tail_first() {
        struct DropLog<'a>(i32, &'a RefCell<Vec<i32>>);
        impl<'a> Drop for DropLog<'a> {
            fn drop(&mut self) {
                self.1.borrow_mut().push(self.0);
            }
        }
        let dropped = RefCell::new(Vec::new());
        let mut list = List::new();
        list.push_back(DropLog(1, &dropped));
        list.push_back(DropLog(2, &dropped));
        list.push_back(DropLog(3, &dropped));
        drop(list);
        // Destruction is repeated `pop_back`, so the tail goes first.
        assert_eq!(dropped.borrow().as_slice(), &[3, 2, 1]);
    }

    #[test]
    fn list_pop_back_on_empty_is_a_noop() {
        let mut list = List::<i32>::new();
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.len(), 0);

        // Two consecutive pops on a one-element list are safe; the
        // second one finds the list already empty.
        list.push_back(42);
        assert_eq!(list.pop_back(), Some(42));
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.len(), 0);
        check_ring(&list);
    }

    #[test]
    fn list_insert() {
        let mut list = List::from([1, 2, 3]);
        list.push_back(4);
        check_ring(&list);
        assert_eq!(to_vec(&list), vec![1, 2, 3, 4]);

        list.insert(2, 10);
        check_ring(&list);
        assert_eq!(to_vec(&list), vec![1, 2, 10, 3, 4]);

        assert_eq!(list.pop_back(), Some(4));
        check_ring(&list);
        assert_eq!(to_vec(&list), vec![1, 2, 10, 3]);
    }

    #[test]
    fn list_insert_at_the_ends() {
        let mut list = List::from([1, 2, 3]);

        // Inserting at 0 re-designates the head.
        list.insert(0, 0);
        check_ring(&list);
        assert_eq!(list.front(), Some(&0));
        assert_eq!(to_vec(&list), vec![0, 1, 2, 3]);

        // Inserting at `len` appends.
        list.insert(4, 4);
        check_ring(&list);
        assert_eq!(list.back(), Some(&4));
        assert_eq!(to_vec(&list), vec![0, 1, 2, 3, 4]);

        // Inserting past `len` is a silent no-op.
        list.insert(6, 100);
        check_ring(&list);
        assert_eq!(to_vec(&list), vec![0, 1, 2, 3, 4]);

        // Same on an empty list: only position 0 exists.
        let mut empty = List::new();
        empty.insert(1, 9);
        assert!(empty.is_empty());
        empty.insert(0, 9);
        check_ring(&empty);
        assert_eq!(to_vec(&empty), vec![9]);
    }

    #[test]
    fn list_indexed_access() {
        let mut list = List::from([5, 6, 7]);
        assert_eq!(list.get(0), Ok(&5));
        assert_eq!(list.get(2), Ok(&7));
        assert_eq!(list[2], 7);

        assert!(list.get(3).is_err());
        assert!(list.get(30).is_err());

        list[0] = 50;
        if let Ok(x) = list.get_mut(1) {
            *x = 60;
        }
        assert_eq!(to_vec(&list), vec![50, 60, 7]);
        assert!(list.get_mut(3).is_err());
    }

    #[test]
    #[should_panic(expected = "index 3 out of bounds in a ring of length 3")]
    fn list_index_past_the_end_panics() {
        let list = List::from([5, 6, 7]);
        let _ = list[3];
    }

    #[test]
    fn list_move_transfers_ownership() {
        let mut a = List::from([1, 2, 3]);
        let b = mem::take(&mut a);

        assert_eq!(to_vec(&b), vec![1, 2, 3]);
        assert_eq!(a.len(), 0);
        check_ring(&a);
        check_ring(&b);

        // The emptied source remains a perfectly usable list.
        a.push_back(7);
        assert_eq!(to_vec(&a), vec![7]);
        check_ring(&a);
    }

    #[test]
    fn list_clear() {
        let mut list = List::from_iter(0..5);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        check_ring(&list);

        // Clearing an already-empty list is fine.
        list.clear();
        assert!(list.is_empty());

        list.push_back(1);
        assert_eq!(to_vec(&list), vec![1]);
    }

    #[test]
    fn list_ring_stays_closed_under_mixed_mutation() {
        let mut list = List::new();
        for i in 0..6 {
            list.push_back(i);
        }
        list.insert(0, 10);
        check_ring(&list);
        list.insert(3, 11);
        check_ring(&list);
        assert_eq!(list.pop_back(), Some(5));
        check_ring(&list);
        list.insert(list.len(), 12);
        check_ring(&list);
        assert_eq!(to_vec(&list), vec![10, 0, 1, 11, 2, 3, 4, 12]);
    }
}
