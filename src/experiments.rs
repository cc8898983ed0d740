//! A prototype of the ring without raw pointers, built on fractional
//! ownership.
//!
//! Every node is owned by exactly two `StaticRc` halves: one held by its
//! predecessor's `next` slot and one by its successor's `prev` slot. The
//! closing tail→head edge of the ring is held by the `Ring` container
//! itself (its `edge` pair plays the role of `tail.next` and
//! `head.prev`), so the cycle never owns itself and no node is ever
//! reachable through an owning loop. `GhostToken` stands in for the
//! borrow of the whole ring.
//!
//! Kept as an experiment next to the pointer-based `List`; it is not part
//! of the public surface.
#![allow(dead_code)]

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;
use std::ops::Deref;

pub struct Ring<'id, T> {
    /// `edge[HEAD]` owns half of the first node, `edge[TAIL]` half of
    /// the last one; both are `None` iff the ring is empty.
    edge: [Option<NodePtr<'id, T>>; 2],
    len: usize,
}

struct Node<'id, T> {
    links: [Option<NodePtr<'id, T>>; 2],
    element: T,
}

type NodePtr<'id, T> = Half<GhostCell<'id, Node<'id, T>>>;

type Half<T> = StaticRc<T, 1, 2>;
type Full<T> = StaticRc<T, 2, 2>;

const NEXT: usize = 0;
const PREV: usize = 1;

impl<'id, T> Node<'id, T> {
    fn new(element: T) -> Self {
        let links = [None, None];
        Self { links, element }
    }
}

impl<'id, T> Default for Ring<'id, T> {
    fn default() -> Self {
        let edge = [None, None];
        Self { edge, len: 0 }
    }
}

impl<'id, T> Ring<'id, T> {
    const HEAD: usize = 0;
    const TAIL: usize = 1;

    pub fn new() -> Self {
        Default::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append an element at the tail of the ring.
    ///
    /// The old tail hands the closing half it was owned by over to the
    /// new node's `prev` slot; the two halves of the new node go to the
    /// old tail's `next` slot and to the closing edge.
    pub fn push_back(&mut self, element: T, token: &mut GhostToken<'id>) {
        let (one, two) = Full::split(Full::new(GhostCell::new(Node::new(element))));
        match self.edge[Self::TAIL].take() {
            Some(tail) => {
                tail.deref().borrow_mut(token).links[NEXT] = Some(one);
                two.deref().borrow_mut(token).links[PREV] = Some(tail);
            }
            None => self.edge[Self::HEAD] = Some(one),
        }
        self.edge[Self::TAIL] = Some(two);
        self.len += 1;
    }

    /// Remove the tail element and return it, or `None` if the ring is
    /// empty.
    ///
    /// Rejoining the two halves of the removed node proves it had no
    /// other owner, and yields back the element by value.
    pub fn pop_back(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        let two = self.edge[Self::TAIL].take()?;
        let one = match two.deref().borrow_mut(token).links[PREV].take() {
            Some(tail) => {
                let one = tail.deref().borrow_mut(token).links[NEXT]
                    .take()
                    .unwrap();
                self.edge[Self::TAIL] = Some(tail);
                one
            }
            None => self.edge[Self::HEAD].take().unwrap(),
        };
        self.len -= 1;
        Some(Full::into_box(Full::join(one, two)).into_inner().element)
    }

    /// Remove every element. The halves of each node must be rejoined
    /// one by one before the ring goes out of scope.
    pub fn clear(&mut self, token: &mut GhostToken<'id>) {
        while self.pop_back(token).is_some() {}
    }

    /// Collect shared references to the elements in ring order.
    pub fn values<'a>(&'a self, token: &'a GhostToken<'id>) -> Vec<&'a T> {
        let mut out = Vec::with_capacity(self.len);
        let mut cursor = self.edge[Self::HEAD].as_ref();
        while let Some(node) = cursor {
            let node = node.deref().borrow(token);
            out.push(&node.element);
            cursor = node.links[NEXT].as_ref();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::experiments::Ring;
    use ghost_cell::GhostToken;

    #[test]
    fn ring_push_pop() {
        GhostToken::new(|mut token| {
            let mut ring = Ring::new();
            assert!(ring.is_empty());
            assert_eq!(ring.pop_back(&mut token), None);

            ring.push_back(1, &mut token);
            ring.push_back(2, &mut token);
            ring.push_back(3, &mut token);
            assert_eq!(ring.len(), 3);
            assert_eq!(ring.values(&token), vec![&1, &2, &3]);

            assert_eq!(ring.pop_back(&mut token), Some(3));
            assert_eq!(ring.pop_back(&mut token), Some(2));
            assert_eq!(ring.pop_back(&mut token), Some(1));
            assert!(ring.is_empty());
        })
    }

    #[test]
    fn ring_clear_drains_every_node() {
        GhostToken::new(|mut token| {
            let mut ring = Ring::new();
            for i in 0..8 {
                ring.push_back(i, &mut token);
            }
            assert_eq!(ring.len(), 8);
            ring.clear(&mut token);
            assert!(ring.is_empty());
            assert!(ring.values(&token).is_empty());
        })
    }
}
