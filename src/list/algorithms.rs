use crate::list::List;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    /// Deep copy: an independent ring of fresh nodes holding the same
    /// values in the same order. The source is visited by counting
    /// exactly `len` steps from its head, never by comparing node
    /// addresses.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// The copy-assignment path: the destination releases all of its own
    /// nodes first, then re-fills from `other`. (`self` and `other`
    /// cannot alias, so there is no self-assignment case to detect.)
    fn clone_from(&mut self, other: &Self) {
        self.clear();
        self.extend(other.iter().cloned());
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

/// Renders the values in ring order, separated by single spaces, or the
/// literal `(empty)` for an empty list.
///
/// # Examples
///
/// ```
/// use ring_list::List;
///
/// let list = List::from([1, 2, 3]);
/// assert_eq!(list.to_string(), "1 2 3");
///
/// let nothing: List<i32> = List::new();
/// assert_eq!(nothing.to_string(), "(empty)");
/// ```
impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("(empty)");
        }
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
        }
        for elt in iter {
            write!(f, " {}", elt)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::iter::FromIterator;

    #[test]
    fn clone_produces_an_independent_ring() {
        let a = List::from([1, 2, 3]);
        let mut b = a.clone();
        assert_eq!(a, b);

        // Mutating the copy must not touch the original.
        b.push_back(9);
        assert_eq!(Vec::from_iter(&a), vec![&1, &2, &3]);
        assert_eq!(Vec::from_iter(&b), vec![&1, &2, &3, &9]);

        if let Ok(x) = b.get_mut(0) {
            *x = 100;
        }
        assert_eq!(a.front(), Some(&1));
    }

    #[test]
    fn clone_from_replaces_the_destination() {
        let source = List::from([1, 2, 3]);
        let mut dest = List::from([7, 8]);
        dest.clone_from(&source);
        assert_eq!(dest, source);
        assert_eq!(Vec::from_iter(&source), vec![&1, &2, &3]);

        // Re-assigning a list its own contents leaves it unchanged.
        let again = dest.clone();
        dest.clone_from(&again);
        assert_eq!(dest.len(), 3);
        assert_eq!(Vec::from_iter(&dest), vec![&1, &2, &3]);
    }

    #[test]
    fn list_comparisons() {
        let a = List::from([1, 2, 3]);
        let b = List::from([1, 2, 3]);
        let c = List::from([1, 2, 4]);
        let shorter = List::from([1, 2]);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, shorter);
        assert!(a < c);
        assert!(shorter < a);
    }

    #[test]
    fn equal_lists_hash_alike() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        fn hash_of<T: Hash>(value: &T) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }

        let a = List::from([1, 2, 3]);
        let b = a.clone();
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn display_renders_ring_order() {
        let mut list = List::from(["hello", "world"]);
        assert_eq!(list.to_string(), "hello world");

        list.clear();
        assert_eq!(list.to_string(), "(empty)");
    }
}
