//! Singly-linked node chains and their traversals.
//!
//! A chain is a sequence of nodes, each holding a value and an optional
//! next node, terminating at the first node with no next reference. The
//! chain is acyclic by construction: each node owns its successor.

use crate::io::Notify;

/// One node of a singly-linked chain.
///
/// `Clone`, `PartialEq`, and `Debug` are implemented by walking the chain
/// with a loop; the derived impls would recurse one stack frame per node.
pub struct Node<T> {
    pub value: T,
    pub next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    /// Create a node with no successor.
    pub fn new(value: T) -> Node<T> {
        return Node { value, next: None };
    }

    /// Build a chain from a sequence of values, in order. Returns `None`
    /// for an empty sequence.
    pub fn chain<I>(values: I) -> Option<Box<Node<T>>>
    where
        I: IntoIterator<Item = T>,
    {
        let mut head = None;
        let collected: Vec<T> = values.into_iter().collect();
        for value in collected.into_iter().rev() {
            head = Some(Box::new(Node { value, next: head }));
        }
        return head;
    }

    /// The number of nodes in the chain, this one included.
    pub fn len(&self) -> usize {
        return self.iter().count();
    }

    /// Always false: a chain contains at least this node.
    pub fn is_empty(&self) -> bool {
        return false;
    }

    /// Iterate over the chain's values from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        return Iter { node: Some(self) };
    }

    /// Collect the chain's values from head to tail.
    pub fn values(&self) -> Vec<&T> {
        return self.iter().collect();
    }

    /// Collect the chain's values from tail to head: the exact reverse of
    /// [`Node::values`]. Walks the chain forward and reverses, so chain
    /// length is not limited by stack depth.
    pub fn values_rev(&self) -> Vec<&T> {
        let mut values = self.values();
        values.reverse();
        return values;
    }
}

impl<T: std::fmt::Display> Node<T> {
    /// Surface each value through `out`, head to tail.
    pub fn emit<N: Notify>(&self, out: &mut N) {
        for value in self.iter() {
            out.notify(&value.to_string());
        }
    }

    /// Surface each value through `out`, tail to head.
    pub fn emit_rev<N: Notify>(&self, out: &mut N) {
        for value in self.values_rev() {
            out.notify(&value.to_string());
        }
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Node<T> {
        let mut head = Node::new(self.value.clone());
        head.next = Node::chain(self.iter().skip(1).cloned());
        return head;
    }
}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Node<T>) -> bool {
        return self.iter().eq(other.iter());
    }
}

impl<T: Eq> Eq for Node<T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return f.debug_list().entries(self.iter()).finish();
    }
}

// Dropping node-by-node recursively would need stack depth proportional to
// chain length; unlink iteratively instead.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

/// A forward iterator over a chain's values.
pub struct Iter<'a, T> {
    node: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.node?;
        self.node = node.next.as_deref();
        return Some(&node.value);
    }
}
