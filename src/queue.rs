//! Singly-linked queue of owned string payloads.
//!
//! Variables:
//!   head : Option<Box<Node>>  — owning pointer to first node, None if empty
//!   tail : *mut Node          — non-owning pointer to last node, null if empty
//!   len  : usize              — number of live nodes
//!
//! Equations:
//!   insert_head(s): node.next = head,  head = node,  len' = len+1     O(1)
//!   insert_tail(s): tail.next = node,  tail = node,  len' = len+1     O(1)
//!   remove_head():  head = head.next,  len' = len-1                   O(1)
//!   reverse():      iterative link inversion, tail = old head         O(n)
//!   sort():         stable merge sort over the chain                  O(n log n)
//!
//! Invariant: len == 0  ⇔  head == None  ⇔  tail is null. Otherwise the
//! (len-1)-th successor of head is the node tail points at, and its next
//! is None. Every mutating operation re-establishes this before returning;
//! in particular, removing the last node resets tail to null.

use std::fmt;
use std::ptr;

use log::{debug, trace};

use crate::error::QueueError;
use crate::sort;

pub(crate) struct Node {
    pub(crate) value: String,
    pub(crate) next: Option<Box<Node>>,
}

impl Node {
    /// Heap-allocate a node holding an independent copy of `s`.
    ///
    /// The copy is the fallible allocation: reservation failure is reported
    /// before any queue field has been touched.
    fn boxed(s: &str) -> Result<Box<Node>, QueueError> {
        let mut value = String::new();
        value.try_reserve_exact(s.len())?;
        value.push_str(s);
        Ok(Box::new(Node { value, next: None }))
    }
}

/// FIFO chain of owned string payloads with O(1) insertion at both ends.
///
/// `tail` aliases the last node of the chain owned by `head`; it is only
/// dereferenced while the chain is at rest, never during restructuring.
pub struct Queue {
    head: Option<Box<Node>>,
    tail: *mut Node,
    len: usize,
}

impl Queue {
    /// Empty queue. Allocates nothing until the first insert.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: ptr::null_mut(),
            len: 0,
        }
    }

    /// Prepend an independent copy of `s`. O(1).
    pub fn insert_head(&mut self, s: &str) -> Result<(), QueueError> {
        let mut node = Node::boxed(s)?;
        node.next = self.head.take();
        if node.next.is_none() {
            self.tail = &mut *node;
        }
        self.head = Some(node);
        self.len += 1;
        trace!("insert_head: len now {}", self.len);
        Ok(())
    }

    /// Append an independent copy of `s`. O(1) via the tail pointer.
    pub fn insert_tail(&mut self, s: &str) -> Result<(), QueueError> {
        let mut node = Node::boxed(s)?;
        let raw: *mut Node = &mut *node;
        if self.tail.is_null() {
            self.head = Some(node);
        } else {
            // SAFETY: a non-null tail points at the last node of the chain
            // owned by head, and no other reference to that node is live.
            unsafe { (*self.tail).next = Some(node) };
        }
        self.tail = raw;
        self.len += 1;
        trace!("insert_tail: len now {}", self.len);
        Ok(())
    }

    /// Detach the head node and return its payload. O(1).
    pub fn pop_front(&mut self) -> Option<String> {
        let mut node = self.head.take()?;
        self.head = node.next.take();
        self.len -= 1;
        if self.head.is_none() {
            self.tail = ptr::null_mut();
        }
        trace!("pop_front: len now {}", self.len);
        Some(node.value)
    }

    /// Detach the head node, optionally copying its payload into `out`.
    ///
    /// Returns false on an empty queue, with no mutation. When `out` is
    /// provided and non-empty, up to `out.len() - 1` payload bytes are
    /// copied and a NUL terminator is always written inside the buffer:
    /// the full value when it fits, a truncated prefix otherwise.
    pub fn remove_head(&mut self, out: Option<&mut [u8]>) -> bool {
        let value = match self.pop_front() {
            Some(value) => value,
            None => return false,
        };
        if let Some(buf) = out {
            if !buf.is_empty() {
                let n = value.len().min(buf.len() - 1);
                buf[..n].copy_from_slice(&value.as_bytes()[..n]);
                buf[n] = 0;
            }
        }
        true
    }

    /// Maintained node count. O(1), no traversal.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Payloads in chain order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        let mut cur = self.head.as_deref();
        std::iter::from_fn(move || {
            let node = cur?;
            cur = node.next.as_deref();
            Some(node.value.as_str())
        })
    }

    /// Reverse the chain in place by iterative link inversion.
    ///
    /// Only `next` links move; no node is allocated or freed. The original
    /// head becomes the new tail. O(n) time, O(1) extra space.
    pub fn reverse(&mut self) {
        if self.head.is_none() {
            return;
        }
        debug!("reverse: {} nodes", self.len);
        let mut rest = self.head.take();
        if let Some(first) = rest.as_deref_mut() {
            self.tail = first;
        }
        let mut reversed: Option<Box<Node>> = None;
        while let Some(mut node) = rest {
            rest = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }
        self.head = reversed;
    }

    /// Stable ascending sort by lexicographic payload comparison.
    ///
    /// Top-down merge sort relinking the existing nodes; equal payloads keep
    /// their relative order. The tail is recomputed by walking the reordered
    /// chain. O(n log n) time, O(log n) recursion depth.
    pub fn sort(&mut self) {
        if self.len < 2 {
            return;
        }
        debug!("sort: {} nodes", self.len);
        self.head = sort::merge_sort(self.head.take());
        self.relink_tail();
    }

    /// Walk to the last node and point `tail` at it.
    fn relink_tail(&mut self) {
        let mut tail: *mut Node = ptr::null_mut();
        let mut cur = &mut self.head;
        while let Some(node) = cur {
            tail = &mut **node;
            cur = &mut node.next;
        }
        self.tail = tail;
    }

    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        match self.head.as_deref() {
            None => {
                assert_eq!(self.len, 0);
                assert!(self.tail.is_null());
            }
            Some(first) => {
                assert!(self.len > 0);
                let mut node = first;
                for _ in 1..self.len {
                    node = node.next.as_deref().expect("chain shorter than len");
                }
                assert!(node.next.is_none(), "chain longer than len");
                assert!(ptr::eq(node, self.tail));
            }
        }
    }
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Drop for Queue {
    fn drop(&mut self) {
        // Iterative teardown; a derived drop would recurse per node.
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}
