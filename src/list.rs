//! Minimal integer chain driven by an owning cursor.
//!
//! Variables:
//!   head : Option<Box<IntNode>>  — owning pointer to first node, None if empty
//!   len  : usize                 — number of nodes
//!
//! Equations:
//!   add(v):        walk cursor to the empty slot, fill it          O(n)
//!   find(v):       linear scan                                     O(n)
//!   remove(v):     unlink first match through its owning slot      O(n)
//!   swap_pairs():  rewrite each pair slot as (second, first)       O(n)
//!   shuffle(rng):  Fisher–Yates by random detach + push-front      O(n²)
//!   reverse():     iterative or tail-recursive link inversion      O(n)
//!
//! Every mutation is phrased as "replace what this slot owns": a cursor is
//! a `&mut Option<Box<IntNode>>`, and relinking rewrites the slot rather
//! than juggling node addresses.

use log::trace;
use rand::Rng;

struct IntNode {
    value: i32,
    next: Option<Box<IntNode>>,
}

/// Head-only owned chain of `i32` values.
#[derive(Default)]
pub struct List {
    head: Option<Box<IntNode>>,
    len: usize,
}

impl List {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Append at the tail by walking the cursor to the empty slot.
    pub fn add(&mut self, value: i32) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(IntNode { value, next: None }));
        self.len += 1;
    }

    /// True if `value` occurs in the chain.
    pub fn find(&self, value: i32) -> bool {
        self.iter().any(|v| v == value)
    }

    /// Unlink the first node holding `value`. Returns false if absent.
    pub fn remove(&mut self, value: i32) -> bool {
        let mut cursor = &mut self.head;
        loop {
            match cursor.take() {
                None => return false,
                Some(mut node) => {
                    if node.value == value {
                        *cursor = node.next.take();
                        self.len -= 1;
                        trace!("remove: len now {}", self.len);
                        return true;
                    }
                    cursor = &mut cursor.insert(node).next;
                }
            }
        }
    }

    /// Swap each adjacent pair; a trailing unpaired node stays put.
    pub fn swap_pairs(&mut self) {
        let mut cursor = &mut self.head;
        loop {
            let Some(mut first) = cursor.take() else {
                break;
            };
            let Some(mut second) = first.next.take() else {
                *cursor = Some(first);
                break;
            };
            first.next = second.next.take();
            second.next = Some(first);
            let second = cursor.insert(second);
            match second.next.as_mut() {
                Some(first) => cursor = &mut first.next,
                None => break,
            }
        }
    }

    /// Fisher–Yates over the chain: detach a uniformly random remaining node
    /// and push it onto the rebuilt chain until the old chain is exhausted.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut remaining = self.len;
        let mut old = self.head.take();
        let mut rebuilt: Option<Box<IntNode>> = None;
        while remaining > 0 {
            let idx = rng.gen_range(0..remaining);
            let mut cursor = &mut old;
            for _ in 0..idx {
                if let Some(node) = cursor {
                    cursor = &mut node.next;
                }
            }
            match cursor.take() {
                Some(mut node) => {
                    *cursor = node.next.take();
                    node.next = rebuilt.take();
                    rebuilt = Some(node);
                    remaining -= 1;
                }
                None => break,
            }
        }
        self.head = rebuilt;
    }

    /// Iterative link inversion.
    pub fn reverse(&mut self) {
        let mut reversed = None;
        let mut rest = self.head.take();
        while let Some(mut node) = rest {
            rest = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }
        self.head = reversed;
    }

    /// Tail-recursive link inversion; same result as [`List::reverse`].
    pub fn reverse_recursive(&mut self) {
        let chain = self.head.take();
        self.head = Self::rev_onto(chain, None);
    }

    fn rev_onto(
        chain: Option<Box<IntNode>>,
        acc: Option<Box<IntNode>>,
    ) -> Option<Box<IntNode>> {
        match chain {
            None => acc,
            Some(mut node) => {
                let rest = node.next.take();
                node.next = acc;
                Self::rev_onto(rest, Some(node))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Values in chain order.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        let mut cur = self.head.as_deref();
        std::iter::from_fn(move || {
            let node = cur?;
            cur = node.next.as_deref();
            Some(node.value)
        })
    }
}
