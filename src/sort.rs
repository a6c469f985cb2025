//! Merge sort over an owned node chain.
//!
//! Variables:
//!   chain : Option<Box<Node>>  — owning pointer to the first node
//!
//! Equations:
//!   split(chain): slow/fast walk; front keeps ⌈n/2⌉ nodes, back ⌊n/2⌋
//!   merge(f, b):  ties take the front node, preserving input order
//!   merge_sort:   split, recurse, merge        O(n log n), O(log n) stack
//!
//! Merging relinks the existing boxes; no node is allocated and no payload
//! is copied anywhere in this module.

use crate::queue::Node;

pub(crate) type Chain = Option<Box<Node>>;

pub(crate) fn merge_sort(chain: Chain) -> Chain {
    match chain {
        Some(node) if node.next.is_some() => {
            let (front, back) = split(node);
            merge(merge_sort(front), merge_sort(back))
        }
        short => short,
    }
}

/// Cut the chain in two. The slow/fast walk leaves `slow` on the node
/// preceding the midpoint, so the front half keeps one extra node when the
/// length is odd. Shared references locate the cut, a mutable cursor makes it.
fn split(mut front: Box<Node>) -> (Chain, Chain) {
    let mut cut = 0usize;
    let mut slow: &Node = &front;
    let mut fast: Option<&Node> = front.next.as_deref();
    while let Some(step) = fast {
        fast = step.next.as_deref();
        if fast.is_some() {
            if let Some(next) = slow.next.as_deref() {
                slow = next;
                cut += 1;
            }
            fast = fast.and_then(|step| step.next.as_deref());
        }
    }

    let mut slot = &mut front.next;
    for _ in 0..cut {
        match slot {
            Some(node) => slot = &mut node.next,
            None => break,
        }
    }
    let back = slot.take();
    (Some(front), back)
}

/// Stable merge of two sorted chains by relinking.
fn merge(mut front: Chain, mut back: Chain) -> Chain {
    let mut merged: Chain = None;
    let mut cursor = &mut merged;
    loop {
        match (front, back) {
            (None, rest) | (rest, None) => {
                *cursor = rest;
                break;
            }
            (Some(mut f), Some(mut b)) => {
                if f.value <= b.value {
                    front = f.next.take();
                    back = Some(b);
                    cursor = &mut cursor.insert(f).next;
                } else {
                    back = b.next.take();
                    front = Some(f);
                    cursor = &mut cursor.insert(b).next;
                }
            }
        }
    }
    merged
}
