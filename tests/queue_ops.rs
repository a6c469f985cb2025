//! End-to-end scenarios through the public API.

use linked_queue::{List, Queue};

fn drain(q: &mut Queue) -> Vec<String> {
    std::iter::from_fn(|| q.pop_front()).collect()
}

#[test]
fn build_sort_drain() {
    let mut q = Queue::new();
    for word in ["delta", "alpha", "charlie", "bravo"] {
        q.insert_tail(word).expect("insert");
    }
    q.sort();
    assert_eq!(drain(&mut q), ["alpha", "bravo", "charlie", "delta"]);
    assert_eq!(q.len(), 0);
}

#[test]
fn interleaved_ends_keep_fifo_shape() {
    let mut q = Queue::new();
    q.insert_tail("middle").expect("insert");
    q.insert_head("front").expect("insert");
    q.insert_tail("back").expect("insert");
    assert_eq!(q.iter().collect::<Vec<_>>(), ["front", "middle", "back"]);

    q.reverse();
    assert_eq!(q.iter().collect::<Vec<_>>(), ["back", "middle", "front"]);
    q.reverse();
    assert_eq!(q.iter().collect::<Vec<_>>(), ["front", "middle", "back"]);
}

#[test]
fn bounded_extraction_truncates() {
    let mut q = Queue::new();
    q.insert_tail("abcdef").expect("insert");

    let mut buf = [0u8; 4];
    assert!(q.remove_head(Some(&mut buf)));
    assert_eq!(&buf, b"abc\0");
    assert!(q.is_empty());

    // Emptying through remove_head leaves the queue reusable at both ends.
    q.insert_tail("x").expect("insert");
    q.insert_head("w").expect("insert");
    assert_eq!(drain(&mut q), ["w", "x"]);
}

#[test]
fn empty_queue_operations_are_harmless() {
    let mut q = Queue::new();
    assert!(!q.remove_head(None));
    assert_eq!(q.pop_front(), None);
    assert_eq!(q.len(), 0);
    q.reverse();
    q.sort();
    assert!(q.is_empty());
}

#[test]
fn sort_then_mutate_round_trips() {
    let mut q = Queue::new();
    for word in ["b", "a", "b", "a"] {
        q.insert_head(word).expect("insert");
    }
    q.sort();
    assert_eq!(q.iter().collect::<Vec<_>>(), ["a", "a", "b", "b"]);
    assert!(q.remove_head(None));
    q.insert_tail("c").expect("insert");
    assert_eq!(drain(&mut q), ["a", "b", "b", "c"]);
}

#[test]
fn integer_list_walkthrough() {
    let mut list = List::new();
    for v in [10, 20, 30, 40] {
        list.add(v);
    }
    assert!(list.find(30));
    assert!(list.remove(20));
    assert_eq!(list.iter().collect::<Vec<_>>(), [10, 30, 40]);

    list.swap_pairs();
    assert_eq!(list.iter().collect::<Vec<_>>(), [30, 10, 40]);

    list.reverse();
    assert_eq!(list.iter().collect::<Vec<_>>(), [40, 10, 30]);
}
