#![cfg(test)]

use std::iter;

use super::*;
use crate::collections::alloc::{DefaultPolicy, RawPolicy};
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_fifo_across_growth() {
    let mut queue: Queue<usize> = Queue::with_cap(4);
    queue.extend(1..=4);
    assert_eq!(queue.dequeue(), Some(1));
    assert_eq!(queue.dequeue(), Some(2));

    queue.extend([5, 6]);
    assert_eq!((queue.front, queue.back), (2, 2), "The back should have wrapped around.");
    assert_eq!(queue.cap(), 4);

    queue.enqueue(7);
    assert_eq!(queue.cap(), 8);
    assert_eq!(
        (queue.front, queue.back), (0, 5),
        "Growth should lay the elements out in logical order."
    );

    for expected in 3..=7 {
        assert_eq!(queue.dequeue(), Some(expected), "Growth shouldn't change FIFO order.");
    }
    assert_eq!(queue.dequeue(), None, "A drained Queue should have nothing to dequeue.");

    let mut queue: Queue<usize> = Queue::new();
    assert_eq!(queue.dequeue(), None, "A new Queue should have nothing to dequeue.");
    for i in 0..100 {
        queue.enqueue(i);
        if i % 3 == 0 {
            queue.dequeue();
        }
    }
    assert_eq!(queue.front(), Some(&34));
    assert_eq!(queue.back(), Some(&99));
    assert!(queue.iter().copied().eq(34..100));
}

#[test]
fn test_saturation() {
    let mut queue: Queue<u8, RawPolicy<u8, 5>> = Queue::new();
    queue.extend(0..10);

    assert!(queue.is_saturated());
    assert_eq!(queue.len(), 5);
    assert_eq!(queue.cap(), 5, "Growth should be clamped to the limit.");
    assert!(queue.iter().copied().eq(0..5), "Values past the limit should be dropped.");

    assert_eq!(queue.dequeue(), Some(0));
    queue.enqueue(42);
    assert!(queue.is_saturated());
    assert_eq!(queue.back(), Some(&42));

    let counter = CountedDrop::new();
    let mut queue: Queue<CountedDrop, RawPolicy<u8, 2>> = Queue::new();
    queue.extend(iter::repeat_with(|| counter.clone()).take(3));
    assert_eq!(counter.drops(), 1, "The value enqueued onto a saturated Queue should be dropped.");
}

#[test]
fn test_indexing() {
    let mut queue: Queue<char> = Queue::with_cap(3);
    queue.extend(['a', 'b', 'c']);
    queue.dequeue();
    queue.enqueue('d');

    assert_eq!(queue.at(0), &'b');
    assert_eq!(queue[2], 'd', "Logical indices should wrap onto physical slots.");
    queue[1] = 'z';
    assert_eq!(queue.get(1), Some(&'z'));
    assert_eq!(queue.get(3), None);

    assert_panics!({
        let queue: Queue<char> = "ab".chars().collect();
        queue.at(2);
    }, "Index 2 out of bounds for collection with 2 elements!");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut queue: Queue<CountedDrop> = Queue::with_cap(4);
    queue.extend(iter::repeat_with(|| counter.clone()).take(4));
    drop(queue.dequeue());
    drop(queue.dequeue());
    queue.extend(iter::repeat_with(|| counter.clone()).take(2));

    drop(queue);
    assert_eq!(counter.drops(), 6, "Every element should be dropped exactly once.");

    let counter = CountedDrop::new();
    let mut queue: Queue<CountedDrop, DefaultPolicy> = Queue::new();
    queue.extend(iter::repeat_with(|| counter.clone()).take(5));
    queue.clear();
    assert_eq!(counter.drops(), 5);
    assert_eq!(queue.cap(), 8, "Clearing should keep the capacity.");
}

#[test]
fn test_iterators() {
    let mut queue: Queue<u8> = Queue::with_cap(4);
    queue.extend([9, 9, 1, 2]);
    queue.dequeue();
    queue.dequeue();
    queue.extend([3, 4]);

    assert!(queue.iter().rev().copied().eq([4, 3, 2, 1]), "Reverse iteration should wrap too.");
    assert_eq!(queue.iter().len(), 4);

    let mut iter = queue.clone().into_iter();
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next_back(), Some(3));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next(), None);

    let collected: Queue<u8> = (&queue).into_iter().copied().collect();
    assert_eq!(collected, queue, "Equality should compare logical order, not layout.");
}

#[test]
fn test_copies_are_independent() {
    let mut queue: Queue<String> = ["x", "y"].map(String::from).into_iter().collect();
    let copy = queue.clone();

    queue[0].push('!');
    queue.enqueue("z".into());
    queue.dequeue();

    assert_eq!(copy.len(), 2);
    assert_eq!(copy.front().map(String::as_str), Some("x"));
    assert_ne!(queue, copy);
}

#[test]
fn test_formatting() {
    let mut queue: Queue<u8> = Queue::with_cap(4);
    queue.extend([1, 2]);
    queue.dequeue();

    assert_eq!(
        format!("{queue:?}"),
        "Queue { contents: [2], len: 1, cap: 4, front: 1, back: 2 }"
    );
}

#[test]
fn test_zst_support() {
    let mut queue: Queue<ZeroSizedType> = Queue::new();
    queue.extend(iter::repeat_n(ZeroSizedType, 20));
    assert_eq!(queue.len(), 20);
    assert_eq!(queue.iter().count(), 20);
    assert_eq!(queue.dequeue(), Some(ZeroSizedType));
}
