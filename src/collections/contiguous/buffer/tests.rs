#![cfg(test)]

use std::iter;

use super::*;
use crate::collections::alloc::{DefaultPolicy, RawPolicy};
use crate::collections::error::AllocationLimitExceeded;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_growth() {
    let mut buf: Buffer<usize> = Buffer::new();
    assert_eq!(buf.cap(), 0, "Buffers shouldn't allocate until they grow.");

    let mut caps = Buffer::<usize>::new();
    for i in 0..20 {
        buf.try_push(i).expect("within limit");
        caps.try_push(buf.cap()).expect("within limit");
    }

    assert_eq!(*caps, [8, 8, 8, 8, 8, 8, 8, 8, 16, 16, 16, 16, 16, 16, 16, 16, 32, 32, 32, 32]);
    assert_eq!(*buf, *(0..20).collect::<Buffer<usize>>());
}

#[test]
fn test_limit() {
    let mut buf: Buffer<u32, RawPolicy<usize, 50>> = Buffer::new();
    for i in 0..50 {
        buf.try_push(i).expect("within limit");
    }
    assert_eq!(buf.cap(), 50, "Growth should be clamped to the limit.");

    assert_eq!(buf.try_push(50), Err(AllocationLimitExceeded { limit: 50 }));
    assert_eq!(buf.len(), 50, "A failed push should leave the Buffer unchanged.");

    assert_panics!({
        let mut buf: Buffer<u32, RawPolicy<usize, 2>> = Buffer::new();
        buf.extend([1, 2, 3]);
    });
}

#[test]
fn test_reserve() {
    let mut buf: Buffer<u8, RawPolicy<usize, 20>> = Buffer::new();
    buf.reserve(4);
    assert_eq!(buf.cap(), 5, "Reserving should allocate one extra slot.");

    buf.reserve(3);
    assert_eq!(buf.cap(), 5, "Reserving less than the capacity shouldn't do anything.");

    buf.reserve(20);
    assert_eq!(buf.cap(), 20, "The extra slot should be clamped to the limit.");

    assert_eq!(buf.try_reserve(21), Err(AllocationLimitExceeded { limit: 20 }));
    assert_eq!(buf.cap(), 20);
}

#[test]
fn test_resize() {
    let counter = CountedDrop::new();
    let mut buf: Buffer<CountedDrop> = Buffer::new();

    buf.resize(10, counter.clone());
    assert_eq!(buf.len(), 10);

    buf.resize(4, counter.clone());
    assert_eq!(
        counter.drops(), 8,
        "6 elements should be destroyed by shrinking, plus both fill values."
    );

    let mut buf: Buffer<u8, DefaultPolicy> = Buffer::new();
    buf.resize_default(3);
    buf.resize_with(5, || 7);
    assert_eq!(*buf, [0, 0, 0, 7, 7]);
}

#[test]
fn test_drop_only_live() {
    let counter = CountedDrop::new();
    let mut buf: Buffer<CountedDrop> = Buffer::with_cap(10);
    buf.extend(iter::repeat_with(|| counter.clone()).take(3));

    drop(buf);
    assert_eq!(counter.drops(), 3, "Only the 3 live elements should be destroyed.");

    let counter = CountedDrop::new();
    let mut buf: Buffer<CountedDrop> = Buffer::new();
    buf.extend(iter::repeat_with(|| counter.clone()).take(5));
    drop(buf.pop());
    assert_eq!(counter.drops(), 1);
    buf.clear();
    assert_eq!(counter.drops(), 5);
    assert_eq!(buf.cap(), 8, "Clearing should keep the capacity.");
}

#[test]
fn test_replicate() {
    let mut source: Buffer<String> = Buffer::with_cap(32);
    source.extend(["a", "b", "c"].map(String::from));

    let mut copy: Buffer<String> = Buffer::new();
    copy.extend(["x", "y", "z", "w"].map(String::from));
    copy.replicate(&source);
    assert_eq!(copy, source);

    let clone = source.clone();
    assert_eq!(clone.cap(), 3, "Only the live range should be copied.");

    source[0].push('!');
    assert_eq!(clone[0], "a", "Copies shouldn't alias.");
    assert_eq!(copy[0], "a", "Copies shouldn't alias.");
}

#[test]
fn test_find() {
    let buf: Buffer<i32> = [5, 3, 9, 3].into_iter().collect();
    assert_eq!(buf.find(&3), Some(1));
    assert_eq!(buf.find(&4), None);

    let mut sorted: Buffer<i32> = (0..100).map(|i| i * 3).collect();
    assert_eq!(sorted.find_binary(&36), Some(12));
    assert_eq!(sorted.find_binary(&37), None);

    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(sorted.find_binary_by(|probe| 36.cmp(probe)), Some(87));

    let pairs: Buffer<(u8, char)> = [(1, 'a'), (4, 'b'), (9, 'c')].into_iter().collect();
    assert_eq!(pairs.find_binary_by_key(&4, |pair| pair.0), Some(1));
}

#[test]
fn test_swap_remove_and_insert() {
    let mut buf: Buffer<char> = "abcde".chars().collect();
    assert_eq!(buf.swap_remove(1), 'b');
    assert_eq!(*buf, ['a', 'e', 'c', 'd']);

    buf.try_insert(0, 'z').expect("within limit");
    buf.try_insert(5, 'y').expect("within limit");
    assert_eq!(*buf, ['z', 'a', 'e', 'c', 'd', 'y']);

    assert_panics!({
        let mut buf: Buffer<u8> = Buffer::new();
        buf.swap_remove(0);
    });
}

#[test]
fn test_into_iter() {
    let buf: Buffer<usize> = (0..5).collect();
    let mut iter = buf.into_iter();
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.len(), 3);

    let counter = CountedDrop::new();
    let buf: Buffer<CountedDrop, DefaultPolicy> = iter::repeat_with(|| counter.clone())
        .take(10)
        .collect();
    let mut iter = buf.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(
        counter.drops(), 10,
        "Dropping an owned iterator should drop all remaining elements."
    );
}

#[test]
fn test_zst_support() {
    let mut buf: Buffer<ZeroSizedType> = Buffer::new();
    buf.resize_default(100);
    assert_eq!(buf.len(), 100);
    assert_eq!(buf.iter().count(), 100);
    buf.shrink_to_fit();
    assert_eq!(buf.cap(), 100);
}
