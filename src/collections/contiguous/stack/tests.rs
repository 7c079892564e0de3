#![cfg(test)]

use std::iter;

use super::*;
use crate::collections::alloc::{DefaultPolicy, RawPolicy};
use crate::collections::error::AllocationLimitExceeded;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

#[test]
fn test_lifo_order() {
    let mut stack: Stack<usize> = Stack::new();
    assert_eq!(stack.pop(), None, "An empty Stack should have nothing to pop.");
    assert_eq!(stack.top(), None);

    for i in 0..20 {
        stack.push(i);
    }
    assert_eq!(stack.cap(), 32, "Stacks should grow like Arrays.");
    assert_eq!(stack.top(), Some(&19));
    assert_eq!(stack.peek(0), stack.top(), "Peeking with no offset should return the top.");
    assert_eq!(stack.peek(19), Some(&0));
    assert_eq!(stack.peek(20), None);

    for i in (0..20).rev() {
        assert_eq!(stack.pop(), Some(i), "Elements should be popped in reverse order.");
    }
    assert!(stack.is_empty());
}

#[test]
fn test_limit() {
    let mut stack: Stack<u8, RawPolicy<u8, 3>> = Stack::new();
    stack.extend([1, 2, 3]);
    assert_eq!(stack.try_push(4), Err(AllocationLimitExceeded { limit: 3 }));
    assert_eq!(stack.top(), Some(&3), "A failed push should leave the top unchanged.");

    assert_panics!({
        let mut stack: Stack<u8, RawPolicy<u8, 0>> = Stack::new();
        stack.push(0);
    }, "Allocation limit of 0 elements exceeded!");
}

#[test]
fn test_top_mut() {
    let mut stack: Stack<String> = Stack::new();
    stack.push("base".into());
    stack.push("top".into());

    if let Some(top) = stack.top_mut() {
        top.push('!');
    }
    assert_eq!(stack.pop().as_deref(), Some("top!"));
}

#[test]
fn test_iterators() {
    let stack: Stack<u8> = (1..=5).collect();

    assert_eq!(
        stack.iter().copied().collect::<Stack<_>>().pop(),
        Some(1),
        "Collecting a top-down iterator should put the old bottom on top."
    );
    assert_eq!(stack.iter().len(), 5);

    let mut popped = Stack::<u8>::new();
    for value in &stack {
        popped.push(*value);
    }
    assert_eq!(popped.top(), Some(&1));

    let order: Stack<u8> = stack.into_iter().collect();
    assert_eq!(order.peek(4), Some(&5), "Owned iteration should start at the top.");

    let counter = CountedDrop::new();
    let stack: Stack<CountedDrop, DefaultPolicy> = iter::repeat_with(|| counter.clone())
        .take(6)
        .collect();
    let mut iter = stack.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(counter.drops(), 6, "Dropping an owned iterator should drop all elements.");
}

#[test]
fn test_copies_are_independent() {
    let mut stack: Stack<String> = ["a", "b"].map(String::from).into_iter().collect();
    let copy = stack.clone();

    stack.push("c".into());
    if let Some(top) = stack.top_mut() {
        top.clear();
    }

    assert_eq!(copy.len(), 2);
    assert_eq!(copy.top().map(String::as_str), Some("b"));
    assert_ne!(stack, copy);

    let mut replica = Stack::new();
    replica.clone_from(&copy);
    assert_eq!(replica, copy);
}

#[test]
fn test_formatting() {
    let mut stack: Stack<u8> = Stack::with_cap(4);
    stack.extend([1, 2, 3]);

    assert_eq!(format!("{stack:?}"), "Stack { top_down: [3, 2, 1], len: 3, cap: 4 }");

    stack.clear();
    assert!(stack.is_empty());
    assert_eq!(stack.cap(), 4, "Clearing should keep the capacity.");
}
