//! Property-based tests comparing each collection against a standard library model.

use std::collections::{HashMap, VecDeque};

use policy_collections::collections::alloc::{DefaultPolicy, RawPolicy};
use policy_collections::collections::binary_tree::BinarySearchTree;
use policy_collections::collections::contiguous::{Array, Queue, Stack};
use policy_collections::collections::error::AllocationLimitExceeded;
use policy_collections::collections::hash::HashDictionary;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum DictOp {
    Insert(u16, u32),
    Erase(u16),
    Find(u16),
    Clear,
}

fn dict_ops() -> impl Strategy<Value = Vec<DictOp>> {
    // A small key space makes duplicates and erase hits common.
    prop::collection::vec(
        prop_oneof![
            6 => (0..256_u16, any::<u32>()).prop_map(|(k, v)| DictOp::Insert(k, v)),
            3 => (0..256_u16).prop_map(DictOp::Erase),
            2 => (0..256_u16).prop_map(DictOp::Find),
            1 => Just(DictOp::Clear),
        ],
        0..600,
    )
}

#[derive(Debug, Clone)]
enum QueueOp {
    Enqueue(i64),
    Dequeue,
}

fn queue_ops() -> impl Strategy<Value = Vec<QueueOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => any::<i64>().prop_map(QueueOp::Enqueue),
            2 => Just(QueueOp::Dequeue),
        ],
        0..500,
    )
}

proptest! {
    #[test]
    fn prop_array_growth_invariant(values in prop::collection::vec(any::<u32>(), 0..2000)) {
        let mut arr: Array<u32> = Array::new();

        for &value in &values {
            let (len, cap) = (arr.len(), arr.cap());
            arr.push(value);

            let expected = if len == cap { usize::max(len * 2, 8) } else { cap };
            prop_assert_eq!(arr.cap(), expected);
            prop_assert!(arr.len() <= arr.cap());
        }

        prop_assert_eq!(&*arr, values.as_slice());
    }

    #[test]
    fn prop_array_ceiling(limit in 0_usize..64, extra in 1_usize..16) {
        let mut arr: Array<usize, RawPolicy<usize, 64>> = Array::new();
        let mut capped: Array<usize, DefaultPolicy<u8, 64>> = Array::new();
        prop_assert_eq!(arr.limit(), 64);

        for i in 0..(64 + extra) {
            let result = arr.try_push(i);
            prop_assert_eq!(result.is_ok(), i < 64);
            if i < limit {
                capped.push(i);
            }
        }

        prop_assert_eq!(arr.len(), 64);
        prop_assert_eq!(arr.try_push(0), Err(AllocationLimitExceeded { limit: 64 }));
        prop_assert_eq!(capped.len(), limit);
    }

    #[test]
    fn prop_stack_matches_vec(values in prop::collection::vec(any::<u8>(), 0..300), pops in 0_usize..300) {
        let mut stack: Stack<u8> = values.iter().copied().collect();
        let mut model = values.clone();

        for _ in 0..pops {
            prop_assert_eq!(stack.pop(), model.pop());
        }
        prop_assert_eq!(stack.top(), model.last());
        prop_assert!(stack.iter().eq(model.iter().rev()));
    }

    #[test]
    fn prop_queue_fifo(ops in queue_ops()) {
        let mut queue: Queue<i64> = Queue::new();
        let mut model = VecDeque::new();

        for op in ops {
            match op {
                QueueOp::Enqueue(value) => {
                    queue.enqueue(value);
                    model.push_back(value);
                },
                QueueOp::Dequeue => prop_assert_eq!(queue.dequeue(), model.pop_front()),
            }

            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(queue.front(), model.front());
            prop_assert_eq!(queue.back(), model.back());
        }

        prop_assert!(queue.iter().eq(model.iter()));
        prop_assert!(queue.iter().rev().eq(model.iter().rev()));
        for (i, value) in model.iter().enumerate() {
            prop_assert_eq!(&queue[i], value);
        }
    }

    #[test]
    fn prop_saturated_queue_drops(values in prop::collection::vec(any::<u16>(), 0..100)) {
        let mut queue: Queue<u16, RawPolicy<u8, 20>> = values.iter().copied().collect();

        prop_assert_eq!(queue.len(), values.len().min(20));
        prop_assert_eq!(queue.is_saturated(), values.len() >= 20);
        for &expected in values.iter().take(20) {
            prop_assert_eq!(queue.dequeue(), Some(expected));
        }
        prop_assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn prop_dictionary_matches_model(ops in dict_ops()) {
        let mut dict: HashDictionary<u16, u32> = HashDictionary::new();
        let mut model: HashMap<u16, u32> = HashMap::new();

        for op in ops {
            match op {
                DictOp::Insert(key, value) => {
                    let inserted = !model.contains_key(&key);
                    if inserted {
                        model.insert(key, value);
                    }
                    prop_assert_eq!(dict.insert(key, value), inserted);
                },
                DictOp::Erase(key) => prop_assert_eq!(dict.erase(&key), model.remove(&key)),
                DictOp::Find(key) => {
                    prop_assert_eq!(dict.get(&key), model.get(&key));
                    if let Some(pos) = dict.find(&key) {
                        prop_assert_eq!(dict.entries()[pos].key(), &key);
                    }
                },
                DictOp::Clear => {
                    dict.clear();
                    model.clear();
                },
            }

            prop_assert_eq!(dict.len(), model.len());
            prop_assert!(dict.len() * 2 < dict.cap() || dict.cap() == 0);
        }

        for (key, value) in &model {
            prop_assert_eq!(dict.get(key), Some(value));
        }
        for (key, value) in dict.iter() {
            prop_assert_eq!(model.get(key), Some(value));
        }
    }

    #[test]
    fn prop_dictionary_round_trip(keys in prop::collection::hash_set(any::<u64>(), 0..500)) {
        let dict: HashDictionary<u64, String, DefaultPolicy> = keys
            .iter()
            .map(|key| (*key, key.to_string()))
            .collect();

        prop_assert_eq!(dict.len(), keys.len());
        for key in &keys {
            prop_assert_eq!(dict.get(key), Some(&key.to_string()));
        }

        let copy = dict.clone();
        prop_assert_eq!(copy, dict);
    }

    #[test]
    fn prop_tree_matches_sorted_model(
        values in prop::collection::vec(0..100_u8, 0..200),
        erase in prop::collection::vec(0..100_u8, 0..100),
    ) {
        let mut tree: BinarySearchTree<u8> = values.iter().copied().collect();
        let mut model = values.clone();
        model.sort();

        for value in erase {
            let expected = model.binary_search(&value).ok().map(|i| model.remove(i));
            prop_assert_eq!(tree.erase(&value), expected);
        }

        prop_assert_eq!(tree.len(), model.len());
        prop_assert!(tree.iter_ascending().eq(model.iter()));
        prop_assert!(tree.iter_descending().eq(model.iter().rev()));
        prop_assert_eq!(tree.minimum(), model.first());
        prop_assert_eq!(tree.maximum(), model.last());
        prop_assert!(tree.height() <= tree.len());
        for value in &model {
            prop_assert_eq!(tree.find(value), Some(value));
            prop_assert_eq!(tree.find_non_recursive(value), Some(value));
        }
        prop_assert!(tree.into_iter().eq(model));
    }
}
