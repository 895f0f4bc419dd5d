//! Ordered map backed by a binary search tree.
//!
//! This module provides [`OrderedTreeMap`], a mutable ordered map that owns
//! its nodes exclusively and keeps entries sorted by key:
//!
//! - O(depth) get, insert, remove (O(log N) on well-scattered keys)
//! - O(1) len and `is_empty`
//! - O(N) eager in-order, pre-order, and post-order traversals
//!
//! The tree is deliberately unbalanced: there is no rotation or recoloring
//! machinery, so structure follows insertion order alone. Every child slot
//! is an owning `Box`, which makes the ownership graph strictly hierarchical
//! and lets the borrow checker enforce that traversal views never outlive
//! the tree state they were taken from.
//!
//! # Examples
//!
//! ```rust
//! use ordtree::tree::OrderedTreeMap;
//!
//! let mut map = OrderedTreeMap::new();
//! map.insert(5, "five");
//! map.insert(2, "two");
//! map.insert(8, "eight");
//!
//! // Entries come back in key order regardless of insertion order.
//! let keys: Vec<&i32> = map.keys().collect();
//! assert_eq!(keys, vec![&2, &5, &8]);
//!
//! // First writer wins: a duplicate insert leaves the value alone.
//! assert!(!map.insert(5, "FIVE"));
//! assert_eq!(map.get(&5), Some(&"five"));
//! ```

mod map;

pub use map::{
    OrderedTreeMap, OrderedTreeMapIntoIterator, OrderedTreeMapIterator,
    OrderedTreeMapRangeIterator,
};
