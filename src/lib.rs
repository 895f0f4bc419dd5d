//! # ordtree
//!
//! An ordered associative map for Rust backed by a binary search tree.
//!
//! ## Overview
//!
//! This library provides [`OrderedTreeMap`], an in-process ordered map that
//! keeps its entries in an unbalanced binary search tree:
//!
//! - **Ordered**: iteration always yields entries in ascending key order.
//! - **First-writer-wins**: inserting an already-present key leaves the
//!   stored value untouched.
//! - **Total API**: absent-key lookups and removals are defined results,
//!   never errors or panics.
//! - **Eager traversals**: in-order, pre-order, and post-order visits are
//!   materialized up front and borrow the map, so the borrow checker rules
//!   out iteration over a mutated tree.
//!
//! The tree performs no rebalancing: operations cost O(depth), which is
//! O(log N) for well-scattered keys and O(N) in the worst case. Teardown is
//! iterative, so even a pathologically skewed tree cannot overflow the call
//! stack when dropped.
//!
//! ## Example
//!
//! ```rust
//! use ordtree::prelude::*;
//!
//! let mut map = OrderedTreeMap::new();
//! map.insert(2, "two");
//! map.insert(1, "one");
//! map.insert(3, "three");
//!
//! let keys: Vec<&i32> = map.keys().collect();
//! assert_eq!(keys, vec![&1, &2, &3]);
//! ```
//!
//! [`OrderedTreeMap`]: tree::OrderedTreeMap

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use ordtree::prelude::*;
/// ```
pub mod prelude {
    pub use crate::tree::*;
}

pub mod tree;
