//! Parent-linked binary search tree building blocks for Rust.
//!
//! This crate provides [`BstSet`], an ordered set stored as a plain binary
//! search tree, together with the pieces a balanced variant is built from:
//!
//! - the [`BinaryTree`] trait — the capability contract
//!   (`insert`/`clear`/`contains` plus the size queries) every variant
//!   supplies;
//! - the [`cursor`] family — bidirectional, parent-aware in-order traversal
//!   with no auxiliary stack;
//! - [`NodeHandle`] — a detached, independently-owned value extracted from a
//!   tree for later reinsertion via [`BstSet::insert_node`].
//!
//! Every node carries its subtree height and a parent back-reference, and the
//! store keeps both current through insertions and deletions. A balancing
//! variant (AVL, red-black) adds policy on top of exactly these annotations;
//! `BstSet` itself never rebalances, so its operations run in O(height).
//!
//! # Example
//!
//! ```
//! use bodhi_tree::BstSet;
//!
//! let mut set = BstSet::new();
//! for value in [5, 3, 8, 1, 4] {
//!     set.insert(value);
//! }
//!
//! // In-order traversal yields sorted values.
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 8]);
//! assert_eq!(set.len(), 5);
//!
//! // Extract a value into a handle and put it back later.
//! let node = set.extract(&3);
//! assert_eq!(set.len(), 4);
//! assert!(set.insert_node(node).inserted);
//! ```
//!
//! # Structural equality
//!
//! Comparisons between trees are **structural** — node by node, including
//! shape and heights. Two sets holding the same elements in different shapes
//! compare unequal; see [`BstSet`] for details.
//!
//! # Features
//!
//! - **`no_std` compatible** — only requires `alloc`.
//! - **No unsafe code** — nodes live in an arena addressed by niche-optimized
//!   ids, so parent back-references never dangle.
//! - **Pluggable allocation** — every node lifetime event routes through the
//!   tree's arena strategy, so tracking and pooling arenas compose.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod binary_tree;
mod node_handle;
mod raw;

pub mod bst_set;
pub mod cursor;

pub use binary_tree::{BinaryTree, InsertNode};
pub use bst_set::BstSet;
pub use cursor::{Cursor, CursorMut, RevCursor, RevCursorMut};
pub use node_handle::NodeHandle;
