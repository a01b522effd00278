// model = "claude-opus-4-5"
// created = "2026-08-05"
// modified = "2026-08-06"
// driver = "Isaac Clayton"

//! Braid - a generic [rope][1] for sequences of arbitrary elements.
//!
//! A rope keeps a sequence in a concatenation tree instead of a flat
//! buffer, so joining two sequences is O(1) and splitting one touches
//! only a single root-to-leaf path. That makes it a good fit for
//! workloads that build and edit sequences by composing pieces:
//! editor buffers, structured logs, token streams.
//!
//! The tree does **not** self-balance. Shape follows the edit history,
//! which keeps the structure simple and the operations cheap in the
//! common case; pathological histories degrade gracefully to linear
//! time rather than failing. See the [`rope`] module docs for the
//! trade-off in full.
//!
//! # Quick Start
//!
//! ```
//! use braid::Rope;
//!
//! // Build a sequence from pieces
//! let hello = Rope::from(vec!['h', 'e', 'l', 'l', 'o']);
//! let world = Rope::from(vec!['w', 'o', 'r', 'l', 'd']);
//! let mut greeting = hello.concat(Rope::from(vec![' '])).concat(world);
//!
//! assert_eq!(greeting.len(), 11);
//! assert_eq!(greeting.get(6), Some(&'w'));
//!
//! // Edit by splitting and rejoining
//! greeting = greeting.remove(5..6);
//! assert_eq!(greeting.iter().collect::<String>(), "helloworld");
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/Rope_(data_structure)

#![deny(missing_docs)]

pub mod iter;
pub mod rope;

pub use iter::Iter;
pub use rope::Rope;
