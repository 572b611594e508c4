//! Core Library Tree
//!
//! Represents a scanned core library directory as a nested mapping from
//! path segment to sub-tree or file text, ready for JSON embedding.

pub mod builder;
pub mod node;
pub mod walker;
