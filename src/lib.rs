//! Sompack: SOM Core Library Packager
//!
//! Packages a directory tree of SOM source files into a single generated
//! JavaScript statement exposing a zero-argument `loadCoreLib()` accessor,
//! so the downstream interpreter can load its core library without
//! filesystem access at run time.

pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod logging;
pub mod tree;
