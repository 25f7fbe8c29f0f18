//! modmerge: concatenate an ordered list of source modules into one file
//!
//! The module order is explicit configuration. Each module `name` resolves to
//! `<base_dir>/<name><extension>` and the destination is rebuilt from scratch
//! on every run.

pub mod cli;
pub mod config;
pub mod domain;
pub mod merge;
pub mod render;
pub mod utils;

pub use domain::Config;
pub use merge::{merge, MergeError, Merger};
