//! Walk module - The traversal engine and its collaborators
//!
//! Provides:
//! - matcher: compiled glob sets and per-entry match candidates
//! - resolver: prune/emit decisions with the default-exclude override
//! - engine: the depth-first walk
//! - sink: emit sinks (print, jsonl, collect) and the error channel

pub mod engine;
pub mod matcher;
pub mod resolver;
pub mod sink;
