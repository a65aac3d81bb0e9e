//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - The filter model (FilterConfig, VisitedEntry)
//! - Path normalization and display helpers
//! - Rendering of collected output
//! - The crate error type

pub mod error;
pub mod model;
pub mod paths;
pub mod render;
