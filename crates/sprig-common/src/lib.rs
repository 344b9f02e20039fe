//! Common utilities for the Sprig markup parser.
//!
//! This crate provides shared infrastructure used by the parser and its consumers:
//! - **Warning System** - colored terminal output for ignored or unsupported input

pub mod warning;
