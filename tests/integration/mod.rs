//! Integration test modules for videogrid
//!
//! - grid: builder options and direct concatenation
//! - nodes: reference scenarios executed by node id
//! - concurrency: parallel filling and concurrent callers

pub mod grid;
pub mod nodes;
