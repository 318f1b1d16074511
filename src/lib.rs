#![forbid(unsafe_code)]

pub mod cli;
pub mod core;
pub mod error;
pub mod graph;
pub mod stats;
pub mod util;
