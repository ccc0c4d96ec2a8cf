//! Core application primitives (analysis pipeline and orchestration)

pub mod analyzer;
pub mod pipeline;

pub use analyzer::*;
pub use pipeline::*;
