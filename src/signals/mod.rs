//! Signal determination and narrative over an indicator frame.

pub mod engine;
pub mod interpretation;
pub mod scoring;
pub mod suggestions;

pub use engine::*;
pub use interpretation::*;
pub use scoring::*;
pub use suggestions::*;
