//! CLI library components for the registry record sanitizer.

pub mod logging;
pub mod pipeline;
pub mod types;
