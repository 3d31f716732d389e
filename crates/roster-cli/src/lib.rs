//! CLI library components for the roster organizer.

pub mod logging;
pub mod pipeline;
