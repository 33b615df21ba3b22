//! Library components of the sales export cleaner.

pub mod logging;
pub mod pipeline;
