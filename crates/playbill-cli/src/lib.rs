//! Library components of the `playbill` binary.

pub mod logging;
pub mod pipeline;
pub mod types;
