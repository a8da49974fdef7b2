//! # Parser Module
//!
//! The matching engine and the per-call plumbing around it.
//!
//! - [`engine`]: the shared attempt contract, ordered choice, backtracking
//! - [`driver`]: configuration, tracing events and statistics

pub mod driver;
pub mod engine;

pub use driver::*;
pub use engine::{Label, MatchNode, Mode, Outcome};
