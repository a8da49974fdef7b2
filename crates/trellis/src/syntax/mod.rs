//! # Syntax Module
//!
//! The concrete syntax tree produced by a successful parse, plus the text
//! position types it is expressed in.

pub mod builder;
pub mod line_col;
pub mod pretty;
pub mod text;
pub mod tree;

pub use builder::*;
pub use line_col::{LineCol, LineIndex, line_col_from_offset};
pub use text::*;
pub use tree::*;
