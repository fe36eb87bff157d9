//! signatures/mod.rs
//! Chained signature pages holding one digest per file chunk.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
