//! headers/mod.rs
//! Root `SCEIRODB` header: one block at offset 0.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
