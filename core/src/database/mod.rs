//! database/mod.rs
//! Assembled `unicv.db` tree: header plus entries in file-table order.

pub mod types;
pub mod encode;
pub mod assemble;

pub use types::*;
pub use encode::*;
pub use assemble::*;
