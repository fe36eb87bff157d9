//! table/mod.rs
//! `SCEIFTBL` file-table entries, one block each, in catalog order.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
