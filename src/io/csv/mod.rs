//! CSV reading and writing.

mod read;
mod write;

pub(crate) use read::*;
pub use write::write_summary;
