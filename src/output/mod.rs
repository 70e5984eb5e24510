// src/output/mod.rs

//! Produces the concatenated text and the console reports around it.
//!
//! `header` and `file_block` build the output in memory; `writer` puts it on
//! disk; `summary` and `config_dump` write the console report shown by the
//! binary.

pub mod config_dump;
pub mod file_block;
pub mod header;
pub mod summary;
pub mod writer;

pub use config_dump::write_config_dump;
pub use file_block::write_file_block;
pub use header::write_header;
pub use summary::{group_thousands, write_report};
pub use writer::write_atomically;
