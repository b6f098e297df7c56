//! Extract headed numeric data blocks from free-form text files.
//!
//! Instrument and simulation reports often stack several labelled tables in
//! one document. [`load_block`] finds the N-th header line containing a
//! marker, reads the numeric rows under it and returns them as columns.
//!
//! ```no_run
//! use std::path::Path;
//!
//! # fn main() -> datablock::Result<()> {
//! if let Some(block) = datablock::load_block(Path::new("run.txt"), "ABSORBANCE", 1, 0)? {
//!     let wavelength = &block.columns()[0];
//!     println!("{} points", wavelength.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data;
pub mod error;

pub use config::{ExtractionPlan, PlanEntry};
pub use data::header::{find_header, header_lines};
pub use data::lines::{read_lines, split_lines};
pub use data::loader::{
    extract_block, extract_from_lines, load_all_blocks, load_block, load_query, BlockQuery,
};
pub use data::model::{status_message, Block, Column};
pub use data::row::{collect_rows, parse_row};
pub use error::{BlockError, Result};
