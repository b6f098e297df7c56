/// Data layer: line ingestion, header search, row parsing and the block model.
///
/// Architecture:
/// ```text
///  report.txt
///        │
///        ▼
///   ┌──────────┐
///   │  lines    │  read whole file → normalized lines
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  header   │  marker + instance → header line index
///   └──────────┘
///        │  (+1 + skip)
///        ▼
///   ┌──────────┐
///   │   row     │  parse floats until blank / non-numeric line
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  model    │  pad with NaN, transpose → Block (columns)
///   └──────────┘
/// ```
///
/// [`loader`] ties the stages together.

pub mod header;
pub mod lines;
pub mod loader;
pub mod model;
pub mod row;
