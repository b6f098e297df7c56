use std::path::Path;

use serde::{Deserialize, Serialize};

use super::header::{find_header, header_lines};
use super::lines::{read_lines, split_lines};
use super::model::{status_message, Block};
use super::row::collect_rows;
use crate::error::Result;

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// Which block to pull out of a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockQuery {
    /// Substring identifying the header line.
    pub marker: String,
    /// 1-based occurrence of the marker to use.
    #[serde(default = "default_instance")]
    pub instance: usize,
    /// Lines ignored between the header and the first data row.
    #[serde(default)]
    pub skip: usize,
}

fn default_instance() -> usize {
    1
}

impl BlockQuery {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            instance: default_instance(),
            skip: 0,
        }
    }

    pub fn instance(mut self, instance: usize) -> Self {
        self.instance = instance;
        self
    }

    pub fn skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load one data block from a text file.
///
/// Finds the `instance`-th line containing `marker`, skips `skip` further
/// lines, and reads numeric rows until a blank or non-numeric line. Rows are
/// padded with NaN and returned as columns.
///
/// Returns `Ok(None)` if the header was not found or nothing parsable
/// followed it. Only file access errors are reported as `Err`.
pub fn load_block(path: &Path, marker: &str, instance: usize, skip: usize) -> Result<Option<Block>> {
    let query = BlockQuery {
        marker: marker.to_string(),
        instance,
        skip,
    };
    load_query(path, &query)
}

/// [`load_block`] taking a [`BlockQuery`].
pub fn load_query(path: &Path, query: &BlockQuery) -> Result<Option<Block>> {
    let lines = read_lines(path)?;
    Ok(extract_from_lines(&lines, query))
}

/// Run a query against text already in memory.
pub fn extract_block(text: &str, query: &BlockQuery) -> Option<Block> {
    extract_from_lines(&split_lines(text), query)
}

/// Load every block introduced by `marker`, in document order.
///
/// Instances with no parsable rows are left out.
pub fn load_all_blocks(path: &Path, marker: &str, skip: usize) -> Result<Vec<Block>> {
    let lines = read_lines(path)?;
    let blocks: Vec<Block> = header_lines(&lines, marker)
        .into_iter()
        .filter_map(|header| block_after(&lines, header, skip))
        .collect();

    log::info!("{} blocks loaded for marker {marker:?}", blocks.len());
    Ok(blocks)
}

/// Query against normalized lines. Logs the status line.
pub fn extract_from_lines<S: AsRef<str>>(lines: &[S], query: &BlockQuery) -> Option<Block> {
    if query.instance == 0 {
        log::warn!("instance 0 requested for marker {:?}; instances start at 1", query.marker);
    }

    let block = find_header(lines, &query.marker, query.instance).and_then(|header| {
        log::debug!(
            "marker {:?} instance {} found at line {header}",
            query.marker,
            query.instance
        );
        block_after(lines, header, query.skip)
    });

    log::info!("{}", status_message(block.as_ref()));
    block
}

fn block_after<S: AsRef<str>>(lines: &[S], header: usize, skip: usize) -> Option<Block> {
    let start = header.saturating_add(1).saturating_add(skip);
    Block::from_rows(collect_rows(lines, start))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const REPORT: &str = "\
Instrument: UV-2600
SCAN Sample A
nm, abs
200, 0.51
210, 0.48
220, 0.40

SCAN Sample B
nm abs
200 0.61
210 0.58
Operator: lab";

    fn write_tmp(content: &str) -> anyhow::Result<NamedTempFile> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(content.as_bytes())?;
        Ok(tmp)
    }

    #[test]
    fn test_query_builder_defaults() {
        let q = BlockQuery::new("SCAN");
        assert_eq!(q.instance, 1);
        assert_eq!(q.skip, 0);
        let q = q.instance(2).skip(1);
        assert_eq!((q.instance, q.skip), (2, 1));
    }

    #[test]
    fn test_query_deserialize_defaults() -> anyhow::Result<()> {
        let q: BlockQuery = serde_json::from_str(r#"{"marker": "SCAN"}"#)?;
        assert_eq!(q, BlockQuery::new("SCAN"));
        let q: BlockQuery = serde_json::from_str(r#"{"marker": "SCAN", "instance": 2, "skip": 1}"#)?;
        assert_eq!(q, BlockQuery::new("SCAN").instance(2).skip(1));
        Ok(())
    }

    #[test]
    fn test_column_header_row_ends_block_without_skip() {
        assert_eq!(extract_block(REPORT, &BlockQuery::new("SCAN")), None);
    }

    #[test]
    fn test_skip_past_column_titles() {
        let block = extract_block(REPORT, &BlockQuery::new("SCAN").skip(1)).unwrap();
        assert_eq!(block.columns(), &[vec![200.0, 210.0, 220.0], vec![0.51, 0.48, 0.40]]);

        let block = extract_block(REPORT, &BlockQuery::new("SCAN").instance(2).skip(1)).unwrap();
        assert_eq!(block.columns(), &[vec![200.0, 210.0], vec![0.61, 0.58]]);
    }

    #[test]
    fn test_skip_ignores_numeric_lines() {
        let text = "H\n1\n2\n3\n4\n";
        let block = extract_block(text, &BlockQuery::new("H").skip(2)).unwrap();
        assert_eq!(block.columns(), &[vec![3.0, 4.0]]);
    }

    #[test]
    fn test_skip_past_end_of_file() {
        assert_eq!(extract_block("H\n1\n", &BlockQuery::new("H").skip(5)), None);
        assert_eq!(extract_block("H\n1\n", &BlockQuery::new("H").skip(usize::MAX)), None);
    }

    #[test]
    fn test_header_on_last_line() {
        assert_eq!(extract_block("1 2\nHEADER", &BlockQuery::new("HEADER")), None);
    }

    #[test]
    fn test_instance_zero_is_absent() {
        assert_eq!(extract_block(REPORT, &BlockQuery::new("SCAN").instance(0).skip(1)), None);
    }

    #[test]
    fn test_load_block_from_file() -> anyhow::Result<()> {
        let tmp = write_tmp(REPORT)?;
        let block = load_block(tmp.path(), "Sample B", 1, 1)?.expect("block");
        assert_eq!(block.n_columns(), 2);
        assert_eq!(block.n_rows(), 2);
        assert_eq!(load_block(tmp.path(), "SCAN", 3, 0)?, None);
        Ok(())
    }

    #[test]
    fn test_load_all_blocks() -> anyhow::Result<()> {
        let tmp = write_tmp(REPORT)?;
        let blocks = load_all_blocks(tmp.path(), "SCAN", 1)?;
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].n_rows(), 3);
        assert_eq!(blocks[1].n_rows(), 2);

        // Without the skip both blocks stop at their title row.
        assert!(load_all_blocks(tmp.path(), "SCAN", 0)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = load_block(Path::new("/no/such/report.txt"), "SCAN", 1, 0).unwrap_err();
        assert!(err.to_string().contains("/no/such/report.txt"));
    }
}
