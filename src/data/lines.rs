use std::path::Path;

use crate::error::{BlockError, Result};

// ---------------------------------------------------------------------------
// Whole-file ingestion
// ---------------------------------------------------------------------------

/// Read a text file in full and split it into normalized lines.
///
/// The file handle is closed before any parsing starts. Invalid UTF-8 is
/// replaced rather than rejected, so the only failure is file access.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = std::fs::read(path).map_err(|e| BlockError::io(path, e))?;
    let text = String::from_utf8_lossy(&bytes);
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(split_lines(&text))
}

/// Split text on `\r\n`, `\n` or a lone `\r`.
///
/// No returned line contains a carriage return or newline. A terminator at
/// the very end of the text does not produce a trailing empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        match rest.find(['\n', '\r']) {
            Some(pos) => {
                lines.push(rest[..pos].to_string());
                let term_len = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + term_len..];
            }
            None => {
                lines.push(rest.to_string());
                break;
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_split_unix_endings() {
        assert_eq!(split_lines("a\nb\nc\n"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_windows_and_mixed_endings() {
        assert_eq!(split_lines("a\r\nb\nc\r\n"), vec!["a", "b", "c"]);
        assert_eq!(split_lines("a\rb\r\n\r\nc"), vec!["a", "b", "", "c"]);
    }

    #[test]
    fn test_split_keeps_interior_blank_lines() {
        assert_eq!(split_lines("1 2\n\n3 4"), vec!["1 2", "", "3 4"]);
    }

    #[test]
    fn test_split_empty_text() {
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("\n"), vec![""]);
    }

    #[test]
    fn test_read_lines_from_file() -> anyhow::Result<()> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(b"HEADER\r\n1 2\r\n")?;
        let lines = read_lines(tmp.path())?;
        assert_eq!(lines, vec!["HEADER", "1 2"]);
        Ok(())
    }

    #[test]
    fn test_read_lines_tolerates_invalid_utf8() -> anyhow::Result<()> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(b"Temp \xb0C\n1\n")?;
        let lines = read_lines(tmp.path())?;
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Temp "));
        assert_eq!(lines[1], "1");
        Ok(())
    }

    #[test]
    fn test_read_lines_missing_file() {
        let err = read_lines(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, BlockError::Io { .. }));
    }
}
