// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

/// Parse one line of a numeric block.
///
/// Commas count as whitespace, so `"1,2, 3"` and `"1 2 3"` give the same row.
/// Returns `None` when the line has no tokens or any token is not a float;
/// that is the end-of-block signal.
pub fn parse_row(line: &str) -> Option<Vec<f64>> {
    let row = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|tok| !tok.is_empty())
        .map(|tok| tok.parse::<f64>().ok())
        .collect::<Option<Vec<f64>>>()?;

    if row.is_empty() {
        None
    } else {
        Some(row)
    }
}

/// Collect rows starting at line `start` until the first line that fails
/// [`parse_row`] or the end of `lines`.
pub fn collect_rows<S: AsRef<str>>(lines: &[S], start: usize) -> Vec<Vec<f64>> {
    let mut rows = Vec::new();

    for (i, line) in lines.iter().enumerate().skip(start) {
        match parse_row(line.as_ref()) {
            Some(row) => rows.push(row),
            None => {
                log::debug!("block ends at line {i}: {:?}", line.as_ref());
                break;
            }
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_row() {
        assert_eq!(parse_row("1 2\t3"), Some(vec![1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_comma_and_space_rows_match() {
        assert_eq!(parse_row("1,2, 3"), parse_row("1 2 3"));
        assert_eq!(parse_row("1,2, 3"), Some(vec![1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_number_notations() {
        assert_eq!(
            parse_row("-1.5 +2 .5 3. 1e3 -2.5E-1"),
            Some(vec![-1.5, 2.0, 0.5, 3.0, 1000.0, -0.25])
        );
        let row = parse_row("nan inf -Infinity").unwrap();
        assert!(row[0].is_nan());
        assert_eq!(row[1], f64::INFINITY);
        assert_eq!(row[2], f64::NEG_INFINITY);
    }

    #[test]
    fn test_blank_line_terminates() {
        assert_eq!(parse_row(""), None);
        assert_eq!(parse_row("   \t "), None);
        assert_eq!(parse_row(" , ,"), None);
    }

    #[test]
    fn test_any_bad_token_terminates() {
        assert_eq!(parse_row("1 2 x"), None);
        assert_eq!(parse_row("Wavelength Absorbance"), None);
        assert_eq!(parse_row("1;2"), None);
    }

    #[test]
    fn test_collect_stops_at_first_failure() {
        let lines = ["1 2", "3 4", "", "5 6"];
        assert_eq!(collect_rows(&lines, 0), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn test_collect_runs_to_end_of_input() {
        let lines = ["HEADER", "1", "2"];
        assert_eq!(collect_rows(&lines, 1), vec![vec![1.0], vec![2.0]]);
        assert!(collect_rows(&lines, 3).is_empty());
        assert!(collect_rows(&lines, 10).is_empty());
    }
}
