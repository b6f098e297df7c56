// ---------------------------------------------------------------------------
// Header search
// ---------------------------------------------------------------------------

/// Whether a line is a header for `marker` (case-sensitive substring).
pub fn is_header(line: &str, marker: &str) -> bool {
    line.contains(marker)
}

/// 0-based indices of every line containing `marker`, in document order.
pub fn header_lines<S: AsRef<str>>(lines: &[S], marker: &str) -> Vec<usize> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_header(line.as_ref(), marker))
        .map(|(i, _)| i)
        .collect()
}

/// Locate the `instance`-th header line (1-based) for `marker`.
///
/// Single forward pass with a running occurrence counter starting at 1. An
/// `instance` of 0 can never be reached and yields `None`, as does an
/// `instance` larger than the number of matching lines.
pub fn find_header<S: AsRef<str>>(lines: &[S], marker: &str, instance: usize) -> Option<usize> {
    let mut inst = 1;
    for (i, line) in lines.iter().enumerate() {
        if !is_header(line.as_ref(), marker) {
            continue;
        }
        if inst == instance {
            return Some(i);
        }
        inst += 1;
    }
    None
}
