//! Helpers for interpreting git's line-oriented output

/// The first line of `output`, without its line terminator.
pub(crate) fn first_line(output: &str) -> String {
    output
        .lines()
        .next()
        .unwrap_or("")
        .trim_end_matches('\r')
        .to_string()
}

/// Non-empty trimmed lines of `output`, in order.
pub(crate) fn split_lines(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
