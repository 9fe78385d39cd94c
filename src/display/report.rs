//! Shared formatting helpers for terminal output

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Format a header line with padding
pub fn format_header(title: &str, width: usize) -> String {
    let padding = if title.len() >= width {
        0
    } else {
        (width - title.len()) / 2
    };
    format!("{}{}", " ".repeat(padding), title)
}

/// Pass/fail marker for a check
pub fn check_mark(ok: bool) -> &'static str {
    if ok {
        "OK"
    } else {
        "FAIL"
    }
}

/// Width of the widest string, never less than `min`
pub fn column_width<'a>(values: impl Iterator<Item = &'a str>, min: usize) -> usize {
    values.map(|v| v.chars().count()).max().unwrap_or(min).max(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_header_centers() {
        assert_eq!(format_header("Plan", 10), "   Plan");
        assert_eq!(format_header("A long title", 4), "A long title");
    }

    #[test]
    fn test_column_width() {
        assert_eq!(column_width(["Rent", "Groceries"].into_iter(), 4), 9);
        assert_eq!(column_width(std::iter::empty(), 4), 4);
    }

    #[test]
    fn test_check_mark() {
        assert_eq!(check_mark(true), "OK");
        assert_eq!(check_mark(false), "FAIL");
    }
}
