// src/core/text.rs

/// Non-empty lines, trimmed, in source order.
pub fn trimmed_lines(s: &str) -> Vec<&str> {
    s.lines().map(str::trim).filter(|l| !l.is_empty()).collect()
}

/// Whole line is exactly a 4-digit year.
pub fn year4(line: &str) -> Option<&str> {
    let t = line.trim();
    if t.len() == 4 && t.bytes().all(|b| b.is_ascii_digit()) {
        Some(t)
    } else {
        None
    }
}

/// Line starts with a 4-digit year followed by whitespace.
/// Returns (year, rest-of-line).
pub fn leading_year4(line: &str) -> Option<(&str, &str)> {
    let t = line.trim_start();
    let b = t.as_bytes();
    // check the bytes before split_at: a multibyte char spanning index 4
    // would make the split panic
    if b.len() < 5 || !b[..4].iter().all(u8::is_ascii_digit) {
        return None;
    }
    let (head, rest) = t.split_at(4);
    if rest.starts_with(|c: char| c.is_whitespace()) {
        Some((head, rest))
    } else {
        None
    }
}

/// First run of 4 consecutive digits anywhere in the text.
pub fn first_year4(s: &str) -> Option<&str> {
    let b = s.as_bytes();
    let mut run = 0usize;
    for (i, c) in b.iter().enumerate() {
        if c.is_ascii_digit() {
            run += 1;
            if run == 4 {
                return Some(&s[i + 1 - 4..=i]);
            }
        } else {
            run = 0;
        }
    }
    None
}

/// Collapse internal line breaks into single spaces.
pub fn single_line(s: &str) -> String {
    s.trim().lines().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year4_wants_the_whole_line() {
        assert_eq!(year4(" 2024 "), Some("2024"));
        assert_eq!(year4("2024 $1.00"), None);
        assert_eq!(year4("202"), None);
        assert_eq!(year4("20245"), None);
    }

    #[test]
    fn leading_year4_splits_off_the_rest() {
        let (y, rest) = leading_year4("2023 $500.00 $500.00 $75.00").unwrap();
        assert_eq!(y, "2023");
        assert!(rest.contains("$75.00"));
        assert_eq!(leading_year4("2023"), None);
        assert_eq!(leading_year4("May 2023"), None);
    }

    #[test]
    fn leading_year4_handles_multibyte_text() {
        // accented char straddling byte index 4 must not panic
        assert_eq!(leading_year4("Josè Garcia"), None);
        assert_eq!(leading_year4("Renée owes $5.00"), None);
        assert_eq!(leading_year4("2023\u{a0}$75.00").map(|(y, _)| y), Some("2023"));
    }

    #[test]
    fn first_year4_takes_any_digit_run() {
        assert_eq!(first_year4("Spring 2024 Tax"), Some("2024"));
        // longer runs still surface their first four digits
        assert_eq!(first_year4("id 123456"), Some("1234"));
        assert_eq!(first_year4("no digits"), None);
    }

    #[test]
    fn single_line_joins_with_spaces() {
        assert_eq!(single_line("a\nb\r\nc\n"), "a b c");
    }
}
