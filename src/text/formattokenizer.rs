/// Characters that split a format pattern into components.
pub const SEPARATORS: [char; 9] = ['/', '\\', ' ', '-', '.', ',', '\'', '"', ':'];

#[inline]
pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// Splits a date format pattern into component and separator tokens.
///
/// Components and separators alternate: every separator is preceded by the
/// component before it, which is empty between two consecutive separators
/// or at the start of the pattern. A trailing component is emitted only
/// when non-empty. `"yyyy-mm-dd"` gives `["yyyy", "-", "mm", "-", "dd"]`,
/// `"dd, mm"` gives `["dd", ",", "", " ", "mm"]`.
pub fn parse_date_format_str(pattern: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut component = String::new();

    for c in pattern.chars() {
        if is_separator(c) {
            tokens.push(std::mem::take(&mut component));
            tokens.push(c.to_string());
        } else {
            component.push(c);
        }
    }

    if !component.is_empty() {
        tokens.push(component);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_iso_pattern() {
        assert_eq!(parse_date_format_str("yyyy-mm-dd"), vec!["yyyy", "-", "mm", "-", "dd"]);
    }

    #[test]
    fn keeps_every_separator() {
        assert_eq!(parse_date_format_str("dd/mm/yyyy HH:MI:SS"),
                   vec!["dd", "/", "mm", "/", "yyyy", " ", "HH", ":", "MI", ":", "SS"]);
        assert_eq!(parse_date_format_str("day, dd mon 'yy"),
                   vec!["day", ",", "", " ", "dd", " ", "mon", " ", "", "'", "yy"]);
        assert_eq!(parse_date_format_str("dd, mm"), vec!["dd", ",", "", " ", "mm"]);
    }

    #[test]
    fn trailing_and_leading_separators() {
        assert_eq!(parse_date_format_str("-yyyy."), vec!["", "-", "yyyy", "."]);
        assert_eq!(parse_date_format_str("\\\"q\""), vec!["", "\\", "", "\"", "q", "\""]);
    }

    #[test]
    fn pattern_without_separators_is_one_token() {
        assert_eq!(parse_date_format_str("yyyymmdd"), vec!["yyyymmdd"]);
        assert!(parse_date_format_str("").is_empty());
    }

    #[test]
    fn other_punctuation_stays_in_components() {
        assert_eq!(parse_date_format_str("ww(yyyy)"), vec!["ww(yyyy)"]);
    }
}
