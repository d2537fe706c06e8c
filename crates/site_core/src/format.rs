/// Live phone formatting: `(ddd`, `(ddd) ddd`, `(ddd) ddd-dddd`.
/// Non-digits are dropped, as are digits past the tenth.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    match digits.len() {
        0 => String::new(),
        1..=3 => format!("({digits}"),
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        len => format!(
            "({}) {}-{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..len.min(10)]
        ),
    }
}

/// Character budget for a free-text field, counted in UTF-16 code units the
/// way the browser's `maxlength` counts them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharBudget {
    pub max: usize,
    pub low_mark: usize,
}

impl CharBudget {
    pub fn new(max: usize, low_mark: usize) -> Self {
        Self { max, low_mark }
    }

    /// Truncates `text` to the budget without splitting a character.
    pub fn clamp(&self, text: &str) -> String {
        let mut used = 0;
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            used += ch.len_utf16();
            if used > self.max {
                break;
            }
            out.push(ch);
        }
        out
    }

    pub fn remaining(&self, text: &str) -> usize {
        self.max.saturating_sub(text.encode_utf16().count())
    }

    pub fn is_low(&self, text: &str) -> bool {
        self.remaining(text) < self.low_mark
    }

    pub fn label(&self, text: &str) -> String {
        format!("{} characters remaining", self.remaining(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_formatting_table() {
        let cases = [
            ("", ""),
            ("abc", ""),
            ("5", "(5"),
            ("555", "(555"),
            ("5551", "(555) 1"),
            ("555123", "(555) 123"),
            ("5551234", "(555) 123-4"),
            ("5551234567", "(555) 123-4567"),
            ("555123456789", "(555) 123-4567"),
            ("(555) 123-45", "(555) 123-45"),
            ("+1 555.123", "(155) 512-3"),
        ];
        for (input, expected) in cases {
            assert_eq!(format_phone(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn formatting_is_stable_on_already_formatted_text() {
        let once = format_phone("5551234567");
        assert_eq!(format_phone(&once), once);
    }

    #[test]
    fn budget_counts_utf16_units() {
        let budget = CharBudget::new(5, 2);
        assert_eq!(budget.remaining("abc"), 2);
        assert_eq!(budget.remaining("😀"), 3);
        assert_eq!(budget.remaining("abcdefg"), 0);
        assert!(!budget.is_low("abc"));
        assert!(budget.is_low("abcd"));
        assert_eq!(budget.label("ab"), "3 characters remaining");
    }

    #[test]
    fn clamp_keeps_surrogate_pairs_whole() {
        let budget = CharBudget::new(3, 0);
        assert_eq!(budget.clamp("ab😀"), "ab");
        assert_eq!(budget.clamp("a😀b"), "a😀");
        assert_eq!(budget.clamp("abc"), "abc");
    }
}
