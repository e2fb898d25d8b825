//! Per-line quote parity check.
//!
//! Straight and curly variants share a bucket. Only counts are compared;
//! nesting and ordering are not verified.

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Quote counts per family for one line.
pub struct QuoteCounts {
    pub double: usize,
    pub single: usize,
    pub backtick: usize,
}

impl QuoteCounts {
    pub fn of(line: &str) -> Self {
        let mut counts = QuoteCounts::default();
        for c in line.chars() {
            match c {
                '"' | '\u{201C}' | '\u{201D}' => counts.double += 1,
                '\'' | '\u{2018}' | '\u{2019}' => counts.single += 1,
                '`' => counts.backtick += 1,
                _ => {}
            }
        }
        counts
    }

    pub fn is_balanced(&self) -> bool {
        self.double % 2 == 0 && self.single % 2 == 0 && self.backtick % 2 == 0
    }
}

/// True iff every quote family appears an even number of times on `line`.
pub fn has_balanced_quotes(line: &str) -> bool {
    QuoteCounts::of(line).is_balanced()
}
