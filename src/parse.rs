//! Line oriented parser for `WIDTHxHEIGHT[:WEIGHT]` resolution lists.

use std::fmt;
use std::sync::OnceLock;

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Weight given to a line that carries no `:WEIGHT` suffix.
pub const DEFAULT_WEIGHT: u64 = 1;

/// Resolution list used when no input text is supplied.
pub const DEFAULT_RESOLUTIONS: &str = "768x1344:5\n832x1216\n896x1152\n1024x1024\n1024x1536\n1152x896\n1216x832\n1344x768\n1536x1024";

/// A single `width x height` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolutionEntry {
    pub width: u64,
    pub height: u64,
}

impl ResolutionEntry {
    pub fn new(width: u64, height: u64) -> Self {
        Self { width, height }
    }

    /// The same resolution with its axes swapped.
    pub fn swapped(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

impl fmt::Display for ResolutionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A resolution together with its relative selection weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedEntry {
    #[serde(flatten)]
    pub entry: ResolutionEntry,
    pub weight: u64,
}

impl WeightedEntry {
    pub fn new(width: u64, height: u64, weight: u64) -> Self {
        Self {
            entry: ResolutionEntry::new(width, height),
            weight,
        }
    }
}

/// Compiled grammar for resolution lines.
///
/// A line matches when it *starts* with `<digits>x<digits>`, optionally
/// followed by `:<digits>`. Anything after the match is ignored, so
/// `1024x768 landscape` is accepted as `1024x768`. Digits are any Unicode
/// decimal digits (`\p{Nd}`), so `１０２４x７６８` reads as `1024x768`.
#[derive(Debug, Clone)]
pub struct ResolutionParser {
    pattern: Regex,
    digit: Regex,
}

impl Default for ResolutionParser {
    fn default() -> Self {
        Self {
            pattern: Regex::new(r"^(\d+)x(\d+)(?::(\d+))?").expect("resolution pattern compiles"),
            digit: Regex::new(r"^\d$").expect("digit pattern compiles"),
        }
    }
}

impl ResolutionParser {
    fn is_digit(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.digit.is_match(c.encode_utf8(&mut buf))
    }

    /// Decimal value of a `\p{Nd}` character.
    ///
    /// Unicode encodes every decimal digit set as a contiguous `0..=9` run,
    /// and adjacent sets (the mathematical digits) start on a zero, so the
    /// value is the distance from the start of the run modulo 10.
    fn digit_value(&self, c: char) -> u64 {
        if let Some(d) = c.to_digit(10) {
            return d as u64;
        }
        let mut start = c as u32;
        while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
            if !self.is_digit(prev) {
                break;
            }
            start -= 1;
        }
        ((c as u32 - start) % 10) as u64
    }

    /// Decimal number made of `\p{Nd}` characters, `None` on `u64` overflow.
    fn number(&self, digits: &str) -> Option<u64> {
        digits.chars().try_fold(0u64, |acc, c| {
            acc.checked_mul(10)?.checked_add(self.digit_value(c))
        })
    }

    /// Parse a single already-trimmed line.
    ///
    /// Returns `None` for lines that do not match, including lines whose
    /// numbers do not fit in a `u64`.
    pub fn parse_line(&self, line: &str) -> Option<WeightedEntry> {
        let caps = self.pattern.captures(line)?;
        let width = self.number(&caps[1])?;
        let height = self.number(&caps[2])?;
        let weight = match caps.get(3) {
            Some(m) => self.number(m.as_str())?,
            None => DEFAULT_WEIGHT,
        };
        Some(WeightedEntry::new(width, height, weight))
    }

    /// Parse every matching line of `text`, preserving input order.
    pub fn parse(&self, text: &str) -> Vec<WeightedEntry> {
        let mut entries = Vec::new();
        for (lineno, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            match self.parse_line(line) {
                Some(entry) => entries.push(entry),
                None => debug!("skipping line {}: {:?}", lineno + 1, line),
            }
        }
        entries
    }
}

/// Parse `text` with a shared default [`ResolutionParser`].
pub fn parse(text: &str) -> Vec<WeightedEntry> {
    static PARSER: OnceLock<ResolutionParser> = OnceLock::new();
    PARSER.get_or_init(ResolutionParser::default).parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_defaults_to_one() {
        assert_eq!(parse("800x600"), vec![WeightedEntry::new(800, 600, 1)]);
    }

    #[test]
    fn explicit_weights_keep_order() {
        assert_eq!(
            parse("800x600:3\n100x100:1"),
            vec![WeightedEntry::new(800, 600, 3), WeightedEntry::new(100, 100, 1)]
        );
    }

    #[test]
    fn garbage_and_blank_lines_are_skipped() {
        assert_eq!(
            parse("garbage\n\n1024x1024"),
            vec![WeightedEntry::new(1024, 1024, 1)]
        );
    }

    #[test]
    fn trailing_text_is_ignored() {
        let parser = ResolutionParser::default();
        assert_eq!(
            parser.parse_line("800x600abc"),
            Some(WeightedEntry::new(800, 600, 1))
        );
        assert_eq!(
            parser.parse_line("800x600:"),
            Some(WeightedEntry::new(800, 600, 1))
        );
        assert_eq!(
            parser.parse_line("800x600:7 portrait"),
            Some(WeightedEntry::new(800, 600, 7))
        );
    }

    #[test]
    fn match_must_start_the_line() {
        let parser = ResolutionParser::default();
        assert_eq!(parser.parse_line("size 800x600"), None);
        assert_eq!(parser.parse_line("800X600"), None);
        assert_eq!(parser.parse_line("-800x600"), None);
    }

    #[test]
    fn surrounding_whitespace_and_crlf() {
        assert_eq!(
            parse("  640x480:2  \r\n\t1280x720\r\n"),
            vec![WeightedEntry::new(640, 480, 2), WeightedEntry::new(1280, 720, 1)]
        );
    }

    #[test]
    fn unicode_decimal_digits() {
        // fullwidth, Arabic-Indic and mathematical bold digits
        assert_eq!(parse("１０２４x７６８"), vec![WeightedEntry::new(1024, 768, 1)]);
        assert_eq!(parse("٨٠٠x٦٠٠:٣"), vec![WeightedEntry::new(800, 600, 3)]);
        assert_eq!(parse("\u{1D7D6}x\u{1D7CF}"), vec![WeightedEntry::new(8, 1, 1)]);
        assert_eq!(parse("६४०x४८०:२"), vec![WeightedEntry::new(640, 480, 2)]);
    }

    #[test]
    fn non_decimal_numerals_do_not_match() {
        // superscripts and roman numerals are numeric but not Nd
        assert!(parse("²x³").is_empty());
        assert!(parse("Ⅳx5").is_empty());
    }

    #[test]
    fn overflowing_numbers_skip_the_line() {
        assert!(parse("99999999999999999999x10").is_empty());
        assert!(parse("10x10:99999999999999999999").is_empty());
    }

    #[test]
    fn default_list_has_nine_entries() {
        let entries = parse(DEFAULT_RESOLUTIONS);
        assert_eq!(entries.len(), 9);
        assert_eq!(entries[0], WeightedEntry::new(768, 1344, 5));
        assert!(entries[1..].iter().all(|e| e.weight == 1));
    }

    #[test]
    fn entry_display() {
        assert_eq!(ResolutionEntry::new(1920, 1080).to_string(), "1920x1080");
        assert_eq!(
            ResolutionEntry::new(1920, 1080).swapped(),
            ResolutionEntry::new(1080, 1920)
        );
    }
}
