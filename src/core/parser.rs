//! Line-level extraction of IPv4 entries from blocklist bodies.
//!
//! Matching is deliberately loose: the pattern anchors at the start of the
//! line only, trailing text is ignored, and octet values or prefix lengths
//! are never range-checked (`999.999.999.999/99` is accepted verbatim).

use crate::domain::model::IpSet;
use crate::utils::error::Result;
use regex::Regex;

const ENTRY_PATTERN: &str = r"^(\d{1,3}\.){3}\d{1,3}(/\d{1,2})?";

// 單獨的 \r、垂直定位與 Unicode 行分隔字元也視為斷行
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

#[derive(Debug, Clone)]
pub struct EntryParser {
    pattern: Regex,
}

impl EntryParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(ENTRY_PATTERN)?,
        })
    }

    /// Extracts the leading entry of a single line, if any.
    pub fn parse_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        if is_skipped(line) {
            return None;
        }
        self.pattern.find(line).map(|m| m.as_str())
    }

    /// Inserts every entry found in `body` into `set`, returning how many
    /// lines produced an entry (duplicates included).
    pub fn parse_into(&self, body: &str, set: &mut IpSet) -> usize {
        let mut matched = 0;
        for entry in body.split(LINE_BREAKS).filter_map(|line| self.parse_line(line)) {
            set.insert(entry);
            matched += 1;
        }
        matched
    }
}

// 註解標記只看原始行首字元
fn is_skipped(line: &str) -> bool {
    line.starts_with('#') || line.starts_with(';') || line.trim().is_empty()
}
