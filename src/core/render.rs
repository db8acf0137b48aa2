use crate::domain::model::{IpSet, RenderedBlocklist};
use chrono::{DateTime, Utc};
use std::fmt::Write;

pub const HEADER_LINE: &str = "# Auto-generated blocklist (";
pub const DEFAULT_DIRECTIVE: &str = "default 0;";

/// 產生 nginx geo 區塊內容。`cidr_first` 時先輸出網段再輸出單一位址，各組各自排序
pub fn render(entries: &IpSet, generated_at: DateTime<Utc>, cidr_first: bool) -> RenderedBlocklist {
    let mut content = String::new();

    content.push_str(HEADER_LINE);
    content.push('\n');
    let _ = writeln!(content, "# Generated on {} UTC", iso_timestamp(generated_at));
    let _ = writeln!(content, "# Total unique IPs: {}", entries.len());
    content.push_str(DEFAULT_DIRECTIVE);
    content.push('\n');

    if cidr_first {
        for entry in entries.cidr_ranges().chain(entries.addresses()) {
            push_entry(&mut content, entry);
        }
    } else {
        for entry in entries.iter() {
            push_entry(&mut content, entry);
        }
    }

    RenderedBlocklist {
        content,
        total_entries: entries.len(),
    }
}

// 微秒為零時省略小數部分
fn iso_timestamp(at: DateTime<Utc>) -> String {
    if at.timestamp_subsec_micros() == 0 {
        at.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        at.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

fn push_entry(content: &mut String, entry: &str) {
    content.push_str(entry);
    content.push_str(" 1;\n");
}
