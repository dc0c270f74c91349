//! Completion-body parsing: numbered or bulleted lines into a clean list

use regex::Regex;
use std::sync::OnceLock;

static MARKER_RE: OnceLock<Regex> = OnceLock::new();

const MAX_LINE_LEN: usize = 100;

/// Split a completion body on newlines, strip leading enumeration markers
/// (`1.`, `2)`, `-`, `•`, `*`), drop empty or overlong lines, cap the count.
pub fn parse_list(content: &str, cap: usize) -> Vec<String> {
    let marker_re =
        MARKER_RE.get_or_init(|| Regex::new(r"^\s*(?:\d+[.)]\s*|[-•*]\s*)").unwrap());

    content
        .lines()
        .map(|line| marker_re.replace(line, "").trim().to_string())
        .filter(|line| !line.is_empty() && line.len() <= MAX_LINE_LEN)
        .take(cap)
        .collect()
}
