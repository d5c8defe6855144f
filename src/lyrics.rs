use std::sync::LazyLock;

use regex::Regex;

/// Sentinel the lyric source returns for tracks without lyrics
/// ("instrumental piece, please enjoy").
pub const INSTRUMENTAL_MARKER: &str = "纯音乐，请欣赏";

/// Credit lines: lyricist, composer, arranger, producer, mixing, recording, mastering.
pub const CREDIT_MARKERS: [&str; 7] = ["作词", "作曲", "编曲", "制作", "混音", "录音", "母带"];

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]").expect("tag pattern is valid"));

/// Reduces raw LRC text to the sung words.
///
/// Timestamp and metadata tags in square brackets are removed, blank lines and
/// credit lines are dropped, and the remaining lines are joined with a single
/// space. Never fails; empty input yields an empty string.
pub fn clean(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let stripped = TAG_RE.replace_all(raw, "");
    stripped
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !is_credit_line(line))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn is_instrumental(raw: &str) -> bool {
    raw.contains(INSTRUMENTAL_MARKER)
}

fn is_credit_line(line: &str) -> bool {
    CREDIT_MARKERS.iter().any(|marker| line.contains(marker))
}
