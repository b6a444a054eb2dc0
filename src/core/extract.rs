use crate::domain::model::Codepoint;
use regex::Regex;
use std::sync::OnceLock;

fn codepoint_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"U\+([0-9a-fA-F]+)").unwrap())
}

/// Lazily yields every `U+<hex>` in `body`, in order, without overlaps.
pub fn scan(body: &str) -> impl Iterator<Item = Codepoint> + '_ {
    codepoint_pattern()
        .captures_iter(body)
        .map(|caps| Codepoint::new(&caps[1]))
}

pub fn extract_codepoints(body: &str) -> Vec<Codepoint> {
    scan(body).collect()
}
