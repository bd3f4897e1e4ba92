// src/highlight.rs
//! Marker-based highlighting of the query inside a matched meaning, for UI
//! consumers that render `**...**` as emphasis.

pub const DEFAULT_HIGHLIGHT_TAG: &str = "**";

/// Wrap every case-insensitive occurrence of `needle` in `text` with `tag`,
/// keeping the original casing of the matched slice. Matching runs on the
/// full-string lowercase form, the same form the meaning filter uses, so
/// every entry the filter admits gets markers — including glosses where
/// lowercasing expands a char (e.g. `İ` → `i` + combining dot). Matches do
/// not overlap. An empty needle returns the text unchanged.
pub fn highlight_meaning(text: &str, needle: &str, tag: &str) -> String {
    if needle.is_empty() {
        return text.to_string();
    }
    let needle_lower = needle.to_lowercase();

    // Lowercased copy plus, per lowered byte, the byte range of the original
    // char that produced it, so matches land back on original boundaries.
    let mut lowered = String::with_capacity(text.len());
    let mut spans: Vec<(usize, usize)> = Vec::with_capacity(text.len());
    for (at, ch) in text.char_indices() {
        let end = at + ch.len_utf8();
        for lc in ch.to_lowercase() {
            for _ in 0..lc.len_utf8() {
                spans.push((at, end));
            }
            lowered.push(lc);
        }
    }

    let mut out = String::with_capacity(text.len() + tag.len() * 4);
    let mut cursor = 0; // byte position in the original text
    let mut search_from = 0; // byte position in the lowered copy
    while let Some(rel) = lowered[search_from..].find(&needle_lower) {
        let lstart = search_from + rel;
        let lend = lstart + needle_lower.len();
        let ostart = spans[lstart].0;
        let oend = spans[lend - 1].1;
        search_from = lend;
        if ostart < cursor {
            // Lands inside an already-emitted span; skip it.
            continue;
        }
        out.push_str(&text[cursor..ostart]);
        out.push_str(tag);
        out.push_str(&text[ostart..oend]);
        out.push_str(tag);
        cursor = oend;
    }
    out.push_str(&text[cursor..]);
    out
}
