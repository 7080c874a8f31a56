//! Keyword highlighting for assistant answers.
//!
//! Text is scanned case-insensitively for every configured keyword. Hits of
//! different keywords may overlap; they are merged before the text is split
//! into plain and highlighted segments, so the renderer never sees nested or
//! adjacent marks.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightTextSpan {
    pub text: String,
    pub is_highlighted: bool,
    pub index: u64,
}

impl HighlightTextSpan {
    fn plain(text: &str) -> Self {
        Self { text: text.to_string(), is_highlighted: false, index: 0 }
    }

    fn marked(text: &str, index: u64) -> Self {
        Self { text: text.to_string(), is_highlighted: true, index }
    }
}

/// Keywords to highlight. Stored lower-cased; empty keywords are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightConfig {
    keywords: Vec<String>,
}

impl HighlightConfig {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self::new(["pendorya", "özkaynak", "nav", "portföy", "kira", "değer"])
    }
}

/// Half-open byte range `[start, end)` into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "empty or inverted span {start}..{end}");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Lower-cased copy of a text, with every byte of the copy mapped back to the
/// source character that produced it.
struct ScanCopy {
    lower: String,
    source_start: Vec<usize>,
    source_end: Vec<usize>,
}

impl ScanCopy {
    fn new(text: &str) -> Self {
        let mut lower = String::with_capacity(text.len());
        let mut source_start = Vec::with_capacity(text.len());
        let mut source_end = Vec::with_capacity(text.len());
        for (offset, ch) in text.char_indices() {
            let ch_end = offset + ch.len_utf8();
            let before = lower.len();
            lower.extend(ch.to_lowercase());
            for _ in before..lower.len() {
                source_start.push(offset);
                source_end.push(ch_end);
            }
        }
        Self { lower, source_start, source_end }
    }

    /// Translate a range of the lower-cased copy into source coordinates,
    /// widened to whole source characters.
    fn to_source(&self, start: usize, end: usize) -> MatchSpan {
        MatchSpan::new(self.source_start[start], self.source_end[end - 1])
    }
}

/// Every keyword occurrence in `text`, in source-text byte offsets.
///
/// A keyword's own occurrences never overlap (each search resumes after the
/// previous hit), but hits of different keywords can.
pub fn find_keyword_spans(text: &str, config: &HighlightConfig) -> Vec<MatchSpan> {
    if config.is_empty() || text.is_empty() {
        return vec![];
    }
    let scan = ScanCopy::new(text);
    let mut spans = Vec::new();
    for keyword in config.keywords() {
        let mut from = 0;
        while let Some(pos) = scan.lower[from..].find(keyword.as_str()) {
            let start = from + pos;
            let end = start + keyword.len();
            spans.push(scan.to_source(start, end));
            from = end;
        }
    }
    spans
}

/// Sort and merge overlapping or touching spans.
pub fn merge_spans(mut spans: Vec<MatchSpan>) -> Vec<MatchSpan> {
    spans.sort_by_key(|s| s.start);
    spans.into_iter().fold(Vec::new(), |mut merged: Vec<MatchSpan>, span| {
        match merged.last_mut() {
            Some(last) if span.start <= last.end => {
                last.end = last.end.max(span.end);
            }
            _ => merged.push(span),
        }
        merged
    })
}

/// Split `text` around already merged spans.
pub fn split_into_segments(text: &str, merged: &[MatchSpan]) -> Vec<HighlightTextSpan> {
    let mut segments = Vec::with_capacity(merged.len() * 2 + 1);
    let mut cursor = 0;
    let mut index = 0;
    for span in merged {
        if cursor < span.start {
            segments.push(HighlightTextSpan::plain(&text[cursor..span.start]));
        }
        segments.push(HighlightTextSpan::marked(&text[span.start..span.end], index));
        index += 1;
        cursor = span.end;
    }
    if cursor < text.len() {
        segments.push(HighlightTextSpan::plain(&text[cursor..]));
    }
    segments
}

/// Split `text` into plain and highlighted segments for the configured keywords.
pub fn highlight_keywords(text: &str, config: &HighlightConfig) -> Vec<HighlightTextSpan> {
    let spans = find_keyword_spans(text, config);
    if spans.is_empty() {
        return vec![HighlightTextSpan::plain(text)];
    }
    split_into_segments(text, &merge_spans(spans))
}


#[cfg(test)]
mod tests {
    use super::*;

    fn joined(segments: &[HighlightTextSpan]) -> String {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    fn marked(segments: &[HighlightTextSpan]) -> Vec<&str> {
        segments.iter().filter(|s| s.is_highlighted).map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn no_match_returns_single_plain_segment() {
        let text = "Divan Adana oteli 155 odalıdır.";
        let segments = highlight_keywords(text, &HighlightConfig::default());
        assert_eq!(segments, vec![HighlightTextSpan::plain(text)]);
    }

    #[test]
    fn empty_keyword_list_leaves_text_unchanged() {
        let text = "Pendorya AVM";
        let config = HighlightConfig::new(Vec::<String>::new());
        let segments = highlight_keywords(text, &config);
        assert_eq!(segments.len(), 1);
        assert!(!segments[0].is_highlighted);
        assert_eq!(segments[0].text, text);
    }

    #[test]
    fn separate_keywords_give_separate_marks() {
        let text = "Pendorya özkaynak";
        let config = HighlightConfig::new(["pendorya", "özkaynak"]);
        let segments = highlight_keywords(text, &config);
        assert_eq!(marked(&segments), vec!["Pendorya", "özkaynak"]);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[1].text, " ");
    }

    #[test]
    fn touching_matches_merge_into_one_mark() {
        let config = HighlightConfig::new(["ab", "bc"]);
        let segments = highlight_keywords("abc", &config);
        assert_eq!(segments.len(), 1);
        assert!(segments[0].is_highlighted);
        assert_eq!(segments[0].text, "abc");
    }

    #[test]
    fn adjacent_matches_merge() {
        let config = HighlightConfig::new(["nav", "değer"]);
        let segments = highlight_keywords("NAVdeğer yükseldi", &config);
        assert_eq!(marked(&segments), vec!["NAVdeğer"]);
    }

    #[test]
    fn contained_match_does_not_nest() {
        let config = HighlightConfig::new(["portföy", "port"]);
        let segments = highlight_keywords("Portföy toplamı", &config);
        assert_eq!(marked(&segments), vec!["Portföy"]);
    }

    #[test]
    fn keyword_matching_whole_text() {
        let segments = highlight_keywords("KIRA", &HighlightConfig::new(["kira"]));
        assert_eq!(segments.len(), 1);
        assert!(segments[0].is_highlighted);
        assert_eq!(segments[0].text, "KIRA");
    }

    #[test]
    fn marks_preserve_original_casing() {
        let text = "PORTFÖY değeri ve Portföy payı";
        let segments = highlight_keywords(text, &HighlightConfig::default());
        assert_eq!(marked(&segments), vec!["PORTFÖY", "değer", "Portföy"]);
        assert_eq!(joined(&segments), text);
    }

    #[test]
    fn repeated_keyword_occurrences_do_not_overlap_themselves() {
        let spans = find_keyword_spans("aaaa", &HighlightConfig::new(["aa"]));
        assert_eq!(spans, vec![MatchSpan::new(0, 2), MatchSpan::new(2, 4)]);
    }

    #[test]
    fn highlighted_segments_are_numbered_in_order() {
        let text = "kira, nav ve özkaynak";
        let segments = highlight_keywords(text, &HighlightConfig::default());
        let indexes: Vec<u64> = segments.iter().filter(|s| s.is_highlighted).map(|s| s.index).collect();
        assert_eq!(indexes, vec![0, 1, 2]);
    }

    #[test]
    fn round_trip_reproduces_input() {
        let texts = [
            "",
            "nav",
            "Pendorya AVM'nin kira geliri ve NAV değeri",
            "İstanbul portföyü: özkaynak/değer",
            "no keywords here",
        ];
        for text in texts {
            let segments = highlight_keywords(text, &HighlightConfig::default());
            assert_eq!(joined(&segments), text);
        }
    }

    #[test]
    fn length_changing_lowercase_stays_aligned() {
        // 'İ' lower-cases to two chars, shifting every later offset in the scan copy.
        let text = "İİ kira";
        let segments = highlight_keywords(text, &HighlightConfig::new(["kira"]));
        assert_eq!(marked(&segments), vec!["kira"]);
        assert_eq!(joined(&segments), text);
    }

    #[test]
    fn partial_match_inside_expanded_char_covers_whole_char() {
        let text = "İs";
        let spans = find_keyword_spans(text, &HighlightConfig::new(["i"]));
        assert_eq!(spans, vec![MatchSpan::new(0, 'İ'.len_utf8())]);
        let segments = highlight_keywords(text, &HighlightConfig::new(["i"]));
        assert_eq!(marked(&segments), vec!["İ"]);
    }

    #[test]
    fn merge_spans_sorts_and_folds() {
        let spans = vec![
            MatchSpan::new(10, 12),
            MatchSpan::new(0, 3),
            MatchSpan::new(2, 5),
            MatchSpan::new(5, 6),
        ];
        assert_eq!(merge_spans(spans), vec![MatchSpan::new(0, 6), MatchSpan::new(10, 12)]);
    }

    #[test]
    fn config_lowercases_and_drops_empty_keywords() {
        let config = HighlightConfig::new(["NAV", "", "Kira"]);
        assert_eq!(config.keywords(), &["nav".to_string(), "kira".to_string()]);
    }
}
