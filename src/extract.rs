use regex::Regex;

/// Extracts raw link targets from markdown text.
///
/// Two syntaxes are recognized and matched independently: inline links
/// `[label](target)` and reference-style links `[label][ref]`. The results
/// of the two passes are concatenated; a run of text matched by one pattern
/// is not excluded from matching the other, and duplicate targets are kept.
pub struct LinkExtractor {
    inline: Regex,
    reference: Regex,
}

impl LinkExtractor {
    /// Compile the two link patterns.
    ///
    /// # Panics
    ///
    /// Panics if the hardcoded link regexes are invalid (compile-time
    /// invariant).
    pub fn new() -> Self {
        Self {
            inline: Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid regex"),
            reference: Regex::new(r"\[([^\]]+)\]\[([^\]]+)\]").expect("valid regex"),
        }
    }

    /// Return every raw link target in `content`, in first-occurrence order
    /// per pattern: all inline targets first, then all reference-style
    /// targets.
    ///
    /// Reference-style matches emit the label text, not the reference id:
    /// `[Some Guide][guide]` yields `Some Guide`. The reference id is never
    /// resolved separately.
    pub fn extract(&self, content: &str) -> Vec<String> {
        let mut links = Vec::new();
        for cap in self.inline.captures_iter(content) {
            links.push(cap[2].to_string());
        }
        for cap in self.reference.captures_iter(content) {
            links.push(cap[1].to_string());
        }
        links
    }
}

impl Default for LinkExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_link_emits_target() {
        let extractor = LinkExtractor::new();
        let links = extractor.extract("See [the guide](guide.md) for details.");
        assert_eq!(links, vec!["guide.md"]);
    }

    #[test]
    fn inline_targets_keep_anchor_fragments() {
        let extractor = LinkExtractor::new();
        let links = extractor.extract("Jump to [setup](guide.md#setup).");
        assert_eq!(links, vec!["guide.md#setup"]);
    }

    #[test]
    fn multiple_inline_links_in_text_order() {
        let extractor = LinkExtractor::new();
        let content = "[a](one.md) then [b](two.md) then [c](three.md)";
        assert_eq!(extractor.extract(content), vec!["one.md", "two.md", "three.md"]);
    }

    #[test]
    fn duplicates_are_preserved() {
        let extractor = LinkExtractor::new();
        let content = "[x](same.md) and again [y](same.md)";
        assert_eq!(extractor.extract(content), vec!["same.md", "same.md"]);
    }

    #[test]
    fn label_not_reference_id_is_emitted() {
        let extractor = LinkExtractor::new();
        let links = extractor.extract("See [Some Guide][guide] for details.");
        assert_eq!(links, vec!["Some Guide"]);
    }

    #[test]
    fn inline_matches_come_before_reference_matches() {
        let extractor = LinkExtractor::new();
        let content = "[Ref Label][ref-id] then [inline](inline.md)";
        assert_eq!(extractor.extract(content), vec!["inline.md", "Ref Label"]);
    }

    #[test]
    fn overlapping_syntax_is_reported_by_both_patterns() {
        let extractor = LinkExtractor::new();
        // `[b]` serves as the reference id of `[a][b]` and the label of
        // `[b](c.md)` at the same time; both passes report their match.
        let links = extractor.extract("[a][b](c.md)");
        assert_eq!(links, vec!["c.md", "a"]);
    }

    #[test]
    fn angle_bracket_links_are_not_recognized() {
        let extractor = LinkExtractor::new();
        assert!(extractor.extract("Visit <https://example.com> now.").is_empty());
    }

    #[test]
    fn empty_brackets_do_not_match() {
        let extractor = LinkExtractor::new();
        assert!(extractor.extract("[]() and [][]").is_empty());
    }

    #[test]
    fn spans_multiple_lines_of_a_document() {
        let extractor = LinkExtractor::new();
        let content = "# Title\n\n[first](a.md)\n\nprose\n\n[second](b/c.md)\n";
        assert_eq!(extractor.extract(content), vec!["a.md", "b/c.md"]);
    }
}
