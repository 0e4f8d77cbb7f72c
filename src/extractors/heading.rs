// src/extractors/heading.rs

// --- Imports ---
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

// --- Regex Patterns (Lazy Static) ---
// ATX heading: 1-6 hashes, at least one whitespace, text up to trailing whitespace.
// A seventh '#' is neither whitespace nor allowed by the quantifier, so the line is rejected.
static HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(#{1,6})\s+(.+?)\s*$").expect("Failed to compile HEADING_RE")
});

// Fence delimiter, matched against the trimmed line.
static FENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:`{3,}|~{3,})").expect("Failed to compile FENCE_RE")
});

// Closing hash run, e.g. the "###" in "## Title ###".
static CLOSING_HASHES_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s*#+\s*$").expect("Failed to compile CLOSING_HASHES_RE")
});

// --- Data Structures ---
/// A heading line found in a document, with byte offsets into that document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub level: usize,
    pub text: String,
    /// Byte offset where the heading line begins.
    pub offset: usize,
    /// Byte offset just past the heading line, line terminator included.
    pub line_end: usize,
}

/// Characters that end a line. `\r\n` counts as a single terminator.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Iterator over `(line, full_len)` pairs, where `line` excludes its terminator
/// and `full_len` includes it. The last line may have no terminator.
struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = (&'a str, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let rest = self.rest;
        let (line, full_len) = match rest.char_indices().find(|&(_, c)| is_line_break(c)) {
            Some((i, '\r')) if rest[i + 1..].starts_with('\n') => (&rest[..i], i + 2),
            Some((i, c)) => (&rest[..i], i + c.len_utf8()),
            None => (rest, rest.len()),
        };
        self.rest = &rest[full_len..];
        Some((line, full_len))
    }
}

fn lines(content: &str) -> Lines<'_> {
    Lines { rest: content }
}

/// Strips a trailing closing `#` sequence and surrounding whitespace.
fn normalize_heading_text(text: &str) -> String {
    CLOSING_HASHES_RE.replace(text, "").trim().to_string()
}

/// Returns the fence character if the trimmed line opens or closes a code fence.
fn fence_char(line: &str) -> Option<char> {
    let trimmed = line.trim();
    FENCE_RE.find(trimmed).and_then(|m| m.as_str().chars().next())
}

/// Scans `content` line by line and returns its headings in document order.
///
/// Lines inside fenced code blocks are skipped. Fence state is a single
/// character: a fence only closes on a delimiter of the same character, and an
/// unterminated fence hides every heading after it.
pub fn scan_headings(content: &str) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut offset = 0;
    let mut in_fence: Option<char> = None;

    for (line, full_len) in lines(content) {
        if let Some(fence) = fence_char(line) {
            match in_fence {
                None => {
                    tracing::trace!("Opening '{}' fence at offset {}", fence, offset);
                    in_fence = Some(fence);
                }
                Some(open) if open == fence => {
                    tracing::trace!("Closing '{}' fence at offset {}", fence, offset);
                    in_fence = None;
                }
                Some(_) => {}
            }
        }

        if in_fence.is_none() {
            if let Some(caps) = HEADING_RE.captures(line) {
                let level = caps[1].len();
                let text = normalize_heading_text(&caps[2]);
                tracing::trace!("Found level {} heading '{}' at offset {}", level, text, offset);
                headings.push(Heading {
                    level,
                    text,
                    offset,
                    line_end: offset + full_len,
                });
            }
        }

        offset += full_len;
    }

    if in_fence.is_some() {
        tracing::debug!("Document ends inside an unterminated code fence");
    }
    tracing::debug!("Scanned {} bytes, found {} headings", content.len(), headings.len());

    headings
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn levels_and_texts(content: &str) -> Vec<(usize, String)> {
        scan_headings(content)
            .into_iter()
            .map(|h| (h.level, h.text))
            .collect()
    }

    #[test]
    fn level_matches_marker_count() {
        let doc = "# One\n## Two\n### Three\n#### Four\n##### Five\n###### Six\n";
        let found = levels_and_texts(doc);
        assert_eq!(found.len(), 6);
        for (i, (level, _)) in found.iter().enumerate() {
            assert_eq!(*level, i + 1);
        }
        assert_eq!(found[5].1, "Six");
    }

    #[test]
    fn seven_hashes_is_not_a_heading() {
        assert!(scan_headings("####### Too deep\n").is_empty());
    }

    #[test]
    fn requires_whitespace_after_markers() {
        assert!(scan_headings("#hashtag\n").is_empty());
        assert_eq!(levels_and_texts("#\tTabbed\n"), vec![(1, "Tabbed".to_string())]);
    }

    #[test]
    fn strips_closing_hashes_and_whitespace() {
        assert_eq!(
            levels_and_texts("## Title ###   \n# Spaced   \n"),
            vec![(2, "Title".to_string()), (1, "Spaced".to_string())]
        );
    }

    #[test]
    fn offsets_cover_the_heading_line() {
        let doc = "intro\n# A\nbody\n## B";
        let headings = scan_headings(doc);
        assert_eq!(headings.len(), 2);
        assert_eq!(headings[0].offset, 6);
        assert_eq!(headings[0].line_end, 10);
        assert_eq!(&doc[headings[0].offset..headings[0].line_end], "# A\n");
        // Last line has no newline: line_end is the document length.
        assert_eq!(headings[1].offset, 15);
        assert_eq!(headings[1].line_end, doc.len());
    }

    #[test]
    fn headings_inside_fences_are_skipped() {
        let doc = "# Real\n```\n# Not a heading\n```\n~~~~\n## Also not\n~~~~\n## After\n";
        assert_eq!(
            levels_and_texts(doc),
            vec![(1, "Real".to_string()), (2, "After".to_string())]
        );
    }

    #[test]
    fn indented_fence_toggles_state() {
        let doc = "   ```rust\n# hidden\n  ```\n# shown\n";
        assert_eq!(levels_and_texts(doc), vec![(1, "shown".to_string())]);
    }

    #[test]
    fn mismatched_fence_char_does_not_close() {
        let doc = "```\n~~~\n# still code\n```\n# visible\n";
        assert_eq!(levels_and_texts(doc), vec![(1, "visible".to_string())]);
    }

    #[test]
    fn unterminated_fence_hides_the_rest() {
        let doc = "# Before\n```\n# After\n## Later\n";
        assert_eq!(levels_and_texts(doc), vec![(1, "Before".to_string())]);
    }

    #[test]
    fn crlf_line_endings() {
        let doc = "# One\r\ntext\r\n## Two\r\n";
        let headings = scan_headings(doc);
        assert_eq!(headings[0].text, "One");
        assert_eq!(headings[0].line_end, 7);
        assert_eq!(headings[1].text, "Two");
        assert_eq!(headings[1].offset, 13);
    }

    #[test]
    fn carriage_return_only_line_endings() {
        let doc = "# A\rfoo\r## B\rbar\r# C\r";
        let headings = scan_headings(doc);
        let texts: Vec<_> = headings.iter().map(|h| (h.level, h.text.as_str())).collect();
        assert_eq!(texts, vec![(1, "A"), (2, "B"), (1, "C")]);
        assert_eq!((headings[0].offset, headings[0].line_end), (0, 4));
        assert_eq!((headings[1].offset, headings[1].line_end), (8, 13));
        assert_eq!((headings[2].offset, headings[2].line_end), (17, doc.len()));
        assert!(headings.iter().all(|h| !h.text.contains('\r')));
    }

    #[test]
    fn form_feed_and_unicode_separators_end_lines() {
        assert_eq!(levels_and_texts("intro\x0c# Page\n"), vec![(1, "Page".to_string())]);

        let doc = "# One\u{2028}## Two\u{2029}text";
        let headings = scan_headings(doc);
        assert_eq!(headings.len(), 2);
        assert_eq!(headings[0].line_end, "# One\u{2028}".len());
        assert_eq!(headings[1].offset, headings[0].line_end);
    }

    #[test]
    fn line_splitting_keeps_terminator_lengths() {
        let split: Vec<_> = lines("a\r\nb\rc\n\nd").collect();
        assert_eq!(split, vec![("a", 3), ("b", 2), ("c", 2), ("", 1), ("d", 1)]);
    }

    #[test]
    fn offsets_are_bytes_for_multibyte_text() {
        let doc = "# Über\n## Café\n";
        let headings = scan_headings(doc);
        assert_eq!(headings[1].offset, "# Über\n".len());
        assert_eq!(headings[1].text, "Café");
    }

    #[test]
    fn empty_document_has_no_headings() {
        assert!(scan_headings("").is_empty());
    }
}
