// src/extractors/section.rs

// --- Imports ---
use crate::extractors::heading::Heading;
use crate::utils::error::{ExtractError, MAX_LISTED_CANDIDATES};

// --- Data Structures ---
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedSection {
    pub heading: Heading, // The heading that opened the section
    pub content: String,  // Trimmed body text, nested subsections included
}

/// How the requested name was matched against the document's headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchKind {
    Exact,
    Substring,
}

// --- Main Extractor Structure ---
pub struct SectionExtractor;

impl SectionExtractor {
    pub fn new() -> Self { Self {} }

    /// Extracts the body of the section whose heading matches `section_name`.
    ///
    /// An exact (case-insensitive) heading match wins. Otherwise the name must be a
    /// substring of exactly one heading.
    pub fn extract(
        &self,
        content: &str,
        headings: &[Heading],
        section_name: &str,
    ) -> Result<ExtractedSection, ExtractError> {
        let (index, kind) = self.find_heading(headings, section_name)?;
        let heading = &headings[index];
        tracing::debug!("Matched section '{}' to heading '{}' ({:?})", section_name, heading.text, kind);

        let (start, end) = self.section_bounds(content, headings, index);
        tracing::debug!("Section '{}' spans bytes {}..{}", heading.text, start, end);

        Ok(ExtractedSection {
            heading: heading.clone(),
            content: content[start..end].trim().to_string(),
        })
    }

    /// Finds the index of the heading selected by `section_name`.
    fn find_heading(
        &self,
        headings: &[Heading],
        section_name: &str,
    ) -> Result<(usize, MatchKind), ExtractError> {
        let target = section_name.trim().to_lowercase();

        if let Some(index) = headings.iter().position(|h| h.text.to_lowercase() == target) {
            return Ok((index, MatchKind::Exact));
        }

        let partial: Vec<usize> = headings
            .iter()
            .enumerate()
            .filter(|(_, h)| h.text.to_lowercase().contains(&target))
            .map(|(i, _)| i)
            .collect();

        match partial.as_slice() {
            [] => Err(ExtractError::SectionNotFound { name: section_name.to_string() }),
            [index] => Ok((*index, MatchKind::Substring)),
            many => {
                tracing::debug!("'{}' matched {} headings", section_name, many.len());
                Err(ExtractError::SectionAmbiguous {
                    name: section_name.to_string(),
                    candidates: many
                        .iter()
                        .take(MAX_LISTED_CANDIDATES)
                        .map(|&i| headings[i].text.clone())
                        .collect(),
                    truncated: many.len() > MAX_LISTED_CANDIDATES,
                })
            }
        }
    }

    /// Byte range of the body under `headings[index]`, before trimming.
    ///
    /// The body starts after the heading's own line (terminator included) and stops at
    /// the next heading of the same or a shallower level, or at the end of the document.
    fn section_bounds(&self, content: &str, headings: &[Heading], index: usize) -> (usize, usize) {
        let heading = &headings[index];

        let start = heading.line_end;
        let end = headings[index + 1..]
            .iter()
            .find(|h| h.level <= heading.level)
            .map_or(content.len(), |h| h.offset);

        (start, end)
    }
}

impl Default for SectionExtractor {
    fn default() -> Self {
        Self::new()
    }
}
