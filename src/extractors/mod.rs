// src/extractors/mod.rs
pub mod heading;
pub mod section;
pub mod tree;

// Re-export key extraction types for convenience
pub use heading::{scan_headings, Heading};
pub use section::{ExtractedSection, SectionExtractor};
pub use tree::{build_tree, Node};
