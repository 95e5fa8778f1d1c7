//! Placeholder-text generation library.
//!
//! This crate provides a small filler-text generation system including:
//! - Built-in word vocabularies ("latin", "medieval", and their concatenation)
//! - Sentence composition with probabilistic comma placement
//! - Paragraph composition with optional wrap tags
//! - Optional inline markup injection (bold, italic, link)
//! - Bulk output in three shapes (text, ordered list, index-keyed map)
//!
//! Only the high-level API is exposed publicly. Low-level helpers
//! are kept internal to ensure consistency and prevent misuse.

/// Vocabulary tables, configuration, and generation logic.
///
/// This module exposes the high-level generator interface while keeping
/// internal helpers private.
pub mod generate;
