//! Top-level module for the placeholder-text generation system.
//!
//! This crate provides a vocabulary-driven filler-text generator, including:
//! - Built-in word tables and a name-based resolver (`vocabulary`)
//! - Merged, validated generation settings (`GeneratorConfig`)
//! - Output shapes for bulk generation (`Output`, `OutputFormat`)
//! - A high-level generation interface (`Generator`)

/// High-level interface for generating words, sentences, and paragraphs.
///
/// Exposes seedable construction, sentence and paragraph composition,
/// inline markup injection, and bulk output assembly.
pub mod generator;

/// Built-in word vocabularies and the name resolver.
///
/// Tables are immutable and process-wide; the derived concatenation is
/// built once on first use.
pub mod vocabulary;

/// Generation settings merged from caller overrides onto defaults.
///
/// Validates length ranges at build time and parses output-format names
/// leniently.
pub mod config;

/// Output shapes for bulk generation.
///
/// A single serializable enum so boundaries can emit any shape without
/// per-shape glue.
pub mod output;
