use serde::Deserialize;
use thiserror::Error;

use crate::generate::output::OutputFormat;

/// Errors raised when a configuration fails validation at build time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
	#[error("sentence length range is inverted: min {min} > max {max}")]
	SentenceRange { min: usize, max: usize },

	#[error("paragraph length range is inverted: min {min} > max {max}")]
	ParagraphRange { min: usize, max: usize },
}

/// Generation settings for a single generator instance.
///
/// `GeneratorConfig` holds both **shape parameters** (sentence and
/// paragraph length ranges, comma rate, word cap) and **selection
/// parameters** (vocabulary name, output format, styling).
///
/// # Responsibilities
/// - Provide sensible defaults for every field
/// - Merge caller-supplied overrides onto those defaults
/// - Reject inverted length ranges at build time
///
/// # Invariants
/// - `sentence_min <= sentence_max` and `paragraph_min <= paragraph_max`
/// - Immutable after construction; generators never mutate it
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
	/// Inclusive bounds on words per sentence.
	sentence_min: usize,
	sentence_max: usize,

	/// Inclusive bounds on sentences per paragraph.
	paragraph_min: usize,
	paragraph_max: usize,

	/// Comma odds per word boundary: roughly 1 in (comma_rate + 1).
	comma_rate: usize,

	/// Whether to wrap random words in inline markup.
	styling: bool,

	/// Upper bound on styled words per sentence.
	max_styled_words: usize,

	/// Vocabulary name, resolved when a generator is built.
	word_list: String,

	/// Output shape for bulk generation.
	format: OutputFormat,

	/// Optional hard cap on words per sentence.
	word_cap: Option<usize>,
}

impl Default for GeneratorConfig {
	fn default() -> Self {
		Self {
			sentence_min: 5,
			sentence_max: 15,
			paragraph_min: 3,
			paragraph_max: 7,
			comma_rate: 8,
			styling: false,
			max_styled_words: 2,
			word_list: "latin".to_owned(),
			format: OutputFormat::Text,
			word_cap: None,
		}
	}
}

/// Caller-supplied overrides, all optional.
///
/// Deserializes from camelCase keys so a query string or JSON document
/// maps onto it directly. Absent fields keep their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigOverrides {
	pub sentence_min: Option<usize>,
	pub sentence_max: Option<usize>,
	pub paragraph_min: Option<usize>,
	pub paragraph_max: Option<usize>,
	pub comma_rate: Option<usize>,
	pub styling: Option<bool>,
	pub max_styled_words: Option<usize>,
	pub word_list: Option<String>,
	pub format: Option<String>,
	pub word_cap: Option<usize>,
}

impl GeneratorConfig {
	/// Merges overrides onto defaults and validates the result.
	///
	/// # Errors
	/// Returns an error if either length range ends up inverted.
	///
	/// # Notes
	/// - Format names are parsed leniently (unknown names mean text).
	/// - Vocabulary names are kept as-is; resolution and its silent
	///   fallback happen when a generator is built.
	pub fn from_overrides(overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
		let defaults = Self::default();

		let config = Self {
			sentence_min: overrides.sentence_min.unwrap_or(defaults.sentence_min),
			sentence_max: overrides.sentence_max.unwrap_or(defaults.sentence_max),
			paragraph_min: overrides.paragraph_min.unwrap_or(defaults.paragraph_min),
			paragraph_max: overrides.paragraph_max.unwrap_or(defaults.paragraph_max),
			comma_rate: overrides.comma_rate.unwrap_or(defaults.comma_rate),
			styling: overrides.styling.unwrap_or(defaults.styling),
			max_styled_words: overrides.max_styled_words.unwrap_or(defaults.max_styled_words),
			word_list: overrides.word_list.clone().unwrap_or(defaults.word_list),
			format: overrides
				.format
				.as_deref()
				.map(OutputFormat::parse)
				.unwrap_or(defaults.format),
			word_cap: overrides.word_cap.or(defaults.word_cap),
		};

		config.validate()?;
		Ok(config)
	}

	fn validate(&self) -> Result<(), ConfigError> {
		if self.sentence_min > self.sentence_max {
			return Err(ConfigError::SentenceRange {
				min: self.sentence_min,
				max: self.sentence_max,
			});
		}
		if self.paragraph_min > self.paragraph_max {
			return Err(ConfigError::ParagraphRange {
				min: self.paragraph_min,
				max: self.paragraph_max,
			});
		}
		Ok(())
	}

	/// Inclusive words-per-sentence bounds.
	pub fn sentence_range(&self) -> (usize, usize) {
		(self.sentence_min, self.sentence_max)
	}

	/// Inclusive sentences-per-paragraph bounds.
	pub fn paragraph_range(&self) -> (usize, usize) {
		(self.paragraph_min, self.paragraph_max)
	}

	/// Comma draw bound: a draw in `[0, comma_rate]` equal to 0 places a comma.
	pub fn comma_rate(&self) -> usize {
		self.comma_rate
	}

	/// Whether inline markup injection is enabled.
	pub fn styling(&self) -> bool {
		self.styling
	}

	/// Upper bound on styled words per sentence.
	pub fn max_styled_words(&self) -> usize {
		self.max_styled_words
	}

	/// Vocabulary name as supplied by the caller.
	pub fn word_list(&self) -> &str {
		&self.word_list
	}

	/// Output shape for bulk generation.
	pub fn format(&self) -> OutputFormat {
		self.format
	}

	/// Optional hard cap on words per sentence.
	pub fn word_cap(&self) -> Option<usize> {
		self.word_cap
	}
}
