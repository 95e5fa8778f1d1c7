use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::generate::config::GeneratorConfig;
use crate::generate::output::{Output, OutputFormat};
use crate::generate::vocabulary;

/// Literal prepended to the first sentence of a unit when requested.
const LOREM_PREFIX: &str = "Lorem ipsum ";

/// High-level generator producing words, sentences, and paragraphs.
///
/// # Responsibilities
/// - Resolve the configured vocabulary once at construction
/// - Draw words uniformly, with replacement, from that vocabulary
/// - Compose sentences with probabilistic commas and a terminal period
/// - Compose paragraphs and assemble bulk output in the configured shape
///
/// # Notes
/// - The generator owns its random source; construct one per request when
///   serving concurrent callers.
/// - Apart from advancing the random stream, no call depends on prior
///   calls.
#[derive(Debug)]
pub struct Generator {
	config: GeneratorConfig,
	words: &'static [&'static str],
	rng: StdRng,
}

impl Generator {
	/// Creates a generator seeded from the operating system.
	pub fn new(config: GeneratorConfig) -> Self {
		Self::with_rng(config, StdRng::from_os_rng())
	}

	/// Creates a generator with a fixed seed.
	///
	/// Same seed and same configuration reproduce the same output,
	/// call for call.
	pub fn from_seed(config: GeneratorConfig, seed: u64) -> Self {
		Self::with_rng(config, StdRng::seed_from_u64(seed))
	}

	fn with_rng(config: GeneratorConfig, rng: StdRng) -> Self {
		// Unknown names fall back silently inside the resolver, so the
		// table is always non-empty.
		let words = vocabulary::resolve(config.word_list());
		Self { config, words, rng }
	}

	/// Read access to the configuration this generator was built with.
	pub fn config(&self) -> &GeneratorConfig {
		&self.config
	}

	/// Draws one word uniformly, with replacement.
	pub fn word(&mut self) -> &'static str {
		self.words[self.rng.random_range(0..self.words.len())]
	}

	/// Composes one sentence.
	///
	/// # Parameters
	/// - `prefix_lorem`: prepend the literal `"Lorem ipsum "` before the
	///   first word.
	///
	/// # Behavior
	/// - Word count is drawn in the configured sentence range, then
	///   clamped to the word cap when one is set.
	/// - Each word boundary draws in `[0, comma_rate]`; a 0 places `", "`,
	///   anything else a single space. The last word gets `"."`.
	/// - Only the first character of the result is uppercased, once per
	///   call, so every sentence starts uppercase even mid-paragraph.
	/// - A zero-word draw returns the capitalized empty string (or the
	///   bare prefix), with no period.
	/// - When styling is enabled, markup injection runs on the finished
	///   sentence, punctuation included.
	pub fn sentence(&mut self, prefix_lorem: bool) -> String {
		let (min, max) = self.config.sentence_range();
		let mut count = self.rng.random_range(min..=max);
		if let Some(cap) = self.config.word_cap() {
			count = count.min(cap);
		}

		let mut sentence = String::new();
		if prefix_lorem {
			sentence.push_str(LOREM_PREFIX);
		}

		for position in 0..count {
			sentence.push_str(self.word());
			if position + 1 == count {
				sentence.push('.');
			} else if self.rng.random_range(0..=self.config.comma_rate()) == 0 {
				sentence.push_str(", ");
			} else {
				sentence.push(' ');
			}
		}

		let sentence = capitalize(&sentence);
		if self.config.styling() {
			self.inject_styling(&sentence)
		} else {
			sentence
		}
	}

	/// Wraps random tokens of a finished sentence in inline markup.
	///
	/// Selects up to `max_styled_words` distinct token indices, bounded by
	/// the token count, and wraps each in bold, italic, or link markup
	/// chosen uniformly per token. Tokens come from a plain space split of
	/// the punctuated sentence, so a trailing comma or period can land
	/// inside the wrapper. That is the contract, not a bug to fix here.
	fn inject_styling(&mut self, sentence: &str) -> String {
		let mut tokens: Vec<String> = sentence.split(' ').map(str::to_owned).collect();

		let target = self.config.max_styled_words().min(tokens.len());
		let mut styled: HashSet<usize> = HashSet::new();
		while styled.len() < target {
			let index = self.rng.random_range(0..tokens.len());
			if !styled.insert(index) {
				continue;
			}
			tokens[index] = match self.rng.random_range(0..3) {
				0 => format!("<strong>{}</strong>", tokens[index]),
				1 => format!("<em>{}</em>", tokens[index]),
				_ => format!("<a href=\"#\">{}</a>", tokens[index]),
			};
		}

		tokens.join(" ")
	}

	/// Composes one paragraph.
	///
	/// # Parameters
	/// - `prefix_lorem`: forwarded to the first sentence only.
	/// - `wrap_tag`: when non-empty, the result is wrapped in
	///   `<tag>...</tag>` using the literal tag name. No escaping or
	///   validation; that is the caller's responsibility.
	///
	/// # Behavior
	/// Sentence count is drawn in the configured paragraph range;
	/// sentences are joined with a single space.
	pub fn paragraph(&mut self, prefix_lorem: bool, wrap_tag: &str) -> String {
		let (min, max) = self.config.paragraph_range();
		let count = self.rng.random_range(min..=max);

		let mut sentences = Vec::with_capacity(count);
		for index in 0..count {
			sentences.push(self.sentence(prefix_lorem && index == 0));
		}
		let paragraph = sentences.join(" ");

		if wrap_tag.is_empty() {
			paragraph
		} else {
			format!("<{wrap_tag}>{paragraph}</{wrap_tag}>")
		}
	}

	/// Assembles bulk output in the configured shape.
	///
	/// # Behavior
	/// - `Array`: the vocabulary in stored order; `limit` 0 means all,
	///   otherwise the first `limit` entries (fewer if the vocabulary is
	///   shorter). No randomness on this path.
	/// - `Hash`: the same slice, keyed by decimal string index from "0".
	/// - `Text`: ignores `limit` entirely and returns one paragraph with
	///   no prefix and no wrap tag.
	pub fn output(&mut self, limit: usize) -> Output {
		match self.config.format() {
			OutputFormat::Array => Output::List(self.slice(limit).to_vec()),
			OutputFormat::Hash => Output::Map(
				self.slice(limit)
					.iter()
					.enumerate()
					.map(|(index, word)| (index.to_string(), *word))
					.collect(),
			),
			OutputFormat::Text => Output::Text(self.paragraph(false, "")),
		}
	}

	/// Stored-order vocabulary slice; `limit` 0 means everything.
	fn slice(&self, limit: usize) -> &'static [&'static str] {
		if limit == 0 {
			self.words
		} else {
			&self.words[..limit.min(self.words.len())]
		}
	}
}

/// Uppercases only the first character, leaving the rest untouched.
fn capitalize(text: &str) -> String {
	let mut chars = text.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
