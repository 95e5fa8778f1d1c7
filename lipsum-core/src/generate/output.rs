use std::collections::BTreeMap;

use serde::Serialize;

/// Shape of the bulk output produced by the generator.
///
/// Parsed leniently from caller-supplied names: unrecognized names fall
/// back to paragraph text, mirroring the vocabulary resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
	/// One paragraph of generated text. Ignores any slice limit.
	#[default]
	Text,
	/// The vocabulary as an ordered list, in stored order.
	Array,
	/// The vocabulary as an index-keyed map, in stored order.
	Hash,
}

impl OutputFormat {
	/// Parses a format name. Unknown names (anything but `"array"` and
	/// `"hash"`) silently select paragraph text.
	pub fn parse(name: &str) -> Self {
		match name {
			"array" => Self::Array,
			"hash" => Self::Hash,
			_ => Self::Text,
		}
	}
}

/// Bulk generation result.
///
/// Serializes untagged so the wire value is directly a string, an array
/// of strings, or an object keyed by decimal string indices.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Output {
	Text(String),
	List(Vec<&'static str>),
	Map(BTreeMap<String, &'static str>),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_falls_back_to_text() {
		assert_eq!(OutputFormat::parse("array"), OutputFormat::Array);
		assert_eq!(OutputFormat::parse("hash"), OutputFormat::Hash);
		assert_eq!(OutputFormat::parse("string"), OutputFormat::Text);
		assert_eq!(OutputFormat::parse("yaml"), OutputFormat::Text);
		assert_eq!(OutputFormat::parse(""), OutputFormat::Text);
	}
}
