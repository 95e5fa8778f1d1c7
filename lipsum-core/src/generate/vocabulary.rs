use lazy_static::lazy_static;

/// Classic Latin filler vocabulary.
const LATIN: &[&str] = &[
	"lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit",
	"sed", "do", "eiusmod", "tempor", "incididunt", "ut", "labore", "et",
	"dolore", "magna", "aliqua", "enim", "ad", "minim", "veniam", "quis",
	"nostrud", "exercitation", "ullamco", "laboris", "nisi", "aliquip", "ex", "ea",
	"commodo", "consequat", "duis", "aute", "irure", "in", "reprehenderit", "voluptate",
	"velit", "esse", "cillum", "eu", "fugiat", "nulla", "pariatur", "excepteur",
	"sint", "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui",
	"officia", "deserunt", "mollit", "anim", "id", "est", "laborum",
];

/// Medieval-flavoured filler vocabulary.
const MEDIEVAL: &[&str] = &[
	"knight", "castle", "dragon", "squire", "jester", "quest", "sword", "shield",
	"armour", "steed", "banner", "crown", "throne", "kingdom", "village", "peasant",
	"bard", "minstrel", "tavern", "mead", "ale", "feast", "siege", "catapult",
	"moat", "drawbridge", "dungeon", "tower", "wizard", "sorcery", "scroll", "parchment",
	"quill", "monk", "abbey", "cloister", "pilgrim", "crusade", "herald", "duke",
	"baron", "king", "queen", "prince", "maiden", "blacksmith", "forge", "anvil",
	"chainmail", "longbow", "arrow", "lance", "joust", "tournament", "chivalry", "oath",
	"fealty", "vassal", "serf", "alchemy", "potion", "relic", "grail", "falconer",
];

lazy_static! {
	/// Concatenation of both tables, latin entries first. Built once.
	static ref BOTH: Vec<&'static str> = LATIN.iter().chain(MEDIEVAL.iter()).copied().collect();
}

/// Names accepted by [`resolve`] without falling back.
pub fn names() -> &'static [&'static str] {
	&["latin", "medieval", "both"]
}

/// Resolves a vocabulary name to its word table.
///
/// # Behavior
/// - `"latin"` returns the Latin table.
/// - `"both"` returns the concatenation of both tables, latin words first.
/// - Any other name (including `"medieval"`, the empty string, and unknown
///   values) returns the medieval table. Unknown names are a silent
///   fallback, never an error.
pub fn resolve(name: &str) -> &'static [&'static str] {
	match name {
		"latin" => LATIN,
		"both" => BOTH.as_slice(),
		_ => MEDIEVAL,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn known_names_resolve_to_distinct_tables() {
		assert!(!resolve("latin").is_empty());
		assert!(!resolve("medieval").is_empty());
		assert_ne!(resolve("latin")[0], resolve("medieval")[0]);
	}

	#[test]
	fn both_concatenates_latin_first() {
		let latin = resolve("latin");
		let medieval = resolve("medieval");
		let both = resolve("both");

		assert_eq!(both.len(), latin.len() + medieval.len());
		assert_eq!(&both[..latin.len()], latin);
		assert_eq!(&both[latin.len()..], medieval);
	}

	#[test]
	fn unknown_names_fall_back_to_medieval() {
		assert_eq!(resolve(""), resolve("medieval"));
		assert_eq!(resolve("klingon"), resolve("medieval"));
		assert_eq!(resolve("LATIN"), resolve("medieval"));
	}

	#[test]
	fn resolution_is_order_stable() {
		assert_eq!(resolve("both"), resolve("both"));
		assert_eq!(resolve("latin"), resolve("latin"));
	}
}
