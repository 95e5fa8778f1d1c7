use lipsum_core::generate::config::{ConfigOverrides, GeneratorConfig};
use lipsum_core::generate::generator::Generator;
use lipsum_core::generate::vocabulary;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The built-in vocabularies; unknown names resolve to "medieval"
    for name in vocabulary::names() {
        println!("{}: {} words", name, vocabulary::resolve(name).len());
    }

    // Overrides merge onto defaults; absent fields keep their default value
    let overrides = ConfigOverrides {
        // Words per sentence, inclusive bounds
        sentence_min: Some(4),
        sentence_max: Some(10),

        // Roughly 1 comma in (commaRate + 1) word boundaries
        comma_rate: Some(5),

        // Wrap up to two random words per sentence in inline markup
        styling: Some(true),
        max_styled_words: Some(2),

        // "latin", "medieval", or "both" (latin words first)
        word_list: Some("both".to_owned()),

        ..ConfigOverrides::default()
    };
    let config = GeneratorConfig::from_overrides(&overrides)?;

    // Attempting to build a configuration with an inverted range
    let inverted = ConfigOverrides {
        sentence_min: Some(9),
        sentence_max: Some(3),
        ..ConfigOverrides::default()
    };
    match GeneratorConfig::from_overrides(&inverted) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Inverted range is rejected: {}", e),
    }

    // A fixed seed reproduces the same output; use Generator::new for
    // an OS-seeded one
    let mut generator = Generator::from_seed(config, 97);

    // Single words, drawn uniformly with replacement
    for i in 0..5 {
        println!("Word {}: {}", i + 1, generator.word());
    }

    // One sentence with the literal "Lorem ipsum " prefix
    println!("{}", generator.sentence(true));

    // One paragraph, prefix on the first sentence only, wrapped in <p>
    println!("{}", generator.paragraph(true, "p"));

    // Bulk output in the configured shape; "limit" only matters for the
    // array and hash shapes
    println!("{:?}", generator.output(10));

    Ok(())
}
