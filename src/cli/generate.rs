use crate::errors::Result;
use crate::generator::Generator;
use crate::grammar::Grammar;
use crate::meaning;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Outputs a randomly generated sentence and its meaning. A seed makes the
/// generated sentence reproducible.
pub fn output(g: &Grammar, max_depth: usize, seed: Option<u64>) -> Result<()> {
    let generator = Generator::new(g)?;

    let sentence = match seed {
        Some(seed) => generator.generate(&mut StdRng::seed_from_u64(seed), max_depth),
        None => generator.generate(&mut rand::thread_rng(), max_depth),
    };

    println!("{}", sentence);
    println!("Meaning: {}", meaning::describe(&sentence));

    Ok(())
}
