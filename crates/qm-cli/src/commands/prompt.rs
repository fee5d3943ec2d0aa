use rand::SeedableRng;
use rand::rngs::StdRng;

use qm_core::random_prompt;

pub fn run(seed: Option<u64>) -> Result<(), String> {
    let prompt = match seed {
        Some(seed) => random_prompt(&mut StdRng::seed_from_u64(seed)),
        None => random_prompt(&mut rand::rng()),
    };
    println!("{prompt}");
    Ok(())
}
