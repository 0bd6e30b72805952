use pwgen_core::{GenerationMode, Policy};
use pwgen_generate::{GenerateOptions, GenerationEngine, RngSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let policy = Policy {
        length: 12,
        require_symbol: true,
        ..Policy::default()
    };
    let engine = GenerationEngine::new(policy, GenerationMode::Phonemes, GenerateOptions::default())?;
    let result = engine.run(8, &mut RngSource::seeded(7))?;
    for password in &result.passwords {
        println!("{password}");
    }
    println!("{}", serde_json::to_string_pretty(&result.totals)?);
    Ok(())
}
