// =============================================================================
// Deutsch-Jozsa Oracle Runtime - Algorithm Console
// =============================================================================
// Table of Contents:
//   1. Prompt helpers
//   2. main - Synthesis, execution, verdict
// =============================================================================
// Purpose: Interactive demonstration: prompts for an input-qubit count and an
//          oracle type, runs one Deutsch-Jozsa pipeline on the state-vector
//          simulator, and prints the verdict plus the measured distribution.
// =============================================================================

use anyhow::{Context, Result};
use circuit_runtime::execution::DeutschJozsaPipeline;
use circuit_runtime::measurement::MeasurementOutcomeDistribution;
use circuit_runtime::oracle_synthesis::{synthesize_balanced, synthesize_constant};
use rand::rngs::StdRng;
use rand::SeedableRng;
use state_simulation::StateVectorSimulatorBackend;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

// =============================================================================
// 1. Prompt helpers
// =============================================================================

fn prompt_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(line.trim().to_string())
}

fn render_distribution(outcomes: &MeasurementOutcomeDistribution) {
    println!("Measured outcome distribution:");
    for (bitstring, count) in outcomes.sorted_outcomes() {
        let probability = outcomes.probability_of(bitstring);
        let bar = "█".repeat((probability * 40.0) as usize);
        println!("  |{bitstring}⟩: {count} ({:.1}%) {bar}", probability * 100.0);
    }
}

// =============================================================================
// 2. main - Synthesis, execution, verdict
// =============================================================================

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("===================================");
    println!("Deutsch-Jozsa Algorithm Simulation");
    println!("===================================");

    let input_count: usize = prompt_line("> Enter the number of input qubits: ")?
        .parse()
        .context("input qubit count must be a positive integer")?;

    let oracle_type = prompt_line("> Enter the type of oracle (c)onstant/(b)alanced: ")?
        .to_lowercase();

    let mut rng = StdRng::from_entropy();
    let oracle = match oracle_type.as_str() {
        "constant" | "c" => synthesize_constant(input_count, &mut rng)?,
        "balanced" | "b" => synthesize_balanced(input_count, &mut rng)?,
        _ => {
            eprintln!("Invalid oracle type.");
            std::process::exit(1);
        }
    };

    tracing::info!(input_count, kind = ?oracle.kind(), "running Deutsch-Jozsa pipeline");

    let pipeline = DeutschJozsaPipeline::new(StateVectorSimulatorBackend::new());
    let (verdict, outcomes) = pipeline.decide_with_outcomes(oracle)?;

    render_distribution(&outcomes);
    if std::env::args().any(|argument| argument == "--json") {
        println!(
            "{}",
            serde_json::to_string(&outcomes).context("failed to serialize outcomes")?
        );
    }

    println!("Result: {verdict}");
    Ok(())
}
