use clap::Parser;
use jobflow::record::{ApplicationRecord, ApplicationStatus};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::fs;

const COMPANIES: [&str; 10] = [
    "Acme", "Globex", "Initech", "Umbrella", "Hooli", "Stark Industries", "Wayne Enterprises",
    "Soylent", "Vandelay", "Wonka",
];

const POSITIONS: [&str; 6] = [
    "Backend Engineer",
    "Frontend Developer",
    "Data Scientist",
    "Product Designer",
    "Site Reliability Engineer",
    "Research Engineer",
];

/// Statuses the backend knows, weighted roughly like a real job search.
const STATUS_WEIGHTS: [(&str, u32); 5] = [
    ("applied", 50),
    ("interview", 20),
    ("rejected", 18),
    ("accepted", 4),
    ("withdrawn", 8),
];

/// Misspelled or legacy statuses, used to exercise unknown-status handling.
const UNKNOWN_STATUSES: [&str; 4] = ["ghosted", "offer", "Interview", ""];

/// A CLI tool to generate sample application lists for jobflow
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_applications.json")]
    output: String,

    /// The number of applications to generate
    #[arg(short, long, default_value_t = 40)]
    count: usize,

    /// Fraction of applications (0.0 to 1.0) that get an unrecognized status
    #[arg(long, default_value_t = 0.0)]
    unknown_ratio: f64,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    if !(0.0..=1.0).contains(&cli.unknown_ratio) {
        eprintln!(
            "Error: --unknown-ratio ({}) must be between 0.0 and 1.0",
            cli.unknown_ratio
        );
        std::process::exit(1);
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    tracing::info!(
        count = cli.count,
        unknown_ratio = cli.unknown_ratio,
        "generating applications"
    );

    let applications = (0..cli.count)
        .map(|i| generate_application(&mut rng, i as u64 + 1, cli.unknown_ratio))
        .collect::<Result<Vec<_>, _>>()?;

    let json_output = serde_json::to_string_pretty(&applications)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated {} applications and saved them to '{}'",
        applications.len(),
        cli.output
    );

    Ok(())
}

fn generate_application(
    rng: &mut StdRng,
    id: u64,
    unknown_ratio: f64,
) -> Result<ApplicationRecord, Box<dyn std::error::Error>> {
    let company = COMPANIES.choose(rng).copied().unwrap_or("Acme");
    let position = POSITIONS.choose(rng).copied().unwrap_or("Engineer");
    let status = if rng.random_bool(unknown_ratio) {
        ApplicationStatus::from(UNKNOWN_STATUSES.choose(rng).copied().unwrap_or("ghosted"))
    } else {
        let (status, _) = STATUS_WEIGHTS.choose_weighted(rng, |(_, weight)| *weight)?;
        ApplicationStatus::from(*status)
    };

    Ok(ApplicationRecord::new(company, status)
        .with_id(id)
        .with_position(position)
        .with_applied_date(random_date(rng)))
}

fn random_date(rng: &mut StdRng) -> String {
    let month = rng.random_range(1..=12);
    let day = rng.random_range(1..=28);
    format!("2025-{:02}-{:02}", month, day)
}
