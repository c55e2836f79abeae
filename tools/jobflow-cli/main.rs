use clap::{Parser, ValueEnum};
use jobflow::prelude::*;
use std::io::{self, Write};
use std::time::Instant;
use tracing::Level;

/// CLI-side mirror of `AggregatorChoice` for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeCli {
    Stages,
    Companies,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputCli {
    /// Compact JSON, ready for a Sankey renderer
    Json,
    /// Indented JSON
    Pretty,
    /// One line per link
    Text,
}

/// Aggregate job applications into a Sankey flow graph
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the applications JSON file (an array of application objects)
    applications_path: Option<String>,

    /// How to group the applications
    #[arg(short, long, value_enum)]
    mode: Option<ModeCli>,

    /// Only aggregate applications with this status ("all" keeps everything)
    #[arg(short, long, default_value = "all")]
    status: StatusFilter,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputCli::Json)]
    output: OutputCli,

    /// Print the dashboard summary after the graph
    #[arg(long)]
    summary: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(io::stderr)
        .init();

    if cli.human {
        run_interactive(cli);
    } else {
        run_non_interactive(cli);
    }
}

fn run_aggregation(
    applications_path: &str,
    choice: AggregatorChoice,
    filter: &StatusFilter,
    output: OutputCli,
    summary: bool,
) {
    let load_start = Instant::now();
    let applications = ApplicationSet::from_file(applications_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to load applications from '{}': {}",
            applications_path, e
        ))
    });
    let load_duration = load_start.elapsed();

    let selected = filter.apply(applications.records());
    tracing::info!(
        loaded = applications.len(),
        selected = selected.len(),
        filter = %filter,
        "applications ready"
    );

    let aggregate_start = Instant::now();
    let graph = choice.build().aggregate(&selected);
    let aggregate_duration = aggregate_start.elapsed();
    tracing::debug!(?load_duration, ?aggregate_duration, "timings");

    let rendered = match output {
        OutputCli::Json => serde_json::to_string(&graph),
        OutputCli::Pretty => serde_json::to_string_pretty(&graph),
        OutputCli::Text => Ok(GraphFormatter::format_graph(&graph)),
    }
    .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize graph: {}", e)));
    println!("{}", rendered);

    if summary {
        let stats = DashboardStats::from_applications(&selected);
        println!("\n--- Dashboard Summary ---");
        println!("Applications: {}", stats.applied);
        println!("Interviews:   {}", stats.interviews);
        println!("Rejections:   {}", stats.rejected);
        println!("Offers:       {}", stats.offers);
        println!("\n--- By Status ---");
        for (status, count) in status_breakdown(&selected) {
            let status = if status.is_empty() { "(none)" } else { status.as_str() };
            println!("{:<12} {}", status, count);
        }
    }
}

/// Runs the CLI in non-interactive mode, taking all arguments from the command line.
fn run_non_interactive(cli: Cli) {
    let applications_path = cli.applications_path.unwrap_or_else(|| {
        exit_with_error("Applications path is required in non-interactive mode.");
    });

    run_aggregation(
        &applications_path,
        choice_from(cli.mode.unwrap_or(ModeCli::Stages)),
        &cli.status,
        cli.output,
        cli.summary,
    );
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive(cli: Cli) {
    println!("--- Jobflow Interactive Mode ---");

    let applications_path =
        prompt_for_input("Enter applications path", Some("data/applications.json"));

    let mode = loop {
        println!("\nPlease select a grouping:");
        println!("  1: Stages (applied -> interview -> outcome)");
        println!("  2: Companies (company -> status)");
        let choice_str = prompt_for_input("Enter choice", Some("1"));

        match choice_str.trim() {
            "1" => break ModeCli::Stages,
            "2" => break ModeCli::Companies,
            _ => println!("Invalid choice. Please enter 1 or 2."),
        }
    };

    let filter: StatusFilter = prompt_for_input("Status filter", Some("all"))
        .parse()
        .unwrap_or_default();

    run_aggregation(
        &applications_path,
        choice_from(mode),
        &filter,
        OutputCli::Text,
        cli.summary,
    );
}

fn choice_from(mode: ModeCli) -> AggregatorChoice {
    match mode {
        ModeCli::Stages => AggregatorChoice::Stages,
        ModeCli::Companies => AggregatorChoice::Companies,
    }
}

/// Prompts with `default` shown, falling back to it on an empty answer.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    read_answer(prompt_text, default)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read from the terminal: {}", e)))
        .filter(|answer| !answer.is_empty())
        .or_else(|| default.map(str::to_string))
        .unwrap_or_default()
}

/// Writes the prompt and reads one trimmed line. `None` at end of input.
fn read_answer(prompt_text: &str, default: Option<&str>) -> io::Result<Option<String>> {
    let mut stdout = io::stdout().lock();
    match default {
        Some(d) => write!(stdout, "> {} [default: {}]: ", prompt_text, d)?,
        None => write!(stdout, "> {}: ", prompt_text)?,
    }
    stdout.flush()?;
    drop(stdout);

    let mut line = String::new();
    let read = io::stdin().read_line(&mut line)?;
    Ok((read > 0).then(|| line.trim().to_string()))
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
