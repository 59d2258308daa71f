mod display;

use anyhow::{Context, Result};
use assistant::{PairingAssistant, PairingReport};
use clap::Parser;
use classifier::ClassifierConfig;
use pairing::RecommenderConfig;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Wine and food pairing assistant
#[derive(Parser)]
#[command(name = "wine-pair")]
#[command(about = "Recommend wines for a food description", long_about = None)]
struct Cli {
    /// Food dish to get wine pairing recommendations for (omit for interactive mode)
    food: Vec<String>,

    /// Show detailed analysis of the food input
    #[arg(short, long)]
    analyze: bool,

    /// JSON file with pairing tables to use instead of the built-in ones
    #[arg(short, long)]
    knowledge: Option<PathBuf>,

    /// Maximum number of recommendations to show (1 to 5)
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=5))]
    limit: u8,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

/// How each answer is printed
#[derive(Clone, Copy)]
struct OutputOptions {
    analyze: bool,
    json: bool,
}

fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for recommendations
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let knowledge = PairingAssistant::load_knowledge(cli.knowledge.as_deref())?;
    let recommender_config = RecommenderConfig {
        max_results: usize::from(cli.limit),
        ..RecommenderConfig::default()
    };
    let assistant =
        PairingAssistant::with_config(knowledge, ClassifierConfig::default(), recommender_config);

    let options = OutputOptions {
        analyze: cli.analyze,
        json: cli.json,
    };

    let food = cli.food.join(" ");
    if food.trim().is_empty() {
        let mut stdin = io::stdin().lock();
        let mut stdout = io::stdout().lock();
        interactive_mode(&mut stdin, &mut stdout, &assistant, options)
    } else {
        let mut stdout = io::stdout().lock();
        handle_food(&mut stdout, &assistant, &food, options)
    }
}

/// Pair one food description and print the result
fn handle_food(
    out: &mut impl Write,
    assistant: &PairingAssistant,
    food: &str,
    options: OutputOptions,
) -> Result<()> {
    let report = assistant.pair(food);

    if options.json {
        serde_json::to_writer_pretty(&mut *out, &report).context("Failed to encode report")?;
        writeln!(out)?;
        return Ok(());
    }

    print_report(out, assistant, &report, options.analyze)?;
    Ok(())
}

fn print_report(
    out: &mut impl Write,
    assistant: &PairingAssistant,
    report: &PairingReport,
    analyze: bool,
) -> io::Result<()> {
    if analyze {
        display::write_analysis(out, &report.food, &report.categories)?;
    }
    display::write_recommendations(
        out,
        &report.food,
        &report.recommendations,
        assistant.knowledge(),
    )
}

/// Run the prompt loop until `exit`, `quit` or end of input.
///
/// A failed answer, including a line that is not valid UTF-8, is reported
/// and the loop keeps going.
fn interactive_mode(
    input: &mut impl BufRead,
    out: &mut impl Write,
    assistant: &PairingAssistant,
    options: OutputOptions,
) -> Result<()> {
    writeln!(out, "=== Wine and Food Pairing Assistant ===")?;
    writeln!(out, "Enter a food dish to get wine pairing recommendations.")?;
    writeln!(out, "Type 'exit', 'quit', or Ctrl+D to exit.\n")?;

    let mut line = String::new();
    loop {
        write!(out, "What food would you like wine recommendations for? ")?;
        out.flush()?;

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => {
                writeln!(out, "\nExiting...")?;
                break;
            }
            Ok(_) => {}
            // the offending line has already been consumed
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                writeln!(out, "An error occurred: {err}")?;
                continue;
            }
            Err(err) => return Err(err).context("Failed to read from stdin"),
        }

        let food = line.trim();
        if food.eq_ignore_ascii_case("exit") || food.eq_ignore_ascii_case("quit") {
            break;
        }
        if food.is_empty() {
            continue;
        }

        if let Err(err) = handle_food(out, assistant, food, options) {
            writeln!(out, "An error occurred: {err:#}")?;
            continue;
        }
        writeln!(out, "{}", "-".repeat(70))?;
    }

    Ok(())
}
