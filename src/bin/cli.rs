use clap::{Parser, Subcommand};
use onthedot_engine::{
    load_with_retry, resolve_with, stats, GameConfig, GameSession, GuessOutcome, JsonFileSource,
};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "onthedot")]
#[command(about = "On the Dot guess engine CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with ranked lists per category
    #[arg(short = 'f', long, default_value = "candidates.json")]
    candidates: String,

    /// Optional JSON config file
    #[arg(short, long)]
    config: Option<String>,

    /// Override edits tolerated per word
    #[arg(long)]
    max_distance: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a single guess and print the result as JSON
    Check {
        /// Guess text
        guess: String,

        /// Category (defaults to config)
        #[arg(long)]
        category: Option<String>,

        /// Titles already claimed this session
        #[arg(short, long)]
        previous: Vec<String>,
    },

    /// Play a round, reading guesses from stdin
    Play {
        /// Category (defaults to config)
        #[arg(long)]
        category: Option<String>,

        /// Override guesses per round
        #[arg(short, long)]
        budget: Option<u32>,
    },

    /// List available categories
    Categories,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::from_json_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(max_distance) = cli.max_distance {
        config.max_distance_per_word = max_distance;
    }

    let source = JsonFileSource::new(&cli.candidates);

    match cli.command {
        Commands::Check { guess, category, previous } => {
            let category = category.unwrap_or_else(|| config.default_category.clone());
            let candidates =
                load_with_retry(&source, &category, config.source_retries, config.retry_delay()).await?;

            let result = resolve_with(config.match_policy(), &guess, &candidates, &previous)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Commands::Play { category, budget } => {
            if let Some(budget) = budget {
                config.guess_budget = budget;
            }
            config.validate()?;

            let category = category.unwrap_or_else(|| config.default_category.clone());
            let candidates =
                load_with_retry(&source, &category, config.source_retries, config.retry_delay()).await?;

            let mut session = GameSession::new(&category, &config);
            println!("🎯 Top 100 {} - {} guesses", category, session.remaining_guesses);

            let stdin = io::stdin();
            let mut lines = stdin.lock().lines();
            while !session.is_game_over {
                print!("> ");
                io::stdout().flush()?;

                let Some(line) = lines.next() else { break };
                let line = line?;

                match session.submit_guess(&line, &candidates)? {
                    GuessOutcome::Accepted(guess) => match guess.rank {
                        Some(rank) if guess.is_in_top100 => {
                            println!("✅ {} is #{}", guess.original_title, rank)
                        }
                        _ => println!("❌ {} is not on the list", guess.item),
                    },
                    GuessOutcome::Repeat => println!("🔁 Already guessed"),
                    GuessOutcome::Rejected => println!("⚠️ Empty guess"),
                    GuessOutcome::GameOver => break,
                }
            }

            println!(
                "\n📊 Final score: {} / {}",
                session.score(),
                stats::max_score(&candidates, config.guess_budget)
            );
        }

        Commands::Categories => {
            use onthedot_engine::CandidateSource;

            for name in source.categories().await? {
                println!("{}", name);
            }
        }
    }

    Ok(())
}
