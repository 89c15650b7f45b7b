//! chiffre - French number words to integers

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Result;
use chiffre_lang_french::{FrenchConverter, FrenchLanguage};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod settings;

#[derive(Parser)]
#[command(name = "chiffre")]
#[command(version)]
#[command(about = "Convert French number words to integers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert each argument, or each stdin line when none are given
    Convert {
        texts: Vec<String>,

        /// Bypass the conversion cache
        #[arg(long)]
        uncached: bool,

        /// Print cache statistics as JSON when done
        #[arg(long)]
        stats: bool,
    },

    /// Tell whether each text looks like a French number
    Check { texts: Vec<String> },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    // Optional .env with CHIFFRE_* overrides
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!("No .env loaded: {e}");
    }

    let config = settings::load_config(cli.config.as_deref())?;
    let converter = FrenchConverter::with_config(FrenchLanguage::new(), &config);
    tracing::debug!("chiffre-lang-french {}", chiffre_lang_french::VERSION);

    match cli.command {
        Commands::Convert {
            texts,
            uncached,
            stats,
        } => {
            let mut failures = 0usize;

            for text in read_inputs(texts)? {
                let result = if uncached {
                    converter.convert_uncached(&text)
                } else {
                    converter.convert(&text)
                };

                match result {
                    Ok(value) => println!("{value}"),
                    Err(e) => {
                        tracing::error!("Failed to convert {text:?}: {e}");
                        failures += 1;
                    }
                }
            }

            if stats {
                println!("{}", serde_json::to_string_pretty(&converter.cache_stats())?);
            }

            if failures > 0 {
                anyhow::bail!("{failures} input(s) could not be converted");
            }
        }
        Commands::Check { texts } => {
            for text in read_inputs(texts)? {
                println!("{}\t{}", converter.is_plausible(&text), text);
            }
        }
    }

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Arguments if any, otherwise non-blank stdin lines
fn read_inputs(texts: Vec<String>) -> Result<Vec<String>> {
    if !texts.is_empty() {
        return Ok(texts);
    }

    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}
