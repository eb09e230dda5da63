//! Interactive prefix/fuzzy query loop over a corpus-backed prefix store.

mod config;

use anyhow::Context;
use clap::Parser;
use config::AppConfig;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use typeahead_core::PrefixStore;
use typeahead_core::types::{Config, Vocabulary};
use typeahead_search::{CompletionEngine, SearchConfig};

#[derive(Debug, Parser)]
#[command(name = "typeahead", about = "Frequency-weighted prefix and typo completion")]
struct Args {
    /// Corpus file to ingest before starting the query loop.
    corpus: Option<PathBuf>,

    /// Data directory holding the persistent store.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// How many results to show per query.
    #[arg(long)]
    top: Option<usize>,

    /// Path to an optional config.toml.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Cap on the fuzzy candidate frontier.
    #[arg(long)]
    max_candidates: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let mut app_config = AppConfig::load(&args.config)
        .with_context(|| format!("loading config from {}", args.config.display()))?;
    if let Some(data_dir) = args.data_dir {
        app_config.data_dir = data_dir;
    }
    if let Some(top) = args.top {
        app_config.top = top;
    }
    if let Some(max_candidates) = args.max_candidates {
        app_config.max_candidates = max_candidates;
    }

    let mut store = PrefixStore::open(&Config {
        base_path: app_config.data_dir.clone(),
    })
    .context("opening prefix store")?;

    if let Some(corpus) = &args.corpus {
        let text = std::fs::read_to_string(corpus)
            .with_context(|| format!("reading corpus {}", corpus.display()))?;
        let vocabulary = Vocabulary::from_tokens(text.split_whitespace());
        println!("Loading {} distinct words...", vocabulary.len());
        let outcome = store.load(&vocabulary).context("bulk load failed")?;
        println!(
            "Loaded {} words ({} occurrences).",
            outcome.words_loaded, outcome.occurrences
        );
    }

    let engine = CompletionEngine::new(SearchConfig {
        max_candidates: app_config.max_candidates,
    });

    println!("Enter a prefix to list completions, ~word for typo-tolerant");
    println!("completion, or q to quit.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input == "q" {
            break;
        }
        if input.is_empty() {
            continue;
        }

        if let Some(token) = input
            .strip_prefix('~')
            .or_else(|| input.strip_prefix("fuzzy "))
        {
            run_fuzzy(&store, &engine, token.trim(), app_config.top)?;
        } else {
            run_prefix(&store, input, app_config.top)?;
        }
    }
    Ok(())
}

fn run_prefix(store: &PrefixStore, prefix: &str, top: usize) -> anyhow::Result<()> {
    let mut words = store.words_with_prefix(&prefix.to_lowercase())?;
    if words.is_empty() {
        println!("no words found");
        return Ok(());
    }
    words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    for (word, count) in words.into_iter().take(top) {
        println!("{word}  {count}");
    }
    Ok(())
}

fn run_fuzzy(
    store: &PrefixStore,
    engine: &CompletionEngine,
    token: &str,
    top: usize,
) -> anyhow::Result<()> {
    let completions = engine.complete(store, token)?;
    if completions.is_empty() {
        println!("no words found");
        return Ok(());
    }
    for completion in completions.top(top) {
        println!("{}  {:.6}", completion.word, completion.score);
    }
    Ok(())
}
