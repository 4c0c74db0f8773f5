//! lexcut command-line interface
//!
//! Tokenizes each input line as one sentence and prints the resulting word
//! positions with their alternative analyses.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rayon::prelude::*;

use lexcut_cli::{loader, output};
use lexcut_core::{TokenizeOptions, Tokenizer};

/// Sentence tokenizer with parallel alternative analyses
#[derive(Debug, Parser)]
#[command(name = "lexcut", version, about)]
struct Cli {
    /// Input file (default: stdin); one sentence per line
    input: Option<PathBuf>,

    /// Word-list file, one entry per line
    #[arg(short, long, value_name = "FILE")]
    dict: PathBuf,

    /// Named-regex file, one "NAME pattern" per line
    #[arg(short, long, value_name = "FILE")]
    regex: Option<PathBuf>,

    /// Embedded affix table to use
    #[arg(short, long, default_value = "en")]
    language: String,

    /// Affix TOML file (overrides --language)
    #[arg(long, value_name = "FILE")]
    affix: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Bracket sentences with wall tokens
    #[arg(long)]
    walls: bool,

    /// Keep morphology decorations in the output
    #[arg(long)]
    morphology: bool,

    /// Report alternatives not found in the dictionary
    #[arg(long)]
    audit: bool,

    /// Test flags passed through to the tokenizer (e.g. no-suffixes)
    #[arg(long, value_name = "FLAG")]
    test: Vec<String>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One sentence per line, alternatives joined with '|'
    Text,
    /// One JSON document per line
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    log::debug!("arguments: {cli:?}");

    let dict = loader::load_dictionary(&cli.dict, cli.regex.as_deref(), cli.walls)?;
    let affix = loader::load_affix(&cli.language, cli.affix.as_deref())?;

    let mut opts = TokenizeOptions::new()
        .with_display_morphology(cli.morphology)
        .with_verbosity(cli.verbose);
    for flag in &cli.test {
        opts = opts.with_test_flag(flag);
    }

    let tokenizer = Tokenizer::builder()
        .dictionary(Arc::new(dict))
        .affix_table(Arc::clone(&affix))
        .options(opts)
        .build()?;

    let text = read_input(cli.input.as_deref())?;
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    log::info!("tokenizing {} sentence(s)", lines.len());

    // Sentences are independent; tokenize them in parallel, print in order.
    let rendered: Vec<Result<String>> = lines
        .par_iter()
        .map(|line| render_line(&tokenizer, line, cli.format, cli.morphology, cli.audit))
        .collect();

    for result in rendered {
        println!("{}", result?);
    }
    Ok(())
}

fn render_line(
    tokenizer: &Tokenizer,
    line: &str,
    format: OutputFormat,
    morphology: bool,
    audit: bool,
) -> Result<String> {
    let sent = tokenizer.tokenize(line);
    let marks = tokenizer.affix_table().marks();
    let mut out = match format {
        OutputFormat::Text => output::render_text(&sent, marks, morphology),
        OutputFormat::Json => output::render_json(&sent, marks, morphology)?,
    };
    if audit {
        let missing = sent.words_not_in_dictionary(tokenizer.dictionary(), tokenizer.affix_table());
        if !missing.is_empty() {
            let listed: Vec<&str> = missing.iter().map(|w| w.as_ref()).collect();
            out.push_str(&format!("\n# not in dictionary: {}", listed.join(" ")));
        }
    }
    Ok(out)
}

fn read_input(path: Option<&std::path::Path>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
