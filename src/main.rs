//! Rootword CLI
//!
//! Interactive terminal game on top of the word engine.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rootword::{
    EmbeddedSource, FileSource, GuessOutcome, Level, Progress, Unavailable, WordEngine,
    WordSource, DEFAULT_LEVEL_LENGTH, MAX_WORD_LENGTH,
};

const BANNER_TEXT: &str = include_str!("text/banner.txt");

/// Find every word hidden in a root word's letters
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root word length for new puzzles
    #[arg(short, long, default_value_t = DEFAULT_LEVEL_LENGTH)]
    length: usize,

    /// Newline-delimited word list to use instead of the built-in one
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// Skip the word list and play with the offline dictionary
    #[arg(long)]
    offline: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn print_banner() {
    for line in BANNER_TEXT.lines().take(7) {
        println!("{}", line);
    }
}

fn print_help() {
    println!("{}", BANNER_TEXT);
}

fn print_level(progress: &Progress) {
    let level = progress.level();
    println!();
    println!("Letters: {}", spaced(&progress.display_string()));
    println!(
        "Found {}/{} words",
        progress.found_count(),
        level.valid_words.len()
    );
    print_board(progress);
    println!();
}

/// One line per word, letters masked until found
fn print_board(progress: &Progress) {
    let found: Vec<&str> = progress.found().collect();
    for word in &progress.level().valid_words {
        if found.contains(&word.as_str()) {
            println!("  {}", spaced(&word.to_uppercase()));
        } else {
            println!("  {}", vec!["_"; word.len()].join(" "));
        }
    }
}

fn spaced(s: &str) -> String {
    s.chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn new_level(engine: &WordEngine, length: usize) -> Progress {
    let level: Level = engine.generate_level(length);
    log::debug!("root word: {}", level.root_word);
    Progress::new(level)
}

fn run_interactive(engine: &WordEngine, default_length: usize) -> io::Result<()> {
    print_banner();
    println!("Type 'help' for commands.");

    let mut length = default_length;
    let mut progress = new_level(engine, length);
    print_level(&progress);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        let guess = match parts[0].to_lowercase().as_str() {
            "help" | "h" | "?" => {
                print_help();
                continue;
            }
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                break;
            }
            "shuffle" | "s" => {
                progress.reshuffle(&mut rand::thread_rng());
                print_level(&progress);
                continue;
            }
            "found" | "f" => {
                let found: Vec<String> = progress.found().map(str::to_uppercase).collect();
                if found.is_empty() {
                    println!("Nothing found yet.");
                } else {
                    println!("{}", found.join(", "));
                }
                continue;
            }
            "new" | "n" => {
                if let Some(n) = parts.get(1).and_then(|s| s.parse::<usize>().ok()) {
                    length = n;
                }
                progress = new_level(engine, length);
                print_level(&progress);
                continue;
            }
            "reveal" => {
                let remaining: Vec<String> =
                    progress.remaining().iter().map(|w| w.to_uppercase()).collect();
                println!();
                println!("Root word: {}", progress.level().root_word.to_uppercase());
                if !remaining.is_empty() {
                    println!("You missed: {}", remaining.join(", "));
                }
                progress = new_level(engine, length);
                print_level(&progress);
                continue;
            }
            "guess" | "g" => match parts.get(1) {
                Some(word) => *word,
                None => {
                    println!("Usage: guess <word>");
                    continue;
                }
            },
            _ => parts[0],
        };

        let outcome = progress.submit(guess, engine);
        println!("{}: {}", guess.to_uppercase(), outcome);

        if outcome == GuessOutcome::Found {
            if progress.is_complete() {
                println!();
                println!("All {} words found!", progress.found_count());
                progress = new_level(engine, length);
            }
            print_level(&progress);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    if let Err(e) = try_main() {
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    rootword::log::init_logger(cli.debug || rootword::log::debug_from_env());

    if cli.length > MAX_WORD_LENGTH {
        return Err(format!("root length must be at most {MAX_WORD_LENGTH}").into());
    }

    let source: Box<dyn WordSource> = match (&cli.words, cli.offline) {
        (_, true) => Box::new(Unavailable),
        (Some(path), false) => Box::new(FileSource::new(path)),
        (None, false) => Box::new(EmbeddedSource),
    };

    let engine = WordEngine::init(&*source);
    let outcome = engine.load_outcome();
    if outcome.is_fallback() {
        println!("Word list unavailable, playing offline ({} words).", outcome.word_count());
    }

    run_interactive(&engine, cli.length)?;
    Ok(())
}
