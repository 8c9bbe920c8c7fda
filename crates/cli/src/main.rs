use chess_match_core::{ChessMatch, MatchConfig};
use std::env;
use std::io::{self, BufRead, Write};
use std::process;
use thiserror::Error;
use tracing::{debug, error};

mod input;
mod ui;

use input::{parse_square, square_name, InputError};

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Chess(#[from] chess_match_core::Error),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Errors the player fixes by typing something else.
    fn is_recoverable(&self) -> bool {
        match self {
            CliError::Chess(e) => e.is_rule_violation(),
            CliError::Input(_) => true,
            CliError::Io(_) => false,
        }
    }
}

fn main() {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let args: Vec<String> = env::args().collect();

    let config = match args.get(1).map(String::as_str) {
        None => MatchConfig::default(),
        Some("--setup") => {
            let Some(path) = args.get(2) else {
                println!("Error: Please provide a setup file");
                print_usage(&args[0]);
                process::exit(1);
            };
            match MatchConfig::load(path) {
                Ok(config) => config,
                Err(e) => {
                    println!("[ERROR] Could not load {}: {}", path, e);
                    process::exit(1);
                }
            }
        }
        Some("--help") | Some("-h") => {
            print_usage(&args[0]);
            return;
        }
        Some(_) => {
            print_usage(&args[0]);
            process::exit(1);
        }
    };

    let chess_match = match ChessMatch::from_config(&config) {
        Ok(m) => m,
        Err(e) => {
            println!("[ERROR] Invalid match setup: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(chess_match) {
        error!(error = %e, "match aborted");
        println!("[ERROR] {}", e);
        process::exit(1);
    }
}

fn print_usage(program: &str) {
    println!("Usage: {} [--setup <file.json>]", program);
    println!();
    println!("Enter moves as two squares, e.g. source e2 then target e4.");
    println!("Type 'quit' to leave.");
}

/// Reads one trimmed line, or `None` on end of input or "quit".
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> Result<Option<String>, CliError> {
    print!("{}: ", label);
    io::stdout().flush()?;

    match lines.next() {
        Some(line) => {
            let line = line?;
            let line = line.trim();
            if line.eq_ignore_ascii_case("quit") {
                Ok(None)
            } else {
                Ok(Some(line.to_string()))
            }
        }
        None => Ok(None),
    }
}

fn run(mut chess_match: ChessMatch) -> Result<(), CliError> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !chess_match.state().is_over() {
        println!();
        print!("{}", ui::render_match(&chess_match.snapshot()));
        println!();

        match play_turn(&mut chess_match, &mut lines) {
            Ok(true) => {}
            Ok(false) => return Ok(()),
            Err(e) if e.is_recoverable() => {
                println!();
                println!("{}", e);
            }
            Err(e) => return Err(e),
        }
    }

    println!();
    print!("{}", ui::render_match(&chess_match.snapshot()));
    Ok(())
}

/// Returns `Ok(false)` once the player asks to stop.
fn play_turn(
    chess_match: &mut ChessMatch,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<bool, CliError> {
    let Some(text) = prompt(lines, "Source")? else {
        return Ok(false);
    };
    let source = parse_square(&text)?;

    let moves = chess_match.possible_moves(source)?;
    println!();
    print!("{}", ui::render_board(&chess_match.snapshot(), Some(&moves)));
    println!();

    let Some(text) = prompt(lines, "Target")? else {
        return Ok(false);
    };
    let target = parse_square(&text)?;

    let captured = chess_match.perform_chess_move(source, target)?;
    debug!(source = %square_name(source), target = %square_name(target), "played");

    if let Some(piece) = captured {
        println!("Captured {} {}", piece.color(), piece.kind().name());
    }

    Ok(true)
}
