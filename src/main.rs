use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use nerditt::comparator::{check_guess, tiles};
use nerditt::errors::{EvalError, ValidationError};
use nerditt::game::{Game, GameError, GameStatus, MAX_ATTEMPTS};
use nerditt::generator::generate_equations;
use nerditt::keyboard::{key_rows, key_status};
use nerditt::store::{FileStore, GameStore, MemoryStore, StoreError, DEFAULT_STORE_KEY};
use nerditt::{evaluate_expression, validate_equation, EQUATION_LENGTH};

/// Nerditt equation game
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether a candidate is an acceptable guess (e.g., "12+34=46")
    Validate { candidate: String },

    /// Evaluate an arithmetic expression (e.g., "2+3*4")
    Eval { expr: String },

    /// Score a guess against a solution: G correct, y present, . absent
    Check { guess: String, solution: String },

    /// Play a game on stdin, one guess per line
    Play {
        /// The equation to guess
        #[arg(short, long)]
        solution: String,

        /// Directory to keep progress in; progress is not kept without it
        #[arg(short = 'd', long)]
        state_dir: Option<PathBuf>,

        /// Key the progress is saved under
        #[arg(short, long, default_value = DEFAULT_STORE_KEY)]
        key: String,
    },

    /// Print every valid equation of the given length, one per line
    Generate {
        #[arg(short, long, default_value_t = EQUATION_LENGTH)]
        length: usize,
    },
}

/// Entry point of the nerditt CLI.
///
/// Delegates to [`try_main`], printing any error in detail before exiting
/// with code 1.
fn main() -> ExitCode {
    nerditt::log::init_logger(nerditt::log::debug_requested());

    if let Err(e) = try_main() {
        eprintln!("Error: {}", detailed(e.as_ref()));
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn detailed(e: &(dyn std::error::Error + 'static)) -> String {
    if let Some(err) = e.downcast_ref::<ValidationError>() {
        err.display_detailed()
    } else if let Some(err) = e.downcast_ref::<EvalError>() {
        err.display_detailed()
    } else if let Some(err) = e.downcast_ref::<StoreError>() {
        err.display_detailed()
    } else if let Some(err) = e.downcast_ref::<GameError>() {
        err.display_detailed()
    } else {
        e.to_string()
    }
}

fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Validate { candidate } => {
            validate_equation(&candidate)?;
            println!("valid");
        }
        Command::Eval { expr } => {
            let value = evaluate_expression(&expr).map_err(|e| *e)?;
            println!("{value}");
        }
        Command::Check { guess, solution } => {
            println!("{}", tiles(&check_guess(&guess, &solution)));
        }
        Command::Play { solution, state_dir, key } => {
            validate_equation(&solution)?;
            let mut store: Box<dyn GameStore> = match state_dir {
                Some(dir) => Box::new(FileStore::open(dir)?),
                None => Box::new(MemoryStore::new()),
            };
            play(store.as_mut(), &key, solution)?;
        }
        Command::Generate { length } => {
            let equations = generate_equations(length);
            log::info!("{} equations of length {length}", equations.len());
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for eq in &equations {
                writeln!(out, "{eq}")?;
            }
        }
    }

    Ok(())
}

/// Read guesses from stdin until the game ends or input runs out.
fn play(store: &mut dyn GameStore, key: &str, solution: String) -> Result<(), Box<dyn std::error::Error>> {
    let mut game = Game::load_from(&*store, key, solution)?;
    log::info!("starting game with {} guesses already made", game.guesses().len());

    for (guess, statuses) in game.guesses().iter().zip(game.board()) {
        println!("{guess}  {}", tiles(&statuses));
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while game.status() == GameStatus::Playing {
        eprint!("guess {}/{MAX_ATTEMPTS}> ", game.guesses().len() + 1);
        io::stderr().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let line = line.trim();
        if line.chars().count() > EQUATION_LENGTH {
            eprintln!("Guesses are {EQUATION_LENGTH} characters long");
            continue;
        }

        game.clear_current();
        for c in line.chars() {
            game.push_char(c);
        }

        match game.submit() {
            Ok(statuses) => {
                println!("{line}  {}", tiles(&statuses));
                game.save_to(&mut *store, key)?;
                print_keyboard(&game);
            }
            Err(e) => eprintln!("{}", e.display_detailed()),
        }
    }

    match game.status() {
        GameStatus::Won => println!("Solved in {}/{MAX_ATTEMPTS}", game.guesses().len()),
        GameStatus::Lost => println!("Out of guesses; the answer was {}", game.solution()),
        GameStatus::Playing => log::info!("input ended with {} attempts left", game.attempts_left()),
    }

    Ok(())
}

fn print_keyboard(game: &Game) {
    let statuses = game.key_statuses();
    for row in key_rows() {
        let line: Vec<String> = row
            .iter()
            .map(|&c| format!("{c}{}", key_status(&statuses, c).symbol()))
            .collect();
        eprintln!("  {}", line.join(" "));
    }
}
