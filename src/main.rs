use anyhow::{anyhow, Result};
use indicatif::ProgressBar;
use tracing_subscriber::EnvFilter;

use std::io::{stdin, stdout, Write};
use std::str::FromStr;

use connect4_ply::{
    config, render, Board, Checker, Game, GameConfig, GameOutcome, HumanPlayer, MachinePlayer,
    Player, TieBreak, MAX_PLY,
};

/// Shows a spinner while the machine player searches
struct Thinking(MachinePlayer);

impl Player for Thinking {
    fn checker(&self) -> Checker {
        self.0.checker()
    }

    fn next_move(&mut self, board: &mut Board) -> Result<usize> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_message(&format!("{} is thinking...", self.0.checker()));
        spinner.enable_steady_tick(100);
        let column = Player::next_move(&mut self.0, board);
        spinner.finish_and_clear();
        column
    }
}

/// Reads one trimmed line from standard input after printing `prompt`
fn ask(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    stdout().flush()?;

    let mut buffer = String::new();
    if stdin().read_line(&mut buffer)? == 0 {
        return Err(anyhow!("standard input closed"));
    }
    Ok(buffer.trim().to_string())
}

/// Keeps asking until `parse` accepts the answer
fn ask_until<T, F>(prompt: &str, mut parse: F) -> Result<T>
where
    F: FnMut(&str) -> Result<T>,
{
    loop {
        match parse(&ask(prompt)?) {
            Ok(value) => return Ok(value),
            Err(err) => println!("Invalid input: {}", err),
        }
    }
}

fn ask_yes_no(prompt: &str) -> Result<bool> {
    ask_until(prompt, |answer| match answer.to_lowercase().chars().next() {
        Some('y') => Ok(true),
        Some('n') => Ok(false),
        _ => Err(anyhow!("Unknown answer given")),
    })
}

/// Asks for a number, keeping `default` on an empty answer
fn ask_number(prompt: &str, default: usize, max: usize) -> Result<usize> {
    ask_until(prompt, |answer| {
        if answer.is_empty() {
            return Ok(default);
        }
        let value = usize::from_str(answer)?;
        if !(1..=max).contains(&value) {
            return Err(anyhow!("please enter a number between 1 and {}", max));
        }
        Ok(value)
    })
}

fn configure() -> Result<GameConfig> {
    let defaults = GameConfig::default();

    println!("Select difficulty (0-{}): ", MAX_PLY);
    let ply = ask_until(&format!("Enter difficulty (0-{}): ", MAX_PLY), |answer| {
        let ply = usize::from_str(answer)?;
        if ply > MAX_PLY {
            return Err(anyhow!("please enter a number between 0 and {}", MAX_PLY));
        }
        Ok(ply)
    })?;

    println!("\nSelect AI's tiebreaking strategy:");
    println!("1: Always choose leftmost column");
    println!("2: Always choose rightmost column");
    println!("3: Choose a random column");
    let tiebreak = ask_until("Enter a strategy (1-3): ", TieBreak::from_str)?;

    let width = ask_number(
        &format!("\nBoard width (default {}): ", defaults.width),
        defaults.width,
        config::MAX_WIDTH,
    )?;
    let height = ask_number(
        &format!("Board height (default {}): ", defaults.height),
        defaults.height,
        config::MAX_HEIGHT,
    )?;

    let human_first = ask_yes_no("\nWould you like to go first? (y/n): ")?;

    let config = GameConfig {
        width,
        height,
        ply,
        tiebreak,
        human_first,
    };
    config.validate()?;
    Ok(config)
}

fn show(board: &Board) -> Result<()> {
    println!();
    render::draw(board, &mut stdout())?;
    println!();
    Ok(())
}

fn play(config: &GameConfig) -> Result<()> {
    let board = Board::new(config.width, config.height);
    let human: Box<dyn Player> = Box::new(HumanPlayer::stdio(Checker::X));
    let machine: Box<dyn Player> = Box::new(Thinking(MachinePlayer::new(
        Checker::O,
        config.tiebreak,
        config.ply,
    )));
    let (first, second) = if config.human_first {
        (human, machine)
    } else {
        (machine, human)
    };

    println!("Welcome to Connect Four!");
    show(&board)?;

    let mut game = Game::new(board, first, second);
    let outcome = game.play(|board, checker, column| {
        println!("{} drops in column {}...", checker, column);
        show(board)
    })?;

    match outcome {
        GameOutcome::Won(checker) => println!("{} wins -- Congratulations!", checker),
        GameOutcome::Draw => println!("Cat's game."),
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    loop {
        let config = configure()?;
        play(&config)?;

        if !ask_yes_no("Play again? (y/n): ")? {
            break;
        }
    }
    Ok(())
}
