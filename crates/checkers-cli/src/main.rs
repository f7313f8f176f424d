//! Terminal front end for simplified checkers.
//!
//! The front end is a thin collaborator around the engine: it reports
//! cell activations (one algebraic coordinate per line, the two-click
//! selection model) and redraws the whole board after every state
//! change. The mode is fixed for the life of the process.

use checkers_bot::RandomBot;
use checkers_core::{Color, Pos};
use checkers_engine::{Activation, Game};
use checkers_sync::{RemoteStore, SyncSession};
use clap::{Parser, Subcommand};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast;

#[derive(Parser)]
#[command(name = "checkers")]
#[command(about = "Simplified checkers in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Two players sharing this terminal
    Local,
    /// Play against the computer
    Bot {
        /// Color the computer plays
        #[arg(long, default_value = "white", value_parser = parse_color)]
        bot_color: Color,
        /// Pause before the computer replies, in milliseconds
        #[arg(long, default_value = "600")]
        delay_ms: u64,
    },
    /// Play a remote peer through a relay
    Online {
        /// Room identifier shared with the peer
        #[arg(short, long)]
        room: String,
        /// Relay websocket URL
        #[arg(long, default_value = "ws://127.0.0.1:9090")]
        url: String,
    },
}

fn parse_color(s: &str) -> Result<Color, String> {
    match s {
        "green" => Ok(Color::Green),
        "white" => Ok(Color::White),
        other => Err(format!("expected 'green' or 'white', got '{}'", other)),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Local => run_local().await,
        Commands::Bot {
            bot_color,
            delay_ms,
        } => run_bot(bot_color, Duration::from_millis(delay_ms)).await,
        Commands::Online { room, url } => run_online(&room, &url).await,
    }
}

/// One line of player input.
enum Command {
    Cell(Pos),
    Reset,
    Quit,
    Unknown,
}

fn parse_line(line: &str) -> Command {
    match line.trim() {
        "quit" | "q" => Command::Quit,
        "reset" => Command::Reset,
        cell => Pos::from_algebraic(cell)
            .map(Command::Cell)
            .unwrap_or(Command::Unknown),
    }
}

fn render(game: &Game) {
    println!();
    println!("    a b c d e f g h");
    for row in (0..8u8).rev() {
        print!("  {} ", row + 1);
        for col in 0..8u8 {
            let pos = Pos::new(row, col).expect("row and col are in range");
            match game.board().get(pos) {
                Some(piece) => print!("{} ", piece.to_char()),
                None => print!(". "),
            }
        }
        println!("{}", row + 1);
    }
    println!("    a b c d e f g h");

    let scores = game.scores();
    println!("  captures: green {} / white {}", scores.green, scores.white);
    match game.winner() {
        Some(color) => println!("  {} wins! ('reset' for a new game)", color),
        None => println!("  {} to move", game.turn()),
    }
    if let Some(selected) = game.selected() {
        println!("  selected: {} (activate the destination square)", selected);
    }
}

fn feedback(outcome: Activation) {
    match outcome {
        Activation::Selected(pos) => println!("  selected {}", pos),
        Activation::Moved(kind) => {
            if let Some(captured) = kind.captured() {
                println!("  captured the piece on {}", captured);
            }
        }
        Activation::Rejected => println!("  illegal move, select a piece again"),
        Activation::Ignored => println!("  pick one of your own pieces"),
    }
}

fn print_help() {
    println!("  enter a square like 'b3' to select or move, 'reset', or 'quit'");
}

async fn run_local() -> Result<(), Box<dyn std::error::Error>> {
    let mut game = Game::new();
    render(&game);
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Command::Quit => break,
            Command::Reset => {
                game.reset();
                render(&game);
            }
            Command::Cell(pos) => {
                feedback(game.activate(pos));
                render(&game);
            }
            Command::Unknown => print_help(),
        }
    }
    Ok(())
}

async fn run_bot(bot_color: Color, delay: Duration) -> Result<(), Box<dyn std::error::Error>> {
    let mut game = Game::new();
    let bot = RandomBot::new(bot_color);
    println!("  you play {}, the computer plays {}", bot_color.opposite(), bot_color);
    bot_reply(&mut game, &bot, delay).await;
    render(&game);
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Command::Quit => break,
            Command::Reset => {
                game.reset();
                bot_reply(&mut game, &bot, delay).await;
                render(&game);
            }
            Command::Cell(pos) => {
                let outcome = game.activate(pos);
                feedback(outcome);
                if matches!(outcome, Activation::Moved(_)) {
                    render(&game);
                    bot_reply(&mut game, &bot, delay).await;
                }
                render(&game);
            }
            Command::Unknown => print_help(),
        }
    }
    Ok(())
}

/// Lets the computer reply if it is its turn.
///
/// The pause is pure pacing, so the turn change is visible before the
/// computer answers.
async fn bot_reply(game: &mut Game, bot: &RandomBot, delay: Duration) {
    if game.is_over() || game.turn() != bot.color() {
        return;
    }
    tokio::time::sleep(delay).await;
    match bot.choose(game.board(), &mut rand::rng()) {
        Some((mov, _)) => {
            if game.try_move(mov.from, mov.to).is_ok() {
                println!("  computer plays {}", mov);
            }
        }
        // Known gap in the rules: a side with no moves just passes.
        None => println!("  computer has no legal move"),
    }
}

async fn run_online(room: &str, url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let store = RemoteStore::connect(url).await?;
    let mut session = SyncSession::join(store, room).await?;
    println!("  joined room '{}' playing {}", room, session.role());
    let mut updates = session.subscribe().await?;
    render(session.game());
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_line(&line) {
                    Command::Quit => break,
                    Command::Reset => {
                        session.reset().await?;
                        render(session.game());
                    }
                    Command::Cell(pos) => {
                        let outcome = session.activate(pos).await?;
                        if outcome == Activation::Ignored
                            && session.game().turn() != session.role()
                        {
                            println!("  waiting for {}", session.role().opposite());
                        } else {
                            feedback(outcome);
                        }
                        render(session.game());
                    }
                    Command::Unknown => print_help(),
                }
            }
            record = updates.recv() => {
                match record {
                    Ok(record) => {
                        session.apply_remote(record);
                        render(session.game());
                    }
                    Err(broadcast::error::RecvError::Lagged(_)) => continue,
                    Err(broadcast::error::RecvError::Closed) => {
                        println!("  connection to relay lost");
                        break;
                    }
                }
            }
        }
    }
    Ok(())
}
