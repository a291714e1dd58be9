use checkers::ParseSquareError;
use checkers::display_format::DisplayFormat;
use checkers::game::{Game, MoveOutcome};
use checkers::piece::Color;
use checkers::square::parse_coordinates;
use clap::{Parser, Subcommand};
use log::{debug, info};
use std::io::{BufRead, Write};

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    #[command(about = "register a player for black or white")]
    Player { name: String, color: Color },
    #[command(alias = "p", about = "move a piece, squares are written as row,col")]
    Play {
        name: String,
        #[arg(value_parser = parse_square, allow_hyphen_values = true)]
        from: (i32, i32),
        #[arg(value_parser = parse_square, allow_hyphen_values = true)]
        to: (i32, i32),
    },
    #[command(about = "describe the piece on a square")]
    Show {
        #[arg(value_parser = parse_square, allow_hyphen_values = true)]
        square: (i32, i32),
    },
    #[command(about = "print the board")]
    Board,
    #[command(about = "list the legal moves of the player to move")]
    Moves,
    #[command(about = "show the statistics of a player")]
    Stats { name: String },
    #[command(about = "show the winner, if any")]
    Winner,
    #[command(alias = "exit", about = "leave the game")]
    Quit,
}

fn parse_square(s: &str) -> Result<(i32, i32), String> {
    parse_coordinates(s).ok_or_else(|| ParseSquareError(s.to_owned()).to_string())
}

/// Parses one line of input, reporting mistakes the way clap does.
pub fn parse_command(line: &str) -> Result<Command, clap::Error> {
    #[derive(Parser)]
    #[command(
        name = "",
        no_binary_name = true,
        disable_help_flag = true,
        disable_version_flag = true,
        next_line_help = false,
        help_template = "{usage-heading} {usage}\n{all-args}"
    )]
    struct Input {
        #[command(subcommand)]
        command: Command,
    }

    Input::try_parse_from(line.split_whitespace()).map(|Input { command }| command)
}

pub struct Control<W: Write> {
    game: Game,
    format: DisplayFormat,
    out: W,
}

impl<W: Write> Control<W> {
    pub fn new(game: Game, format: DisplayFormat, out: W) -> Self {
        Self { game, format, out }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn run(&mut self, input: impl BufRead) -> std::io::Result<()> {
        write!(self.out, "{}", self.game.display(self.format))?;

        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match parse_command(line) {
                Ok(command) => {
                    if !self.execute(command)? {
                        break;
                    }
                }
                Err(err) => write!(self.out, "{err}")?,
            }
            self.out.flush()?;
        }

        Ok(())
    }

    /// Returns `false` once the user asks to quit.
    pub fn execute(&mut self, command: Command) -> std::io::Result<bool> {
        debug!("executing {command:?}");

        match command {
            Command::Player { name, color } => match self.game.create_player(&name, color) {
                Ok(player) => writeln!(self.out, "{player}")?,
                Err(err) => writeln!(self.out, "{err}")?,
            },
            Command::Play { name, from, to } => match self.game.play_move(&name, from, to) {
                Ok(outcome) => self.report(&name, outcome)?,
                Err(err) => writeln!(self.out, "{err}")?,
            },
            Command::Show { square } => match self.game.piece_at(square) {
                Ok(Some(piece)) => writeln!(self.out, "{}", piece.display(self.format.with_concise(false)))?,
                Ok(None) => writeln!(self.out, "empty")?,
                Err(err) => writeln!(self.out, "{err}")?,
            },
            Command::Board => write!(self.out, "{}", self.game.display(self.format))?,
            Command::Moves => {
                let moves = self.game.legal_moves();
                if moves.is_empty() {
                    writeln!(self.out, "no legal moves")?;
                } else {
                    let moves = moves.iter().map(|mv| mv.to_string()).collect::<Vec<_>>();
                    writeln!(self.out, "{}", moves.join(" "))?;
                }
            }
            Command::Stats { name } => match self.game.player(&name) {
                Ok(player) => writeln!(self.out, "{player}")?,
                Err(err) => writeln!(self.out, "{err}")?,
            },
            Command::Winner => writeln!(self.out, "{}", self.game.game_winner())?,
            Command::Quit => return Ok(false),
        }

        Ok(true)
    }

    fn report(&mut self, name: &str, outcome: MoveOutcome) -> std::io::Result<()> {
        write!(self.out, "{}", self.game.display(self.format))?;

        if let Some(square) = outcome.captured {
            writeln!(
                self.out,
                "{name} captured the piece on {square} ({} in total)",
                outcome.captured_total
            )?;
        }
        if let Some(rank) = outcome.promotion {
            writeln!(self.out, "{name}'s piece is now a {}", rank.name())?;
        }
        if let Some(square) = self.game.pending() {
            writeln!(self.out, "{name} must keep jumping with the piece on {square}")?;
        }
        if outcome.outcome.is_some() {
            info!("game over, {} wins", self.game.game_winner());
            writeln!(self.out, "game over, {} wins", self.game.game_winner())?;
        }
        Ok(())
    }
}
