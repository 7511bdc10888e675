#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::string::String;

use rand::rngs::SmallRng;

use super::{Player, Shot};
use crate::board::Board;
use crate::common::{BoardError, Outcome};
use crate::coordinate::Coordinate;

/// Why a line typed by the player is not a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    WrongTokenCount,
    NotANumber,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::WrongTokenCount => write!(f, "Enter two coordinates!"),
            InputError::NotANumber => write!(f, "Enter numbers!"),
        }
    }
}

/// Parse `row col` (one-based) into a zero-based coordinate.
///
/// Range is not checked here; the board rejects off-grid shots.
pub fn parse_target(line: &str) -> Result<Coordinate, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = tokens.as_slice() else {
        return Err(InputError::WrongTokenCount);
    };
    Ok(Coordinate::new(parse_number(row)? - 1, parse_number(col)? - 1))
}

fn parse_number(token: &str) -> Result<i32, InputError> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber);
    }
    token.parse().map_err(|_| InputError::NotANumber)
}

/// Interactive player reading targets line by line.
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
}

impl HumanPlayer<StdinLock<'static>, Stdout> {
    /// Player bound to the process' terminal.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, args: fmt::Arguments<'_>) {
        // Output is best effort; a broken terminal surfaces on the next read.
        let _ = self.output.write_fmt(args);
        let _ = self.output.write_all(b"\n");
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn choose_target(&mut self, _rng: &mut SmallRng, _target: &Board) -> anyhow::Result<Coordinate> {
        loop {
            write!(self.output, "Your move: ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(anyhow::anyhow!("input closed while waiting for a move"));
            }
            match parse_target(&line) {
                Ok(coord) => return Ok(coord),
                Err(e) => self.say(format_args!(" {} ", e)),
            }
        }
    }

    fn turn_started(&mut self, own: &Board, target: &Board) {
        self.say(format_args!("{}", "-".repeat(20)));
        self.say(format_args!("Your board:\n{}", own));
        self.say(format_args!("{}", "-".repeat(20)));
        self.say(format_args!("Computer board:\n{}", target));
        self.say(format_args!("{}", "-".repeat(20)));
        self.say(format_args!("Your turn!"));
    }

    fn shot_rejected(&mut self, _target: Coordinate, err: &BoardError) {
        self.say(format_args!("{}", err));
    }

    fn shot_resolved(&mut self, shot: Shot) {
        let msg = match shot.outcome {
            Outcome::Hit => "Ship hit! Fire again.",
            Outcome::Sunk => "Ship destroyed!",
            Outcome::Miss => "Miss!",
        };
        self.say(format_args!("{}", msg));
    }

    fn opponent_shot(&mut self, shot: Shot) {
        let msg = match shot.outcome {
            Outcome::Hit => "Your ship is hit!",
            Outcome::Sunk => "Your ship is destroyed!",
            Outcome::Miss => "Computer missed.",
        };
        self.say(format_args!("Computer fires: {}\n{}", shot.target, msg));
    }
}
