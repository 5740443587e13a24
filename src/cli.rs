//! Console collaborators: coordinate text, the prompt loop and the
//! play-by-play reporter.

use std::io::{BufRead, Write};

use crate::common::ShotOutcome;
use crate::config::BOARD_SIZE;
use crate::game::{Command, Ending, Game, GameObserver, HumanInput, SessionSummary};
use crate::render::{render_board, View};
use crate::side::Player;

/// Words that end the game from the prompt, compared case-insensitively.
pub const QUIT_TOKENS: [&str; 3] = ["sair", "quit", "exit"];

pub fn is_quit(input: &str) -> bool {
    let input = input.trim();
    QUIT_TOKENS.iter().any(|t| input.eq_ignore_ascii_case(t))
}

/// Format (`row`, `col`) as `A1`..`J10`.
pub fn format_coord(row: usize, col: usize) -> String {
    format!("{}{}", (b'A' + row as u8) as char, col + 1)
}

/// Parse a coordinate like `B7` or `j10`: a row letter then a column number.
pub fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    let input = input.trim();
    let mut chars = input.chars();
    let row_ch = match chars.next() {
        Some(ch) => ch.to_ascii_uppercase(),
        None => return Err("Empty input".to_string()),
    };
    let last_row = (b'A' + BOARD_SIZE as u8 - 1) as char;
    if !('A'..=last_row).contains(&row_ch) {
        return Err(format!("Invalid row '{}' - must be a letter A-{}", row_ch, last_row));
    }
    let col_str = chars.as_str();
    if col_str.is_empty() {
        return Err("Missing column number (e.g., B7)".to_string());
    }
    let col: usize = col_str
        .parse()
        .map_err(|_| format!("Invalid column '{}' - must be a number 1-{}", col_str, BOARD_SIZE))?;
    if col == 0 || col > BOARD_SIZE {
        return Err(format!("Column {} out of bounds - must be 1-{}", col, BOARD_SIZE));
    }
    Ok((row_ch as usize - 'A' as usize, col - 1))
}

/// Write the instructions shown before the first turn.
pub fn print_instructions<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Welcome to Broadside (you vs the computer)!")?;
    writeln!(out, "Board: rows A-J and columns 1-10.")?;
    writeln!(out, "Enter coordinates like A5 or J10, without spaces.")?;
    writeln!(out, "Your board shows your ships (#), hits (X) and misses (o).")?;
    writeln!(out, "The enemy board shows only your hits (X) and misses (o).")?;
    writeln!(out, "Type 'quit' (or 'sair') to leave.\n")
}

/// Reads the human's commands from a line-oriented reader.
///
/// Malformed lines are reported and re-prompted here; they never reach the
/// game. End of input is an error, which ends the session.
pub struct ConsoleInput<R, W> {
    reader: R,
    out: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, out: W) -> Self {
        Self { reader, out }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.out)
    }
}

impl<R: BufRead, W: Write> HumanInput for ConsoleInput<R, W> {
    fn next_command(&mut self, _game: &Game) -> anyhow::Result<Command> {
        loop {
            write!(self.out, "\nYour turn - enter a coordinate (e.g. B7) or 'quit': ")?;
            self.out.flush()?;
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                anyhow::bail!("input closed");
            }
            if is_quit(&line) {
                return Ok(Command::Quit);
            }
            match parse_coord(&line) {
                Ok((row, col)) => return Ok(Command::Fire { row, col }),
                Err(e) => writeln!(self.out, "Invalid input: {}. Try again.", e)?,
            }
        }
    }
}

/// Narrates a game to a writer.
pub struct ConsoleReporter<W> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GameObserver for ConsoleReporter<W> {
    fn turn_started(&mut self, game: &Game, player: Player) {
        let _ = match player {
            Player::Human => write!(
                self.out,
                "\n=== Your board ===\n{}\n=== Enemy board ===\n{}",
                render_board(game.human().board(), View::Owner),
                render_board(game.opponent().board(), View::Opponent)
            ),
            Player::Opponent => writeln!(self.out, "\n--- Computer's turn ---"),
        };
    }

    fn shot_resolved(&mut self, by: Player, row: usize, col: usize, outcome: ShotOutcome) {
        let at = format_coord(row, col);
        let _ = match (by, outcome) {
            (Player::Human, ShotOutcome::AlreadyShot) => {
                writeln!(self.out, "You already fired at {}. Choose another cell.", at)
            }
            (Player::Human, ShotOutcome::Miss) => {
                writeln!(self.out, "Splash - {} is open water.", at)
            }
            (Player::Human, ShotOutcome::Hit) => {
                writeln!(self.out, "Hit! You struck a ship at {}!", at)
            }
            (Player::Opponent, ShotOutcome::Miss) => {
                writeln!(self.out, "The computer missed at {}.", at)
            }
            (Player::Opponent, ShotOutcome::Hit) => {
                writeln!(self.out, "The computer hit you at {}!", at)
            }
            (Player::Opponent, ShotOutcome::AlreadyShot) => Ok(()),
        };
    }

    fn ship_sunk(&mut self, by: Player, ship: &'static str) {
        let _ = match by {
            Player::Human => writeln!(self.out, "You sank the enemy {}!", ship),
            Player::Opponent => writeln!(self.out, "The computer sank your {}!", ship),
        };
    }

    fn game_over(&mut self, game: &Game, summary: &SessionSummary) {
        let _ = match &summary.ending {
            Ending::Won(Player::Human) => {
                writeln!(self.out, "\nYou sank the entire enemy fleet. Victory!")
            }
            Ending::Won(Player::Opponent) => {
                writeln!(self.out, "\nAll of your ships were sunk. You lost.")
            }
            Ending::Quit => writeln!(self.out, "Game ended by the player."),
            Ending::InputFailed(reason) => writeln!(self.out, "Input error ({}). Exiting.", reason),
        };
        if summary.winner().is_some() {
            let _ = write!(
                self.out,
                "\n=== Enemy fleet ===\n{}",
                render_board(game.opponent().board(), View::Owner)
            );
        }
        let _ = writeln!(
            self.out,
            "\nStats: your shots = {} | computer shots = {}",
            summary.human_shots, summary.opponent_shots
        );
        let _ = writeln!(self.out, "Thanks for playing!");
        let _ = self.out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_letters_as_rows() {
        assert_eq!(parse_coord("A1"), Ok((0, 0)));
        assert_eq!(parse_coord("b7"), Ok((1, 6)));
        assert_eq!(parse_coord(" J10\n"), Ok((9, 9)));
    }

    #[test]
    fn rejects_malformed_coordinates() {
        for bad in ["", "A", "K1", "A0", "A11", "1A", "AA", "A-1", "A 5"] {
            assert!(parse_coord(bad).is_err(), "{:?} should be rejected", bad);
        }
    }

    #[test]
    fn format_is_inverse_of_parse() {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                assert_eq!(parse_coord(&format_coord(row, col)), Ok((row, col)));
            }
        }
    }

    #[test]
    fn quit_tokens_ignore_case() {
        assert!(is_quit("SAIR"));
        assert!(is_quit("Quit\n"));
        assert!(!is_quit("quitter"));
    }
}
