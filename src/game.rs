//! Turn controller: alternates the two sides and detects the end of a game.

use crate::board::Board;
use crate::common::{GameError, ShotOutcome};
use crate::config::{BOARD_SIZE, SHIPS};
use crate::fleet::FleetPlacer;
use crate::shot::resolve_report;
use crate::side::{Player, Side};
use crate::target::TargetSelector;
use rand::rngs::SmallRng;
use serde::Serialize;

/// Whose move it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    HumanTurn,
    OpponentTurn,
    Over(Player),
}

/// What the human side asks for on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Shoot at an in-bounds cell of the opponent's board.
    Fire { row: usize, col: usize },
    /// Leave the game without a winner.
    Quit,
}

/// Source of the human side's commands.
///
/// Implementations validate coordinates before returning them. An `Err`
/// means the input itself is gone (closed stream, I/O failure) and ends the
/// session.
pub trait HumanInput {
    fn next_command(&mut self, game: &Game) -> anyhow::Result<Command>;
}

/// Hooks for presenting a game as it is played. All methods default to no-ops.
pub trait GameObserver {
    /// Called before a side acts.
    fn turn_started(&mut self, _game: &Game, _player: Player) {}

    /// Called for every resolved command, including repeats.
    fn shot_resolved(&mut self, _by: Player, _row: usize, _col: usize, _outcome: ShotOutcome) {}

    /// Called after a shot sinks the last segment of a ship.
    fn ship_sunk(&mut self, _by: Player, _ship: &'static str) {}

    /// Called once when the game loop ends.
    fn game_over(&mut self, _game: &Game, _summary: &SessionSummary) {}
}

impl GameObserver for () {}

/// Why a game loop stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Ending {
    /// A fleet was destroyed.
    Won(Player),
    /// The human quit.
    Quit,
    /// The human's input failed; carries the diagnostic.
    InputFailed(String),
}

/// Shot counts reported when a game ends, whatever the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub human_shots: usize,
    pub opponent_shots: usize,
    pub ending: Ending,
}

impl SessionSummary {
    pub fn winner(&self) -> Option<Player> {
        match self.ending {
            Ending::Won(p) => Some(p),
            _ => None,
        }
    }
}

/// Full state of a human vs computer game.
#[derive(Debug, Clone)]
pub struct Game {
    human: Side,
    opponent: Side,
    turn: Turn,
    selector: TargetSelector,
    rng: SmallRng,
}

impl Game {
    /// Start a game with both fleets randomly placed from `rng`, the human's
    /// first. `rng` then drives the opponent's targeting.
    pub fn new(mut rng: SmallRng) -> Result<Self, GameError> {
        let placer = FleetPlacer::default();
        let mut human = Board::new();
        placer.place_fleet(&mut human, &mut rng)?;
        let mut opponent = Board::new();
        placer.place_fleet(&mut opponent, &mut rng)?;
        Ok(Self::from_boards(human, opponent, rng))
    }

    /// Start a game on boards prepared by the caller.
    pub fn from_boards(human: Board, opponent: Board, rng: SmallRng) -> Self {
        Self {
            human: Side::new(human),
            opponent: Side::new(opponent),
            turn: Turn::HumanTurn,
            selector: TargetSelector::default(),
            rng,
        }
    }

    /// Replace the opponent's target selector.
    pub fn with_selector(mut self, selector: TargetSelector) -> Self {
        self.selector = selector;
        self
    }

    pub fn human(&self) -> &Side {
        &self.human
    }

    pub fn opponent(&self) -> &Side {
        &self.opponent
    }

    pub fn side(&self, player: Player) -> &Side {
        match player {
            Player::Human => &self.human,
            Player::Opponent => &self.opponent,
        }
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Winner by fleet state, checking the opponent's fleet first.
    pub fn winner(&self) -> Option<Player> {
        if self.opponent.board.is_fleet_destroyed() {
            Some(Player::Human)
        } else if self.human.board.is_fleet_destroyed() {
            Some(Player::Opponent)
        } else {
            None
        }
    }

    pub fn summary(&self, ending: Ending) -> SessionSummary {
        SessionSummary {
            human_shots: self.human.shots_fired,
            opponent_shots: self.opponent.shots_fired,
            ending,
        }
    }

    /// Run one iteration of the turn loop. Returns `Some` when the loop is
    /// done: a fleet was destroyed, the human quit, or its input failed. An
    /// off-grid `Fire` counts as failed input.
    pub fn step<I, O>(
        &mut self,
        input: &mut I,
        observer: &mut O,
    ) -> Result<Option<Ending>, GameError>
    where
        I: HumanInput + ?Sized,
        O: GameObserver + ?Sized,
    {
        if let Turn::Over(winner) = self.turn {
            return Ok(Some(Ending::Won(winner)));
        }
        if let Some(winner) = self.winner() {
            self.turn = Turn::Over(winner);
            return Ok(Some(Ending::Won(winner)));
        }

        match self.turn {
            Turn::HumanTurn => {
                observer.turn_started(self, Player::Human);
                let (row, col) = match input.next_command(self) {
                    Ok(Command::Fire { row, col }) => (row, col),
                    Ok(Command::Quit) => return Ok(Some(Ending::Quit)),
                    Err(e) => {
                        log::error!("human input failed: {:#}", e);
                        return Ok(Some(Ending::InputFailed(format!("{:#}", e))));
                    }
                };
                if row >= BOARD_SIZE || col >= BOARD_SIZE {
                    log::error!("human input returned off-grid cell ({}, {})", row, col);
                    let reason = format!("cell ({}, {}) is outside the board", row, col);
                    return Ok(Some(Ending::InputFailed(reason)));
                }
                if self.fire(Player::Human, row, col, observer).ends_turn() {
                    self.turn = Turn::OpponentTurn;
                }
            }
            Turn::OpponentTurn => {
                observer.turn_started(self, Player::Opponent);
                let (row, col) = self.selector.select(&self.human.board, &mut self.rng)?;
                let outcome = self.fire(Player::Opponent, row, col, observer);
                debug_assert!(outcome.ends_turn(), "selector returned a shot cell");
                self.turn = Turn::HumanTurn;
            }
            Turn::Over(_) => {}
        }
        Ok(None)
    }

    /// Play until the loop ends and report the shot counts.
    pub fn play<I, O>(
        &mut self,
        input: &mut I,
        observer: &mut O,
    ) -> Result<SessionSummary, GameError>
    where
        I: HumanInput + ?Sized,
        O: GameObserver + ?Sized,
    {
        let ending = loop {
            if let Some(ending) = self.step(input, observer)? {
                break ending;
            }
        };
        let summary = self.summary(ending);
        log::info!(
            "game over: {:?} (human shots {}, opponent shots {})",
            summary.ending,
            summary.human_shots,
            summary.opponent_shots
        );
        observer.game_over(self, &summary);
        Ok(summary)
    }

    fn fire<O>(&mut self, by: Player, row: usize, col: usize, observer: &mut O) -> ShotOutcome
    where
        O: GameObserver + ?Sized,
    {
        let (shooter, target) = match by {
            Player::Human => (&mut self.human, &mut self.opponent),
            Player::Opponent => (&mut self.opponent, &mut self.human),
        };
        let report = resolve_report(&mut target.board, row, col);
        if report.outcome.ends_turn() {
            shooter.shots_fired += 1;
        }
        log::debug!("{:?} fires at ({}, {}): {:?}", by, row, col, report.outcome);
        observer.shot_resolved(by, row, col, report.outcome);
        if let Some(ship) = report.sunk {
            observer.ship_sunk(by, SHIPS[ship].name());
        }
        report.outcome
    }
}
