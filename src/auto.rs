use crate::game::{Command, Game, HumanInput};
use crate::target::TargetSelector;
use rand::rngs::SmallRng;

/// Plays the human side with the same random targeting as the opponent.
pub struct AutoInput {
    selector: TargetSelector,
    rng: SmallRng,
}

impl AutoInput {
    pub fn new(rng: SmallRng) -> Self {
        Self {
            selector: TargetSelector::default(),
            rng,
        }
    }
}

impl HumanInput for AutoInput {
    fn next_command(&mut self, game: &Game) -> anyhow::Result<Command> {
        let (row, col) = self.selector.select(game.opponent().board(), &mut self.rng)?;
        Ok(Command::Fire { row, col })
    }
}
