//! Owns one shooter state together with its score store, so the
//! front-end only has to forward input and call [`Session::step`].

use log::info;
use rand::Rng;

use crate::config::ShooterConfig;
use crate::shooter::compute::{handle_command, init_state, just_ended, tick};
use crate::shooter::entities::{Command, Controls, GameStatus, ShooterState};
use crate::shooter::high_score::ScoreStore;

/// How a finished round went.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundOutcome {
    pub score: u32,
    /// The score beat the stored best and has been written to the store.
    pub new_record: bool,
}

pub struct Session<S: ScoreStore> {
    config: ShooterConfig,
    store: S,
    /// Best score as last read from or written to the store.
    stored_best: u32,
    state: ShooterState,
}

impl<S: ScoreStore> Session<S> {
    /// Start at the menu, with the high score read from `store`.
    pub fn new(config: ShooterConfig, store: S) -> Self {
        let stored_best = store.load();
        let state = init_state(&config, stored_best);
        Session { config, store, stored_best, state }
    }

    /// Pick up from an existing state instead of the menu.
    pub fn resume(config: ShooterConfig, store: S, state: ShooterState) -> Self {
        let stored_best = store.load();
        Session { config, store, stored_best, state }
    }

    pub fn state(&self) -> &ShooterState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn command(&mut self, command: Command) {
        self.state = handle_command(&self.state, command, &self.config);
    }

    /// A mouse click starts a round from the menu or game-over screen.
    /// Returns `false` when the click should count as a shot instead.
    pub fn click(&mut self) -> bool {
        match self.state.status {
            GameStatus::Menu | GameStatus::GameOver => {
                self.command(Command::Start);
                true
            }
            GameStatus::Playing | GameStatus::Paused => false,
        }
    }

    /// Run one tick. Returns the outcome on the tick that ends the round;
    /// a new record is written to the store before returning.
    pub fn step(
        &mut self,
        controls: &Controls,
        dt_ms: u64,
        rng: &mut impl Rng,
    ) -> Option<RoundOutcome> {
        let next = tick(&self.state, controls, dt_ms, rng);
        let ended = just_ended(&self.state, &next);
        self.state = next;
        if !ended {
            return None;
        }

        let score = self.state.player.score;
        let new_record = score > self.stored_best;
        if new_record {
            info!("new high score {}", score);
            self.stored_best = score;
            self.store.save(score);
        }
        Some(RoundOutcome { score, new_record })
    }
}
