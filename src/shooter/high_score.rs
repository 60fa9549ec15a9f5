//! High-score persistence: one decimal integer in a plain text file.
//!
//! Reads fall back to 0 and writes are best-effort; neither ever fails the
//! game.

use std::cell::Cell;
use std::path::{Path, PathBuf};

use log::warn;

pub trait ScoreStore {
    fn load(&self) -> u32;
    fn save(&self, score: u32);
}

#[derive(Clone, Debug)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileScoreStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> u32 {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }

    fn save(&self, score: u32) {
        if let Err(err) = std::fs::write(&self.path, score.to_string()) {
            warn!("could not write high score to {}: {}", self.path.display(), err);
        }
    }
}

/// Keeps the score in memory; handy for tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    score: Cell<u32>,
    saves: Cell<u32>,
}

impl MemoryScoreStore {
    pub fn with_score(score: u32) -> Self {
        MemoryScoreStore { score: Cell::new(score), saves: Cell::new(0) }
    }

    /// How many times `save` has been called.
    pub fn saves(&self) -> u32 {
        self.saves.get()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> u32 {
        self.score.get()
    }

    fn save(&self, score: u32) {
        self.score.set(score);
        self.saves.set(self.saves.get() + 1);
    }
}
