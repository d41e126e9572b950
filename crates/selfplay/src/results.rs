//! Game records and match summaries

use std::fmt;
use std::path::Path;

use chess_core::Color;
use serde::{Deserialize, Serialize};

use crate::error::SelfPlayError;

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Outcome {
    WhiteWins,
    BlackWins,
    Draw,
}

impl Outcome {
    /// The side that delivered mate to `mated`.
    pub fn win_for(mated: Color) -> Self {
        match mated {
            Color::White => Outcome::BlackWins,
            Color::Black => Outcome::WhiteWins,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Outcome::WhiteWins => "1-0",
            Outcome::BlackWins => "0-1",
            Outcome::Draw => "1/2-1/2",
        };
        f.write_str(text)
    }
}

/// Why a game ended
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Termination {
    Checkmate,
    Stalemate,
    /// The ply cap from the configuration was reached
    MaxPlies,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Termination::Checkmate => "checkmate",
            Termination::Stalemate => "stalemate",
            Termination::MaxPlies => "move limit",
        };
        f.write_str(text)
    }
}

/// One finished game
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    /// Every ply in coordinate notation, opening included
    pub moves: Vec<String>,
    pub outcome: Outcome,
    pub termination: Termination,
}

/// All games of a match plus the per-outcome counts
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchSummary {
    pub white_wins: u32,
    pub black_wins: u32,
    pub draws: u32,
    pub games: Vec<GameRecord>,
}

impl MatchSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, game: GameRecord) {
        match game.outcome {
            Outcome::WhiteWins => self.white_wins += 1,
            Outcome::BlackWins => self.black_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
        self.games.push(game);
    }

    pub fn total_games(&self) -> u32 {
        self.white_wins + self.black_wins + self.draws
    }

    /// Wins for the engine named `name`, whichever color it had.
    pub fn wins_for(&self, name: &str) -> u32 {
        self.games
            .iter()
            .filter(|g| match g.outcome {
                Outcome::WhiteWins => g.white == name,
                Outcome::BlackWins => g.black == name,
                Outcome::Draw => false,
            })
            .count() as u32
    }

    /// Save results to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), SelfPlayError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| SelfPlayError::io(path, e))
    }

    /// Load results from a JSON file
    pub fn load(path: &Path) -> Result<Self, SelfPlayError> {
        let contents = std::fs::read_to_string(path).map_err(|e| SelfPlayError::io(path, e))?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Self-play: {} games ===\n\n", self.total_games()));
        report.push_str(&format!(
            "{:>4}  {:<10} {:<10} {:>8}  {:<11} {:>5}\n",
            "#", "White", "Black", "Result", "Reason", "Plies"
        ));
        report.push_str(&"-".repeat(55));
        report.push('\n');

        for (i, game) in self.games.iter().enumerate() {
            report.push_str(&format!(
                "{:>4}  {:<10} {:<10} {:>8}  {:<11} {:>5}\n",
                i + 1,
                game.white,
                game.black,
                game.outcome.to_string(),
                game.termination.to_string(),
                game.moves.len()
            ));
        }

        report.push('\n');
        report.push_str(&format!(
            "White wins: {}, Black wins: {}, Draws: {}",
            self.white_wins, self.black_wins, self.draws
        ));
        report
    }
}
