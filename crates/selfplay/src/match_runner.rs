//! Match runner for playing games between engines

use chess_core::{Color, Engine, GameState, SearchLimits};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::config::SelfPlayConfig;
use crate::error::SelfPlayError;
use crate::results::{GameRecord, MatchSummary, Outcome, Termination};

/// Runs self-play matches described by a [`SelfPlayConfig`]
pub struct MatchRunner {
    config: SelfPlayConfig,
    /// Picks a move when an engine returns none despite legal moves
    fallback: StdRng,
}

impl MatchRunner {
    pub fn new(config: SelfPlayConfig) -> Result<Self, SelfPlayError> {
        config.validate()?;
        let fallback = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { config, fallback })
    }

    pub fn config(&self) -> &SelfPlayConfig {
        &self.config
    }

    /// Builds both configured engines and plays the whole match.
    pub fn run(&mut self) -> Result<MatchSummary, SelfPlayError> {
        // Distinct seeds so two engines of the same kind don't mirror each other
        let seeds = self.config.seed.map(|s| (s.wrapping_add(1), s.wrapping_add(2)));
        let mut first = self.config.white.build(seeds.map(|(a, _)| a));
        let mut second = self.config.black.build(seeds.map(|(_, b)| b));
        self.run_match(first.as_mut(), second.as_mut())
    }

    /// Plays `config.games` games; `first` has White in game one.
    pub fn run_match(
        &mut self,
        first: &mut dyn Engine,
        second: &mut dyn Engine,
    ) -> Result<MatchSummary, SelfPlayError> {
        let mut summary = MatchSummary::new();

        for game_num in 0..self.config.games {
            let first_white = !self.config.alternate_colors || game_num % 2 == 0;
            let record = if first_white {
                self.play_game(first, second)?
            } else {
                self.play_game(second, first)?
            };

            info!(
                game = game_num + 1,
                of = self.config.games,
                white = %record.white,
                black = %record.black,
                result = %record.outcome,
                reason = %record.termination,
                plies = record.moves.len(),
                "game finished"
            );
            summary.record(record);
        }

        Ok(summary)
    }

    /// Play a single game from the initial position after the scripted opening.
    pub fn play_game(
        &mut self,
        white: &mut dyn Engine,
        black: &mut dyn Engine,
    ) -> Result<GameRecord, SelfPlayError> {
        let mut state = GameState::new();
        let mut moves = Vec::new();
        white.new_game();
        black.new_game();

        for text in &self.config.opening {
            let mv = state.parse_move(text)?;
            state.make_move(mv);
            moves.push(mv.notation());
        }

        let limits = SearchLimits::depth(self.config.depth);
        let max_plies = self.config.max_plies as usize;

        while moves.len() < max_plies {
            let legal = state.legal_moves();
            if legal.is_empty() {
                break;
            }

            let side = state.side_to_move();
            let result = match side {
                Color::White => white.search(&state, limits),
                Color::Black => black.search(&state, limits),
            };

            let mv = match result.best_move {
                Some(mv) => mv,
                None => {
                    warn!(side = %side, "engine returned no move, playing a random one");
                    let Some(&mv) = legal.choose(&mut self.fallback) else {
                        break;
                    };
                    mv
                }
            };
            state.try_make_move(mv)?;
            debug!(
                ply = moves.len() + 1,
                side = %side,
                mv = %mv.notation(),
                score = result.score,
                nodes = result.nodes,
                "move played"
            );
            moves.push(mv.notation());
        }

        // Refresh the terminal flags for the final position
        state.legal_moves();
        let (outcome, termination) = if state.checkmate() {
            (Outcome::win_for(state.side_to_move()), Termination::Checkmate)
        } else if state.stalemate() {
            (Outcome::Draw, Termination::Stalemate)
        } else {
            (Outcome::Draw, Termination::MaxPlies)
        };

        Ok(GameRecord {
            white: white.name().to_string(),
            black: black.name().to_string(),
            moves,
            outcome,
            termination,
        })
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
