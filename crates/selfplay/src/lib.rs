//! Self-play runner for the chess engines
//!
//! This crate provides infrastructure for:
//! - Playing engines against each other from the initial position,
//!   optionally after a scripted opening
//! - Recording every game in coordinate notation
//! - Saving match summaries as JSON
//!
//! # Usage
//!
//! ```bash
//! # Default match: classical (depth 4) against random, two games
//! cargo run -p selfplay
//!
//! # Configured match with per-move logging
//! RUST_LOG=debug cargo run -p selfplay -- selfplay.toml
//! ```

mod config;
mod error;
mod match_runner;
mod results;

pub use config::*;
pub use error::*;
pub use match_runner::*;
pub use results::*;
