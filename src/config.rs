use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::game::WIN_SCORE;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("win score must be at least 1")]
    ZeroWinScore,
}

/// Command-line configuration.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about = "A two-player trivia duel for the terminal", long_about = None)]
pub struct Config {
    /// JSON file to load the questions from (uses the built-in bank if omitted)
    #[arg(short, long)]
    pub questions: Option<PathBuf>,

    /// Points a player needs to win
    #[arg(short, long, default_value_t = WIN_SCORE)]
    pub win_score: u32,

    /// Seed for the question shuffle, for reproducible games
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Write a debug log of game events to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            questions: None,
            win_score: WIN_SCORE,
            seed: None,
            log_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["couple-quest"]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.win_score, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_all_flags() {
        let config = Config::try_parse_from([
            "couple-quest",
            "-q",
            "trivia.json",
            "--win-score",
            "5",
            "-s",
            "42",
            "--log-file",
            "game.log",
        ])
        .unwrap();

        assert_eq!(config.questions, Some(PathBuf::from("trivia.json")));
        assert_eq!(config.win_score, 5);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_file, Some(PathBuf::from("game.log")));
    }

    #[test]
    fn test_zero_win_score_rejected() {
        let config = Config::try_parse_from(["couple-quest", "-w", "0"]).unwrap();
        assert_eq!(config.validate(), Err(ConfigError::ZeroWinScore));
    }

    #[test]
    fn test_bad_number_rejected() {
        assert!(Config::try_parse_from(["couple-quest", "-w", "ten"]).is_err());
    }
}
