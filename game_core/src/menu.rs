//! Replay menu choices and the win thresholds they stand for

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Match length offered by the replay menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchLength {
    BestOf3,
    BestOf5,
    BestOf7,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    #[error("unknown match length {0:?}, expected 3, 5 or 7")]
    UnknownLength(String),
}

impl MatchLength {
    pub const ALL: [MatchLength; 3] = [
        MatchLength::BestOf3,
        MatchLength::BestOf5,
        MatchLength::BestOf7,
    ];

    pub fn games(self) -> u32 {
        match self {
            MatchLength::BestOf3 => 3,
            MatchLength::BestOf5 => 5,
            MatchLength::BestOf7 => 7,
        }
    }

    /// Points needed to take the match
    pub fn win_threshold(self) -> u32 {
        self.games() / 2 + 1
    }
}

impl fmt::Display for MatchLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "best of {}", self.games())
    }
}

impl FromStr for MatchLength {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_ascii_lowercase();
        let games = trimmed.strip_prefix("best-of-").unwrap_or(&trimmed);

        match games {
            "3" => Ok(MatchLength::BestOf3),
            "5" => Ok(MatchLength::BestOf5),
            "7" => Ok(MatchLength::BestOf7),
            _ => Err(MenuError::UnknownLength(s.to_string())),
        }
    }
}
