use serde::{Deserialize, Serialize};
use std::fmt;

/// Side identifier. "Home" is the primary side the coach acts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    pub fn opponent(&self) -> TeamSide {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }
}

/// Point tally of one side within a regular game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PointScore {
    Love,
    Fifteen,
    Thirty,
    Forty,
}

impl PointScore {
    /// Next rung of the ladder. `None` from Forty: the transition out of
    /// Forty depends on the opponent's tally and is handled by the scoring
    /// state machine.
    pub fn next(&self) -> Option<PointScore> {
        match self {
            PointScore::Love => Some(PointScore::Fifteen),
            PointScore::Fifteen => Some(PointScore::Thirty),
            PointScore::Thirty => Some(PointScore::Forty),
            PointScore::Forty => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PointScore::Love => "0",
            PointScore::Fifteen => "15",
            PointScore::Thirty => "30",
            PointScore::Forty => "40",
        }
    }
}

/// Score of the game in progress. Invalid combinations (e.g. "Ad-Ad") are
/// unrepresentable: deuce and advantage are their own variants, and tiebreak
/// games count numeric points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameScore {
    Normal { home: PointScore, away: PointScore },
    Deuce,
    Advantage(TeamSide),
    Tiebreak { home: u32, away: u32 },
}

impl GameScore {
    pub fn new_game() -> GameScore {
        GameScore::Normal { home: PointScore::Love, away: PointScore::Love }
    }

    pub fn is_tiebreak(&self) -> bool {
        matches!(self, GameScore::Tiebreak { .. })
    }
}

impl fmt::Display for GameScore {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameScore::Normal { home, away } => {
                write!(f, "{}-{}", home.label(), away.label())
            }
            GameScore::Deuce => write!(f, "40-40"),
            GameScore::Advantage(TeamSide::Home) => write!(f, "Ad-40"),
            GameScore::Advantage(TeamSide::Away) => write!(f, "40-Ad"),
            GameScore::Tiebreak { home, away } => write!(f, "TB {}-{}", home, away),
        }
    }
}

/// Game count of a set, completed or in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetScore {
    pub home: u32,
    pub away: u32,
}

impl SetScore {
    pub fn games(&self, side: TeamSide) -> u32 {
        match side {
            TeamSide::Home => self.home,
            TeamSide::Away => self.away,
        }
    }

    pub fn add_game(&mut self, side: TeamSide) {
        match side {
            TeamSide::Home => self.home += 1,
            TeamSide::Away => self.away += 1,
        }
    }

    /// Side with more games, for a completed set.
    pub fn leader(&self) -> Option<TeamSide> {
        if self.home > self.away {
            Some(TeamSide::Home)
        } else if self.away > self.home {
            Some(TeamSide::Away)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_score_ladder() {
        assert_eq!(PointScore::Love.next(), Some(PointScore::Fifteen));
        assert_eq!(PointScore::Fifteen.next(), Some(PointScore::Thirty));
        assert_eq!(PointScore::Thirty.next(), Some(PointScore::Forty));
        assert_eq!(PointScore::Forty.next(), None);
    }

    #[test]
    fn test_game_score_display() {
        let score = GameScore::Normal { home: PointScore::Thirty, away: PointScore::Fifteen };
        assert_eq!(score.to_string(), "30-15");
        assert_eq!(GameScore::Deuce.to_string(), "40-40");
        assert_eq!(GameScore::Advantage(TeamSide::Home).to_string(), "Ad-40");
        assert_eq!(GameScore::Advantage(TeamSide::Away).to_string(), "40-Ad");
        assert_eq!(GameScore::Tiebreak { home: 6, away: 5 }.to_string(), "TB 6-5");
    }

    #[test]
    fn test_set_score_leader() {
        let set = SetScore { home: 6, away: 4 };
        assert_eq!(set.leader(), Some(TeamSide::Home));
        assert_eq!(SetScore { home: 3, away: 3 }.leader(), None);
    }
}
