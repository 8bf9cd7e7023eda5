//! The scoring rule: the single place where prediction points are computed.
//!
//! Exact score is worth 3 points, a correct winner-or-draw outcome 1 point,
//! anything else 0. The draw/winner distinction only changes the status
//! label shown to users, never the points.

use serde::{Deserialize, Serialize};

pub const EXACT_SCORE_POINTS: i32 = 3;
pub const CORRECT_OUTCOME_POINTS: i32 = 1;

/// A pair of goals (team A, team B), either predicted or actual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreline {
    pub team_a: i32,
    pub team_b: i32,
}

impl Scoreline {
    pub fn new(team_a: i32, team_b: i32) -> Self {
        Self { team_a, team_b }
    }

    /// Winner-or-draw outcome, from the sign of the goal difference.
    pub fn outcome(&self) -> MatchOutcome {
        match (self.team_a - self.team_b).signum() {
            1 => MatchOutcome::TeamA,
            -1 => MatchOutcome::TeamB,
            _ => MatchOutcome::Draw,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    TeamA,
    TeamB,
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionStatus {
    /// The match has not been played yet.
    Pending,
    /// The user made no prediction for this match.
    NotPredicted,
    ExactScore,
    CorrectWinner,
    CorrectDraw,
    Missed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreOutcome {
    pub points: i32,
    pub status: PredictionStatus,
}

impl ScoreOutcome {
    fn new(points: i32, status: PredictionStatus) -> Self {
        Self { points, status }
    }
}

/// Score a prediction against a match result.
///
/// `result` is `None` while the match is unplayed; `predicted` is `None`
/// when the user never predicted the match. Pure function of the four
/// scores, no side effects.
pub fn score_prediction(predicted: Option<Scoreline>, result: Option<Scoreline>) -> ScoreOutcome {
    let result = match result {
        Some(result) => result,
        None => return ScoreOutcome::new(0, PredictionStatus::Pending),
    };

    let predicted = match predicted {
        Some(predicted) => predicted,
        None => return ScoreOutcome::new(0, PredictionStatus::NotPredicted),
    };

    if predicted == result {
        return ScoreOutcome::new(EXACT_SCORE_POINTS, PredictionStatus::ExactScore);
    }

    if predicted.outcome() == result.outcome() {
        let status = match result.outcome() {
            MatchOutcome::Draw => PredictionStatus::CorrectDraw,
            _ => PredictionStatus::CorrectWinner,
        };
        return ScoreOutcome::new(CORRECT_OUTCOME_POINTS, status);
    }

    ScoreOutcome::new(0, PredictionStatus::Missed)
}
