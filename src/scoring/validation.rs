use crate::scoring::error::ProdeError;

/// Centralized validation for scoring inputs.
#[derive(Debug)]
pub struct ScoreValidator;

// Reasonable upper limit to catch obvious data entry errors
const MAX_REASONABLE_SCORE: i32 = 50;

impl ScoreValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a pair of scores before any write happens.
    pub fn validate_scores(&self, score_a: i32, score_b: i32) -> Result<(), ProdeError> {
        if score_a < 0 {
            return Err(ProdeError::InvalidScore(format!(
                "team A score cannot be negative: {}",
                score_a
            )));
        }

        if score_b < 0 {
            return Err(ProdeError::InvalidScore(format!(
                "team B score cannot be negative: {}",
                score_b
            )));
        }

        if score_a > MAX_REASONABLE_SCORE {
            return Err(ProdeError::InvalidScore(format!(
                "team A score too high: {} (max {})",
                score_a, MAX_REASONABLE_SCORE
            )));
        }

        if score_b > MAX_REASONABLE_SCORE {
            return Err(ProdeError::InvalidScore(format!(
                "team B score too high: {} (max {})",
                score_b, MAX_REASONABLE_SCORE
            )));
        }

        Ok(())
    }

    /// Validate a league name
    pub fn validate_league_name(&self, name: &str) -> Result<(), ProdeError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(ProdeError::InvalidInput("league name cannot be empty".into()));
        }

        if trimmed.len() > 255 {
            return Err(ProdeError::InvalidInput(
                "league name too long (maximum 255 characters)".into(),
            ));
        }

        if !trimmed.chars().any(|c| c.is_alphanumeric()) {
            return Err(ProdeError::InvalidInput(
                "league name must contain alphanumeric characters".into(),
            ));
        }

        Ok(())
    }

    /// Validate team names on a fixture
    pub fn validate_fixture_teams(&self, team_a: &str, team_b: &str) -> Result<(), ProdeError> {
        if team_a.trim().is_empty() || team_b.trim().is_empty() {
            return Err(ProdeError::InvalidInput("team names cannot be empty".into()));
        }

        if team_a.trim() == team_b.trim() {
            return Err(ProdeError::InvalidInput(
                "a match needs two different teams".into(),
            ));
        }

        Ok(())
    }
}

impl Default for ScoreValidator {
    fn default() -> Self {
        Self::new()
    }
}
