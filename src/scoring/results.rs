//! The two side-effecting workflows that keep scores consistent: posting a
//! match result and deleting a match. Together with the cascade on
//! tournament deletion they are the only writers of `predictions.points`
//! and `users.total_points`.

use std::collections::BTreeSet;

use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{match_queries, prediction_queries, tournament_queries, user_queries};
use crate::models::prediction::Prediction;
use crate::scoring::error::ProdeError;
use crate::scoring::rule::{self, Scoreline};
use crate::scoring::standings::StandingsService;
use crate::scoring::validation::ScoreValidator;

/// Orchestrates result posting, match deletion and prediction upserts.
#[derive(Debug)]
pub struct ResultService {
    pool: PgPool,
    validator: ScoreValidator,
}

impl ResultService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            validator: ScoreValidator::new(),
        }
    }

    /// Record (or correct) the final score of a match, score every
    /// prediction on it and resync each affected user's total.
    ///
    /// The whole pipeline runs in one transaction, and re-running it with a
    /// corrected score replays the same steps, so setting and correcting a
    /// result are the same operation.
    pub async fn set_match_result(
        &self,
        match_id: Uuid,
        score_a: i32,
        score_b: i32,
    ) -> Result<(), ProdeError> {
        self.validator.validate_scores(score_a, score_b)?;

        let mut tx = self.pool.begin().await?;

        let fixture = match_queries::set_result(&mut *tx, match_id, score_a, score_b)
            .await?
            .ok_or(ProdeError::MatchNotFound(match_id))?;

        let result = Scoreline::new(score_a, score_b);
        let predictions = prediction_queries::list_by_match(&mut *tx, match_id).await?;
        for prediction in &predictions {
            let outcome = rule::score_prediction(Some(prediction.scoreline()), Some(result));
            prediction_queries::update_points(&mut *tx, prediction.id, outcome.points).await?;
        }

        let affected: BTreeSet<Uuid> = predictions.iter().map(|p| p.user_id).collect();
        for user_id in &affected {
            let total = StandingsService::user_total(&mut *tx, *user_id).await?;
            user_queries::update_total_points(&mut *tx, *user_id, total).await?;
        }

        tx.commit().await?;

        tracing::info!(
            "Recorded result {} {} - {} {}: scored {} predictions, resynced {} users",
            fixture.team_a,
            score_a,
            score_b,
            fixture.team_b,
            predictions.len(),
            affected.len()
        );

        Ok(())
    }

    /// Delete a match and everything derived from it. Affected users are
    /// captured before the delete so their totals can be resynced after the
    /// cascade removes the predictions.
    pub async fn delete_match(&self, match_id: Uuid) -> Result<(), ProdeError> {
        let mut tx = self.pool.begin().await?;

        let affected = prediction_queries::user_ids_for_match(&mut *tx, match_id).await?;

        let deleted = match_queries::delete(&mut *tx, match_id).await?;
        if deleted == 0 {
            return Err(ProdeError::MatchNotFound(match_id));
        }

        for user_id in &affected {
            let total = StandingsService::user_total(&mut *tx, *user_id).await?;
            user_queries::update_total_points(&mut *tx, *user_id, total).await?;
        }

        tx.commit().await?;

        tracing::info!(
            "Deleted match {} and resynced {} affected users",
            match_id,
            affected.len()
        );

        Ok(())
    }

    /// Delete a tournament; its matches and their predictions go with it,
    /// so the same capture-then-resync discipline applies.
    pub async fn delete_tournament(&self, tournament_id: Uuid) -> Result<(), ProdeError> {
        let mut tx = self.pool.begin().await?;

        let affected =
            prediction_queries::user_ids_for_tournament(&mut *tx, tournament_id).await?;

        let deleted = tournament_queries::delete(&mut *tx, tournament_id).await?;
        if deleted == 0 {
            return Err(ProdeError::TournamentNotFound(tournament_id));
        }

        for user_id in &affected {
            let total = StandingsService::user_total(&mut *tx, *user_id).await?;
            user_queries::update_total_points(&mut *tx, *user_id, total).await?;
        }

        tx.commit().await?;

        tracing::info!(
            "Deleted tournament {} and resynced {} affected users",
            tournament_id,
            affected.len()
        );

        Ok(())
    }

    /// Upsert a user's prediction for a match that has not been played.
    /// Never touches the points column.
    pub async fn save_prediction(
        &self,
        match_id: Uuid,
        user_id: Uuid,
        score_a: i32,
        score_b: i32,
    ) -> Result<Prediction, ProdeError> {
        self.validator.validate_scores(score_a, score_b)?;

        let fixture = match_queries::find(&self.pool, match_id)
            .await?
            .ok_or(ProdeError::MatchNotFound(match_id))?;

        if fixture.is_played {
            return Err(ProdeError::MatchAlreadyPlayed(match_id));
        }

        let prediction =
            prediction_queries::upsert(&self.pool, match_id, user_id, score_a, score_b).await?;

        Ok(prediction)
    }
}
