//! Standings are always rebuilt from persisted predictions and results by
//! replaying the scoring rule, never patched incrementally. A stale total
//! is therefore repaired by simply recomputing it.

use std::collections::HashMap;

use sqlx::postgres::PgExecutor;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{league_queries, prediction_queries, user_queries};
use crate::models::league::LeagueStandingEntry;
use crate::scoring::error::ProdeError;
use crate::scoring::rule::{self, Scoreline};

/// Service responsible for deriving user totals and league leaderboards.
#[derive(Debug)]
pub struct StandingsService {
    pool: PgPool,
}

impl StandingsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Sum of scoring-rule points over every prediction the user holds on a
    /// played match. Runs on any executor so the result workflows can call
    /// it inside their transaction.
    pub async fn user_total<'e, E>(executor: E, user_id: Uuid) -> Result<i32, ProdeError>
    where
        E: PgExecutor<'e>,
    {
        let rows = prediction_queries::list_by_user_with_matches(executor, user_id).await?;
        let total = rows
            .iter()
            .map(|row| rule::score_prediction(Some(row.predicted()), row.result()).points)
            .sum();
        Ok(total)
    }

    /// Recompute a user's total from scratch without persisting it.
    pub async fn recompute_user_total(&self, user_id: Uuid) -> Result<i32, ProdeError> {
        Self::user_total(&self.pool, user_id).await
    }

    /// Recompute a user's total and write it back.
    pub async fn sync_user_total(&self, user_id: Uuid) -> Result<i32, ProdeError> {
        let total = Self::user_total(&self.pool, user_id).await?;
        user_queries::update_total_points(&self.pool, user_id, total).await?;
        tracing::info!("Resynced total points for user {}: {}", user_id, total);
        Ok(total)
    }

    /// League-scoped leaderboard, recomputed on every call from the league's
    /// played matches. Rank is 1-based; the sort is stable, so ties keep
    /// roster order.
    pub async fn recompute_league_standings(
        &self,
        league_id: Uuid,
    ) -> Result<Vec<LeagueStandingEntry>, ProdeError> {
        league_queries::find(&self.pool, league_id)
            .await?
            .ok_or(ProdeError::LeagueNotFound(league_id))?;

        let participants = league_queries::participants(&self.pool, league_id).await?;
        let matches = league_queries::played_matches_for_league(&self.pool, league_id).await?;
        let predictions =
            prediction_queries::list_for_league_matches(&self.pool, league_id).await?;

        let results: HashMap<Uuid, Scoreline> = matches
            .iter()
            .filter_map(|m| m.result().map(|result| (m.id, result)))
            .collect();

        let mut points_by_user: HashMap<Uuid, i32> = HashMap::new();
        for prediction in &predictions {
            if let Some(result) = results.get(&prediction.match_id) {
                let outcome = rule::score_prediction(Some(prediction.scoreline()), Some(*result));
                *points_by_user.entry(prediction.user_id).or_insert(0) += outcome.points;
            }
        }

        let mut entries: Vec<LeagueStandingEntry> = participants
            .into_iter()
            .map(|participant| LeagueStandingEntry {
                league_points: points_by_user
                    .get(&participant.user_id)
                    .copied()
                    .unwrap_or(0),
                participant_id: participant.user_id,
                username: participant.username,
                rank: 0,
            })
            .collect();

        entries.sort_by(|a, b| b.league_points.cmp(&a.league_points));
        for (index, entry) in entries.iter_mut().enumerate() {
            entry.rank = (index + 1) as i32;
        }

        Ok(entries)
    }
}
