use thiserror::Error;
use uuid::Uuid;

/// Recoverable, user-facing errors raised by the scoring workflows.
#[derive(Debug, Error)]
pub enum ProdeError {
    #[error("invalid score: {0}")]
    InvalidScore(String),
    #[error("match {0} not found")]
    MatchNotFound(Uuid),
    #[error("match {0} has already been played")]
    MatchAlreadyPlayed(Uuid),
    #[error("league {0} not found")]
    LeagueNotFound(Uuid),
    #[error("tournament {0} not found")]
    TournamentNotFound(Uuid),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
