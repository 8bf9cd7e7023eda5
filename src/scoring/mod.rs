pub mod error;
pub mod results;
pub mod rule;
pub mod standings;
pub mod validation;

pub use error::ProdeError;
pub use results::ResultService;
pub use standings::StandingsService;
