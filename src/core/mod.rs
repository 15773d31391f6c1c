pub mod aggregate;
pub mod handlers;
pub mod resolver;
pub mod store;

pub use crate::domain::model::{CountryWinSummary, TournamentRecord};
pub use crate::domain::ports::CountryLookup;
pub use crate::utils::error::Result;
