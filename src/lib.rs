pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
pub mod web;

pub use config::ServerConfig;
pub use core::resolver::{default_resolver, IsoTable, OverrideResolver};
pub use core::store::{RecordStore, WORLD_CUP_FINALS};
pub use domain::model::{CountryWinSummary, TournamentRecord};
pub use domain::ports::CountryLookup;
pub use utils::error::{DashboardError, Result};
pub use web::Dashboard;
